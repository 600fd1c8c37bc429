use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const HAIR_COLORS: [&str; 6] = ["#8B4513", "#654321", "#A0522D", "#CD853F", "#DEB887", "#F5DEB3"];
pub const EYE_COLORS: [&str; 5] = ["#000000", "#8B4513", "#0066CC", "#228B22", "#8B008B"];
pub const SKIN_TONES: [&str; 5] = ["#FFDBB4", "#EDB98A", "#D08B5B", "#AE5D29", "#8D4A43"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl FromStr for Gender {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Bulk,
    Cut,
    Track,
}

impl FromStr for Goal {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "bulk" => Ok(Goal::Bulk),
            "cut" => Ok(Goal::Cut),
            "track" => Ok(Goal::Track),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Goal::Bulk => "bulk",
            Goal::Cut => "cut",
            Goal::Track => "track",
        };
        f.write_str(s)
    }
}

/// Cosmetic avatar attributes. None of them feed any computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarDescription {
    pub hair_color: String,
    pub hair_style: String,
    pub eye_color: String,
    pub skin_tone: String,
    pub accessories: BTreeSet<String>,
}

impl Default for AvatarDescription {
    fn default() -> Self {
        Self {
            hair_color: "#8B4513".into(),
            hair_style: "short".into(),
            eye_color: "#000000".into(),
            skin_tone: "#FFDBB4".into(),
            accessories: BTreeSet::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub age: u8,
    pub gender: Gender,
    pub height_cm: u16,
    pub weight_kg: u16,
    pub goal: Goal,
    pub avatar: AvatarDescription,
}
