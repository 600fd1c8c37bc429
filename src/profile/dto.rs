use serde::Serialize;

use crate::profile::onboarding::{Onboarding, ProfileDetails, Step};
use crate::profile::types::{AvatarDescription, UserProfile, EYE_COLORS, HAIR_COLORS, SKIN_TONES};

#[derive(Debug, Serialize)]
pub struct AvatarPalettes {
    pub hair_colors: &'static [&'static str],
    pub eye_colors: &'static [&'static str],
    pub skin_tones: &'static [&'static str],
}

pub const PALETTES: AvatarPalettes = AvatarPalettes {
    hair_colors: &HAIR_COLORS,
    eye_colors: &EYE_COLORS,
    skin_tones: &SKIN_TONES,
};

#[derive(Debug, Serialize)]
pub struct OnboardingView {
    pub step: Step,
    pub title: &'static str,
    pub submit_label: &'static str,
    pub details: Option<ProfileDetails>,
    pub avatar: Option<AvatarDescription>,
    pub palettes: AvatarPalettes,
}

impl From<&Onboarding> for OnboardingView {
    fn from(w: &Onboarding) -> Self {
        let (title, submit_label) = match w.step() {
            Step::Profile => ("Welcome to Nutrition Tracker!", "Next: Create Your Avatar"),
            Step::Avatar | Step::Complete => ("Create Your Avatar", "Complete Setup"),
        };
        Self {
            step: w.step(),
            title,
            submit_label,
            details: w.details().cloned(),
            avatar: w.avatar().cloned(),
            palettes: PALETTES,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MainMenuView {
    pub greeting: String,
    pub profile: UserProfile,
}

impl From<&UserProfile> for MainMenuView {
    fn from(p: &UserProfile) -> Self {
        Self {
            greeting: format!("Hi, {}!", p.name),
            profile: p.clone(),
        }
    }
}
