//! Two-step onboarding wizard.
//!
//! `CollectingProfile` → `CollectingAvatar` → `Complete`. A rejected action
//! never changes the current step.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::profile::types::{AvatarDescription, Gender, Goal, UserProfile};

pub const AGE_RANGE: (u16, u16) = (1, 120);
pub const HEIGHT_RANGE_CM: (u16, u16) = (100, 250);
pub const WEIGHT_RANGE_KG: (u16, u16) = (30, 300);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name is required")]
    MissingName,
    #[error("{field} must be a whole number between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: u16,
        max: u16,
    },
    #[error("gender must be one of male, female, other")]
    InvalidGender,
    #[error("goal must be one of bulk, cut, track")]
    InvalidGoal,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OnboardingError {
    #[error("action not allowed at step {actual:?}, expected {expected:?}")]
    WrongStep { expected: Step, actual: Step },
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("avatar values must not be empty")]
    EmptyAvatarValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    Profile,
    Avatar,
    Complete,
}

/// Raw step-one form. Every field arrives as text, exactly as typed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProfileForm {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub height: String,
    pub weight: String,
    pub goal: String,
}

/// Step-one fields after parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileDetails {
    pub name: String,
    pub age: u8,
    pub gender: Gender,
    pub height_cm: u16,
    pub weight_kg: u16,
    pub goal: Goal,
}

fn parse_in_range(field: &'static str, raw: &str, (min, max): (u16, u16)) -> Result<u16, ValidationError> {
    raw.trim()
        .parse::<u16>()
        .ok()
        .filter(|v| (min..=max).contains(v))
        .ok_or(ValidationError::OutOfRange { field, min, max })
}

impl ProfileForm {
    pub fn validate(&self) -> Result<ProfileDetails, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        let age = parse_in_range("age", &self.age, AGE_RANGE)?;
        let age = u8::try_from(age).map_err(|_| ValidationError::OutOfRange {
            field: "age",
            min: AGE_RANGE.0,
            max: AGE_RANGE.1,
        })?;
        let gender = self
            .gender
            .parse::<Gender>()
            .map_err(|_| ValidationError::InvalidGender)?;
        let height_cm = parse_in_range("height", &self.height, HEIGHT_RANGE_CM)?;
        let weight_kg = parse_in_range("weight", &self.weight, WEIGHT_RANGE_KG)?;
        let goal = self
            .goal
            .parse::<Goal>()
            .map_err(|_| ValidationError::InvalidGoal)?;

        Ok(ProfileDetails {
            name: name.to_string(),
            age,
            gender,
            height_cm,
            weight_kg,
            goal,
        })
    }
}

/// A single avatar attribute change.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum AvatarEdit {
    HairColor(String),
    HairStyle(String),
    EyeColor(String),
    SkinTone(String),
    ToggleAccessory(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Onboarding {
    #[default]
    CollectingProfile,
    CollectingAvatar {
        details: ProfileDetails,
        avatar: AvatarDescription,
    },
    Complete,
}

impl Onboarding {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> Step {
        match self {
            Onboarding::CollectingProfile => Step::Profile,
            Onboarding::CollectingAvatar { .. } => Step::Avatar,
            Onboarding::Complete => Step::Complete,
        }
    }

    pub fn avatar(&self) -> Option<&AvatarDescription> {
        match self {
            Onboarding::CollectingAvatar { avatar, .. } => Some(avatar),
            _ => None,
        }
    }

    pub fn details(&self) -> Option<&ProfileDetails> {
        match self {
            Onboarding::CollectingAvatar { details, .. } => Some(details),
            _ => None,
        }
    }

    fn expect_step(&self, expected: Step) -> Result<(), OnboardingError> {
        let actual = self.step();
        if actual == expected {
            Ok(())
        } else {
            Err(wrong_step(expected, actual))
        }
    }

    /// Step one. Advances to the avatar step only when every field is valid.
    pub fn submit_profile(&mut self, form: &ProfileForm) -> Result<(), OnboardingError> {
        self.expect_step(Step::Profile)?;
        let details = form.validate().map_err(|e| {
            warn!(error = %e, "profile step rejected");
            e
        })?;
        debug!(name = %details.name, "profile step accepted");
        *self = Onboarding::CollectingAvatar {
            details,
            avatar: AvatarDescription::default(),
        };
        Ok(())
    }

    pub fn edit_avatar(&mut self, edit: AvatarEdit) -> Result<(), OnboardingError> {
        let actual = self.step();
        let Onboarding::CollectingAvatar { avatar, .. } = self else {
            return Err(wrong_step(Step::Avatar, actual));
        };

        let (slot, value) = match edit {
            AvatarEdit::HairColor(v) => (Some(&mut avatar.hair_color), v),
            AvatarEdit::HairStyle(v) => (Some(&mut avatar.hair_style), v),
            AvatarEdit::EyeColor(v) => (Some(&mut avatar.eye_color), v),
            AvatarEdit::SkinTone(v) => (Some(&mut avatar.skin_tone), v),
            AvatarEdit::ToggleAccessory(v) => (None, v),
        };
        let value = value.trim().to_string();
        if value.is_empty() {
            return Err(OnboardingError::EmptyAvatarValue);
        }

        match slot {
            Some(field) => *field = value,
            None => {
                if !avatar.accessories.remove(&value) {
                    avatar.accessories.insert(value);
                }
            }
        }
        Ok(())
    }

    /// Step two. Emits the finished profile and moves to `Complete`.
    pub fn complete(&mut self) -> Result<UserProfile, OnboardingError> {
        self.expect_step(Step::Avatar)?;
        match std::mem::replace(self, Onboarding::Complete) {
            Onboarding::CollectingAvatar { details, avatar } => {
                info!(name = %details.name, goal = %details.goal, "onboarding complete");
                Ok(UserProfile {
                    name: details.name,
                    age: details.age,
                    gender: details.gender,
                    height_cm: details.height_cm,
                    weight_kg: details.weight_kg,
                    goal: details.goal,
                    avatar,
                })
            }
            other => {
                let actual = other.step();
                *self = other;
                Err(OnboardingError::WrongStep {
                    expected: Step::Avatar,
                    actual,
                })
            }
        }
    }
}

fn wrong_step(expected: Step, actual: Step) -> OnboardingError {
    warn!(?expected, ?actual, "onboarding action at wrong step");
    OnboardingError::WrongStep { expected, actual }
}
