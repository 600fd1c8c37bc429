use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::recipes::types::RecipeKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    Onboarding,
    MainMenu,
    Diary,
    PersonalRecipes,
    FriendsRecipes,
}

impl Page {
    pub fn recipe_kind(self) -> Option<RecipeKind> {
        match self {
            Page::PersonalRecipes => Some(RecipeKind::Personal),
            Page::FriendsRecipes => Some(RecipeKind::Friends),
            _ => None,
        }
    }
}

/// Resolves a navigation request to the page that is actually shown.
///
/// The main menu needs a finished profile; without one the request lands on
/// onboarding instead. Every other target is taken as-is.
pub fn resolve(target: Page, has_profile: bool) -> Page {
    match target {
        Page::MainMenu if !has_profile => {
            warn!("main menu requested before onboarding; redirecting");
            Page::Onboarding
        }
        other => other,
    }
}

/// Target of the back action.
pub fn back(has_profile: bool) -> Page {
    resolve(Page::MainMenu, has_profile)
}
