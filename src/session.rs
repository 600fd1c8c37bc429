//! The single in-memory session behind the UI: the completed profile plus the
//! state of whichever page is showing.
//!
//! Each page owns its view state. Navigating tears the old view down and
//! builds the new one from the seed source, so diary edits and likes last
//! only as long as the page stays open.

use std::sync::Arc;

use tracing::info;

use crate::diary::repo::Diary;
use crate::navigation::page::{self, Page};
use crate::profile::onboarding::{Onboarding, OnboardingError};
use crate::profile::types::UserProfile;
use crate::recipes::repo::RecipeBrowser;
use crate::recipes::types::RecipeKind;
use crate::seed::SeedSource;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SessionError {
    #[error("this action belongs to the {expected:?} page but {current:?} is open")]
    WrongPage { expected: Page, current: Page },
    #[error("this action belongs to a recipes page but {current:?} is open")]
    NotOnRecipes { current: Page },
    #[error(transparent)]
    Onboarding(#[from] OnboardingError),
}

#[derive(Debug, Clone)]
pub enum View {
    Onboarding(Onboarding),
    MainMenu,
    Diary(Diary),
    Recipes(RecipeBrowser),
}

pub struct Session {
    seed: Arc<dyn SeedSource>,
    profile: Option<UserProfile>,
    view: View,
}

impl Session {
    pub fn new(seed: Arc<dyn SeedSource>) -> Self {
        Self {
            seed,
            profile: None,
            view: View::Onboarding(Onboarding::new()),
        }
    }

    pub fn page(&self) -> Page {
        match &self.view {
            View::Onboarding(_) => Page::Onboarding,
            View::MainMenu => Page::MainMenu,
            View::Diary(_) => Page::Diary,
            View::Recipes(b) => match b.kind() {
                RecipeKind::Personal => Page::PersonalRecipes,
                RecipeKind::Friends => Page::FriendsRecipes,
            },
        }
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    fn build_view(&self, page: Page) -> View {
        match page {
            Page::Onboarding => View::Onboarding(Onboarding::new()),
            Page::MainMenu => View::MainMenu,
            Page::Diary => View::Diary(Diary::new(self.seed.daily_entries())),
            Page::PersonalRecipes | Page::FriendsRecipes => {
                let kind = page.recipe_kind().unwrap_or(RecipeKind::Personal);
                View::Recipes(RecipeBrowser::new(kind, self.seed.recipes(kind)))
            }
        }
    }

    /// Opens `target` (or its redirect) with a fresh view. Returns the page shown.
    pub fn navigate(&mut self, target: Page) -> Page {
        let shown = page::resolve(target, self.profile.is_some());
        self.view = self.build_view(shown);
        info!(requested = ?target, shown = ?shown, "navigated");
        shown
    }

    pub fn back(&mut self) -> Page {
        self.navigate(page::back(self.profile.is_some()))
    }

    fn wrong_page(&self, expected: Page) -> SessionError {
        SessionError::WrongPage {
            expected,
            current: self.page(),
        }
    }

    pub fn onboarding(&self) -> Result<&Onboarding, SessionError> {
        match &self.view {
            View::Onboarding(w) => Ok(w),
            _ => Err(self.wrong_page(Page::Onboarding)),
        }
    }

    pub fn onboarding_mut(&mut self) -> Result<&mut Onboarding, SessionError> {
        let current = self.page();
        match &mut self.view {
            View::Onboarding(w) => Ok(w),
            _ => Err(SessionError::WrongPage {
                expected: Page::Onboarding,
                current,
            }),
        }
    }

    /// Finishes the wizard, keeps the profile and lands on the main menu.
    pub fn complete_onboarding(&mut self) -> Result<UserProfile, SessionError> {
        let profile = self.onboarding_mut()?.complete()?;
        self.profile = Some(profile.clone());
        self.navigate(Page::MainMenu);
        Ok(profile)
    }

    pub fn diary(&self) -> Result<&Diary, SessionError> {
        match &self.view {
            View::Diary(d) => Ok(d),
            _ => Err(self.wrong_page(Page::Diary)),
        }
    }

    pub fn diary_mut(&mut self) -> Result<&mut Diary, SessionError> {
        let current = self.page();
        match &mut self.view {
            View::Diary(d) => Ok(d),
            _ => Err(SessionError::WrongPage {
                expected: Page::Diary,
                current,
            }),
        }
    }

    /// The open recipe browser, personal or friends'.
    pub fn recipes(&self) -> Result<&RecipeBrowser, SessionError> {
        match &self.view {
            View::Recipes(b) => Ok(b),
            _ => Err(SessionError::NotOnRecipes { current: self.page() }),
        }
    }

    pub fn recipes_mut(&mut self) -> Result<&mut RecipeBrowser, SessionError> {
        let current = self.page();
        match &mut self.view {
            View::Recipes(b) => Ok(b),
            _ => Err(SessionError::NotOnRecipes { current }),
        }
    }
}
