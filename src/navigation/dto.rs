use serde::{Deserialize, Serialize};

use crate::diary::dto::{DiaryView, EntryView};
use crate::navigation::page::Page;
use crate::profile::dto::{MainMenuView, OnboardingView};
use crate::profile::onboarding::Onboarding;
use crate::recipes::dto::RecipesView;
use crate::recipes::types::RecipeKind;
use crate::session::{Session, View};

#[derive(Debug, Deserialize)]
pub struct NavigateRequest {
    pub page: Page,
}

/// Snapshot of the open page, tagged with its name.
#[derive(Debug, Serialize)]
#[serde(tag = "page", rename_all = "kebab-case")]
pub enum PageView {
    Onboarding(OnboardingView),
    MainMenu(MainMenuView),
    Diary(DiaryView),
    PersonalRecipes(RecipesView),
    FriendsRecipes(RecipesView),
}

impl From<&Session> for PageView {
    fn from(session: &Session) -> Self {
        match session.view() {
            View::Onboarding(w) => PageView::Onboarding(OnboardingView::from(w)),
            View::MainMenu => match session.profile() {
                Some(p) => PageView::MainMenu(MainMenuView::from(p)),
                None => PageView::Onboarding(OnboardingView::from(&Onboarding::new())),
            },
            View::Diary(d) => PageView::Diary(DiaryView {
                entries: d.entries().iter().map(EntryView::from).collect(),
            }),
            View::Recipes(b) => {
                let view = RecipesView::from(b);
                match b.kind() {
                    RecipeKind::Personal => PageView::PersonalRecipes(view),
                    RecipeKind::Friends => PageView::FriendsRecipes(view),
                }
            }
        }
    }
}
