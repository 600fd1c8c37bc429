use tracing::debug;
use uuid::Uuid;

use crate::nutrition::dto::{into_profiles, FoodInputError};
use crate::recipes::dto::RecipeDraft;
use crate::recipes::likes::LikedSet;
use crate::recipes::types::{Recipe, RecipeKind, RecipeOrigin};

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum RecipeError {
    #[error("recipe {0} not found")]
    NotFound(String),
    #[error("recipes can only be added to the personal collection")]
    NotPersonal,
    #[error("recipe name must not be empty")]
    EmptyName,
    #[error(transparent)]
    Ingredient(#[from] FoodInputError),
}

/// State of one recipe page: its collection and the viewer's likes.
#[derive(Debug, Clone)]
pub struct RecipeBrowser {
    kind: RecipeKind,
    recipes: Vec<Recipe>,
    liked: LikedSet,
}

impl RecipeBrowser {
    pub fn new(kind: RecipeKind, recipes: Vec<Recipe>) -> Self {
        Self {
            kind,
            recipes,
            liked: LikedSet::default(),
        }
    }

    pub fn kind(&self) -> RecipeKind {
        self.kind
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn liked(&self) -> &LikedSet {
        &self.liked
    }

    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    pub fn toggle_like(&mut self, id: &str) -> Result<bool, RecipeError> {
        if self.get(id).is_none() {
            return Err(RecipeError::NotFound(id.to_string()));
        }
        let liked = self.liked.toggle(id);
        debug!(recipe_id = %id, liked, "like toggled");
        Ok(liked)
    }

    /// Appends a new personal recipe.
    pub fn add_recipe(&mut self, draft: RecipeDraft) -> Result<&Recipe, RecipeError> {
        if self.kind != RecipeKind::Personal {
            return Err(RecipeError::NotPersonal);
        }
        let name = draft.name.trim().to_string();
        if name.is_empty() {
            return Err(RecipeError::EmptyName);
        }

        let recipe = Recipe {
            id: Uuid::new_v4().to_string(),
            name,
            ingredients: into_profiles(draft.ingredients)?,
            instructions: draft
                .instructions
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            prep_time: draft.prep_time,
            cook_time: draft.cook_time,
            servings: draft.servings,
            origin: RecipeOrigin::Personal,
        };
        self.recipes.push(recipe);
        Ok(&self.recipes[self.recipes.len() - 1])
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use super::*;
    use crate::nutrition::dto::FoodInput;
    use crate::seed::{SampleData, SeedSource};

    fn draft(name: &str) -> RecipeDraft {
        RecipeDraft {
            name: name.into(),
            ingredients: vec![FoodInput {
                id: None,
                name: "Oats".into(),
                calories: 150.0,
                protein: 5.0,
                carbs: 27.0,
                fat: 3.0,
                fiber: 4.0,
                sugar: 1.0,
                sodium: 0.0,
            }],
            instructions: vec!["Soak overnight".into(), "  ".into()],
            prep_time: 5,
            cook_time: 0,
            servings: NonZeroU32::MIN,
        }
    }

    #[test]
    fn toggle_like_requires_a_known_recipe() {
        let mut browser = RecipeBrowser::new(RecipeKind::Friends, SampleData.recipes(RecipeKind::Friends));
        assert!(browser.toggle_like("1").unwrap());
        assert!(browser.liked().contains("1"));
        assert_eq!(browser.toggle_like("nope"), Err(RecipeError::NotFound("nope".into())));
        assert!(!browser.toggle_like("1").unwrap());
        assert!(browser.liked().is_empty());
    }

    #[test]
    fn add_recipe_appends_to_personal_collection() {
        let mut browser =
            RecipeBrowser::new(RecipeKind::Personal, SampleData.recipes(RecipeKind::Personal));
        let before = browser.recipes().len();

        let added = browser.add_recipe(draft("Overnight Oats")).unwrap();
        assert_eq!(added.name, "Overnight Oats");
        assert!(added.is_personal());
        assert_eq!(added.instructions, vec!["Soak overnight".to_string()]);
        assert_eq!(added.totals().calories, 150.0);

        assert_eq!(browser.recipes().len(), before + 1);
        assert_eq!(browser.recipes()[before].name, "Overnight Oats");
    }

    #[test]
    fn add_recipe_rejected_for_friends_collection() {
        let mut browser = RecipeBrowser::new(RecipeKind::Friends, Vec::new());
        assert_eq!(browser.add_recipe(draft("x")).unwrap_err(), RecipeError::NotPersonal);
        assert!(browser.recipes().is_empty());
    }

    #[test]
    fn add_recipe_rejects_repeated_ingredient_ids() {
        let mut browser = RecipeBrowser::new(RecipeKind::Personal, Vec::new());
        let mut d = draft("Double Oats");
        d.ingredients[0].id = Some("oats".into());
        d.ingredients.push(d.ingredients[0].clone());
        assert_eq!(
            browser.add_recipe(d).unwrap_err(),
            RecipeError::Ingredient(FoodInputError::DuplicateId("oats".into()))
        );
        assert!(browser.recipes().is_empty());
    }

    #[test]
    fn add_recipe_rejects_blank_name() {
        let mut browser = RecipeBrowser::new(RecipeKind::Personal, Vec::new());
        assert_eq!(browser.add_recipe(draft(" ")).unwrap_err(), RecipeError::EmptyName);
    }
}
