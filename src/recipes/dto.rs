use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::nutrition::dto::FoodInput;
use crate::nutrition::{Macros, NutrientProfile};
use crate::recipes::repo::RecipeBrowser;
use crate::recipes::types::{Recipe, RecipeKind, RecipeOrigin};

#[derive(Debug, Clone, Deserialize)]
pub struct RecipeDraft {
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<FoodInput>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub prep_time: u32,
    #[serde(default)]
    pub cook_time: u32,
    pub servings: NonZeroU32,
}

#[derive(Debug, Serialize)]
pub struct RecipeView {
    pub id: String,
    pub name: String,
    pub ingredients: Vec<NutrientProfile>,
    pub instructions: Vec<String>,
    pub prep_time: u32,
    pub cook_time: u32,
    pub total_time: u32,
    pub servings: NonZeroU32,
    pub origin: RecipeOrigin,
    pub totals: Macros,
    pub per_serving: Macros,
    pub liked: bool,
}

impl RecipeView {
    pub fn new(recipe: &Recipe, liked: bool) -> Self {
        Self {
            id: recipe.id.clone(),
            name: recipe.name.clone(),
            ingredients: recipe.ingredients.clone(),
            instructions: recipe.instructions.clone(),
            prep_time: recipe.prep_time,
            cook_time: recipe.cook_time,
            total_time: recipe.total_time(),
            servings: recipe.servings,
            origin: recipe.origin.clone(),
            totals: recipe.totals(),
            per_serving: recipe.per_serving(),
            liked,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RecipesView {
    pub kind: RecipeKind,
    pub title: &'static str,
    pub can_add: bool,
    pub recipes: Vec<RecipeView>,
}

impl From<&RecipeBrowser> for RecipesView {
    fn from(b: &RecipeBrowser) -> Self {
        let (title, can_add) = match b.kind() {
            RecipeKind::Personal => ("Personal Recipes", true),
            RecipeKind::Friends => ("Friends' Recipes", false),
        };
        Self {
            kind: b.kind(),
            title,
            can_add,
            recipes: b
                .recipes()
                .iter()
                .map(|r| RecipeView::new(r, b.liked().contains(&r.id)))
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LikeResponse {
    pub recipe_id: String,
    pub liked: bool,
    pub liked_count: usize,
}
