//! Nutrition rollups: food → meal, meal → day, ingredient → recipe.
//!
//! Every total is recomputed from its parts on each call. Inputs are not
//! validated here; negative or non-finite values are summed as-is.

use crate::nutrition::types::{DailyEntry, Macros, Meal, NutrientProfile, Nutrients};
use crate::recipes::types::Recipe;

/// Folds the four macros over `items`. Empty input yields zero.
pub fn sum_macros<'a, I>(items: I) -> Macros
where
    I: IntoIterator<Item = &'a NutrientProfile>,
{
    items.into_iter().map(NutrientProfile::macros).sum()
}

/// Folds all seven nutrient fields over `items`.
pub fn sum_nutrients<'a, I>(items: I) -> Nutrients
where
    I: IntoIterator<Item = &'a NutrientProfile>,
{
    items.into_iter().map(NutrientProfile::nutrients).sum()
}

/// Sums the day's meal totals.
pub fn daily_totals(entry: &DailyEntry) -> Macros {
    entry.meals.iter().map(Meal::totals).sum()
}

/// Seven-field summary for the whole day.
pub fn daily_nutrients(entry: &DailyEntry) -> Nutrients {
    sum_nutrients(entry.meals.iter().flat_map(|m| m.foods.iter()))
}

pub fn recipe_totals(recipe: &Recipe) -> Macros {
    sum_macros(&recipe.ingredients)
}

impl Meal {
    pub fn totals(&self) -> Macros {
        sum_macros(&self.foods)
    }
}
