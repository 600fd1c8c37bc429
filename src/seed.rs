use std::num::NonZeroU32;

use time::macros::date;

use crate::nutrition::{DailyEntry, Meal, NutrientProfile};
use crate::recipes::types::{Recipe, RecipeKind, RecipeOrigin};

/// Supplies the entities each view starts from.
pub trait SeedSource: Send + Sync {
    fn daily_entries(&self) -> Vec<DailyEntry>;
    fn recipes(&self, kind: RecipeKind) -> Vec<Recipe>;
}

/// The built-in sample data set.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleData;

#[allow(clippy::too_many_arguments)]
fn food(
    id: &str,
    name: &str,
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
    fiber: f64,
    sugar: f64,
    sodium: f64,
) -> NutrientProfile {
    NutrientProfile {
        id: id.into(),
        name: name.into(),
        calories,
        protein,
        carbs,
        fat,
        fiber,
        sugar,
        sodium,
    }
}

fn servings(n: u32) -> NonZeroU32 {
    NonZeroU32::new(n).unwrap_or(NonZeroU32::MIN)
}

impl SeedSource for SampleData {
    fn daily_entries(&self) -> Vec<DailyEntry> {
        vec![DailyEntry {
            date: date!(2024 - 07 - 12),
            meals: vec![
                Meal {
                    id: "1".into(),
                    name: "Breakfast".into(),
                    foods: vec![food("1", "Oatmeal with berries", 250.0, 8.0, 45.0, 4.0, 6.0, 12.0, 150.0)],
                },
                Meal {
                    id: "2".into(),
                    name: "Lunch".into(),
                    foods: vec![food("2", "Grilled chicken salad", 350.0, 35.0, 15.0, 12.0, 8.0, 5.0, 400.0)],
                },
            ],
        }]
    }

    fn recipes(&self, kind: RecipeKind) -> Vec<Recipe> {
        let origin = |author: &str| match kind {
            RecipeKind::Personal => RecipeOrigin::Personal,
            RecipeKind::Friends => RecipeOrigin::Shared {
                author: author.into(),
            },
        };

        vec![
            Recipe {
                id: "1".into(),
                name: "Protein Power Bowl".into(),
                ingredients: vec![
                    food("1", "Quinoa", 120.0, 4.0, 22.0, 2.0, 3.0, 1.0, 10.0),
                    food("2", "Grilled Chicken", 165.0, 31.0, 0.0, 3.6, 0.0, 0.0, 74.0),
                ],
                instructions: vec![
                    "Cook quinoa according to package instructions".into(),
                    "Grill chicken breast until cooked through".into(),
                    "Combine with vegetables and serve".into(),
                ],
                prep_time: 15,
                cook_time: 20,
                servings: servings(2),
                origin: origin("Sarah Johnson"),
            },
            Recipe {
                id: "2".into(),
                name: "Berry Smoothie Bowl".into(),
                ingredients: vec![food("3", "Mixed Berries", 85.0, 1.0, 21.0, 0.5, 4.0, 15.0, 1.0)],
                instructions: vec![
                    "Blend frozen berries with yogurt".into(),
                    "Top with granola and fresh fruit".into(),
                    "Serve immediately".into(),
                ],
                prep_time: 10,
                cook_time: 0,
                servings: servings(1),
                origin: origin("Mike Chen"),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::nutrition::{daily_totals, Macros};

    #[test]
    fn sample_day_totals() {
        let entries = SampleData.daily_entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(
            daily_totals(&entries[0]),
            Macros { calories: 600.0, protein: 43.0, carbs: 60.0, fat: 16.0 }
        );
    }

    #[test]
    fn friends_recipes_carry_authors() {
        let recipes = SampleData.recipes(RecipeKind::Friends);
        let authors: Vec<_> = recipes.iter().filter_map(Recipe::author).collect();
        assert_eq!(authors, vec!["Sarah Johnson", "Mike Chen"]);
        assert!(SampleData
            .recipes(RecipeKind::Personal)
            .iter()
            .all(Recipe::is_personal));
    }

    #[test]
    fn recipe_ids_are_unique() {
        let recipes = SampleData.recipes(RecipeKind::Personal);
        let ids: HashSet<_> = recipes.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), recipes.len());
    }
}
