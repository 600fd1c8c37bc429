pub mod aggregate;
pub mod dto;
pub mod types;

pub use aggregate::{daily_nutrients, daily_totals, recipe_totals, sum_macros, sum_nutrients};
pub use types::{DailyEntry, Macros, Meal, NutrientProfile, Nutrients};
