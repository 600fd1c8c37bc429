use serde::{Deserialize, Serialize};
use time::macros::format_description;
use time::Date;

use crate::nutrition::dto::FoodInput;
use crate::nutrition::{daily_nutrients, daily_totals, DailyEntry, Macros, Meal, NutrientProfile, Nutrients};

#[derive(Debug, Clone, Deserialize)]
pub struct MealDraft {
    pub name: String,
    #[serde(default)]
    pub foods: Vec<FoodInput>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MealEdit {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub foods: Option<Vec<FoodInput>>,
}

#[derive(Debug, Serialize)]
pub struct MealView {
    pub id: String,
    pub name: String,
    pub foods: Vec<NutrientProfile>,
    pub totals: Macros,
}

impl From<&Meal> for MealView {
    fn from(m: &Meal) -> Self {
        Self {
            id: m.id.clone(),
            name: m.name.clone(),
            foods: m.foods.clone(),
            totals: m.totals(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EntryView {
    pub date: String,
    pub display_date: String,
    pub meals: Vec<MealView>,
    pub totals: Macros,
    pub nutrients: Nutrients,
}

/// "Friday, July 12, 2024"
pub fn display_date(date: Date) -> String {
    date.format(format_description!(
        "[weekday], [month repr:long] [day padding:none], [year]"
    ))
    .unwrap_or_else(|_| date.to_string())
}

impl From<&DailyEntry> for EntryView {
    fn from(e: &DailyEntry) -> Self {
        Self {
            date: e.date.to_string(),
            display_date: display_date(e.date),
            meals: e.meals.iter().map(MealView::from).collect(),
            totals: daily_totals(e),
            nutrients: daily_nutrients(e),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DiaryView {
    pub entries: Vec<EntryView>,
}
