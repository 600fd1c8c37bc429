use std::collections::HashSet;

use time::Date;
use tracing::{debug, info};
use uuid::Uuid;

use crate::diary::dto::{MealDraft, MealEdit};
use crate::nutrition::dto::{into_profiles_excluding, FoodInputError};
use crate::nutrition::{DailyEntry, Meal};

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum DiaryError {
    #[error("no diary entry for {0}")]
    EntryNotFound(Date),
    #[error("meal {meal_id} not found on {date}")]
    MealNotFound { date: Date, meal_id: String },
    #[error("meal name must not be empty")]
    EmptyMealName,
    #[error(transparent)]
    Food(#[from] FoodInputError),
}

/// Daily entries of the diary page, kept in date order with one entry per date.
#[derive(Debug, Clone, Default)]
pub struct Diary {
    entries: Vec<DailyEntry>,
}

impl Diary {
    /// Builds a diary from seed entries. Entries sharing a date are merged in
    /// the order given.
    pub fn new(seed: Vec<DailyEntry>) -> Self {
        let mut diary = Diary::default();
        for entry in seed {
            let slot = diary.entry_or_insert(entry.date);
            slot.meals.extend(entry.meals);
        }
        diary
    }

    pub fn entries(&self) -> &[DailyEntry] {
        &self.entries
    }

    pub fn entry(&self, date: Date) -> Option<&DailyEntry> {
        self.entries
            .binary_search_by_key(&date, |e| e.date)
            .ok()
            .map(|i| &self.entries[i])
    }

    fn entry_or_insert(&mut self, date: Date) -> &mut DailyEntry {
        let idx = match self.entries.binary_search_by_key(&date, |e| e.date) {
            Ok(i) => i,
            Err(i) => {
                debug!(%date, "creating diary entry");
                self.entries.insert(i, DailyEntry::new(date));
                i
            }
        };
        &mut self.entries[idx]
    }

    /// Food ids logged on `date`, leaving out the meal `except`.
    fn food_ids_on(&self, date: Date, except: Option<&str>) -> HashSet<&str> {
        self.entry(date)
            .into_iter()
            .flat_map(|e| e.meals.iter())
            .filter(|m| Some(m.id.as_str()) != except)
            .flat_map(|m| m.foods.iter().map(|f| f.id.as_str()))
            .collect()
    }

    /// Appends a meal to `date`, creating that day's entry when needed.
    pub fn add_meal(&mut self, date: Date, draft: MealDraft) -> Result<&Meal, DiaryError> {
        let name = draft.name.trim().to_string();
        if name.is_empty() {
            return Err(DiaryError::EmptyMealName);
        }
        let foods = into_profiles_excluding(draft.foods, &self.food_ids_on(date, None))?;

        let meal = Meal {
            id: Uuid::new_v4().to_string(),
            name,
            foods,
        };
        info!(%date, meal_id = %meal.id, foods = meal.foods.len(), "meal added");

        let entry = self.entry_or_insert(date);
        entry.meals.push(meal);
        let last = entry.meals.len() - 1;
        Ok(&entry.meals[last])
    }

    /// Replaces the name and/or foods of an existing meal.
    pub fn edit_meal(&mut self, date: Date, meal_id: &str, edit: MealEdit) -> Result<&Meal, DiaryError> {
        let name = match edit.name {
            Some(n) if n.trim().is_empty() => return Err(DiaryError::EmptyMealName),
            Some(n) => Some(n.trim().to_string()),
            None => None,
        };

        let idx = self
            .entries
            .binary_search_by_key(&date, |e| e.date)
            .map_err(|_| DiaryError::EntryNotFound(date))?;
        if self.entries[idx].meal(meal_id).is_none() {
            return Err(DiaryError::MealNotFound {
                date,
                meal_id: meal_id.to_string(),
            });
        }
        let foods = match edit.foods {
            Some(foods) => Some(into_profiles_excluding(foods, &self.food_ids_on(date, Some(meal_id)))?),
            None => None,
        };

        let meal = self.entries[idx]
            .meal_mut(meal_id)
            .ok_or_else(|| DiaryError::MealNotFound {
                date,
                meal_id: meal_id.to_string(),
            })?;

        if let Some(name) = name {
            meal.name = name;
        }
        if let Some(foods) = foods {
            meal.foods = foods;
        }
        info!(%date, %meal_id, "meal edited");
        Ok(meal)
    }
}
