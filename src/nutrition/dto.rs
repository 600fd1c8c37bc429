use std::collections::HashSet;

use serde::Deserialize;
use uuid::Uuid;

use crate::nutrition::types::NutrientProfile;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FoodInputError {
    #[error("food name must not be empty")]
    EmptyName,
    #[error("{field} of '{food}' must be a non-negative number")]
    InvalidAmount { food: String, field: &'static str },
    #[error("food id '{0}' is already in use")]
    DuplicateId(String),
}

/// A food as sent by the client. Ids are assigned when absent.
#[derive(Debug, Clone, Deserialize)]
pub struct FoodInput {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    #[serde(default)]
    pub fiber: f64,
    #[serde(default)]
    pub sugar: f64,
    #[serde(default)]
    pub sodium: f64,
}

impl FoodInput {
    pub fn into_profile(self) -> Result<NutrientProfile, FoodInputError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(FoodInputError::EmptyName);
        }

        let amounts = [
            ("calories", self.calories),
            ("protein", self.protein),
            ("carbs", self.carbs),
            ("fat", self.fat),
            ("fiber", self.fiber),
            ("sugar", self.sugar),
            ("sodium", self.sodium),
        ];
        if let Some((field, _)) = amounts.into_iter().find(|(_, v)| !v.is_finite() || *v < 0.0) {
            return Err(FoodInputError::InvalidAmount { food: name, field });
        }

        Ok(NutrientProfile {
            id: self
                .id
                .filter(|id| !id.trim().is_empty())
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            name,
            calories: self.calories,
            protein: self.protein,
            carbs: self.carbs,
            fat: self.fat,
            fiber: self.fiber,
            sugar: self.sugar,
            sodium: self.sodium,
        })
    }
}

pub fn into_profiles(foods: Vec<FoodInput>) -> Result<Vec<NutrientProfile>, FoodInputError> {
    into_profiles_excluding(foods, &HashSet::new())
}

/// Converts `foods`, rejecting ids repeated within the batch or found in `taken`.
pub fn into_profiles_excluding(
    foods: Vec<FoodInput>,
    taken: &HashSet<&str>,
) -> Result<Vec<NutrientProfile>, FoodInputError> {
    let profiles = foods
        .into_iter()
        .map(FoodInput::into_profile)
        .collect::<Result<Vec<_>, _>>()?;

    let mut seen = HashSet::new();
    for p in &profiles {
        if taken.contains(p.id.as_str()) || !seen.insert(p.id.as_str()) {
            return Err(FoodInputError::DuplicateId(p.id.clone()));
        }
    }
    Ok(profiles)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, calories: f64) -> FoodInput {
        FoodInput {
            id: None,
            name: name.into(),
            calories,
            protein: 1.0,
            carbs: 1.0,
            fat: 1.0,
            fiber: 0.0,
            sugar: 0.0,
            sodium: 0.0,
        }
    }

    #[test]
    fn assigns_an_id_when_missing() {
        let p = input("Apple", 52.0).into_profile().unwrap();
        assert!(Uuid::parse_str(&p.id).is_ok());
        assert_eq!(p.name, "Apple");
    }

    #[test]
    fn keeps_a_given_id() {
        let mut i = input("Apple", 52.0);
        i.id = Some("apple-1".into());
        assert_eq!(i.into_profile().unwrap().id, "apple-1");
    }

    #[test]
    fn rejects_negative_and_non_finite_amounts() {
        let err = input("Apple", -1.0).into_profile().unwrap_err();
        assert_eq!(
            err,
            FoodInputError::InvalidAmount { food: "Apple".into(), field: "calories" }
        );

        let mut i = input("Apple", 52.0);
        i.sodium = f64::NAN;
        assert!(matches!(
            i.into_profile(),
            Err(FoodInputError::InvalidAmount { field: "sodium", .. })
        ));
    }

    #[test]
    fn rejects_blank_names() {
        assert_eq!(input("   ", 1.0).into_profile().unwrap_err(), FoodInputError::EmptyName);
    }

    #[test]
    fn repeated_ids_in_one_batch_are_rejected() {
        let mut a = input("Apple", 52.0);
        a.id = Some("1".into());
        let mut b = input("Pear", 57.0);
        b.id = Some("1".into());
        assert_eq!(into_profiles(vec![a, b]).unwrap_err(), FoodInputError::DuplicateId("1".into()));
    }

    #[test]
    fn ids_already_taken_are_rejected() {
        let mut a = input("Apple", 52.0);
        a.id = Some("2".into());
        let taken: HashSet<&str> = ["2"].into_iter().collect();
        assert_eq!(
            into_profiles_excluding(vec![a, input("Pear", 57.0)], &taken).unwrap_err(),
            FoodInputError::DuplicateId("2".into())
        );

        let fresh = into_profiles_excluding(vec![input("Pear", 57.0), input("Plum", 30.0)], &taken).unwrap();
        assert_ne!(fresh[0].id, fresh[1].id);
    }

    #[test]
    fn missing_micros_default_to_zero() {
        let i: FoodInput = serde_json::from_str(
            r#"{"name":"Egg","calories":78,"protein":6,"carbs":0.6,"fat":5}"#,
        )
        .unwrap();
        let p = i.into_profile().unwrap();
        assert_eq!(p.fiber, 0.0);
        assert_eq!(p.sodium, 0.0);
    }
}
