use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::nutrition::{recipe_totals, Macros, NutrientProfile};

/// Who a recipe belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecipeOrigin {
    Personal,
    Shared { author: String },
}

/// Which collection a recipe browser shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipeKind {
    Personal,
    Friends,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub ingredients: Vec<NutrientProfile>,
    pub instructions: Vec<String>,
    /// Minutes.
    pub prep_time: u32,
    /// Minutes.
    pub cook_time: u32,
    pub servings: NonZeroU32,
    pub origin: RecipeOrigin,
}

impl Recipe {
    pub fn is_personal(&self) -> bool {
        matches!(self.origin, RecipeOrigin::Personal)
    }

    pub fn author(&self) -> Option<&str> {
        match &self.origin {
            RecipeOrigin::Personal => None,
            RecipeOrigin::Shared { author } => Some(author),
        }
    }

    pub fn total_time(&self) -> u32 {
        self.prep_time.saturating_add(self.cook_time)
    }

    pub fn totals(&self) -> Macros {
        recipe_totals(self)
    }

    pub fn per_serving(&self) -> Macros {
        self.totals().scaled(1.0 / f64::from(self.servings.get()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(origin: RecipeOrigin) -> Recipe {
        Recipe {
            id: "2".into(),
            name: "Berry Smoothie Bowl".into(),
            ingredients: vec![NutrientProfile {
                id: "3".into(),
                name: "Mixed Berries".into(),
                calories: 85.0,
                protein: 1.0,
                carbs: 21.0,
                fat: 0.5,
                fiber: 4.0,
                sugar: 15.0,
                sodium: 1.0,
            }],
            instructions: vec!["Blend".into()],
            prep_time: 10,
            cook_time: 0,
            servings: NonZeroU32::new(2).unwrap(),
            origin,
        }
    }

    #[test]
    fn origin_drives_personal_flag_and_author() {
        let mine = recipe(RecipeOrigin::Personal);
        assert!(mine.is_personal());
        assert_eq!(mine.author(), None);

        let theirs = recipe(RecipeOrigin::Shared { author: "Mike Chen".into() });
        assert!(!theirs.is_personal());
        assert_eq!(theirs.author(), Some("Mike Chen"));
    }

    #[test]
    fn origin_is_tagged_on_the_wire() {
        let json = serde_json::to_value(RecipeOrigin::Shared { author: "Sarah Johnson".into() })
            .unwrap();
        assert_eq!(json["kind"], "shared");
        assert_eq!(json["author"], "Sarah Johnson");

        let json = serde_json::to_value(RecipeOrigin::Personal).unwrap();
        assert_eq!(json["kind"], "personal");
        assert!(json.get("author").is_none());
    }

    #[test]
    fn zero_servings_do_not_deserialize() {
        let mut json = serde_json::to_value(recipe(RecipeOrigin::Personal)).unwrap();
        json["servings"] = serde_json::json!(0);
        assert!(serde_json::from_value::<Recipe>(json).is_err());
    }

    #[test]
    fn per_serving_divides_totals() {
        let r = recipe(RecipeOrigin::Personal);
        assert_eq!(r.total_time(), 10);
        assert_eq!(r.per_serving().calories, 42.5);
        assert_eq!(r.per_serving().fat, 0.25);
    }
}
