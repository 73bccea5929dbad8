use serde::{Deserialize, Serialize};

/// A catalog food with its macro profile per reference portion.
///
/// `calories`, `protein`, `carbs` and `fat` are stated per `portion` grams
/// (100 g for the bundled demo data, but any positive size is honored).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Food {
    pub id: String,

    pub name: String,

    pub calories: f64,

    pub protein: f64,

    pub carbs: f64,

    pub fat: f64,

    /// Reference portion in grams.
    pub portion: f64,

    pub category: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Food {
    /// Multiplier that converts per-reference values into values for `grams`.
    ///
    /// A food with a non-positive reference portion scales to nothing.
    #[inline]
    pub fn scale(&self, grams: f64) -> f64 {
        if self.portion > 0.0 {
            grams / self.portion
        } else {
            0.0
        }
    }

    /// Case-insensitive category comparison.
    pub fn in_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }

    /// Basic validation: non-negative macros and a usable portion size.
    pub fn is_valid(&self) -> bool {
        !self.id.trim().is_empty()
            && self.calories >= 0.0
            && self.protein >= 0.0
            && self.carbs >= 0.0
            && self.fat >= 0.0
            && self.portion > 0.0
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{} ({}): {} kcal, P:{} C:{} F:{} per {}g [{}]",
            self.name,
            self.id,
            self.calories,
            self.protein,
            self.carbs,
            self.fat,
            self.portion,
            self.category
        )
    }
}

impl PartialEq for Food {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Food {}

/// A gram quantity of a specific food inside a meal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodPortion {
    pub food: Food,
    pub grams: f64,
}

impl FoodPortion {
    pub fn new(food: Food, grams: f64) -> Self {
        Self { food, grams }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_food() -> Food {
        Food {
            id: "food_001".to_string(),
            name: "Pechuga de pollo".to_string(),
            calories: 165.0,
            protein: 31.0,
            carbs: 0.0,
            fat: 3.6,
            portion: 100.0,
            category: "proteínas".to_string(),
            image: None,
        }
    }

    #[test]
    fn test_scale_uses_declared_portion() {
        let mut food = sample_food();
        assert!((food.scale(150.0) - 1.5).abs() < 1e-9);

        food.portion = 50.0;
        assert!((food.scale(150.0) - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_scale_zero_portion() {
        let mut food = sample_food();
        food.portion = 0.0;
        assert_eq!(food.scale(100.0), 0.0);
        assert!(!food.is_valid());
    }

    #[test]
    fn test_category_case_insensitive() {
        let food = sample_food();
        assert!(food.in_category("Proteínas"));
        assert!(food.in_category("PROTEÍNAS"));
        assert!(!food.in_category("grasas"));
    }

    #[test]
    fn test_equality_by_id() {
        let food1 = sample_food();
        let mut food2 = sample_food();
        food2.name = "Chicken breast".to_string();
        assert_eq!(food1, food2);
    }

    #[test]
    fn test_image_optional_in_json() {
        let json = r#"{"id":"food_002","name":"Arroz blanco","calories":130,"protein":2.7,"carbs":28,"fat":0.3,"portion":100,"category":"carbohidratos"}"#;
        let food: Food = serde_json::from_str(json).unwrap();
        assert_eq!(food.id, "food_002");
        assert!(food.image.is_none());
    }
}
