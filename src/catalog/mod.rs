mod seed;

pub use seed::{demo_foods, demo_products};

use crate::error::{FitError, Result};
use crate::models::Food;

/// Source of the food list that generation and composition work from.
///
/// Only `list_foods` is required; lookups are derived from it.
pub trait FoodCatalog {
    fn list_foods(&self) -> Result<Vec<Food>>;

    fn food_by_id(&self, id: &str) -> Result<Food> {
        self.list_foods()?
            .into_iter()
            .find(|f| f.id == id)
            .ok_or_else(|| FitError::FoodNotFound(id.to_string()))
    }

    /// Foods whose category matches, case-insensitively.
    fn foods_by_category(&self, category: &str) -> Result<Vec<Food>> {
        Ok(self
            .list_foods()?
            .into_iter()
            .filter(|f| f.in_category(category))
            .collect())
    }

    /// Foods whose name contains `term`, case-insensitively.
    fn search_foods(&self, term: &str) -> Result<Vec<Food>> {
        let term = term.to_lowercase();
        Ok(self
            .list_foods()?
            .into_iter()
            .filter(|f| f.name.to_lowercase().contains(&term))
            .collect())
    }

    /// Distinct category labels in first-seen order.
    fn food_categories(&self) -> Result<Vec<String>> {
        let mut categories: Vec<String> = Vec::new();
        for food in self.list_foods()? {
            if !categories.iter().any(|c| c.to_lowercase() == food.category.to_lowercase()) {
                categories.push(food.category);
            }
        }
        Ok(categories)
    }
}

/// A fixed in-memory catalog.
impl FoodCatalog for [Food] {
    fn list_foods(&self) -> Result<Vec<Food>> {
        Ok(self.to_vec())
    }
}
