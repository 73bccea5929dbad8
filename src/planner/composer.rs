use crate::error::{FitError, Result};
use crate::models::{Food, FoodPortion, MacroTotals, MealTime, UserMeal};
use crate::planner::calculations::compute_macros;

/// A user-authored meal under construction.
///
/// Totals are never cached here; [`MealComposer::totals`] recomputes them
/// from the current portions every time.
#[derive(Debug, Clone, Default)]
pub struct MealComposer {
    name: String,
    portions: Vec<FoodPortion>,
}

impl MealComposer {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            portions: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn portions(&self) -> &[FoodPortion] {
        &self.portions
    }

    /// Add grams of a food, merging into an existing portion of the same food.
    pub fn add_food(&mut self, food: &Food, grams: f64) {
        match self.portions.iter_mut().find(|p| p.food.id == food.id) {
            Some(portion) => portion.grams += grams,
            None => self.portions.push(FoodPortion::new(food.clone(), grams)),
        }
    }

    /// Set the grams of a portion. Zero or less removes it.
    ///
    /// Returns false when the food is not part of the meal.
    pub fn set_grams(&mut self, food_id: &str, grams: f64) -> bool {
        if grams <= 0.0 {
            return self.remove_food(food_id);
        }

        match self.portions.iter_mut().find(|p| p.food.id == food_id) {
            Some(portion) => {
                portion.grams = grams;
                true
            }
            None => false,
        }
    }

    /// Remove a portion. Returns false when the food is not part of the meal.
    pub fn remove_food(&mut self, food_id: &str) -> bool {
        let before = self.portions.len();
        self.portions.retain(|p| p.food.id != food_id);
        self.portions.len() != before
    }

    pub fn totals(&self) -> MacroTotals {
        compute_macros(&self.portions)
    }

    pub fn is_empty(&self) -> bool {
        self.portions.is_empty()
    }

    /// Validate and turn the composition into a saved meal.
    ///
    /// `sequence` distinguishes several meals of the same user, day and time.
    pub fn finish(
        self,
        user_id: &str,
        date: &str,
        meal_time: MealTime,
        sequence: usize,
    ) -> Result<UserMeal> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FitError::InvalidInput("Meal name is required".to_string()));
        }
        if self.portions.is_empty() {
            return Err(FitError::InvalidInput(
                "Add at least one food to the meal".to_string(),
            ));
        }
        validate_date(date)?;

        let totals = self.totals();
        Ok(UserMeal {
            id: user_meal_id(user_id, date, meal_time, sequence),
            user_id: user_id.to_string(),
            name: name.to_string(),
            date: date.to_string(),
            meal_time,
            portions: self.portions,
            totals,
        })
    }
}

/// `umeal_{user}_{date}_{time}_{sequence}`
pub fn user_meal_id(user_id: &str, date: &str, meal_time: MealTime, sequence: usize) -> String {
    format!("umeal_{}_{}_{}_{}", user_id, date, meal_time, sequence)
}

/// Accepts `YYYY-MM-DD` with a plausible month and day.
pub fn validate_date(date: &str) -> Result<()> {
    let invalid = || FitError::InvalidInput(format!("Invalid date (expected YYYY-MM-DD): {}", date));

    let parts: Vec<&str> = date.split('-').collect();
    let [year, month, day] = parts.as_slice() else {
        return Err(invalid());
    };
    if year.len() != 4 || month.len() != 2 || day.len() != 2 {
        return Err(invalid());
    }

    let month: u32 = month.parse().map_err(|_| invalid())?;
    let day: u32 = day.parse().map_err(|_| invalid())?;
    year.parse::<u32>().map_err(|_| invalid())?;

    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return Err(invalid());
    }
    Ok(())
}
