use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FitError;
use crate::models::{FoodPortion, MacroTotals};
use crate::planner::calculations::compute_macros;

/// A named list of portions with totals computed at construction.
///
/// Totals are not kept in sync automatically: after editing `portions`,
/// call [`Meal::recompute_totals`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub id: String,
    pub name: String,
    #[serde(rename = "foods")]
    pub portions: Vec<FoodPortion>,
    pub totals: MacroTotals,
}

impl Meal {
    pub fn new(id: String, name: String, portions: Vec<FoodPortion>) -> Self {
        let totals = compute_macros(&portions);
        Self {
            id,
            name,
            portions,
            totals,
        }
    }

    pub fn recompute_totals(&mut self) {
        self.totals = compute_macros(&self.portions);
    }

    pub fn is_empty(&self) -> bool {
        self.portions.is_empty()
    }
}

/// Breakfast, lunch and dinner plus their summed totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Menu {
    pub id: String,
    pub name: String,
    pub meals: [Meal; 3],
    pub totals: MacroTotals,
}

impl Menu {
    pub fn breakfast(&self) -> &Meal {
        &self.meals[0]
    }

    pub fn lunch(&self) -> &Meal {
        &self.meals[1]
    }

    pub fn dinner(&self) -> &Meal {
        &self.meals[2]
    }
}

/// Time of day a user-authored meal is eaten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealTime {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealTime {
    pub const ALL: [MealTime; 4] = [
        MealTime::Breakfast,
        MealTime::Lunch,
        MealTime::Dinner,
        MealTime::Snack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealTime::Breakfast => "breakfast",
            MealTime::Lunch => "lunch",
            MealTime::Dinner => "dinner",
            MealTime::Snack => "snack",
        }
    }
}

impl fmt::Display for MealTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealTime {
    type Err = FitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MealTime::ALL
            .into_iter()
            .find(|t| t.as_str() == s.trim().to_lowercase())
            .ok_or_else(|| FitError::InvalidInput(format!("Unknown meal time: {}", s)))
    }
}

/// A custom meal saved by a user for a given day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserMeal {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub date: String,
    pub meal_time: MealTime,
    #[serde(rename = "foods")]
    pub portions: Vec<FoodPortion>,
    pub totals: MacroTotals,
}
