use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

use crate::models::Food;

/// Rounded macro totals as stored on meals and menus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroTotals {
    pub calories: i64,
    pub protein: i64,
    pub carbs: i64,
    pub fat: i64,
}

impl Add for MacroTotals {
    type Output = MacroTotals;

    fn add(self, rhs: Self) -> Self::Output {
        MacroTotals {
            calories: self.calories + rhs.calories,
            protein: self.protein + rhs.protein,
            carbs: self.carbs + rhs.carbs,
            fat: self.fat + rhs.fat,
        }
    }
}

impl AddAssign for MacroTotals {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Unrounded running sums.
///
/// Rounding happens once, in [`MacroSums::round`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MacroSums {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl MacroSums {
    /// Accumulate `grams` of `food`.
    pub fn add_food(&mut self, food: &Food, grams: f64) {
        let factor = food.scale(grams);
        self.calories += food.calories * factor;
        self.protein += food.protein * factor;
        self.carbs += food.carbs * factor;
        self.fat += food.fat * factor;
    }

    pub fn round(&self) -> MacroTotals {
        MacroTotals {
            calories: self.calories.round() as i64,
            protein: self.protein.round() as i64,
            carbs: self.carbs.round() as i64,
            fat: self.fat.round() as i64,
        }
    }
}
