pub mod calculations;
pub mod composer;
pub mod constants;
pub mod generator;

pub use calculations::{compute_macros, sum_macros};
pub use composer::{MealComposer, user_meal_id, validate_date};
pub use constants::*;
pub use generator::{
    MenuSlot, RoleBuckets, generate_meal, generate_menu, generate_menu_with, meal_id,
};
