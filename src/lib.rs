pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;
pub mod state;

pub use catalog::FoodCatalog;
pub use error::{FitError, Result};
pub use models::{Food, FoodPortion, MacroTotals, Meal, Menu};
pub use planner::{compute_macros, generate_meal, generate_menu};
pub use state::Store;
