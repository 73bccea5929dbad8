mod contact;
mod food;
mod macros;
mod meal;
mod order;
mod product;

pub use contact::{Consultation, ConsultationService, ConsultationStatus, SavedAddress};
pub use food::{Food, FoodPortion};
pub use macros::{MacroSums, MacroTotals};
pub use meal::{Meal, MealTime, Menu, UserMeal};
pub use order::{Address, Cart, CartItem, Order, OrderItem, OrderStatus};
pub use product::Product;
