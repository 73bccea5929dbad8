pub mod prompts;
pub mod render;

pub use prompts::{
    PortionEdit, apply_portion_edit, collect_address, collect_consultation, compose_meal,
    match_foods, parse_grams, prompt_date, prompt_food, prompt_grams, prompt_meal_time,
    prompt_saved_address, prompt_service, prompt_text, prompt_yes_no,
};
pub use render::{
    display_addresses, display_cart, display_consultations, display_food_list, display_meal,
    display_menu, display_orders, display_products, display_user_meals,
};
