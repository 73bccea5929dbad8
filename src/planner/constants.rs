// ─────────────────────────────────────────────────────────────────────────────
// Role categories (compared case-insensitively)
// ─────────────────────────────────────────────────────────────────────────────

pub const CATEGORY_PROTEIN: &str = "proteínas";
pub const CATEGORY_CARBS: &str = "carbohidratos";
pub const CATEGORY_VEGETABLES: &str = "verduras";
pub const CATEGORY_FRUITS: &str = "frutas";
pub const CATEGORY_FATS: &str = "grasas";

// ─────────────────────────────────────────────────────────────────────────────
// Meal generation
// ─────────────────────────────────────────────────────────────────────────────

/// Share of the remaining calorie budget given to the carbohydrate portion.
pub const CARB_BUDGET_SHARE: f64 = 0.7;

/// The fat portion is only added while calories are below this share of target.
pub const FAT_TRIGGER_RATIO: f64 = 0.9;

/// Upper bound for the fat portion, in grams.
pub const FAT_MAX_GRAMS: f64 = 30.0;

/// Prefix for generated meal ids.
pub const MEAL_ID_PREFIX: &str = "meal_";

/// Prefix for generated menu ids.
pub const MENU_ID_PREFIX: &str = "menu";

// ─────────────────────────────────────────────────────────────────────────────
// Menu slots
// ─────────────────────────────────────────────────────────────────────────────

pub const MENU_NAME: &str = "Menú Personalizado";

pub const BREAKFAST_LABEL: &str = "Desayuno";
pub const BREAKFAST_CALORIES: f64 = 500.0;

pub const LUNCH_LABEL: &str = "Almuerzo";
pub const LUNCH_CALORIES: f64 = 600.0;

pub const DINNER_LABEL: &str = "Cena";
pub const DINNER_CALORIES: f64 = 500.0;

/// Protein floor shared by all three default slots.
pub const DEFAULT_MIN_PROTEIN: f64 = 40.0;

// ─────────────────────────────────────────────────────────────────────────────
// Custom meals
// ─────────────────────────────────────────────────────────────────────────────

/// Grams added per pick in the interactive composer.
pub const DEFAULT_ADD_GRAMS: f64 = 100.0;
