use log::debug;

use crate::models::{Food, FoodPortion, MacroSums, MacroTotals, Meal, Menu};
use crate::planner::constants::*;

/// Catalog foods grouped by the role they can play in a generated meal.
///
/// Catalog order is preserved inside each bucket, which is what makes
/// seed-indexed selection reproducible.
#[derive(Debug, Default)]
pub struct RoleBuckets<'a> {
    pub protein: Vec<&'a Food>,
    pub carbs: Vec<&'a Food>,
    pub produce: Vec<&'a Food>,
    pub fats: Vec<&'a Food>,
}

impl<'a> RoleBuckets<'a> {
    /// Split a catalog by category. Unrecognized categories are dropped.
    pub fn partition(catalog: &'a [Food]) -> Self {
        let mut buckets = RoleBuckets::default();
        for food in catalog {
            if food.in_category(CATEGORY_PROTEIN) {
                buckets.protein.push(food);
            } else if food.in_category(CATEGORY_CARBS) {
                buckets.carbs.push(food);
            } else if food.in_category(CATEGORY_VEGETABLES) || food.in_category(CATEGORY_FRUITS) {
                buckets.produce.push(food);
            } else if food.in_category(CATEGORY_FATS) {
                buckets.fats.push(food);
            }
        }
        buckets
    }
}

/// Target parameters for one generated meal.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuSlot {
    pub label: String,
    pub target_calories: f64,
    pub min_protein: f64,
    pub seed: usize,
}

impl MenuSlot {
    pub fn new(label: &str, target_calories: f64, min_protein: f64, seed: usize) -> Self {
        Self {
            label: label.to_string(),
            target_calories,
            min_protein,
            seed,
        }
    }

    /// Breakfast, lunch and dinner with the standard targets and seeds 0, 1, 2.
    pub fn defaults() -> [MenuSlot; 3] {
        [
            MenuSlot::new(BREAKFAST_LABEL, BREAKFAST_CALORIES, DEFAULT_MIN_PROTEIN, 0),
            MenuSlot::new(LUNCH_LABEL, LUNCH_CALORIES, DEFAULT_MIN_PROTEIN, 1),
            MenuSlot::new(DINNER_LABEL, DINNER_CALORIES, DEFAULT_MIN_PROTEIN, 2),
        ]
    }
}

/// Deterministic id for a generated meal: `meal_` + lowercase label,
/// whitespace runs collapsed to `_`.
pub fn meal_id(label: &str) -> String {
    let slug = label
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_");
    format!("{}{}", MEAL_ID_PREFIX, slug)
}

/// Portions chosen so far plus their unrounded running totals.
struct MealBuilder<'l> {
    label: &'l str,
    portions: Vec<FoodPortion>,
    running: MacroSums,
}

impl<'l> MealBuilder<'l> {
    fn new(label: &'l str) -> Self {
        Self {
            label,
            portions: Vec::new(),
            running: MacroSums::default(),
        }
    }

    fn add(&mut self, food: &Food, grams: f64, role: &str) {
        debug!("{}: {} {}g of {}", self.label, role, grams, food.debug_string());
        self.running.add_food(food, grams);
        self.portions.push(FoodPortion::new(food.clone(), grams));
    }

    fn remaining(&self, target_calories: f64) -> f64 {
        target_calories - self.running.calories
    }
}

/// Index-based pick: `bucket[seed % len]`.
fn pick<'a>(bucket: &[&'a Food], seed: usize) -> Option<&'a Food> {
    if bucket.is_empty() {
        None
    } else {
        Some(bucket[seed % bucket.len()])
    }
}

/// Round a raw gram amount up, rejecting non-finite or non-positive results.
fn ceil_grams(raw: f64) -> Option<f64> {
    let grams = raw.ceil();
    if grams.is_finite() && grams > 0.0 {
        Some(grams)
    } else {
        None
    }
}

/// Grams of the anchor food needed to reach the protein floor.
///
/// None when the floor asks for nothing (zero or negative).
fn protein_grams(food: &Food, min_protein: f64) -> Option<f64> {
    if food.protein <= 0.0 {
        return None;
    }
    ceil_grams(min_protein / food.protein * food.portion)
}

/// Grams of the carbohydrate food covering its share of the remaining budget.
fn carb_grams(food: &Food, remaining_calories: f64) -> Option<f64> {
    if food.calories <= 0.0 {
        return None;
    }
    ceil_grams(remaining_calories / food.calories * food.portion * CARB_BUDGET_SHARE)
}

/// Grams of the fat food filling the remaining budget, capped at FAT_MAX_GRAMS.
fn fat_grams(food: &Food, remaining_calories: f64) -> Option<f64> {
    if food.calories <= 0.0 {
        return None;
    }
    ceil_grams(remaining_calories / food.calories * food.portion).map(|g| g.min(FAT_MAX_GRAMS))
}

/// Generate one meal aimed at `target_calories` with at least `min_protein`
/// grams of protein.
///
/// Greedy fill, one food per role:
/// 1. Protein anchor sized to the protein floor (no usable protein food,
///    no meal; a floor of zero adds no anchor portion)
/// 2. Carbohydrate sized to 70% of the remaining calories
/// 3. One reference portion of produce
/// 4. Fat, only while below 90% of target, at most 30 g
///
/// Foods are chosen as `bucket[seed % len]`, never sampled, so the same
/// catalog and seed always produce the same meal. Missing roles are skipped.
pub fn generate_meal(
    label: &str,
    target_calories: f64,
    min_protein: f64,
    catalog: &[Food],
    seed: usize,
) -> Meal {
    let id = meal_id(label);
    let buckets = RoleBuckets::partition(catalog);

    let Some(protein_food) = pick(&buckets.protein, seed).filter(|f| f.protein > 0.0) else {
        debug!("{}: no usable protein food, returning empty meal", label);
        return Meal::new(id, label.to_string(), Vec::new());
    };

    let mut meal = MealBuilder::new(label);
    match protein_grams(protein_food, min_protein) {
        Some(grams) => meal.add(protein_food, grams, "protein"),
        None => debug!("{}: protein floor {} needs no anchor portion", label, min_protein),
    }

    if let Some(food) = pick(&buckets.carbs, seed) {
        match carb_grams(food, meal.remaining(target_calories)) {
            Some(grams) => meal.add(food, grams, "carbs"),
            None => debug!("{}: no calorie budget left for {}", label, food.name),
        }
    }

    if let Some(food) = pick(&buckets.produce, seed) {
        meal.add(food, food.portion, "produce");
    }

    if meal.running.calories < target_calories * FAT_TRIGGER_RATIO {
        if let Some(food) = pick(&buckets.fats, seed) {
            if let Some(grams) = fat_grams(food, meal.remaining(target_calories)) {
                meal.add(food, grams, "fat");
            }
        }
    }

    Meal::new(id, label.to_string(), meal.portions)
}

/// Generate a menu from explicit slots.
///
/// Totals are the elementwise sum of the meals' stored totals.
pub fn generate_menu_with(catalog: &[Food], slots: &[MenuSlot; 3]) -> Menu {
    let meals = slots.clone().map(|slot| {
        generate_meal(
            &slot.label,
            slot.target_calories,
            slot.min_protein,
            catalog,
            slot.seed,
        )
    });

    let totals = meals
        .iter()
        .fold(MacroTotals::default(), |acc, meal| acc + meal.totals);

    let id = format!(
        "{}_{}_{}_{}",
        MENU_ID_PREFIX, meals[0].id, meals[1].id, meals[2].id
    );

    Menu {
        id,
        name: MENU_NAME.to_string(),
        meals,
        totals,
    }
}

/// Generate the standard breakfast/lunch/dinner menu.
pub fn generate_menu(catalog: &[Food]) -> Menu {
    generate_menu_with(catalog, &MenuSlot::defaults())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food(id: &str, category: &str, cal: f64, p: f64, c: f64, f: f64) -> Food {
        Food {
            id: id.to_string(),
            name: id.to_string(),
            calories: cal,
            protein: p,
            carbs: c,
            fat: f,
            portion: 100.0,
            category: category.to_string(),
            image: None,
        }
    }

    #[test]
    fn test_partition_case_insensitive() {
        let catalog = vec![
            food("a", "Proteínas", 100.0, 20.0, 0.0, 1.0),
            food("b", "CARBOHIDRATOS", 100.0, 2.0, 20.0, 1.0),
            food("c", "verduras", 20.0, 1.0, 4.0, 0.0),
            food("d", "Frutas", 50.0, 0.5, 12.0, 0.2),
            food("e", "grasas", 880.0, 0.0, 0.0, 100.0),
            food("f", "lácteos", 60.0, 3.0, 5.0, 3.0),
        ];
        let buckets = RoleBuckets::partition(&catalog);
        assert_eq!(buckets.protein.len(), 1);
        assert_eq!(buckets.carbs.len(), 1);
        assert_eq!(buckets.produce.len(), 2);
        assert_eq!(buckets.fats.len(), 1);
    }

    #[test]
    fn test_pick_wraps_seed() {
        let a = food("a", "proteínas", 100.0, 20.0, 0.0, 1.0);
        let b = food("b", "proteínas", 100.0, 20.0, 0.0, 1.0);
        let bucket = vec![&a, &b];
        assert_eq!(pick(&bucket, 0).unwrap().id, "a");
        assert_eq!(pick(&bucket, 1).unwrap().id, "b");
        assert_eq!(pick(&bucket, 2).unwrap().id, "a");
        assert!(pick(&[], 3).is_none());
    }

    #[test]
    fn test_meal_id_slug() {
        assert_eq!(meal_id("Desayuno"), "meal_desayuno");
        assert_eq!(meal_id("Late  Night Snack"), "meal_late_night_snack");
    }

    #[test]
    fn test_zero_protein_floor_still_fills_other_roles() {
        let catalog = vec![
            food("chicken", "proteínas", 165.0, 31.0, 0.0, 3.6),
            food("rice", "carbohidratos", 130.0, 2.7, 28.0, 0.3),
        ];
        let meal = generate_meal("Cena", 500.0, 0.0, &catalog, 0);

        assert_eq!(meal.portions.len(), 1);
        assert_eq!(meal.portions[0].food.id, "rice");
        // 500 / 130 * 100 * 0.7 = 269.2
        assert_eq!(meal.portions[0].grams, 270.0);
        assert_eq!(meal.totals.calories, 351);
    }

    #[test]
    fn test_zero_protein_anchor_yields_empty_meal() {
        let catalog = vec![
            food("gel", "proteínas", 100.0, 0.0, 25.0, 0.0),
            food("rice", "carbohidratos", 130.0, 2.7, 28.0, 0.3),
        ];
        let meal = generate_meal("Cena", 500.0, 40.0, &catalog, 0);
        assert!(meal.is_empty());
        assert_eq!(meal.totals.calories, 0);
    }

    #[test]
    fn test_carbs_skipped_without_budget() {
        // 40 g protein from a 400 kcal/100 g source = 500 kcal, already over target
        let catalog = vec![
            food("dense", "proteínas", 400.0, 32.0, 0.0, 30.0),
            food("rice", "carbohidratos", 130.0, 2.7, 28.0, 0.3),
        ];
        let meal = generate_meal("Desayuno", 300.0, 40.0, &catalog, 0);
        assert_eq!(meal.portions.len(), 1);
        assert_eq!(meal.portions[0].food.id, "dense");
    }

    #[test]
    fn test_fat_skipped_when_near_target() {
        let catalog = vec![
            food("chicken", "proteínas", 165.0, 31.0, 0.0, 3.6),
            food("rice", "carbohidratos", 130.0, 2.7, 28.0, 0.3),
            food("olive_oil", "grasas", 884.0, 0.0, 0.0, 100.0),
        ];
        // 130 g chicken = 214.5 kcal, well above 90% of a 200 kcal target
        let meal = generate_meal("Snack", 200.0, 40.0, &catalog, 0);
        assert!(meal.portions.iter().all(|p| p.food.id != "olive_oil"));
    }
}
