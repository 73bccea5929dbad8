use crate::models::{FoodPortion, MacroSums, MacroTotals};

/// Sum the macros of a list of portions.
///
/// Each food's per-reference values are scaled by `grams / food.portion`,
/// accumulated in floating point and rounded once at the end. An empty list
/// yields all zeros.
pub fn compute_macros(portions: &[FoodPortion]) -> MacroTotals {
    sum_macros(portions).round()
}

/// Unrounded sums for a list of portions.
pub fn sum_macros(portions: &[FoodPortion]) -> MacroSums {
    portions.iter().fold(MacroSums::default(), |mut acc, p| {
        acc.add_food(&p.food, p.grams);
        acc
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Food;

    fn sample_food(id: &str, cal: f64, p: f64, c: f64, f: f64, portion: f64) -> Food {
        Food {
            id: id.to_string(),
            name: id.to_string(),
            calories: cal,
            protein: p,
            carbs: c,
            fat: f,
            portion,
            category: "proteínas".to_string(),
            image: None,
        }
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(compute_macros(&[]), MacroTotals::default());
    }

    #[test]
    fn test_scales_by_grams() {
        let chicken = sample_food("chicken", 165.0, 31.0, 0.0, 3.6, 100.0);
        let totals = compute_macros(&[FoodPortion::new(chicken, 130.0)]);

        // 214.5 kcal, 40.3 P, 0 C, 4.68 F
        assert_eq!(totals.calories, 215);
        assert_eq!(totals.protein, 40);
        assert_eq!(totals.carbs, 0);
        assert_eq!(totals.fat, 5);
    }

    #[test]
    fn test_uses_food_reference_portion() {
        // 50 kcal per 25 g: 100 g is four portions
        let snack = sample_food("snack", 50.0, 2.0, 5.0, 1.0, 25.0);
        let totals = compute_macros(&[FoodPortion::new(snack, 100.0)]);
        assert_eq!(totals.calories, 200);
        assert_eq!(totals.protein, 8);
    }

    #[test]
    fn test_rounds_once_at_end() {
        // Each portion alone is 0.4 kcal (rounds to 0); together 1.2 (rounds to 1)
        let crumb = sample_food("crumb", 0.4, 0.0, 0.0, 0.0, 100.0);
        let portions = vec![
            FoodPortion::new(crumb.clone(), 100.0),
            FoodPortion::new(crumb.clone(), 100.0),
            FoodPortion::new(crumb, 100.0),
        ];
        assert_eq!(compute_macros(&portions).calories, 1);
    }

    #[test]
    fn test_zero_portion_food_contributes_nothing() {
        let broken = sample_food("broken", 100.0, 10.0, 10.0, 10.0, 0.0);
        let totals = compute_macros(&[FoodPortion::new(broken, 100.0)]);
        assert_eq!(totals, MacroTotals::default());
    }
}
