use assert_float_eq::assert_float_absolute_eq;

use fitnutri::models::{Food, FoodPortion, MacroTotals};
use fitnutri::planner::{compute_macros, sum_macros};

fn make_food(id: &str, cal: f64, p: f64, c: f64, f: f64, portion: f64) -> Food {
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
fn test_empty_portions_are_zero() {
    assert_eq!(
        compute_macros(&[]),
        MacroTotals {
            calories: 0,
            protein: 0,
            carbs: 0,
            fat: 0
        }
    );
}

#[test]
fn test_scale_linearity() {
    let foods = [
        make_food("chicken", 165.0, 31.0, 0.0, 3.6, 100.0),
        make_food("rice", 130.0, 2.7, 28.0, 0.3, 100.0),
        make_food("egg", 155.0, 13.0, 1.1, 11.0, 100.0),
    ];

    for food in foods {
        let single = compute_macros(&[FoodPortion::new(food.clone(), 100.0)]);
        let double = compute_macros(&[FoodPortion::new(food, 200.0)]);

        assert!((double.calories - 2 * single.calories).abs() <= 1);
        assert!((double.protein - 2 * single.protein).abs() <= 1);
        assert!((double.carbs - 2 * single.carbs).abs() <= 1);
        assert!((double.fat - 2 * single.fat).abs() <= 1);
    }
}

#[test]
fn test_portion_divisor_comes_from_food() {
    // Same food described per 100 g and per 50 g
    let per_100 = make_food("a", 200.0, 20.0, 10.0, 8.0, 100.0);
    let per_50 = make_food("b", 100.0, 10.0, 5.0, 4.0, 50.0);

    let a = compute_macros(&[FoodPortion::new(per_100, 150.0)]);
    let b = compute_macros(&[FoodPortion::new(per_50, 150.0)]);
    assert_eq!(a, b);
}

#[test]
fn test_sums_are_unrounded() {
    let chicken = make_food("chicken", 165.0, 31.0, 0.0, 3.6, 100.0);
    let rice = make_food("rice", 130.0, 2.7, 28.0, 0.3, 100.0);
    let sums = sum_macros(&[
        FoodPortion::new(chicken, 130.0),
        FoodPortion::new(rice, 154.0),
    ]);

    assert_float_absolute_eq!(sums.calories, 414.7, 1e-9);
    assert_float_absolute_eq!(sums.protein, 44.458, 1e-9);
    assert_float_absolute_eq!(sums.carbs, 43.12, 1e-9);
    assert_float_absolute_eq!(sums.fat, 5.142, 1e-9);
}
