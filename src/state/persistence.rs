use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::catalog::{demo_foods, demo_products};
use crate::error::{FitError, Result};
use crate::models::{Cart, Consultation, Food, Order, Product, SavedAddress, UserMeal};

/// Everything a store persists, as one JSON document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreData {
    pub foods: Vec<Food>,
    pub products: Vec<Product>,
    #[serde(default)]
    pub carts: BTreeMap<String, Cart>,
    #[serde(default)]
    pub orders: Vec<Order>,
    #[serde(default)]
    pub user_meals: Vec<UserMeal>,
    #[serde(default)]
    pub addresses: Vec<SavedAddress>,
    #[serde(default)]
    pub consultations: Vec<Consultation>,
}

impl StoreData {
    /// Demo foods and products, no user state.
    pub fn seeded() -> Self {
        Self {
            foods: demo_foods(),
            products: demo_products(),
            ..Default::default()
        }
    }
}

/// Load a store document from a JSON file.
pub fn load_data<P: AsRef<Path>>(path: P) -> Result<StoreData> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Save a store document to a JSON file.
pub fn save_data<P: AsRef<Path>>(path: P, data: &StoreData) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    fs::write(path, json)?;
    Ok(())
}

/// Deduplicate by id. Later entries replace earlier ones but keep the
/// earlier position, so catalog order stays stable.
pub fn dedup_foods(foods: Vec<Food>) -> Vec<Food> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut out: Vec<Food> = Vec::with_capacity(foods.len());
    for food in foods {
        match index.get(&food.id) {
            Some(&i) => out[i] = food,
            None => {
                index.insert(food.id.clone(), out.len());
                out.push(food);
            }
        }
    }
    out
}

/// Load foods from a JSON array.
pub fn load_foods_json<P: AsRef<Path>>(path: P) -> Result<Vec<Food>> {
    let content = fs::read_to_string(path)?;
    let foods: Vec<Food> = serde_json::from_str(&content)?;
    Ok(dedup_foods(foods))
}

/// Load foods from a CSV file with a header row:
/// `id,name,calories,protein,carbs,fat,portion,category[,image]`.
pub fn load_foods_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Food>> {
    let mut rdr = csv::Reader::from_path(path)?;
    let mut foods = Vec::new();
    for record in rdr.deserialize() {
        let food: Food = record?;
        foods.push(food);
    }
    Ok(dedup_foods(foods))
}

/// Load foods, choosing the format by file extension.
///
/// Invalid foods (negative macros, non-positive portion) are skipped.
pub fn load_foods<P: AsRef<Path>>(path: P) -> Result<Vec<Food>> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());

    let foods = match ext.as_deref() {
        Some("json") => load_foods_json(path)?,
        Some("csv") => load_foods_csv(path)?,
        _ => {
            return Err(FitError::InvalidInput(format!(
                "Unsupported food file (expected .json or .csv): {}",
                path.display()
            )));
        }
    };

    let total = foods.len();
    let valid: Vec<Food> = foods
        .into_iter()
        .filter(|f| {
            let ok = f.is_valid();
            if !ok {
                warn!("Skipping invalid food: {}", f.debug_string());
            }
            ok
        })
        .collect();

    info!("Loaded {} of {} foods from {}", valid.len(), total, path.display());
    Ok(valid)
}
