use serde::{Deserialize, Serialize};

/// A storefront product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub image: String,
    pub category: String,
    pub stock: u32,
}

impl Product {
    pub fn in_stock(&self, quantity: u32) -> bool {
        self.stock >= quantity
    }
}
