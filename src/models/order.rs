use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{FitError, Result};
use crate::models::Product;

/// A product line in a user's cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

/// A user's shopping cart. Lines are unique per product id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub items: Vec<CartItem>,
}

impl Cart {
    /// Add `quantity` units, merging into an existing line for the same product.
    ///
    /// Fails without changing the cart if the merged quantity would overflow.
    pub fn add(&mut self, product: Product, quantity: u32) -> Result<()> {
        match self.items.iter_mut().find(|i| i.product.id == product.id) {
            Some(item) => {
                let current = item.quantity;
                item.quantity = current.checked_add(quantity).ok_or_else(|| {
                    FitError::InvalidInput(format!(
                        "Quantity too large for {}: {} + {}",
                        product.name, current, quantity
                    ))
                })?;
            }
            None => self.items.push(CartItem { product, quantity }),
        }
        Ok(())
    }

    /// Set the quantity of a line; anything below 1 removes it.
    ///
    /// Returns false when the product is not in the cart.
    pub fn update_quantity(&mut self, product_id: &str, quantity: u32) -> bool {
        if quantity < 1 {
            return self.remove(product_id);
        }

        match self.items.iter_mut().find(|i| i.product.id == product_id) {
            Some(item) => {
                item.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Remove a line. Returns false when the product was not in the cart.
    pub fn remove(&mut self, product_id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.product.id != product_id);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    pub fn total_price(&self) -> f64 {
        self.items
            .iter()
            .map(|i| i.product.price * i.quantity as f64)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Shipping address attached to an order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub full_name: String,
    pub street: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
    #[serde(default)]
    pub phone: String,
}

impl Address {
    /// Names of required fields that are blank. Phone is optional.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("full name", &self.full_name),
            ("street", &self.street),
            ("city", &self.city),
            ("postal code", &self.postal_code),
            ("country", &self.country),
        ]
        .into_iter()
        .filter(|(_, v)| v.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        };
        f.write_str(s)
    }
}

/// A purchased line, priced at checkout time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product: Product,
    pub quantity: u32,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub user_id: String,
    pub items: Vec<OrderItem>,
    pub total_price: f64,
    pub shipping_address: Address,
    pub status: OrderStatus,
    /// Unix timestamp in seconds.
    pub created_at: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price: f64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            description: String::new(),
            price,
            image: String::new(),
            category: "suplementos".to_string(),
            stock: 10,
        }
    }

    #[test]
    fn test_add_merges_same_product() {
        let mut cart = Cart::default();
        cart.add(product("prod_001", 29.99), 1).unwrap();
        cart.add(product("prod_001", 29.99), 2).unwrap();
        cart.add(product("prod_002", 19.99), 1).unwrap();

        assert_eq!(cart.items.len(), 2);
        assert_eq!(cart.items[0].quantity, 3);
        assert_eq!(cart.total_items(), 4);
    }

    #[test]
    fn test_add_rejects_quantity_overflow() {
        let mut cart = Cart::default();
        cart.add(product("prod_001", 29.99), u32::MAX).unwrap();
        cart.add(product("prod_002", 19.99), u32::MAX).unwrap();

        assert!(matches!(
            cart.add(product("prod_001", 29.99), 1),
            Err(FitError::InvalidInput(_))
        ));
        assert_eq!(cart.items[0].quantity, u32::MAX);
        assert_eq!(cart.total_items(), 2 * u64::from(u32::MAX));
    }

    #[test]
    fn test_update_quantity_zero_removes() {
        let mut cart = Cart::default();
        cart.add(product("prod_001", 29.99), 2).unwrap();

        assert!(cart.update_quantity("prod_001", 5));
        assert_eq!(cart.items[0].quantity, 5);

        assert!(cart.update_quantity("prod_001", 0));
        assert!(cart.is_empty());

        assert!(!cart.update_quantity("prod_404", 3));
    }

    #[test]
    fn test_total_price() {
        let mut cart = Cart::default();
        cart.add(product("prod_001", 10.0), 2).unwrap();
        cart.add(product("prod_002", 2.5), 4).unwrap();
        assert!((cart.total_price() - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_address_missing_fields() {
        let address = Address {
            full_name: "Ana García".to_string(),
            street: "Calle Mayor 1".to_string(),
            city: "  ".to_string(),
            postal_code: "28001".to_string(),
            country: String::new(),
            phone: String::new(),
        };
        assert_eq!(address.missing_fields(), vec!["city", "country"]);
    }
}
