use log::info;

use crate::error::{FitError, Result};
use crate::models::{Address, Order, OrderItem, OrderStatus};
use crate::state::{Store, unix_now};

/// Turn a user's cart into a pending order.
///
/// Payment is simulated. Every line is checked against current product
/// stock before anything changes; on success stock is decremented, the
/// order is recorded and the cart is emptied, all in one commit.
pub fn checkout<S: Store + ?Sized>(store: &mut S, user_id: &str, address: Address) -> Result<Order> {
    let cart = store.load_cart(user_id);
    if cart.is_empty() {
        return Err(FitError::EmptyCart);
    }

    let missing = address.missing_fields();
    if !missing.is_empty() {
        return Err(FitError::InvalidInput(format!(
            "Shipping address is missing: {}",
            missing.join(", ")
        )));
    }

    let mut items = Vec::with_capacity(cart.items.len());
    for line in &cart.items {
        let product = store.product_by_id(&line.product.id)?;
        if !product.in_stock(line.quantity) {
            return Err(FitError::InsufficientStock {
                product: product.name,
                requested: line.quantity,
                available: product.stock,
            });
        }
        items.push(OrderItem {
            price: product.price,
            quantity: line.quantity,
            product,
        });
    }

    let total_price = items.iter().map(|i| i.price * i.quantity as f64).sum();
    let order = Order {
        id: store.next_order_id(),
        user_id: user_id.to_string(),
        items,
        total_price,
        shipping_address: address,
        status: OrderStatus::Pending,
        created_at: unix_now(),
    };

    let data = store.data_mut();
    for item in &order.items {
        if let Some(product) = data.products.iter_mut().find(|p| p.id == item.product.id) {
            product.stock -= item.quantity;
        }
    }
    data.carts.remove(user_id);
    data.orders.push(order.clone());
    store.commit()?;

    info!(
        "Order {} placed for {}: {} items, {:.2}",
        order.id,
        user_id,
        order.items.len(),
        order.total_price
    );
    Ok(order)
}
