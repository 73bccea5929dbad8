use crate::models::{
    Cart, Consultation, Food, FoodPortion, MacroTotals, Meal, Menu, Order, Product, SavedAddress,
    UserMeal,
};

fn totals_line(totals: &MacroTotals) -> String {
    format!(
        "{} kcal | P {}g | C {}g | F {}g",
        totals.calories, totals.protein, totals.carbs, totals.fat
    )
}

fn display_portions(portions: &[FoodPortion]) {
    let max_name_len = portions
        .iter()
        .map(|p| p.food.name.chars().count())
        .max()
        .unwrap_or(10);

    for portion in portions {
        println!(
            "    {:<width$}  {:>5.0} g  [{}]",
            portion.food.name,
            portion.grams,
            portion.food.category,
            width = max_name_len
        );
    }
}

/// Display one generated meal.
pub fn display_meal(meal: &Meal) {
    println!("  {} ({})", meal.name, meal.id);
    if meal.is_empty() {
        println!("    (no foods: the catalog has no usable protein source)");
    } else {
        display_portions(&meal.portions);
    }
    println!("    = {}", totals_line(&meal.totals));
}

/// Display a full menu with its grand totals.
pub fn display_menu(menu: &Menu) {
    println!();
    println!("=== {} ===", menu.name);
    println!();

    for meal in &menu.meals {
        display_meal(meal);
        println!();
    }

    println!("--- Totals ---");
    println!("{}", totals_line(&menu.totals));
    println!();
}

/// Display a list of foods.
pub fn display_food_list(foods: &[Food], title: &str) {
    if foods.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, foods.len());
    println!();

    for food in foods {
        println!(
            "  {:<10} {} - {} kcal, P:{} C:{} F:{} per {}g [{}]",
            food.id,
            food.name,
            food.calories,
            food.protein,
            food.carbs,
            food.fat,
            food.portion,
            food.category
        );
    }

    println!();
}

/// Display store products.
pub fn display_products(products: &[Product]) {
    if products.is_empty() {
        println!("No products found.");
        return;
    }

    println!();
    println!("=== Products ({} items) ===", products.len());
    println!();

    for product in products {
        println!(
            "  {:<10} {} - {:.2} € ({} in stock) [{}]",
            product.id, product.name, product.price, product.stock, product.category
        );
    }

    println!();
}

/// Display a cart with item and price totals.
pub fn display_cart(cart: &Cart) {
    if cart.is_empty() {
        println!("Your cart is empty.");
        return;
    }

    println!();
    println!("=== Cart ===");
    println!();

    for item in &cart.items {
        println!(
            "  {:<10} {} x{} @ {:.2} € = {:.2} €",
            item.product.id,
            item.product.name,
            item.quantity,
            item.product.price,
            item.product.price * item.quantity as f64
        );
    }

    println!();
    println!("Items: {}", cart.total_items());
    println!("Total: {:.2} €", cart.total_price());
    println!();
}

/// Display a user's orders.
pub fn display_orders(orders: &[Order]) {
    if orders.is_empty() {
        println!("No orders yet.");
        return;
    }

    println!();
    for order in orders {
        println!(
            "{} [{}] {:.2} € -> {}, {}",
            order.id,
            order.status,
            order.total_price,
            order.shipping_address.full_name,
            order.shipping_address.city
        );
        for item in &order.items {
            println!(
                "    {} x{} @ {:.2} €",
                item.product.name, item.quantity, item.price
            );
        }
    }
    println!();
}

/// Display a user's saved meals.
pub fn display_user_meals(meals: &[UserMeal]) {
    if meals.is_empty() {
        println!("No saved meals.");
        return;
    }

    println!();
    for meal in meals {
        println!("{} {} - {} ({})", meal.date, meal.meal_time, meal.name, meal.id);
        display_portions(&meal.portions);
        println!("    = {}", totals_line(&meal.totals));
        println!();
    }
}

/// Display a user's address book; the default address is starred.
pub fn display_addresses(addresses: &[SavedAddress]) {
    if addresses.is_empty() {
        println!("No saved addresses.");
        return;
    }

    println!();
    for saved in addresses {
        let a = &saved.address;
        println!(
            "{} {:<10} {}, {}, {} {}, {}",
            if saved.is_default { "*" } else { " " },
            saved.id,
            a.full_name,
            a.street,
            a.postal_code,
            a.city,
            a.country
        );
    }
    println!();
}

/// Display received consultations.
pub fn display_consultations(consultations: &[Consultation]) {
    if consultations.is_empty() {
        println!("No consultations.");
        return;
    }

    println!();
    for c in consultations {
        println!(
            "{} [{}] {} <{}> - {}",
            c.id,
            c.status,
            c.name,
            c.email,
            c.service.label()
        );
        println!("    {}", c.message);
    }
    println!();
}
