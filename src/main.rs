use clap::Parser;
use log::{debug, info};

use fitnutri::catalog::FoodCatalog;
use fitnutri::cli::{
    AddressAction, AddressArgs, CartAction, CheckoutArgs, Cli, Command, ContactArgs, MenuArgs,
};
use fitnutri::config::{APP_DESCRIPTION, APP_NAME, AppConfig};
use fitnutri::error::{FitError, Result};
use fitnutri::interface::{
    collect_address, collect_consultation, compose_meal, display_addresses, display_cart,
    display_consultations, display_food_list, display_meal, display_menu, display_orders,
    display_products, display_user_meals, prompt_date, prompt_meal_time, prompt_saved_address,
    prompt_text, prompt_yes_no,
};
use fitnutri::models::{Address, MealTime};
use fitnutri::planner::{MealComposer, MenuSlot, generate_meal, generate_menu_with, validate_date};
use fitnutri::state::{Store, checkout, load_foods, open_store, unix_now};

fn main() {
    dotenv::dotenv().ok();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::from_cli(&cli);

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.log_filter()))
        .init();
    debug!("Configuration: {:?}", config);

    if config.user_id.is_empty() {
        return Err(FitError::InvalidInput("User id must not be empty".to_string()));
    }

    let mut store = open_store(&config)?;
    let store = store.as_mut();
    let user = config.user_id.as_str();

    match cli.command.unwrap_or_default() {
        Command::Menu(args) => cmd_menu(store, args),
        Command::Meal {
            label,
            calories,
            protein,
            seed,
            json,
        } => cmd_meal(store, &label, calories, protein, seed, json),
        Command::Foods { category, search } => cmd_foods(store, category, search),
        Command::Categories => cmd_categories(store),
        Command::ImportFoods { path } => cmd_import_foods(store, &path),
        Command::Products { category } => cmd_products(store, category),
        Command::Cart { action } => cmd_cart(store, user, action.unwrap_or(CartAction::Show)),
        Command::Checkout(args) => cmd_checkout(store, user, args),
        Command::Addresses { action } => {
            cmd_addresses(store, user, action.unwrap_or(AddressAction::List))
        }
        Command::Contact(args) => cmd_contact(store, args),
        Command::Consultations { answer } => cmd_consultations(store, answer),
        Command::Orders => {
            display_orders(&store.list_orders(user));
            Ok(())
        }
        Command::Compose {
            name,
            date,
            meal_time,
        } => cmd_compose(store, user, name, date, meal_time),
        Command::Meals => {
            display_user_meals(&store.list_user_meals(user));
            Ok(())
        }
    }
}

/// Generate a menu, optionally overriding slot targets.
fn cmd_menu(store: &mut dyn Store, args: MenuArgs) -> Result<()> {
    let foods = store.list_foods()?;
    info!("Generating menu from {} foods", foods.len());

    let mut slots = MenuSlot::defaults();
    let overrides = [args.breakfast, args.lunch, args.dinner];
    for (slot, calories) in slots.iter_mut().zip(overrides) {
        if let Some(calories) = calories {
            slot.target_calories = calories;
        }
        if let Some(protein) = args.protein {
            slot.min_protein = protein;
        }
    }

    let menu = generate_menu_with(&foods, &slots);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&menu)?);
    } else {
        println!("{} - {}", APP_NAME, APP_DESCRIPTION);
        display_menu(&menu);
    }
    Ok(())
}

/// Generate a single meal.
fn cmd_meal(
    store: &mut dyn Store,
    label: &str,
    calories: f64,
    protein: f64,
    seed: usize,
    json: bool,
) -> Result<()> {
    let foods = store.list_foods()?;
    let meal = generate_meal(label, calories, protein, &foods, seed);

    if json {
        println!("{}", serde_json::to_string_pretty(&meal)?);
    } else {
        println!();
        display_meal(&meal);
        println!();
    }
    Ok(())
}

/// List foods, optionally filtered.
fn cmd_foods(store: &mut dyn Store, category: Option<String>, search: Option<String>) -> Result<()> {
    let foods = match (&category, search) {
        (Some(category), Some(term)) => {
            let term = term.to_lowercase();
            let mut foods = store.foods_by_category(category)?;
            foods.retain(|f| f.name.to_lowercase().contains(&term));
            foods
        }
        (Some(category), None) => store.foods_by_category(category)?,
        (None, Some(term)) => store.search_foods(&term)?,
        (None, None) => store.list_foods()?,
    };

    let title = category.unwrap_or_else(|| "Foods".to_string());
    display_food_list(&foods, &title);
    Ok(())
}

fn cmd_categories(store: &mut dyn Store) -> Result<()> {
    let categories = store.food_categories()?;
    if categories.is_empty() {
        println!("No food categories.");
    }
    for category in categories {
        println!("  {}", category);
    }
    Ok(())
}

/// Merge foods from a JSON or CSV file into the catalog.
fn cmd_import_foods(store: &mut dyn Store, path: &std::path::Path) -> Result<()> {
    if !path.exists() {
        return Err(FitError::InvalidInput(format!(
            "File not found: {}",
            path.display()
        )));
    }

    let foods = load_foods(path)?;
    let total = foods.len();
    let added = store.import_foods(foods)?;
    println!(
        "Imported {} foods ({} new, {} updated).",
        total,
        added,
        total - added
    );
    Ok(())
}

fn cmd_products(store: &mut dyn Store, category: Option<String>) -> Result<()> {
    let products = match category {
        Some(category) => store.products_by_category(&category),
        None => store.list_products(),
    };
    display_products(&products);
    Ok(())
}

/// Show or modify the user's cart.
fn cmd_cart(store: &mut dyn Store, user: &str, action: CartAction) -> Result<()> {
    let mut cart = store.load_cart(user);

    match action {
        CartAction::Show => {
            display_cart(&cart);
            return Ok(());
        }
        CartAction::Add {
            product_id,
            quantity,
        } => {
            if quantity == 0 {
                return Err(FitError::InvalidInput(
                    "Quantity must be at least 1".to_string(),
                ));
            }
            let product = store.product_by_id(&product_id)?;
            let name = product.name.clone();
            cart.add(product, quantity)?;
            println!("Added {} x{} to your cart.", name, quantity);
        }
        CartAction::Update {
            product_id,
            quantity,
        } => {
            if !cart.update_quantity(&product_id, quantity) {
                return Err(FitError::ProductNotFound(product_id));
            }
        }
        CartAction::Remove { product_id } => {
            if !cart.remove(&product_id) {
                return Err(FitError::ProductNotFound(product_id));
            }
            println!("Removed {} from your cart.", product_id);
        }
        CartAction::Clear => {
            cart.clear();
            println!("Cart cleared.");
        }
    }

    store.save_cart(user, cart.clone())?;
    display_cart(&cart);
    Ok(())
}

/// Place an order for the user's cart.
fn cmd_checkout(store: &mut dyn Store, user: &str, args: CheckoutArgs) -> Result<()> {
    let cart = store.load_cart(user);
    if cart.is_empty() {
        println!("Your cart is empty.");
        return Ok(());
    }

    display_cart(&cart);
    let (address, entered) = choose_shipping_address(store, user, args.address_id, args.address)?;

    if !prompt_yes_no("Place order?", true)? {
        println!("Order cancelled.");
        return Ok(());
    }

    let order = checkout(store, user, address.clone())?;
    println!(
        "Order {} placed: {} items, {:.2} €. Payment simulated.",
        order.id,
        order.items.iter().map(|i| u64::from(i.quantity)).sum::<u64>(),
        order.total_price
    );

    if entered && (args.save_address || prompt_yes_no("Save this address for next time?", false)?) {
        let saved = store.add_address(user, address, false)?;
        println!("Address saved as {}.", saved.id);
    }
    Ok(())
}

/// Resolve the shipping address from a saved id, the address book or new input.
///
/// The flag is true when the address was newly entered.
fn choose_shipping_address(
    store: &dyn Store,
    user: &str,
    address_id: Option<String>,
    args: AddressArgs,
) -> Result<(Address, bool)> {
    if let Some(id) = address_id {
        return Ok((store.address_by_id(user, &id)?.address, false));
    }

    if args.is_empty() {
        let saved = store.list_addresses(user);
        if !saved.is_empty() {
            if let Some(address) = prompt_saved_address(&saved)? {
                return Ok((address, false));
            }
        }
    }

    Ok((collect_address(args)?, true))
}

fn cmd_addresses(store: &mut dyn Store, user: &str, action: AddressAction) -> Result<()> {
    match action {
        AddressAction::List => display_addresses(&store.list_addresses(user)),
        AddressAction::Add { default, address } => {
            let address = collect_address(address)?;
            let saved = store.add_address(user, address, default)?;
            println!(
                "Saved address {}{}.",
                saved.id,
                if saved.is_default { " (default)" } else { "" }
            );
        }
    }
    Ok(())
}

/// Send a consultation through the contact form.
fn cmd_contact(store: &mut dyn Store, args: ContactArgs) -> Result<()> {
    let consultation = collect_consultation(args, store.next_consultation_id(), unix_now())?;
    let id = consultation.id.clone();
    store.add_consultation(consultation)?;
    println!("Message sent ({}). We will contact you soon.", id);
    Ok(())
}

fn cmd_consultations(store: &mut dyn Store, answer: Option<String>) -> Result<()> {
    if let Some(id) = answer {
        store.answer_consultation(&id)?;
        println!("Marked {} as answered.", id);
    }
    display_consultations(&store.list_consultations());
    Ok(())
}

/// Compose a custom meal interactively and save it.
fn cmd_compose(
    store: &mut dyn Store,
    user: &str,
    name: Option<String>,
    date: Option<String>,
    meal_time: Option<String>,
) -> Result<()> {
    let foods = store.list_foods()?;
    if foods.is_empty() {
        println!("The food catalog is empty. Use 'import-foods' first.");
        return Ok(());
    }

    let name = match name {
        Some(name) => name,
        None => prompt_text("Meal name", None)?,
    };
    let date = match date {
        Some(date) => {
            validate_date(&date)?;
            date
        }
        None => prompt_date()?,
    };
    let meal_time = match meal_time {
        Some(meal_time) => meal_time.parse::<MealTime>()?,
        None => prompt_meal_time()?,
    };

    let mut composer = MealComposer::new(&name);
    compose_meal(&foods, &mut composer)?;

    if composer.is_empty() {
        println!("No foods added; nothing saved.");
        return Ok(());
    }

    let sequence = store.list_user_meals(user).len() + 1;
    let meal = composer.finish(user, &date, meal_time, sequence)?;

    if prompt_yes_no("Save this meal?", true)? {
        let summary = format!("{} ({} kcal)", meal.name, meal.totals.calories);
        store.add_user_meal(meal)?;
        println!("Saved {}.", summary);
    }
    Ok(())
}
