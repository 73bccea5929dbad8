use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::config::StorageBackend;

/// FitNutri: fitness storefront and meal planner.
#[derive(Parser, Debug)]
#[command(name = "fitnutri")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Storage backend.
    #[arg(long, value_enum, env = "FITNUTRI_BACKEND", default_value_t = StorageBackend::File, global = true)]
    pub backend: StorageBackend,

    /// Path to the data file used by the file backend.
    #[arg(long, env = "FITNUTRI_DATA_FILE", default_value = "fitnutri.json", global = true)]
    pub data_file: PathBuf,

    /// Id of the user whose cart, orders and meals are used.
    #[arg(short, long, env = "FITNUTRI_USER", default_value = "guest", global = true)]
    pub user: String,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a breakfast/lunch/dinner menu from the food catalog.
    Menu(MenuArgs),

    /// Generate a single meal.
    Meal {
        /// Meal label; also determines the meal id.
        label: String,

        /// Calorie target.
        #[arg(long, default_value = "500")]
        calories: f64,

        /// Minimum grams of protein.
        #[arg(long, default_value = "40")]
        protein: f64,

        /// Selection seed (index into each role's food list).
        #[arg(long, default_value = "0")]
        seed: usize,

        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// List catalog foods.
    Foods {
        /// Only foods in this category.
        #[arg(long)]
        category: Option<String>,

        /// Only foods whose name contains this text.
        #[arg(long)]
        search: Option<String>,
    },

    /// List food categories.
    Categories,

    /// Import foods from a JSON or CSV file into the catalog.
    ImportFoods {
        /// File to import (.json or .csv).
        path: PathBuf,
    },

    /// List store products.
    Products {
        /// Only products in this category.
        #[arg(long)]
        category: Option<String>,
    },

    /// Show or edit the cart.
    Cart {
        #[command(subcommand)]
        action: Option<CartAction>,
    },

    /// Place an order with the current cart.
    Checkout(CheckoutArgs),

    /// Manage saved shipping addresses.
    Addresses {
        #[command(subcommand)]
        action: Option<AddressAction>,
    },

    /// Send a consultation through the contact form.
    Contact(ContactArgs),

    /// List received consultations.
    Consultations {
        /// Mark this consultation as answered.
        #[arg(long)]
        answer: Option<String>,
    },

    /// List past orders.
    Orders,

    /// Interactively compose and save a custom meal.
    Compose {
        /// Meal name.
        #[arg(long)]
        name: Option<String>,

        /// Date (YYYY-MM-DD).
        #[arg(long)]
        date: Option<String>,

        /// breakfast, lunch, dinner or snack.
        #[arg(long)]
        meal_time: Option<String>,
    },

    /// List saved custom meals.
    Meals,
}

impl Default for Command {
    fn default() -> Self {
        Command::Menu(MenuArgs::default())
    }
}

#[derive(Args, Debug, Default)]
pub struct MenuArgs {
    /// Breakfast calorie target (default 500).
    #[arg(long)]
    pub breakfast: Option<f64>,

    /// Lunch calorie target (default 600).
    #[arg(long)]
    pub lunch: Option<f64>,

    /// Dinner calorie target (default 500).
    #[arg(long)]
    pub dinner: Option<f64>,

    /// Protein floor per meal in grams (default 40).
    #[arg(long)]
    pub protein: Option<f64>,

    /// Print JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum CartAction {
    /// Show cart contents.
    Show,

    /// Add a product.
    Add {
        product_id: String,

        #[arg(short, long, default_value = "1")]
        quantity: u32,
    },

    /// Set a product's quantity (0 removes it).
    Update { product_id: String, quantity: u32 },

    /// Remove a product.
    Remove { product_id: String },

    /// Empty the cart.
    Clear,
}

#[derive(Args, Debug, Default)]
pub struct CheckoutArgs {
    /// Ship to this saved address instead of entering one.
    #[arg(long, conflicts_with_all = ["full_name", "street", "city", "postal_code", "country", "phone"])]
    pub address_id: Option<String>,

    /// Save an entered address to the address book.
    #[arg(long)]
    pub save_address: bool,

    #[command(flatten)]
    pub address: AddressArgs,
}

#[derive(Subcommand, Debug)]
pub enum AddressAction {
    /// List saved addresses.
    List,

    /// Save a new address.
    Add {
        /// Make it the default address.
        #[arg(long)]
        default: bool,

        #[command(flatten)]
        address: AddressArgs,
    },
}

/// Contact form fields; missing ones are prompted for.
#[derive(Args, Debug, Default)]
pub struct ContactArgs {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    /// nutrition, training, both or other.
    #[arg(long)]
    pub service: Option<String>,

    #[arg(long)]
    pub message: Option<String>,
}

/// Shipping address fields; missing ones are prompted for.
#[derive(Args, Debug, Default)]
pub struct AddressArgs {
    #[arg(long)]
    pub full_name: Option<String>,

    #[arg(long)]
    pub street: Option<String>,

    #[arg(long)]
    pub city: Option<String>,

    #[arg(long)]
    pub postal_code: Option<String>,

    #[arg(long)]
    pub country: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,
}

impl AddressArgs {
    /// True when no address field was given.
    pub fn is_empty(&self) -> bool {
        [
            &self.full_name,
            &self.street,
            &self.city,
            &self.postal_code,
            &self.country,
            &self.phone,
        ]
        .iter()
        .all(|field| field.is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_menu() {
        let cli = Cli::parse_from(["fitnutri"]);
        assert!(cli.command.is_none());
        assert!(matches!(Command::default(), Command::Menu(_)));
    }

    #[test]
    fn test_parse_cart_add() {
        let cli = Cli::parse_from(["fitnutri", "cart", "add", "prod_001", "-q", "3"]);
        match cli.command {
            Some(Command::Cart {
                action: Some(CartAction::Add { product_id, quantity }),
            }) => {
                assert_eq!(product_id, "prod_001");
                assert_eq!(quantity, 3);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_checkout_with_saved_address() {
        let cli = Cli::parse_from(["fitnutri", "checkout", "--address-id", "addr_0002"]);
        match cli.command {
            Some(Command::Checkout(args)) => {
                assert_eq!(args.address_id.as_deref(), Some("addr_0002"));
                assert!(args.address.is_empty());
            }
            other => panic!("unexpected command: {:?}", other),
        }

        let conflicting = Cli::try_parse_from([
            "fitnutri", "checkout", "--address-id", "addr_0002", "--city", "Madrid",
        ]);
        assert!(conflicting.is_err());
    }

    #[test]
    fn test_parse_addresses_add() {
        let cli = Cli::parse_from([
            "fitnutri", "addresses", "add", "--default", "--city", "Madrid",
        ]);
        match cli.command {
            Some(Command::Addresses {
                action: Some(AddressAction::Add { default, address }),
            }) => {
                assert!(default);
                assert_eq!(address.city.as_deref(), Some("Madrid"));
                assert!(!address.is_empty());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_meal_overrides() {
        let cli = Cli::parse_from([
            "fitnutri", "meal", "Cena", "--calories", "700", "--seed", "2",
        ]);
        match cli.command {
            Some(Command::Meal {
                label,
                calories,
                seed,
                ..
            }) => {
                assert_eq!(label, "Cena");
                assert_eq!(calories, 700.0);
                assert_eq!(seed, 2);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
