use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use log::{debug, info};

use crate::catalog::FoodCatalog;
use crate::config::{AppConfig, StorageBackend};
use crate::error::{FitError, Result};
use crate::models::{
    Address, Cart, Consultation, ConsultationStatus, Food, Order, Product, SavedAddress, UserMeal,
};
use crate::state::persistence::{StoreData, load_data, save_data};

/// Current unix time in seconds, 0 if the clock is before the epoch.
pub fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Persistence for the storefront and saved meals.
///
/// Backends only provide access to a [`StoreData`] document and a `commit`
/// step; every operation is written once against that document.
pub trait Store: FoodCatalog {
    fn data(&self) -> &StoreData;

    fn data_mut(&mut self) -> &mut StoreData;

    /// Make pending changes durable.
    fn commit(&mut self) -> Result<()>;

    /// Merge foods into the catalog by id: existing ids are replaced in
    /// place, new ids are appended. Returns the number of new foods.
    fn import_foods(&mut self, foods: Vec<Food>) -> Result<usize> {
        let catalog = &mut self.data_mut().foods;
        let mut added = 0;
        for food in foods {
            match catalog.iter_mut().find(|f| f.id == food.id) {
                Some(existing) => *existing = food,
                None => {
                    catalog.push(food);
                    added += 1;
                }
            }
        }
        self.commit()?;
        Ok(added)
    }

    fn list_products(&self) -> Vec<Product> {
        self.data().products.clone()
    }

    fn product_by_id(&self, id: &str) -> Result<Product> {
        self.data()
            .products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| FitError::ProductNotFound(id.to_string()))
    }

    fn products_by_category(&self, category: &str) -> Vec<Product> {
        let category = category.to_lowercase();
        self.data()
            .products
            .iter()
            .filter(|p| p.category.to_lowercase() == category)
            .cloned()
            .collect()
    }

    fn update_product_stock(&mut self, id: &str, stock: u32) -> Result<()> {
        let product = self
            .data_mut()
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| FitError::ProductNotFound(id.to_string()))?;
        product.stock = stock;
        self.commit()
    }

    /// A user's cart; empty if they have none yet.
    fn load_cart(&self, user_id: &str) -> Cart {
        self.data().carts.get(user_id).cloned().unwrap_or_default()
    }

    /// Store a user's cart. An empty cart removes the entry.
    fn save_cart(&mut self, user_id: &str, cart: Cart) -> Result<()> {
        let carts = &mut self.data_mut().carts;
        if cart.is_empty() {
            carts.remove(user_id);
        } else {
            carts.insert(user_id.to_string(), cart);
        }
        self.commit()
    }

    fn add_order(&mut self, order: Order) -> Result<()> {
        debug!("Recording order {} for {}", order.id, order.user_id);
        self.data_mut().orders.push(order);
        self.commit()
    }

    fn list_orders(&self, user_id: &str) -> Vec<Order> {
        self.data()
            .orders
            .iter()
            .filter(|o| o.user_id == user_id)
            .cloned()
            .collect()
    }

    fn order_by_id(&self, id: &str) -> Result<Order> {
        self.data()
            .orders
            .iter()
            .find(|o| o.id == id)
            .cloned()
            .ok_or_else(|| FitError::OrderNotFound(id.to_string()))
    }

    /// Id for the next order: `order_0001`, `order_0002`, ...
    fn next_order_id(&self) -> String {
        format!("order_{:04}", self.data().orders.len() + 1)
    }

    fn add_user_meal(&mut self, meal: UserMeal) -> Result<()> {
        if self.data().user_meals.iter().any(|m| m.id == meal.id) {
            return Err(FitError::InvalidInput(format!(
                "A meal with id {} already exists",
                meal.id
            )));
        }
        self.data_mut().user_meals.push(meal);
        self.commit()
    }

    fn list_user_meals(&self, user_id: &str) -> Vec<UserMeal> {
        self.data()
            .user_meals
            .iter()
            .filter(|m| m.user_id == user_id)
            .cloned()
            .collect()
    }

    /// Save an address to a user's address book.
    ///
    /// A user's first address is always the default; marking a later one as
    /// default clears the flag on the others.
    fn add_address(
        &mut self,
        user_id: &str,
        address: Address,
        make_default: bool,
    ) -> Result<SavedAddress> {
        let missing = address.missing_fields();
        if !missing.is_empty() {
            return Err(FitError::InvalidInput(format!(
                "Address is missing: {}",
                missing.join(", ")
            )));
        }

        let data = self.data_mut();
        let first = !data.addresses.iter().any(|a| a.user_id == user_id);
        let is_default = first || make_default;
        if is_default {
            for saved in data.addresses.iter_mut().filter(|a| a.user_id == user_id) {
                saved.is_default = false;
            }
        }

        let saved = SavedAddress {
            id: format!("addr_{:04}", data.addresses.len() + 1),
            user_id: user_id.to_string(),
            address,
            is_default,
            created_at: unix_now(),
        };
        data.addresses.push(saved.clone());
        self.commit()?;
        Ok(saved)
    }

    /// A user's saved addresses, default first.
    fn list_addresses(&self, user_id: &str) -> Vec<SavedAddress> {
        let mut addresses: Vec<SavedAddress> = self
            .data()
            .addresses
            .iter()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect();
        addresses.sort_by_key(|a| !a.is_default);
        addresses
    }

    /// One of a user's saved addresses.
    fn address_by_id(&self, user_id: &str, id: &str) -> Result<SavedAddress> {
        self.data()
            .addresses
            .iter()
            .find(|a| a.id == id && a.user_id == user_id)
            .cloned()
            .ok_or_else(|| FitError::AddressNotFound(id.to_string()))
    }

    /// Id for the next consultation: `consultation_0001`, ...
    fn next_consultation_id(&self) -> String {
        format!("consultation_{:04}", self.data().consultations.len() + 1)
    }

    /// Record a contact-form consultation after validating it.
    fn add_consultation(&mut self, consultation: Consultation) -> Result<()> {
        let problems = consultation.problems();
        if !problems.is_empty() {
            return Err(FitError::InvalidInput(format!(
                "Consultation has invalid fields: {}",
                problems.join(", ")
            )));
        }
        if self.data().consultations.iter().any(|c| c.id == consultation.id) {
            return Err(FitError::InvalidInput(format!(
                "A consultation with id {} already exists",
                consultation.id
            )));
        }
        info!("Consultation {} from {}", consultation.id, consultation.email);
        self.data_mut().consultations.push(consultation);
        self.commit()
    }

    fn list_consultations(&self) -> Vec<Consultation> {
        self.data().consultations.clone()
    }

    fn answer_consultation(&mut self, id: &str) -> Result<()> {
        let consultation = self
            .data_mut()
            .consultations
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| FitError::ConsultationNotFound(id.to_string()))?;
        consultation.status = ConsultationStatus::Answered;
        self.commit()
    }
}

/// Non-durable store seeded with the demo catalog.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    data: StoreData,
}

impl MemoryStore {
    pub fn new(data: StoreData) -> Self {
        Self { data }
    }

    pub fn seeded() -> Self {
        Self::new(StoreData::seeded())
    }
}

impl FoodCatalog for MemoryStore {
    fn list_foods(&self) -> Result<Vec<Food>> {
        Ok(self.data.foods.clone())
    }
}

impl Store for MemoryStore {
    fn data(&self) -> &StoreData {
        &self.data
    }

    fn data_mut(&mut self) -> &mut StoreData {
        &mut self.data
    }

    fn commit(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Store backed by a JSON document on disk, rewritten on every commit.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    data: StoreData,
}

impl FileStore {
    /// Open the document at `path`, creating it from the demo seed if missing.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let data = if path.exists() {
            let data = load_data(&path)?;
            info!(
                "Opened {} ({} foods, {} products)",
                path.display(),
                data.foods.len(),
                data.products.len()
            );
            data
        } else {
            info!("{} not found, creating it from demo data", path.display());
            let data = StoreData::seeded();
            save_data(&path, &data)?;
            data
        };

        Ok(Self { path, data })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FoodCatalog for FileStore {
    fn list_foods(&self) -> Result<Vec<Food>> {
        Ok(self.data.foods.clone())
    }
}

impl Store for FileStore {
    fn data(&self) -> &StoreData {
        &self.data
    }

    fn data_mut(&mut self) -> &mut StoreData {
        &mut self.data
    }

    fn commit(&mut self) -> Result<()> {
        debug!("Saving {}", self.path.display());
        save_data(&self.path, &self.data)
    }
}

/// Build the store selected by configuration.
pub fn open_store(config: &AppConfig) -> Result<Box<dyn Store>> {
    match config.backend {
        StorageBackend::Memory => {
            info!("Using in-memory store with demo data");
            Ok(Box::new(MemoryStore::seeded()))
        }
        StorageBackend::File => Ok(Box::new(FileStore::open(&config.data_file)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ConsultationService, OrderStatus};
    use tempfile::tempdir;

    fn sample_order(id: &str, user_id: &str) -> Order {
        Order {
            id: id.to_string(),
            user_id: user_id.to_string(),
            items: Vec::new(),
            total_price: 0.0,
            shipping_address: Address::default(),
            status: OrderStatus::Pending,
            created_at: 0,
        }
    }

    #[test]
    fn test_memory_store_products() {
        let mut store = MemoryStore::seeded();
        assert_eq!(store.list_products().len(), 5);
        assert_eq!(store.products_by_category("Equipamiento").len(), 2);

        store.update_product_stock("prod_003", 3).unwrap();
        assert_eq!(store.product_by_id("prod_003").unwrap().stock, 3);

        assert!(matches!(
            store.update_product_stock("prod_999", 1),
            Err(FitError::ProductNotFound(_))
        ));
    }

    #[test]
    fn test_import_foods_merges_by_id() {
        let mut store = MemoryStore::seeded();
        let mut rice = store.food_by_id("food_002").unwrap();
        rice.name = "Arroz integral".to_string();

        let mut avocado = rice.clone();
        avocado.id = "food_010".to_string();
        avocado.category = "grasas".to_string();

        let added = store.import_foods(vec![rice, avocado]).unwrap();
        assert_eq!(added, 1);

        let foods = store.list_foods().unwrap();
        assert_eq!(foods.len(), 6);
        assert_eq!(foods[1].name, "Arroz integral");
        assert_eq!(foods[5].id, "food_010");
    }

    #[test]
    fn test_orders_filtered_by_user() {
        let mut store = MemoryStore::seeded();
        assert_eq!(store.next_order_id(), "order_0001");

        store.add_order(sample_order("order_0001", "ana")).unwrap();
        store.add_order(sample_order("order_0002", "luis")).unwrap();

        assert_eq!(store.list_orders("ana").len(), 1);
        assert_eq!(store.next_order_id(), "order_0003");
        assert!(store.order_by_id("order_0002").is_ok());
        assert!(matches!(
            store.order_by_id("order_0009"),
            Err(FitError::OrderNotFound(_))
        ));
    }

    #[test]
    fn test_file_store_persists_across_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("fitnutri.json");

        {
            let mut store = FileStore::open(&path).unwrap();
            assert!(path.exists());

            let mut cart = Cart::default();
            cart.add(store.product_by_id("prod_001").unwrap(), 2).unwrap();
            store.save_cart("ana", cart).unwrap();
        }

        let store = FileStore::open(&path).unwrap();
        let cart = store.load_cart("ana");
        assert_eq!(cart.total_items(), 2);
        assert!(store.load_cart("luis").is_empty());
    }

    fn address(city: &str) -> Address {
        Address {
            full_name: "Ana García".to_string(),
            street: "Calle Mayor 1".to_string(),
            city: city.to_string(),
            postal_code: "28001".to_string(),
            country: "España".to_string(),
            phone: String::new(),
        }
    }

    fn consultation(id: &str, email: &str) -> Consultation {
        Consultation {
            id: id.to_string(),
            name: "Ana García".to_string(),
            email: email.to_string(),
            phone: String::new(),
            service: ConsultationService::Both,
            message: "Quiero un plan de volumen".to_string(),
            status: ConsultationStatus::Pending,
            created_at: 0,
        }
    }

    #[test]
    fn test_address_book_default_handling() {
        let mut store = MemoryStore::seeded();

        let madrid = store.add_address("ana", address("Madrid"), false).unwrap();
        assert_eq!(madrid.id, "addr_0001");
        assert!(madrid.is_default);

        let sevilla = store.add_address("ana", address("Sevilla"), false).unwrap();
        assert!(!sevilla.is_default);
        store.add_address("luis", address("Bilbao"), false).unwrap();

        let valencia = store.add_address("ana", address("Valencia"), true).unwrap();
        let book = store.list_addresses("ana");
        assert_eq!(book.len(), 3);
        assert_eq!(book[0].id, valencia.id);
        assert_eq!(book.iter().filter(|a| a.is_default).count(), 1);

        assert!(store.list_addresses("luis")[0].is_default);
        assert_eq!(store.address_by_id("ana", "addr_0002").unwrap().address.city, "Sevilla");
        assert!(matches!(
            store.address_by_id("luis", "addr_0002"),
            Err(FitError::AddressNotFound(_))
        ));
    }

    #[test]
    fn test_add_address_rejects_incomplete() {
        let mut store = MemoryStore::seeded();
        let result = store.add_address("ana", address(""), false);
        assert!(matches!(result, Err(FitError::InvalidInput(_))));
        assert!(store.list_addresses("ana").is_empty());
    }

    #[test]
    fn test_consultations_validated_and_answered() {
        let mut store = MemoryStore::seeded();
        assert_eq!(store.next_consultation_id(), "consultation_0001");

        assert!(matches!(
            store.add_consultation(consultation("consultation_0001", "not-an-email")),
            Err(FitError::InvalidInput(_))
        ));

        store
            .add_consultation(consultation("consultation_0001", "ana@example.com"))
            .unwrap();
        assert!(store
            .add_consultation(consultation("consultation_0001", "ana@example.com"))
            .is_err());
        assert_eq!(store.next_consultation_id(), "consultation_0002");

        store.answer_consultation("consultation_0001").unwrap();
        assert_eq!(
            store.list_consultations()[0].status,
            ConsultationStatus::Answered
        );
        assert!(matches!(
            store.answer_consultation("consultation_0404"),
            Err(FitError::ConsultationNotFound(_))
        ));
    }

    #[test]
    fn test_save_empty_cart_removes_entry() {
        let mut store = MemoryStore::seeded();
        let mut cart = Cart::default();
        cart.add(store.product_by_id("prod_002").unwrap(), 1).unwrap();
        store.save_cart("ana", cart).unwrap();
        assert!(store.data().carts.contains_key("ana"));

        store.save_cart("ana", Cart::default()).unwrap();
        assert!(!store.data().carts.contains_key("ana"));
    }
}
