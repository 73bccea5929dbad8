mod checkout;
mod persistence;
mod store;

pub use checkout::checkout;
pub use persistence::{
    StoreData, dedup_foods, load_data, load_foods, load_foods_csv, load_foods_json, save_data,
};
pub use store::{FileStore, MemoryStore, Store, open_store, unix_now};
