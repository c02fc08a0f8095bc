mod schema;

pub use schema::{Config, ListingConfig, StoreConfig, TelegramConfig};
