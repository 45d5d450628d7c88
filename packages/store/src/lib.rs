pub mod catalog;
pub mod config;
pub mod format;
pub mod models;

pub use catalog::{Catalog, Collection};
pub use config::{ApiConfig, ClientConfig, DisplayConfig, LogConfig};
pub use format::{format_currency, format_date};
pub use models::{
    CustomerRecord, CustomerStatus, EntityKind, NewCustomer, NewProperty, PropertyRecord,
    Resource,
};
