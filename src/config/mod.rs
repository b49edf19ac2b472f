/// Catalog loading from catalog.toml
pub mod catalog;

/// Shell settings from environment variables
pub mod contact;

pub use catalog::{LoadedCatalog, load_catalog, parse_catalog};
pub use contact::{AppConfig, load_app_config};
