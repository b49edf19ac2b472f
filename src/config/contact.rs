//! Runtime settings from environment variables.
//!
//! Settings are read after `.env` has been loaded. Every value has a default, so
//! an empty environment still yields a working configuration.

use std::path::PathBuf;

/// Catalog file used when `CATALOG_PATH` is not set
pub const DEFAULT_CATALOG_PATH: &str = "catalog.toml";
/// Business name used when `BUSINESS_NAME` is not set
pub const DEFAULT_BUSINESS_NAME: &str = "Eve Furniture";
/// Contact number used when `CONTACT_NUMBER` is not set
pub const DEFAULT_CONTACT_NUMBER: &str = "255123456789";

/// Settings for the browse shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Where to read the catalog from
    pub catalog_path: PathBuf,
    /// Name used to sign outbound messages
    pub business_name: String,
    /// Number product inquiries are addressed to
    pub contact_number: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            business_name: DEFAULT_BUSINESS_NAME.to_string(),
            contact_number: DEFAULT_CONTACT_NUMBER.to_string(),
        }
    }
}

/// Reads `CATALOG_PATH`, `BUSINESS_NAME` and `CONTACT_NUMBER` from the
/// environment, falling back to the defaults for anything unset or blank.
#[must_use]
pub fn load_app_config() -> AppConfig {
    from_lookup(|key| std::env::var(key).ok())
}

fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppConfig {
    let defaults = AppConfig::default();
    let read = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    AppConfig {
        catalog_path: read("CATALOG_PATH").map_or(defaults.catalog_path, PathBuf::from),
        business_name: read("BUSINESS_NAME").unwrap_or(defaults.business_name),
        contact_number: read("CONTACT_NUMBER")
            .map(|n| n.chars().filter(char::is_ascii_digit).collect())
            .unwrap_or(defaults.contact_number),
    }
}
