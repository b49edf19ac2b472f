//! Catalog loading from catalog.toml
//!
//! This module provides functionality to load the product catalog and its image
//! mappings from a TOML file. The file is read once at startup; everything built
//! from it is read-only afterwards.

use crate::{
    core::{Catalog, ImageResolver},
    entities::{ImageCatalog, Product},
    errors::{Error, Result},
};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Structure of the entire catalog.toml file
#[derive(Debug, Deserialize)]
pub struct CatalogFile {
    /// Image lookup tables; optional, defaults to placeholder only
    #[serde(default)]
    pub images: ImageCatalog,
    /// Products in display order
    #[serde(default)]
    pub products: Vec<Product>,
}

/// A validated catalog together with its image resolver
#[derive(Debug)]
pub struct LoadedCatalog {
    /// The product store
    pub catalog: Catalog,
    /// The image fallback chain for detail views
    pub images: ImageResolver,
}

/// Parses catalog TOML text.
///
/// # Errors
/// Returns an error if:
/// - The TOML syntax is invalid
/// - Required product fields are missing or a category is not recognised
/// - Product ids are zero or duplicated, or names are blank
pub fn parse_catalog(contents: &str) -> Result<LoadedCatalog> {
    let file: CatalogFile = toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse catalog: {e}"),
    })?;
    debug!(
        "Parsed {} products and {} image mappings",
        file.products.len(),
        file.images.products.len() + file.images.subcategories.len()
    );

    let catalog = Catalog::new(file.products)?;
    let images = ImageResolver::from_catalog(&file.images);
    Ok(LoadedCatalog { catalog, images })
}

/// Loads the catalog from a TOML file
///
/// # Arguments
/// * `path` - Path to the catalog file
///
/// # Errors
/// Returns an error if the file cannot be read or fails `parse_catalog`.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<LoadedCatalog> {
    let path_ref = path.as_ref();
    debug!("Attempting to load catalog from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read catalog file {}: {e}", path_ref.display()),
    })?;
    let loaded = parse_catalog(&contents)?;
    info!(
        "Loaded {} products from {}",
        loaded.catalog.len(),
        path_ref.display()
    );
    Ok(loaded)
}
