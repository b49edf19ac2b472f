//! Image mapping entities - the lookup tables behind the image fallback chain.
//!
//! Subcategory defaults are keyed by the `(category, subcategory)` pair, because
//! subcategory names such as "Desks" or "Storage" repeat across categories.

use super::product::Category;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Image used when nothing more specific is configured
pub const DEFAULT_PLACEHOLDER: &str = "/assets/lv/livingr.jpg";

/// A product-specific image override
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductImage {
    /// Product the image belongs to
    pub id: u32,
    /// Image reference
    pub image: String,
}

/// A default image for every product in one subcategory
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubcategoryImage {
    /// Owning category
    pub category: Category,
    /// Subcategory name within `category`
    pub subcategory: String,
    /// Image reference
    pub image: String,
}

/// The `[images]` table of the catalog file
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageCatalog {
    /// Last-resort image
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    /// Per-product overrides
    #[serde(default)]
    pub products: Vec<ProductImage>,
    /// Per-subcategory defaults
    #[serde(default)]
    pub subcategories: Vec<SubcategoryImage>,
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

impl Default for ImageCatalog {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
            products: Vec::new(),
            subcategories: Vec::new(),
        }
    }
}

impl ImageCatalog {
    /// Builds the id → image lookup table
    #[must_use]
    pub fn product_map(&self) -> HashMap<u32, String> {
        self.products
            .iter()
            .map(|entry| (entry.id, entry.image.clone()))
            .collect()
    }

    /// Builds the `(category, subcategory)` → image lookup table
    #[must_use]
    pub fn subcategory_map(&self) -> HashMap<(Category, String), String> {
        self.subcategories
            .iter()
            .map(|entry| {
                (
                    (entry.category, entry.subcategory.clone()),
                    entry.image.clone(),
                )
            })
            .collect()
    }
}
