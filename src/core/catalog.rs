//! Catalog store - the immutable product list and its derived category index.
//!
//! A `Catalog` is built once from the loaded products and is read-only for the
//! rest of the program. The category → subcategory index is derived from the
//! products at construction time and is never edited on its own.

use crate::{
    core::filter::{CategoryFilter, PriceRange, SubcategoryFilter},
    entities::{Category, Product},
    errors::{Error, Result},
};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Immutable in-memory product catalog
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    index: Vec<(Category, Vec<String>)>,
}

impl Catalog {
    /// Builds a catalog, validating product identity and naming.
    ///
    /// A `price_value` that disagrees with the amount printed in `price_range`
    /// is only logged; pricing consistency is a data-entry concern.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A product id is zero
    /// - Two products share an id
    /// - A product name or subcategory is empty or whitespace-only
    pub fn new(products: Vec<Product>) -> Result<Self> {
        let mut seen_ids = HashSet::new();
        for product in &products {
            if product.id == 0 {
                return Err(Error::Config {
                    message: format!("Product '{}' has id 0; ids must be positive", product.name),
                });
            }
            if !seen_ids.insert(product.id) {
                return Err(Error::Config {
                    message: format!("Duplicate product id {}", product.id),
                });
            }
            if product.name.trim().is_empty() {
                return Err(Error::Config {
                    message: format!("Product {} has an empty name", product.id),
                });
            }
            if product.subcategory.trim().is_empty() {
                return Err(Error::Config {
                    message: format!("Product {} has an empty subcategory", product.id),
                });
            }
            if let Some(floor) = product.parsed_price_floor()
                && floor != product.price_value
            {
                warn!(
                    "Product {} ('{}') has price_value {} but price_range says '{}'",
                    product.id, product.name, product.price_value, product.price_range
                );
            }
        }

        let index = build_index(&products);
        debug!(
            "Catalog built with {} products across {} categories",
            products.len(),
            index.len()
        );
        Ok(Self { products, index })
    }

    /// Returns every product in insertion order.
    #[must_use]
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Number of products in the catalog
    #[must_use]
    pub const fn len(&self) -> usize {
        self.products.len()
    }

    /// True when the catalog holds no products
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Looks up a product by id.
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Returns `All` followed by every category that has products, in the
    /// order each category first appears in the catalog.
    #[must_use]
    pub fn categories(&self) -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(
                self.index
                    .iter()
                    .map(|(category, _)| CategoryFilter::Named(*category)),
            )
            .collect()
    }

    /// Returns `All` followed by the subcategories of `category` in first-seen
    /// order.
    ///
    /// `All` yields just `[All]`: subcategories are never listed across
    /// categories. A category with no products yields an empty list.
    #[must_use]
    pub fn subcategories(&self, category: CategoryFilter) -> Vec<SubcategoryFilter> {
        let CategoryFilter::Named(category) = category else {
            return vec![SubcategoryFilter::All];
        };

        self.index
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, subcategories)| {
                std::iter::once(SubcategoryFilter::All)
                    .chain(subcategories.iter().cloned().map(SubcategoryFilter::Named))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The smallest interval containing every product price, or `None` for an
    /// empty catalog.
    #[must_use]
    pub fn price_domain(&self) -> Option<PriceRange> {
        let min = self.products.iter().map(|p| p.price_value).min()?;
        let max = self.products.iter().map(|p| p.price_value).max()?;
        Some(PriceRange::new(min, max))
    }
}

fn build_index(products: &[Product]) -> Vec<(Category, Vec<String>)> {
    let mut index: Vec<(Category, Vec<String>)> = Vec::new();
    for product in products {
        let position = index
            .iter()
            .position(|(c, _)| *c == product.category)
            .unwrap_or_else(|| {
                index.push((product.category, Vec::new()));
                index.len() - 1
            });
        let subcategories = &mut index[position].1;
        if !subcategories.contains(&product.subcategory) {
            subcategories.push(product.subcategory.clone());
        }
    }
    index
}
