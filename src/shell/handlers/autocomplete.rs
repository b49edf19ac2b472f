//! Autocomplete handlers for shell command arguments.
//!
//! These functions suggest category, subcategory and product names that match
//! what the user has typed so far. They back the "did you mean" replies the
//! shell gives when a name does not match exactly.

use crate::{
    core::{Catalog, CategoryFilter, SubcategoryFilter},
    entities::Category,
};

/// Most suggestions returned by any handler
pub const MAX_SUGGESTIONS: usize = 25;

/// Case-insensitive substring filter, sorted alphabetically and capped at
/// `MAX_SUGGESTIONS`.
fn suggest<I>(candidates: I, partial: &str) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let partial_lower = partial.trim().to_lowercase();
    let mut matching: Vec<String> = candidates
        .into_iter()
        .filter(|name| name.to_lowercase().contains(&partial_lower))
        .collect();
    matching.sort();
    matching.dedup();
    matching.truncate(MAX_SUGGESTIONS);
    matching
}

/// Suggests category menu entries, including `All` and `Custom`.
#[must_use]
pub fn autocomplete_category(partial: &str) -> Vec<String> {
    let entries = ["All", "Custom"]
        .into_iter()
        .chain(Category::ALL.iter().map(|c| c.name()))
        .map(str::to_string);
    suggest(entries, partial)
}

/// Suggests subcategories of `category` that exist in the catalog.
#[must_use]
pub fn autocomplete_subcategory(
    catalog: &Catalog,
    category: CategoryFilter,
    partial: &str,
) -> Vec<String> {
    let names = catalog
        .subcategories(category)
        .into_iter()
        .filter_map(|entry| match entry {
            SubcategoryFilter::Named(name) => Some(name),
            SubcategoryFilter::All => None,
        });
    suggest(names, partial)
}

/// Suggests product names from the catalog.
#[must_use]
pub fn autocomplete_product_name(catalog: &Catalog, partial: &str) -> Vec<String> {
    suggest(catalog.all().iter().map(|p| p.name.clone()), partial)
}
