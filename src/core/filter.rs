//! Filter engine - pure, deterministic narrowing and ordering of products.
//!
//! Filtering and sorting are separate steps. `apply` never reorders its input;
//! only an explicit `sort` call does.

use crate::{
    entities::{Category, Facet, Product},
    errors::Error,
};
use std::{
    cmp::{Ordering, Reverse},
    collections::{BTreeMap, BTreeSet},
    fmt,
    str::FromStr,
};

/// Category part of the filter criteria
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    /// No category restriction
    #[default]
    All,
    /// Only products of this category
    Named(Category),
}

impl CategoryFilter {
    /// True if `category` passes this filter
    #[must_use]
    pub fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Named(wanted) => wanted == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Named(category) => category.fmt(f),
        }
    }
}

/// Subcategory part of the filter criteria
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum SubcategoryFilter {
    /// No subcategory restriction
    #[default]
    All,
    /// Only products whose subcategory equals this name
    Named(String),
}

impl SubcategoryFilter {
    /// Shorthand for `SubcategoryFilter::Named(name.into())`
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// True if `subcategory` passes this filter
    #[must_use]
    pub fn matches(&self, subcategory: &str) -> bool {
        match self {
            Self::All => true,
            Self::Named(wanted) => wanted == subcategory,
        }
    }
}

impl fmt::Display for SubcategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Named(name) => f.write_str(name),
        }
    }
}

/// Closed price interval in TZS.
///
/// A range with `min > max` is allowed and matches nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PriceRange {
    /// Inclusive lower bound
    pub min: u64,
    /// Inclusive upper bound
    pub max: u64,
}

impl PriceRange {
    /// Creates a range; bounds are taken as given, never swapped.
    #[must_use]
    pub const fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    /// A range that admits every price
    #[must_use]
    pub const fn unbounded() -> Self {
        Self::new(0, u64::MAX)
    }

    /// True if `price` lies inside the interval
    #[must_use]
    pub const fn contains(&self, price: u64) -> bool {
        self.min <= price && price <= self.max
    }

    /// True if this range admits strictly fewer prices than `domain`
    #[must_use]
    pub const fn is_narrower_than(&self, domain: &Self) -> bool {
        self.min > domain.min || self.max < domain.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// The user's current narrowing selections
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    /// Category restriction
    pub category: CategoryFilter,
    /// Subcategory restriction, meaningful relative to `category`
    pub subcategory: SubcategoryFilter,
    /// Accepted price interval
    pub price_range: PriceRange,
    /// Accepted values per facet; an empty set means the facet is inactive
    pub facets: BTreeMap<Facet, BTreeSet<String>>,
}

impl FilterCriteria {
    /// Criteria that admit every product, with the price range spanning
    /// `domain`.
    #[must_use]
    pub fn spanning(domain: PriceRange) -> Self {
        Self {
            price_range: domain,
            ..Self::default()
        }
    }

    /// Facets with at least one accepted value
    pub fn active_facets(&self) -> impl Iterator<Item = (Facet, &BTreeSet<String>)> {
        self.facets
            .iter()
            .filter(|(_, accepted)| !accepted.is_empty())
            .map(|(facet, accepted)| (*facet, accepted))
    }

    /// True if `product` satisfies every part of the criteria.
    ///
    /// A product that lacks an actively filtered facet attribute does not match.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        self.category.matches(product.category)
            && self.subcategory.matches(&product.subcategory)
            && self.price_range.contains(product.price_value)
            && self.active_facets().all(|(facet, accepted)| {
                product
                    .facet_values(facet)
                    .is_some_and(|values| values.iter().any(|v| accepted.contains(*v)))
            })
    }
}

/// Returns the products that satisfy `criteria`, in input order.
pub fn apply<'a, I>(products: I, criteria: &FilterCriteria) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    products
        .into_iter()
        .filter(|product| criteria.matches(product))
        .collect()
}

/// Listing order for filtered products
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Catalog order
    #[default]
    Featured,
    /// Cheapest first
    PriceAscending,
    /// Most expensive first
    PriceDescending,
    /// Alphabetical by name, ignoring case
    NameAscending,
}

impl SortKey {
    /// Canonical name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::PriceAscending => "price-ascending",
            Self::PriceDescending => "price-descending",
            Self::NameAscending => "name-ascending",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "featured" | "" => Ok(Self::Featured),
            "price-ascending" | "price-low" => Ok(Self::PriceAscending),
            "price-descending" | "price-high" => Ok(Self::PriceDescending),
            "name-ascending" | "name" => Ok(Self::NameAscending),
            other => Err(Error::InvalidCommand {
                message: format!("unknown sort key '{other}'"),
            }),
        }
    }
}

/// Orders products by `key`. The sort is stable; `Featured` leaves the input
/// untouched.
#[must_use]
pub fn sort(mut products: Vec<&Product>, key: SortKey) -> Vec<&Product> {
    match key {
        SortKey::Featured => {}
        SortKey::PriceAscending => products.sort_by_key(|p| p.price_value),
        SortKey::PriceDescending => products.sort_by_key(|p| Reverse(p.price_value)),
        SortKey::NameAscending => products.sort_by(|a, b| compare_names(&a.name, &b.name)),
    }
    products
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
