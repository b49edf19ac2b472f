//! Listing summary helpers.
//!
//! This module provides the derived data a listing view shows next to the
//! products: which facet values are available to pick from, whether any filter
//! narrows the listing, compact price labels, and the featured selection shown
//! on the home page. All functions are pure.

use crate::{
    core::{
        catalog::Catalog,
        filter::{FilterCriteria, PriceRange},
    },
    entities::{Category, Facet, Product},
};

/// Distinct values of `facet` among `products`, in first-seen order.
///
/// Products without the attribute contribute nothing.
#[must_use]
pub fn available_facet_values<'a, I>(products: I, facet: Facet) -> Vec<String>
where
    I: IntoIterator<Item = &'a Product>,
{
    let mut values: Vec<String> = Vec::new();
    for product in products {
        for value in product.facet_values(facet).unwrap_or_default() {
            if !values.iter().any(|v| v == value) {
                values.push(value.to_string());
            }
        }
    }
    values
}

/// Returns true if any facet is selected or the price range is narrower than
/// `domain`.
#[must_use]
pub fn has_active_filters(criteria: &FilterCriteria, domain: &PriceRange) -> bool {
    criteria.active_facets().next().is_some() || criteria.price_range.is_narrower_than(domain)
}

/// Formats a TZS amount for slider labels.
///
/// Values of a million and up show one decimal with an `M` suffix, values of a
/// thousand and up show no decimals with a `K` suffix, and anything smaller is
/// printed as is. Halves round up.
///
/// # Examples
/// `1_250_000` → `"1.3M"`, `2_500` → `"3K"`, `800` → `"800"`
#[must_use]
pub fn format_price_short(value: u64) -> String {
    if value >= 1_000_000 {
        let tenths = value.saturating_add(50_000) / 100_000;
        format!("{}.{}M", tenths / 10, tenths % 10)
    } else if value >= 1_000 {
        format!("{}K", (value + 500) / 1_000)
    } else {
        value.to_string()
    }
}

/// Up to `per_category` products from each category, categories in menu
/// order and products in catalog order.
#[must_use]
pub fn featured_by_category(catalog: &Catalog, per_category: usize) -> Vec<&Product> {
    Category::ALL
        .into_iter()
        .flat_map(move |category| {
            catalog
                .all()
                .iter()
                .filter(move |p| p.category == category)
                .take(per_category)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::{
        core::filter::{self, CategoryFilter},
        test_utils::{criteria_with_facet, product, sample_catalog},
    };

    #[test]
    fn test_available_colors_first_seen_order() {
        let catalog = sample_catalog();
        assert_eq!(
            available_facet_values(catalog.all(), Facet::Color),
            vec!["Cognac Brown", "Black", "Grey", "Natural"]
        );
    }

    #[test]
    fn test_available_values_within_a_category() {
        let catalog = sample_catalog();
        let criteria = FilterCriteria {
            category: CategoryFilter::Named(Category::Office),
            ..FilterCriteria::default()
        };
        let office = filter::apply(catalog.all(), &criteria);
        assert_eq!(
            available_facet_values(office.iter().copied(), Facet::Assembly),
            vec!["Assembly Required", "No Assembly"]
        );
        assert!(
            available_facet_values(office.iter().copied(), Facet::Style).is_empty()
        );
    }

    #[test]
    fn test_has_active_filters() {
        let domain = PriceRange::new(450_000, 4_500_000);
        assert!(
            !has_active_filters(&FilterCriteria::spanning(domain), &domain)
        );

        let narrowed = FilterCriteria::spanning(PriceRange::new(500_000, 4_500_000));
        assert!(has_active_filters(&narrowed, &domain));

        let mut faceted = criteria_with_facet(Facet::Color, &["Black"]);
        faceted.price_range = domain;
        assert!(has_active_filters(&faceted, &domain));

        let mut inactive_facet = criteria_with_facet(Facet::Color, &[]);
        inactive_facet.price_range = domain;
        assert!(!has_active_filters(&inactive_facet, &domain));
    }

    #[test]
    fn test_format_price_short() {
        assert_eq!(format_price_short(4_500_000), "4.5M");
        assert_eq!(format_price_short(10_000_000), "10.0M");
        assert_eq!(format_price_short(950_000), "950K");
        assert_eq!(format_price_short(1_000), "1K");
        assert_eq!(format_price_short(800), "800");
        assert_eq!(format_price_short(0), "0");
    }

    #[test]
    fn test_format_price_short_rounds_halves_up() {
        assert_eq!(format_price_short(2_500), "3K");
        assert_eq!(format_price_short(3_500), "4K");
        assert_eq!(format_price_short(1_250_000), "1.3M");
        assert_eq!(format_price_short(1_249_999), "1.2M");
        assert_eq!(format_price_short(999_999), "1000K");
        assert_eq!(format_price_short(u64::MAX), "18446744073709.5M");
    }

    #[test]
    fn test_featured_two_per_category() {
        let catalog = sample_catalog();
        let ids: Vec<u32> = featured_by_category(&catalog, 2)
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_featured_follows_menu_order() {
        let catalog = Catalog::new(vec![
            product(1, "Kids Bed", Category::BabyKids, "Kids Beds", 900_000),
            product(2, "Hall Bench", Category::Entryway, "Benches", 300_000),
            product(3, "Oak Desk", Category::Office, "Desks", 1_200_000),
            product(4, "Corner Sofa", Category::LivingRoom, "Sofas", 3_000_000),
            product(5, "Crib", Category::BabyKids, "Cribs", 650_000),
            product(6, "Bunk Bed", Category::BabyKids, "Kids Beds", 1_400_000),
        ])
        .unwrap();
        let ids: Vec<u32> = featured_by_category(&catalog, 2)
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![4, 3, 2, 1, 5]);
    }

    #[test]
    fn test_featured_zero_is_empty() {
        let catalog = sample_catalog();
        assert!(featured_by_category(&catalog, 0).is_empty());
    }
}
