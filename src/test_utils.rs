//! Shared test utilities for the catalog crate.
//!
//! This module provides fixture builders for products, a small multi-category
//! sample catalog, a shell over that catalog, and helpers for common filter
//! criteria.

use crate::{
    core::{DetailPresenter, ImageResolver, catalog::Catalog, filter::FilterCriteria},
    entities::{Category, Facet, ImageCatalog, Product},
    shell::{LoggingContact, Shell, ShellData},
};
use tracing_subscriber::EnvFilter;

/// Routes `tracing` output to the test harness; safe to call from every test.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace")),
        )
        .with_test_writer()
        .try_init();
}

/// Creates a product with sensible defaults.
///
/// # Defaults
/// * `materials`: `["Oak"]`
/// * `price_range`: "From TZS {price}" without separators
/// * `gallery`: empty
/// * all optional facets: absent
pub fn product(id: u32, name: &str, category: Category, subcategory: &str, price: u64) -> Product {
    Product {
        id,
        name: name.to_string(),
        category,
        subcategory: subcategory.to_string(),
        description: format!("{name} description"),
        dimensions: "100cm × 50cm × 75cm".to_string(),
        materials: vec!["Oak".to_string()],
        finishes: vec!["Natural".to_string()],
        features: vec!["Handcrafted".to_string()],
        price_range: format!("From TZS {price}"),
        price_value: price,
        gallery: Vec::new(),
        colors: None,
        size: None,
        style: None,
        assembly: None,
        tv_size_range: None,
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

/// Eight products across four categories.
///
/// | id | category       | subcategory   | price     | facets                         |
/// |----|----------------|---------------|-----------|--------------------------------|
/// | 1  | Living Room    | Sofas         | 4,500,000 | colors Cognac Brown/Black, Modern |
/// | 2  | Living Room    | Sofas         | 2,200,000 | colors Grey, Classic           |
/// | 3  | Living Room    | Coffee Tables | 750,000   | -                              |
/// | 4  | Kitchen & Dining | Dining Tables | 2,500,000 | -                            |
/// | 5  | Kitchen & Dining | Dining Chairs | 450,000 | colors Black/Natural           |
/// | 6  | Office         | Desks         | 3,500,000 | assembly Assembly Required     |
/// | 7  | Office         | Desks         | 2,200,000 | assembly No Assembly           |
/// | 8  | Baby & Kids    | Desks         | 720,000   | -                              |
pub fn sample_catalog() -> Catalog {
    let mut sofa = product(
        1,
        "Executive Leather Sofa",
        Category::LivingRoom,
        "Sofas",
        4_500_000,
    );
    sofa.materials = strings(&["Genuine Leather", "Solid Wood Frame"]);
    sofa.colors = Some(strings(&["Cognac Brown", "Black"]));
    sofa.style = Some("Modern".to_string());
    sofa.gallery = strings(&["/assets/product-sofa.jpg", "/assets/sofa-2.jpg"]);

    let mut loveseat = product(
        2,
        "Loveseat Sofa",
        Category::LivingRoom,
        "Sofas",
        2_200_000,
    );
    loveseat.colors = Some(strings(&["Grey"]));
    loveseat.style = Some("Classic".to_string());

    let mut coffee = product(
        3,
        "Glass Coffee Table",
        Category::LivingRoom,
        "Coffee Tables",
        750_000,
    );
    coffee.materials = strings(&["Tempered Glass", "Steel Base"]);

    let table = product(
        4,
        "Signature Dining Table",
        Category::KitchenDining,
        "Dining Tables",
        2_500_000,
    );

    let mut chair = product(
        5,
        "Nordic Dining Chair",
        Category::KitchenDining,
        "Dining Chairs",
        450_000,
    );
    chair.colors = Some(strings(&["Black", "Natural"]));

    let mut desk = product(
        6,
        "Executive Office Desk",
        Category::Office,
        "Desks",
        3_500_000,
    );
    desk.assembly = Some("Assembly Required".to_string());

    let mut standing = product(
        7,
        "Standing Adjustable Desk",
        Category::Office,
        "Desks",
        2_200_000,
    );
    standing.assembly = Some("No Assembly".to_string());

    let kids = product(
        8,
        "Kids Study Desk",
        Category::BabyKids,
        "Desks",
        720_000,
    );

    Catalog::new(vec![
        sofa, loveseat, coffee, table, chair, desk, standing, kids,
    ])
        .unwrap_or_default()
}

/// Unbounded criteria with a single facet restricted to `values`.
pub fn criteria_with_facet(facet: Facet, values: &[&str]) -> FilterCriteria {
    let mut criteria = FilterCriteria::default();
    criteria
        .facets
        .insert(facet, values.iter().map(|v| (*v).to_string()).collect());
    criteria
}

/// A shell over `sample_catalog` with default images, signing as
/// "Eve Furniture" and logging outbound messages.
pub fn sample_shell() -> Shell {
    let data = ShellData {
        catalog: sample_catalog(),
        presenter: DetailPresenter::new(
            ImageResolver::from_catalog(&ImageCatalog::default()),
            "Eve Furniture",
            "255123456789",
        ),
    };
    Shell::new(data, Box::new(LoggingContact))
}
