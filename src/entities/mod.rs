//! Entity module - the plain data records the catalog is made of.
//! Products and image mappings are deserialized from the catalog file and are
//! read-only afterwards.

pub mod image;
pub mod product;

pub use image::{ImageCatalog, ProductImage, SubcategoryImage};
pub use product::{Category, Facet, Product};
