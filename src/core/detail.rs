//! Detail presenter - read-only projection of one product for the detail view.
//!
//! Images are resolved through an ordered list of lookup strategies, each of
//! which can be tested on its own. The placeholder sits outside the list so the
//! chain can never come back empty. Outbound actions (sharing, inquiring about a
//! product) are only built here as plain text requests; performing them belongs
//! to an `OutboundContact` collaborator supplied by the host.

use crate::{
    entities::{Category, ImageCatalog, Product},
    errors::Result,
};
use std::collections::HashMap;
use tracing::trace;

/// One step of the image fallback chain
pub trait ImageStrategy: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Images for `product`, or `None` to fall through to the next step
    fn lookup(&self, product: &Product) -> Option<Vec<String>>;
}

/// The product's own gallery, in order
#[derive(Debug, Default, Clone, Copy)]
pub struct GalleryImages;

impl ImageStrategy for GalleryImages {
    fn name(&self) -> &'static str {
        "gallery"
    }

    fn lookup(&self, product: &Product) -> Option<Vec<String>> {
        (!product.gallery.is_empty()).then(|| product.gallery.clone())
    }
}

/// Hand-picked image per product id
#[derive(Debug, Default, Clone)]
pub struct ProductOverrideImages {
    by_id: HashMap<u32, String>,
}

impl ProductOverrideImages {
    /// Wraps an id → image table
    #[must_use]
    pub const fn new(by_id: HashMap<u32, String>) -> Self {
        Self { by_id }
    }
}

impl ImageStrategy for ProductOverrideImages {
    fn name(&self) -> &'static str {
        "product override"
    }

    fn lookup(&self, product: &Product) -> Option<Vec<String>> {
        self.by_id.get(&product.id).map(|image| vec![image.clone()])
    }
}

/// Default image shared by every product of a `(category, subcategory)` pair
#[derive(Debug, Default, Clone)]
pub struct SubcategoryImages {
    by_pair: HashMap<(Category, String), String>,
}

impl SubcategoryImages {
    /// Wraps a `(category, subcategory)` → image table
    #[must_use]
    pub const fn new(by_pair: HashMap<(Category, String), String>) -> Self {
        Self { by_pair }
    }
}

impl ImageStrategy for SubcategoryImages {
    fn name(&self) -> &'static str {
        "subcategory default"
    }

    fn lookup(&self, product: &Product) -> Option<Vec<String>> {
        self.by_pair
            .get(&(product.category, product.subcategory.clone()))
            .map(|image| vec![image.clone()])
    }
}

/// Runs image strategies in order and falls back to a placeholder
pub struct ImageResolver {
    strategies: Vec<Box<dyn ImageStrategy>>,
    placeholder: String,
}

impl ImageResolver {
    /// Builds a resolver from explicit strategies
    pub fn new(strategies: Vec<Box<dyn ImageStrategy>>, placeholder: impl Into<String>) -> Self {
        Self {
            strategies,
            placeholder: placeholder.into(),
        }
    }

    /// The standard chain: gallery, product override, subcategory default,
    /// then the catalog's placeholder.
    #[must_use]
    pub fn from_catalog(images: &ImageCatalog) -> Self {
        Self::new(
            vec![
                Box::new(GalleryImages),
                Box::new(ProductOverrideImages::new(images.product_map())),
                Box::new(SubcategoryImages::new(images.subcategory_map())),
            ],
            images.placeholder.clone(),
        )
    }

    /// Resolves the images for `product`. Never returns an empty list.
    #[must_use]
    pub fn resolve_images(&self, product: &Product) -> Vec<String> {
        for strategy in &self.strategies {
            if let Some(images) = strategy.lookup(product).filter(|i| !i.is_empty()) {
                trace!(
                    "Product {} images resolved by {}",
                    product.id,
                    strategy.name()
                );
                return images;
            }
        }
        trace!("Product {} falls back to placeholder", product.id);
        vec![self.placeholder.clone()]
    }
}

impl std::fmt::Debug for ImageResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageResolver")
            .field(
                "strategies",
                &self.strategies.iter().map(|s| s.name()).collect::<Vec<_>>(),
            )
            .field("placeholder", &self.placeholder)
            .finish()
    }
}

/// Everything the detail view shows for one product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDetail {
    /// Product id
    pub id: u32,
    /// Display name
    pub name: String,
    /// Category badge
    pub category: Category,
    /// Subcategory label
    pub subcategory: String,
    /// Description paragraph
    pub description: String,
    /// Dimensions line
    pub dimensions: String,
    /// Materials list
    pub materials: Vec<String>,
    /// Finishes list
    pub finishes: Vec<String>,
    /// Feature bullets
    pub features: Vec<String>,
    /// Price label
    pub price_range: String,
    /// Resolved images; never empty
    pub images: Vec<String>,
}

impl ProductDetail {
    /// The first resolved image
    #[must_use]
    pub fn cover_image(&self) -> &str {
        self.images.first().map_or("", String::as_str)
    }
}

/// A message the host should send through its messaging capability
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRequest {
    /// Phone number or handle; `None` lets the user pick a recipient
    pub destination: Option<String>,
    /// Message body, unencoded
    pub message: String,
}

/// Host capability that opens an external messaging link
pub trait OutboundContact {
    /// Performs the platform-specific "open link" action for `request`.
    ///
    /// # Errors
    /// Returns an error if the host cannot hand the request over.
    fn open(&self, request: &ContactRequest) -> Result<()>;
}

/// Builds detail view models and outbound messages
#[derive(Debug)]
pub struct DetailPresenter {
    images: ImageResolver,
    business_name: String,
    contact_number: String,
}

impl DetailPresenter {
    /// Creates a presenter that signs messages as `business_name` and sends
    /// inquiries to `contact_number`.
    pub fn new(
        images: ImageResolver,
        business_name: impl Into<String>,
        contact_number: impl Into<String>,
    ) -> Self {
        Self {
            images,
            business_name: business_name.into(),
            contact_number: contact_number.into(),
        }
    }

    /// Resolves the image set for `product`; at least one image.
    #[must_use]
    pub fn resolve_images(&self, product: &Product) -> Vec<String> {
        self.images.resolve_images(product)
    }

    /// Builds the read-only detail view model.
    #[must_use]
    pub fn detail(&self, product: &Product) -> ProductDetail {
        ProductDetail {
            id: product.id,
            name: product.name.clone(),
            category: product.category,
            subcategory: product.subcategory.clone(),
            description: product.description.clone(),
            dimensions: product.dimensions.clone(),
            materials: product.materials.clone(),
            finishes: product.finishes.clone(),
            features: product.features.clone(),
            price_range: product.price_range.clone(),
            images: self.resolve_images(product),
        }
    }

    /// Text for sharing a product with someone else.
    #[must_use]
    pub fn share_text(&self, product: &Product) -> String {
        format!(
            "Check out this beautiful {} from {} ({})",
            product.name, self.business_name, product.price_range
        )
    }

    /// Text for asking the business about a product.
    #[must_use]
    pub fn inquiry_message(&self, product: &Product) -> String {
        format!(
            "Hi {}! I'm interested in the {} ({}). Can we discuss the details?",
            self.business_name, product.name, product.price_range
        )
    }

    /// Inquiry addressed to the business contact number.
    #[must_use]
    pub fn inquiry_request(&self, product: &Product) -> ContactRequest {
        ContactRequest {
            destination: Some(self.contact_number.clone()),
            message: self.inquiry_message(product),
        }
    }

    /// Share message with no fixed recipient.
    #[must_use]
    pub fn share_request(&self, product: &Product) -> ContactRequest {
        ContactRequest {
            destination: None,
            message: self.share_text(product),
        }
    }
}
