//! Selection/navigation controller - the only stateful piece of the catalog core.
//!
//! The controller holds the current browsing position (category, subcategory,
//! open product) together with the price range, facet selections and sort key,
//! and turns user actions into `FilterCriteria` and routing requests. No
//! transition is ever refused with an error: a selection that matches nothing
//! simply produces an empty listing.

use crate::{
    core::{
        catalog::Catalog,
        filter::{self, CategoryFilter, FilterCriteria, PriceRange, SortKey, SubcategoryFilter},
    },
    entities::{Category, Facet, Product},
};
use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
};
use tracing::{debug, info};

/// What the user picked from the category menu
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategoryChoice {
    /// Every category
    All,
    /// One catalog category
    Named(Category),
    /// The "Custom" entry, which leaves the catalog for the quote-request flow
    CustomOrder,
}

impl From<CategoryFilter> for CategoryChoice {
    fn from(filter: CategoryFilter) -> Self {
        match filter {
            CategoryFilter::All => Self::All,
            CategoryFilter::Named(category) => Self::Named(category),
        }
    }
}

/// Position within the catalog listing
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum BrowseState {
    /// All categories, all subcategories
    #[default]
    Browsing,
    /// One category, all of its subcategories
    CategorySelected(Category),
    /// One subcategory of one category
    SubcategorySelected(Category, String),
}

impl BrowseState {
    /// Category part of the criteria for this position
    #[must_use]
    pub const fn category_filter(&self) -> CategoryFilter {
        match self {
            Self::Browsing => CategoryFilter::All,
            Self::CategorySelected(c) | Self::SubcategorySelected(c, _) => {
                CategoryFilter::Named(*c)
            }
        }
    }

    /// Subcategory part of the criteria for this position
    #[must_use]
    pub fn subcategory_filter(&self) -> SubcategoryFilter {
        match self {
            Self::SubcategorySelected(_, s) => SubcategoryFilter::Named(s.clone()),
            Self::Browsing | Self::CategorySelected(_) => SubcategoryFilter::All,
        }
    }

    /// Route that displays this position
    #[must_use]
    pub fn route(&self) -> Route {
        match self {
            Self::Browsing => Route::Products,
            Self::CategorySelected(c) => Route::Category(*c),
            Self::SubcategorySelected(c, s) => Route::Subcategory(*c, s.clone()),
        }
    }
}

/// The controller's full view state
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewState {
    /// A listing is shown
    Listing(BrowseState),
    /// A product detail is shown over `return_to`
    DetailOpen {
        /// The product on display
        product: Box<Product>,
        /// Listing restored by `close_detail`
        return_to: BrowseState,
    },
}

impl Default for ViewState {
    fn default() -> Self {
        Self::Listing(BrowseState::Browsing)
    }
}

/// Navigation request handed to the host's router
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    /// Full catalog listing
    Products,
    /// Listing for one category
    Category(Category),
    /// Listing for one subcategory
    Subcategory(Category, String),
    /// A single product
    Product(u32),
    /// The external quote-request flow
    RequestQuote,
}

impl Route {
    /// URL path for this route; segments are percent-encoded.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Products => "/products".to_string(),
            Self::Category(c) => format!("/products/{}", urlencoding::encode(c.name())),
            Self::Subcategory(c, s) => format!(
                "/products/{}/{}",
                urlencoding::encode(c.name()),
                urlencoding::encode(s)
            ),
            Self::Product(id) => format!("/products/item/{id}"),
            Self::RequestQuote => "/request-quote".to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Result of a controller action
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    /// State changed; the host should show `Route`
    Navigated(Route),
    /// The action does not apply in the current state; nothing changed
    Ignored,
    /// The action leaves the catalog; state is unchanged and the host should
    /// hand over to the external flow at `Route`
    Escaped(Route),
}

/// Tracks what the user is looking at and how the listing is narrowed
#[derive(Clone, Debug)]
pub struct SelectionController {
    view: ViewState,
    price_domain: PriceRange,
    price_range: PriceRange,
    facets: BTreeMap<Facet, BTreeSet<String>>,
    sort_key: SortKey,
}

impl SelectionController {
    /// Creates a controller at `Browsing(All, All)` whose default price range
    /// spans every price in `catalog`.
    #[must_use]
    pub fn new(catalog: &Catalog) -> Self {
        let price_domain = catalog.price_domain().unwrap_or_default();
        Self {
            view: ViewState::default(),
            price_domain,
            price_range: price_domain,
            facets: BTreeMap::new(),
            sort_key: SortKey::default(),
        }
    }

    /// Current view state
    #[must_use]
    pub const fn view(&self) -> &ViewState {
        &self.view
    }

    /// The listing position, or the one a detail view will return to
    #[must_use]
    pub const fn browse_state(&self) -> &BrowseState {
        match &self.view {
            ViewState::Listing(state) | ViewState::DetailOpen { return_to: state, .. } => state,
        }
    }

    /// The product shown in the detail view, if one is open
    #[must_use]
    pub fn open_product(&self) -> Option<&Product> {
        match &self.view {
            ViewState::DetailOpen { product, .. } => Some(&**product),
            ViewState::Listing(_) => None,
        }
    }

    /// Price interval the default range spans
    #[must_use]
    pub const fn price_domain(&self) -> PriceRange {
        self.price_domain
    }

    /// Current sort key
    #[must_use]
    pub const fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    /// Builds the filter criteria for the current selection.
    #[must_use]
    pub fn criteria(&self) -> FilterCriteria {
        let state = self.browse_state();
        FilterCriteria {
            category: state.category_filter(),
            subcategory: state.subcategory_filter(),
            price_range: self.price_range,
            facets: self.facets.clone(),
        }
    }

    /// Filters and then sorts `catalog` for the current selection.
    #[must_use]
    pub fn visible_products<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        let filtered = filter::apply(catalog.all(), &self.criteria());
        filter::sort(filtered, self.sort_key)
    }

    /// Selects a category and resets the subcategory to `All`.
    ///
    /// `CustomOrder` leaves every piece of state untouched and escapes to the
    /// quote-request flow. Selecting while a detail is open closes it.
    pub fn select_category(&mut self, choice: CategoryChoice) -> Transition {
        let state = match choice {
            CategoryChoice::CustomOrder => {
                info!("Custom order selected; handing over to quote request");
                return Transition::Escaped(Route::RequestQuote);
            }
            CategoryChoice::All => BrowseState::Browsing,
            CategoryChoice::Named(category) => BrowseState::CategorySelected(category),
        };
        debug!("Category selected: {:?}", state.category_filter());
        self.move_to(state)
    }

    /// Selects a subcategory of the current category.
    ///
    /// Ignored while no category is selected. Selecting `All` goes back to the
    /// category listing. The name is not checked against the catalog; a
    /// subcategory from another category yields an empty listing.
    pub fn select_subcategory(&mut self, subcategory: SubcategoryFilter) -> Transition {
        let category = match self.browse_state() {
            BrowseState::Browsing => {
                debug!("Subcategory {subcategory} ignored: no category selected");
                return Transition::Ignored;
            }
            BrowseState::CategorySelected(c) | BrowseState::SubcategorySelected(c, _) => *c,
        };
        let state = match subcategory {
            SubcategoryFilter::All => BrowseState::CategorySelected(category),
            SubcategoryFilter::Named(name) => BrowseState::SubcategorySelected(category, name),
        };
        self.move_to(state)
    }

    /// Opens the detail view for `product`, remembering the listing to return to.
    /// Opening another product while a detail is open replaces it.
    pub fn open_detail(&mut self, product: &Product) -> Transition {
        let return_to = self.browse_state().clone();
        debug!("Opening detail for product {}", product.id);
        self.view = ViewState::DetailOpen {
            product: Box::new(product.clone()),
            return_to,
        };
        Transition::Navigated(Route::Product(product.id))
    }

    /// Closes the detail view and restores the listing it was opened from.
    pub fn close_detail(&mut self) -> Transition {
        match std::mem::take(&mut self.view) {
            ViewState::DetailOpen { return_to, .. } => {
                let route = return_to.route();
                self.view = ViewState::Listing(return_to);
                Transition::Navigated(route)
            }
            listing @ ViewState::Listing(_) => {
                self.view = listing;
                Transition::Ignored
            }
        }
    }

    /// Returns to `Browsing(All, All)` and clears price, facet and sort
    /// selections.
    pub fn reset_filters(&mut self) -> Transition {
        info!("Resetting all filters");
        self.price_range = self.price_domain;
        self.facets.clear();
        self.sort_key = SortKey::default();
        self.move_to(BrowseState::Browsing)
    }

    /// Replaces the price range. Bounds are kept as given; an inverted range
    /// produces an empty listing.
    pub fn set_price_range(&mut self, range: PriceRange) {
        debug!("Price range set to {}..={}", range.min, range.max);
        self.price_range = range;
    }

    /// Adds `value` to the facet's accepted set, or removes it if already
    /// there. Returns true if the value is now selected.
    pub fn toggle_facet(&mut self, facet: Facet, value: &str) -> bool {
        let accepted = self.facets.entry(facet).or_default();
        let selected = if accepted.remove(value) {
            false
        } else {
            accepted.insert(value.to_string());
            true
        };
        if accepted.is_empty() {
            self.facets.remove(&facet);
        }
        debug!("Facet {facet} value '{value}' selected: {selected}");
        selected
    }

    /// Drops every facet selection.
    pub fn clear_facets(&mut self) {
        self.facets.clear();
    }

    /// Changes the listing order.
    pub const fn set_sort(&mut self, key: SortKey) {
        self.sort_key = key;
    }

    fn move_to(&mut self, state: BrowseState) -> Transition {
        let route = state.route();
        self.view = ViewState::Listing(state);
        Transition::Navigated(route)
    }
}
