//! Core catalog logic - framework-agnostic store, filtering, navigation and
//! detail presentation. Nothing in here performs I/O.

/// Immutable product list and category index
pub mod catalog;
/// Image resolution, detail view model and outbound message text
pub mod detail;
/// Filter criteria, filtering and sorting
pub mod filter;
/// Facet availability, active-filter detection, price labels, featured picks
pub mod listing;
/// Selection state machine and routes
pub mod navigation;

pub use catalog::Catalog;
pub use detail::{ContactRequest, DetailPresenter, ImageResolver, OutboundContact, ProductDetail};
pub use filter::{CategoryFilter, FilterCriteria, PriceRange, SortKey, SubcategoryFilter};
pub use navigation::{
    BrowseState, CategoryChoice, Route, SelectionController, Transition, ViewState,
};
