//! Shell command implementations organized by area.

/// Category, subcategory, filter, sort and listing commands
pub mod browse;

/// Product detail, inquiry and share commands
pub mod detail;

/// Help and welcome text
pub mod general;
