//! Shell input handlers
//!
//! This module provides helpers that sit beside the commands, such as name
//! suggestions for partial input.

/// Autocomplete handlers for category, subcategory and product names
pub mod autocomplete;
