//! General commands - help and the session welcome banner.
//! These need no selection state and only describe what the shell can do.

use crate::core::Catalog;

/// Lists every shell command with a short description.
#[must_use]
pub fn help() -> String {
    "**Catalog Help**\n\
    Browse the furniture catalog one command per line.\n\n\
    **Browsing**\n\
    • `categories` - Shows the category menu.\n\
    • `category <name | all | custom>` - Selects a category.\n\
    • `subcategories` - Shows the subcategories of the selected category.\n\
    • `sub <name | all>` - Selects a subcategory.\n\
    • `list` - Shows the products matching the current selection.\n\
    • `featured` - Shows a few products from each category.\n\n\
    **Filters**\n\
    • `price <min> <max> | price any` - Limits the price range in TZS.\n\
    • `facet <name> <value> | facet clear` - Toggles a color, material, size, style, assembly or tv-size value.\n\
    • `facets` - Shows the facet values available here.\n\
    • `sort <featured | price-low | price-high | name>` - Changes the order.\n\
    • `reset` - Clears every selection.\n\n\
    **Products**\n\
    • `open <id | name>` - Shows a product's details.\n\
    • `close` - Returns to the listing.\n\
    • `inquire` - Messages the business about the open product.\n\
    • `share` - Shares the open product.\n\n\
    Type `quit` to leave."
        .to_string()
}

/// Banner shown when a session starts.
#[must_use]
pub fn welcome(catalog: &Catalog) -> String {
    // The menu includes the "All" entry
    let categories = catalog.categories().len().saturating_sub(1);
    format!(
        "🛋️ Welcome! {} products in {categories} categories. Type `help` for commands.",
        catalog.len()
    )
}
