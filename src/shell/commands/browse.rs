//! Browse commands - category drilling, filters, sorting and the listing itself.
//!
//! Each command reads or updates the shell's `SelectionController` and returns
//! the text reply. Argument problems are reported as `Error::InvalidCommand`,
//! which the shell turns into a message.

use crate::{
    core::{
        CategoryChoice, CategoryFilter, PriceRange, SortKey, SubcategoryFilter, Transition,
        filter, listing,
    },
    entities::{Category, Facet, Product},
    errors::{Error, Result},
    shell::{Shell, handlers::autocomplete},
};
use std::fmt::Write as _;

const FACET_USAGE: &str =
    "usage: facet <color|material|size|style|assembly|tv-size> <value> | facet clear";

/// Lists the category menu: `All`, the catalog's categories, and `Custom`.
#[must_use]
pub fn categories(shell: &Shell) -> String {
    let mut names: Vec<String> = shell
        .data
        .catalog
        .categories()
        .iter()
        .map(ToString::to_string)
        .collect();
    names.push("Custom".to_string());
    format!("**Categories**\n{}", bullet_list(&names))
}

/// `category <name>` - selects a category, `all`, or `custom`.
pub fn category(shell: &mut Shell, args: &str) -> Result<String> {
    if args.is_empty() {
        return Err(Error::InvalidCommand {
            message: "usage: category <name | all | custom>".to_string(),
        });
    }

    let choice = match args.to_ascii_lowercase().as_str() {
        "all" => CategoryChoice::All,
        "custom" => CategoryChoice::CustomOrder,
        _ => match args.parse::<Category>() {
            Ok(category) => CategoryChoice::Named(category),
            Err(e) => {
                let suggestions = autocomplete::autocomplete_category(args);
                if suggestions.is_empty() {
                    return Err(e);
                }
                return Ok(format!(
                    "❌ Unknown category '{args}'. Did you mean: {}?",
                    suggestions.join(", ")
                ));
            }
        },
    };

    let transition = shell.controller.select_category(choice);
    let mut reply = describe_transition(&transition);
    if let Transition::Navigated(_) = transition {
        let current = shell.controller.browse_state().category_filter();
        let subs = subcategory_names(shell, current);
        if !subs.is_empty() {
            write!(reply, "\nSubcategories: {}", subs.join(", "))?;
        }
    }
    Ok(reply)
}

/// Lists the subcategories of the selected category.
#[must_use]
pub fn subcategories(shell: &Shell) -> String {
    let category = shell.controller.browse_state().category_filter();
    if category == CategoryFilter::All {
        return "Select a category first (try `categories`).".to_string();
    }
    let entries: Vec<String> = shell
        .data
        .catalog
        .subcategories(category)
        .iter()
        .map(ToString::to_string)
        .collect();
    if entries.is_empty() {
        return format!("No subcategories for {category}.");
    }
    format!("**Subcategories of {category}**\n{}", bullet_list(&entries))
}

/// `sub <name>` - selects a subcategory of the current category.
///
/// Names are matched case-insensitively against the catalog. An unmatched name
/// is still selected (it will list nothing) and the reply offers suggestions.
pub fn subcategory(shell: &mut Shell, args: &str) -> Result<String> {
    let category = shell.controller.browse_state().category_filter();
    let known = subcategory_names(shell, category);
    let canonical = known
        .iter()
        .find(|name| name.eq_ignore_ascii_case(args))
        .cloned();
    let wants_all = args.is_empty() || args.eq_ignore_ascii_case("all");

    let selection = if wants_all {
        SubcategoryFilter::All
    } else {
        SubcategoryFilter::Named(canonical.clone().unwrap_or_else(|| args.to_string()))
    };

    let transition = shell.controller.select_subcategory(selection);
    if transition == Transition::Ignored {
        return Ok("Select a category first (try `categories`).".to_string());
    }

    let mut reply = describe_transition(&transition);
    if canonical.is_none() && !wants_all {
        let suggestions =
            autocomplete::autocomplete_subcategory(&shell.data.catalog, category, args);
        if suggestions.is_empty() {
            write!(reply, "\nNo subcategory '{args}' in {category}.")?;
        } else {
            write!(reply, "\nDid you mean: {}?", suggestions.join(", "))?;
        }
    }
    Ok(reply)
}

/// `price <min> <max>` or `price any` - sets the price range.
pub fn price(shell: &mut Shell, args: &str) -> Result<String> {
    let range = if args.eq_ignore_ascii_case("any") || args.eq_ignore_ascii_case("reset") {
        shell.controller.price_domain()
    } else {
        let mut bounds = args.split_whitespace().map(parse_amount);
        match (bounds.next(), bounds.next(), bounds.next()) {
            (Some(min), Some(max), None) => PriceRange::new(min?, max?),
            _ => {
                return Err(Error::InvalidCommand {
                    message: "usage: price <min> <max> | price any".to_string(),
                });
            }
        }
    };
    shell.controller.set_price_range(range);

    let mut reply = format!(
        "💰 Price range: {} - {} TZS",
        listing::format_price_short(range.min),
        listing::format_price_short(range.max)
    );
    if range.min > range.max {
        reply.push_str("\nMinimum is above maximum; nothing will match.");
    }
    Ok(reply)
}

/// `facet <name> <value>` toggles a value; `facet clear` drops all.
pub fn facet(shell: &mut Shell, args: &str) -> Result<String> {
    if args.eq_ignore_ascii_case("clear") {
        shell.controller.clear_facets();
        return Ok("🧹 Facet filters cleared.".to_string());
    }

    let Some((name, value)) = args.split_once(char::is_whitespace) else {
        return Err(Error::InvalidCommand {
            message: FACET_USAGE.to_string(),
        });
    };
    let facet: Facet = name.parse()?;
    let value = value.trim();
    let canonical = listing::available_facet_values(shell.data.catalog.all(), facet)
        .into_iter()
        .find(|v| v.eq_ignore_ascii_case(value))
        .unwrap_or_else(|| value.to_string());

    let selected = shell.controller.toggle_facet(facet, &canonical);
    Ok(if selected {
        format!("✅ {facet}: '{canonical}' added")
    } else {
        format!("➖ {facet}: '{canonical}' removed")
    })
}

/// Shows the facet values available in the current category/subcategory.
pub fn facets(shell: &Shell) -> Result<String> {
    let mut scope = shell.controller.criteria();
    scope.price_range = PriceRange::unbounded();
    scope.facets.clear();
    let products = filter::apply(shell.data.catalog.all(), &scope);

    let mut reply = String::from("**Available filters**");
    for facet in Facet::ALL {
        let values = listing::available_facet_values(products.iter().copied(), facet);
        if !values.is_empty() {
            write!(reply, "\n• {facet}: {}", values.join(", "))?;
        }
    }
    Ok(reply)
}

/// `sort <key>` - changes the listing order.
pub fn sort(shell: &mut Shell, args: &str) -> Result<String> {
    let key: SortKey = args.parse()?;
    shell.controller.set_sort(key);
    Ok(format!("↕️ Sorted by {key}"))
}

/// Shows the filtered, sorted listing.
pub fn list(shell: &Shell) -> Result<String> {
    let controller = &shell.controller;
    let products = controller.visible_products(&shell.data.catalog);
    let state = controller.browse_state();
    let title = heading(state.category_filter(), &state.subcategory_filter());

    let mut reply = format!("**{title}** ({})", state.route());
    write!(reply, "\n{} products", products.len())?;
    if listing::has_active_filters(&controller.criteria(), &controller.price_domain()) {
        reply.push_str(" (filtered)");
    }
    if controller.sort_key() != SortKey::Featured {
        write!(reply, ", sorted by {}", controller.sort_key())?;
    }

    if products.is_empty() {
        reply.push_str("\nNo products found matching these filters.");
    } else {
        for product in products {
            write!(reply, "\n{}", product_line(product))?;
        }
    }
    Ok(reply)
}

/// Shows the home page selection: the first two products of each category.
pub fn featured(shell: &Shell) -> Result<String> {
    let mut reply = String::from("**Featured**");
    for product in listing::featured_by_category(&shell.data.catalog, 2) {
        write!(reply, "\n{}", product_line(product))?;
    }
    Ok(reply)
}

/// Clears every selection and returns to the full catalog.
pub fn reset(shell: &mut Shell) -> String {
    let transition = shell.controller.reset_filters();
    format!("🔄 Filters reset. {}", describe_transition(&transition))
}

/// One listing line: `#id | name | price | category / subcategory`
pub(crate) fn product_line(product: &Product) -> String {
    format!(
        "#{} | {} | {} | {} / {}",
        product.id, product.name, product.price_range, product.category, product.subcategory
    )
}

pub(crate) fn describe_transition(transition: &Transition) -> String {
    match transition {
        Transition::Navigated(route) => format!("📂 Now browsing {route}"),
        Transition::Ignored => "Nothing changed.".to_string(),
        Transition::Escaped(route) => {
            format!("📝 Custom pieces are made to order. Request a quote at {route}.")
        }
    }
}

fn heading(category: CategoryFilter, subcategory: &SubcategoryFilter) -> String {
    match (category, subcategory) {
        (CategoryFilter::All, _) => "All Products".to_string(),
        (CategoryFilter::Named(c), SubcategoryFilter::All) => c.to_string(),
        (CategoryFilter::Named(c), SubcategoryFilter::Named(s)) => format!("{c} / {s}"),
    }
}

fn subcategory_names(shell: &Shell, category: CategoryFilter) -> Vec<String> {
    shell
        .data
        .catalog
        .subcategories(category)
        .into_iter()
        .filter_map(|entry| match entry {
            SubcategoryFilter::Named(name) => Some(name),
            SubcategoryFilter::All => None,
        })
        .collect()
}

fn bullet_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("• {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parses an amount such as `2500000`, `2,500,000` or `2_500_000`.
fn parse_amount(raw: &str) -> Result<u64> {
    let digits: String = raw.chars().filter(|c| !matches!(c, ',' | '_')).collect();
    digits.parse().map_err(|_| Error::InvalidCommand {
        message: format!("'{raw}' is not a valid amount"),
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::{core::BrowseState, test_utils::sample_shell};

    #[test]
    fn test_categories_lists_menu() {
        let shell = sample_shell();
        let reply = categories(&shell);
        assert!(reply.contains("• All"));
        assert!(reply.contains("• Living Room"));
        assert!(reply.ends_with("• Custom"));
        assert!(!reply.contains("Entryway"));
    }

    #[test]
    fn test_category_selects_and_lists_subcategories() {
        let mut shell = sample_shell();
        let reply = category(&mut shell, "living room").unwrap();
        assert!(reply.contains("/products/Living%20Room"));
        assert!(reply.contains("Subcategories: Sofas, Coffee Tables"));
        assert_eq!(
            shell.controller.browse_state(),
            &BrowseState::CategorySelected(Category::LivingRoom)
        );
    }

    #[test]
    fn test_category_unknown_offers_suggestions() {
        let mut shell = sample_shell();
        let reply = category(&mut shell, "room").unwrap();
        assert!(reply.contains("Did you mean: Bedroom, Living Room?"));
        assert_eq!(shell.controller.browse_state(), &BrowseState::Browsing);

        assert!(matches!(
            category(&mut shell, "zzz"),
            Err(Error::UnknownCategory { .. })
        ));
    }

    #[test]
    fn test_category_custom_escapes() {
        let mut shell = sample_shell();
        category(&mut shell, "office").unwrap();
        let reply = category(&mut shell, "custom").unwrap();
        assert!(reply.contains("/request-quote"));
        assert_eq!(
            shell.controller.browse_state(),
            &BrowseState::CategorySelected(Category::Office)
        );
    }

    #[test]
    fn test_subcategory_is_matched_case_insensitively() {
        let mut shell = sample_shell();
        category(&mut shell, "living room").unwrap();
        subcategory(&mut shell, "sofas").unwrap();
        assert_eq!(
            shell.controller.browse_state(),
            &BrowseState::SubcategorySelected(Category::LivingRoom, "Sofas".to_string())
        );
    }

    #[test]
    fn test_subcategory_without_category() {
        let mut shell = sample_shell();
        let reply = subcategory(&mut shell, "Sofas").unwrap();
        assert!(reply.contains("Select a category first"));
        assert!(subcategories(&shell).contains("Select a category first"));
    }

    #[test]
    fn test_subcategories_lists_all_then_names() {
        let mut shell = sample_shell();
        category(&mut shell, "office").unwrap();
        assert_eq!(
            subcategories(&shell),
            "**Subcategories of Office**\n• All\n• Desks"
        );
    }

    #[test]
    fn test_subcategory_unknown_still_selects_and_lists_nothing() {
        let mut shell = sample_shell();
        category(&mut shell, "office").unwrap();
        let reply = subcategory(&mut shell, "Sofas").unwrap();
        assert!(reply.contains("No subcategory 'Sofas' in Office."));
        assert!(list(&shell).unwrap().contains("No products found"));
    }

    #[test]
    fn test_price_sets_range_and_rejects_garbage() {
        let mut shell = sample_shell();
        let reply = price(&mut shell, "0 1,000,000").unwrap();
        assert!(reply.contains("0 - 1.0M"));
        assert!(list(&shell).unwrap().contains("3 products (filtered)"));

        assert!(matches!(
            price(&mut shell, "cheap expensive"),
            Err(Error::InvalidCommand { .. })
        ));
        assert!(matches!(
            price(&mut shell, "100"),
            Err(Error::InvalidCommand { .. })
        ));

        let inverted = price(&mut shell, "2000000 1000000").unwrap();
        assert!(inverted.contains("nothing will match"));
        assert!(list(&shell).unwrap().contains("0 products"));

        price(&mut shell, "any").unwrap();
        assert!(list(&shell).unwrap().contains("8 products\n"));
    }

    #[test]
    fn test_facet_toggle_and_clear() {
        let mut shell = sample_shell();
        let added = facet(&mut shell, "color black").unwrap();
        assert!(added.contains("'Black' added"));
        let listing = list(&shell).unwrap();
        assert!(listing.contains("2 products (filtered)"));
        assert!(listing.contains("Nordic Dining Chair"));

        let removed = facet(&mut shell, "color Black").unwrap();
        assert!(removed.contains("removed"));

        facet(&mut shell, "assembly no assembly").unwrap();
        facet(&mut shell, "clear").unwrap();
        assert!(shell.controller.criteria().facets.is_empty());

        assert!(facet(&mut shell, "flavor sweet").is_err());
        assert!(facet(&mut shell, "color").is_err());
    }

    #[test]
    fn test_facets_scoped_to_current_category() {
        let mut shell = sample_shell();
        category(&mut shell, "office").unwrap();
        let reply = facets(&shell).unwrap();
        assert!(reply.contains("assembly: Assembly Required, No Assembly"));
        assert!(!reply.contains("color"));
    }

    #[test]
    fn test_sort_changes_listing_order() {
        let mut shell = sample_shell();
        category(&mut shell, "living room").unwrap();
        sort(&mut shell, "price-ascending").unwrap();
        let reply = list(&shell).unwrap();
        let coffee = reply.find("Glass Coffee Table").unwrap();
        let sofa = reply.find("Executive Leather Sofa").unwrap();
        assert!(coffee < sofa);
        assert!(reply.contains("sorted by price-ascending"));
    }

    #[test]
    fn test_list_headings() {
        let mut shell = sample_shell();
        assert!(
            list(&shell)
                .unwrap()
                .starts_with("**All Products** (/products)")
        );
        category(&mut shell, "kitchen & dining").unwrap();
        subcategory(&mut shell, "Dining Tables").unwrap();
        assert!(
            list(&shell)
                .unwrap()
                .starts_with("**Kitchen & Dining / Dining Tables**")
        );
    }

    #[test]
    fn test_featured_and_reset() {
        let mut shell = sample_shell();
        let reply = featured(&shell).unwrap();
        assert!(reply.contains("#1 | Executive Leather Sofa"));
        assert!(!reply.contains("#3 |"));

        category(&mut shell, "office").unwrap();
        sort(&mut shell, "name").unwrap();
        let reply = reset(&mut shell);
        assert!(reply.contains("/products"));
        assert_eq!(shell.controller.browse_state(), &BrowseState::Browsing);
        assert_eq!(shell.controller.sort_key(), SortKey::Featured);
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("2,500,000").unwrap(), 2_500_000);
        assert_eq!(parse_amount("2_500_000").unwrap(), 2_500_000);
        assert!(parse_amount("-5").is_err());
    }
}
