//! Detail commands - opening a product and acting on it.
//!
//! `inquire` and `share` only build the message text; sending it is left to the
//! shell's `OutboundContact`.

use crate::{
    core::ContactRequest,
    entities::Product,
    errors::{Error, Result},
    shell::{Shell, commands::browse::describe_transition, handlers::autocomplete},
};
use std::fmt::Write as _;
use tracing::info;

/// `open <id | name>` - shows a product's details.
///
/// A number is looked up as an id. Anything else must match a product name,
/// ignoring case; close names are offered as suggestions.
pub fn open(shell: &mut Shell, args: &str) -> Result<String> {
    if args.is_empty() {
        return Err(Error::InvalidCommand {
            message: "usage: open <id | name>".to_string(),
        });
    }

    let product = if let Ok(id) = args.parse::<u32>() {
        shell
            .data
            .catalog
            .get(id)
            .ok_or(Error::ProductNotFound { id })?
    } else if let Some(product) = shell
        .data
        .catalog
        .all()
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(args))
    {
        product
    } else {
        let suggestions = autocomplete::autocomplete_product_name(&shell.data.catalog, args);
        if suggestions.is_empty() {
            return Err(Error::InvalidCommand {
                message: format!("no product named '{args}'"),
            });
        }
        return Ok(format!(
            "❌ No product named '{args}'. Did you mean: {}?",
            suggestions.join(", ")
        ));
    };

    let transition = shell.controller.open_detail(product);
    Ok(format!(
        "{}\n{}",
        describe_transition(&transition),
        render_detail(shell, product)?
    ))
}

/// Closes the detail view and returns to the listing it was opened from.
pub fn close(shell: &mut Shell) -> String {
    describe_transition(&shell.controller.close_detail())
}

/// Sends an inquiry about the open product to the business.
///
/// # Errors
/// Returns an error if the outbound contact fails.
pub fn inquire(shell: &mut Shell) -> Result<String> {
    let Some(product) = shell.controller.open_product() else {
        return Ok(no_product_open());
    };
    let request = shell.data.presenter.inquiry_request(product);
    info!("Inquiry for product {} ({})", product.id, product.name);
    send(shell, &request)
}

/// Shares the open product.
///
/// # Errors
/// Returns an error if the outbound contact fails.
pub fn share(shell: &mut Shell) -> Result<String> {
    let Some(product) = shell.controller.open_product() else {
        return Ok(no_product_open());
    };
    let request = shell.data.presenter.share_request(product);
    info!("Sharing product {} ({})", product.id, product.name);
    send(shell, &request)
}

fn send(shell: &Shell, request: &ContactRequest) -> Result<String> {
    shell.contact.open(request)?;
    Ok(request.destination.as_ref().map_or_else(
        || format!("🔗 Share message:\n{}", request.message),
        |number| format!("📨 Message to {number}:\n{}", request.message),
    ))
}

fn no_product_open() -> String {
    "No product is open (try `open <id>`).".to_string()
}

fn render_detail(shell: &Shell, product: &Product) -> Result<String> {
    let detail = shell.data.presenter.detail(product);
    let mut text = format!(
        "**{}**\n{} / {} | {}\n{}\n",
        detail.name, detail.category, detail.subcategory, detail.price_range, detail.description
    );
    writeln!(text, "Dimensions: {}", detail.dimensions)?;
    writeln!(text, "Materials: {}", detail.materials.join(", "))?;
    writeln!(text, "Finishes: {}", detail.finishes.join(", "))?;
    for feature in &detail.features {
        writeln!(text, "• {feature}")?;
    }
    write!(text, "Images: {}", detail.images.join(", "))?;
    Ok(text)
}
