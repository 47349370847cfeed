//! Order command implementation
//!
//! Builds the plain-text component order from a registered product,
//! optionally narrowed by a designator search term. One quantity applies
//! to every line, matching the original order dialog.

use super::shared;
use crate::app::services::order::{generate_order, OrderLine};
use crate::cli::args::OrderArgs;
use crate::{Error, Result};
use std::fs;
use tracing::info;

/// Order command runner
pub fn run_order(args: OrderArgs) -> Result<()> {
    shared::setup_logging(args.get_log_level())?;
    args.validate()?;

    let catalog = shared::open_catalog(args.catalog_dir.clone())?;
    let result = catalog.load(&args.product)?;

    let term = args.search.as_deref().unwrap_or("");
    let selected = result.dataset.search(term);
    if selected.is_empty() {
        return Err(Error::configuration(format!(
            "no components of '{}' match '{}'",
            args.product, term
        )));
    }

    info!(
        "Ordering {} component(s) at quantity {}",
        selected.len(),
        args.quantity
    );

    let lines: Vec<OrderLine> = selected
        .into_iter()
        .map(|component| {
            OrderLine::from_display_row(&result.dataset.display_row(component), args.quantity)
        })
        .collect();
    let text = generate_order(&lines);

    match &args.output {
        Some(path) => {
            fs::write(path, &text).map_err(|e| {
                Error::io(format!("failed to write order to '{}'", path.display()), e)
            })?;
            println!("Order written to {}", path.display());
        }
        None => print!("{}", text),
    }

    Ok(())
}
