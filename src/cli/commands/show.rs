//! Show command implementation
//!
//! Parses an export (directly or through the catalog) and prints the
//! component table the original operator screen displayed: designator,
//! derived value and tolerance, footprint, feeder, and comment.

use super::shared;
use crate::app::models::DisplayRow;
use crate::app::services::tx400_parser::{self, ParseResult};
use crate::cli::args::{OutputFormat, ShowArgs};
use crate::Result;
use tracing::info;

/// Show command runner
pub fn run_show(args: ShowArgs) -> Result<()> {
    shared::setup_logging(args.get_log_level())?;
    args.validate()?;

    let result = load_dataset(&args)?;
    info!(
        "Loaded {} feeders and {} components",
        result.dataset.feeder_count(),
        result.dataset.component_count()
    );

    let term = args.search.as_deref().unwrap_or("");
    let rows: Vec<DisplayRow> = result
        .dataset
        .search(term)
        .into_iter()
        .map(|component| result.dataset.display_row(component))
        .collect();

    match args.output_format {
        OutputFormat::Human => print_table(&rows),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
    }

    Ok(())
}

fn load_dataset(args: &ShowArgs) -> Result<ParseResult> {
    if let Some(file) = &args.file {
        tx400_parser::parse_file(file)
    } else {
        // args.validate() guarantees a product name when no file is given
        let product = args.product.as_deref().unwrap_or_default();
        let catalog = shared::open_catalog(args.catalog_dir.clone())?;
        catalog.load(product)
    }
}

fn print_table(rows: &[DisplayRow]) {
    println!(
        "{:<12} {:<10} {:<10} {:<12} {:<8} {}",
        "Designator", "Valor", "Tolerância", "Footprint", "Feeder", "Comentário"
    );

    for row in rows {
        println!(
            "{:<12} {:<10} {:<10} {:<12} {:<8} {}",
            row.designator, row.value, row.tolerance, row.footprint, row.feeder_id, row.comment
        );
    }

    println!();
    println!("{} component(s)", rows.len());
}
