//! Catalog maintenance commands: register, list, remove
//!
//! These commands replace the original developer-mode product dialogs.
//! Registration keeps the validation gate: a file with any diagnostic is
//! refused, and the first few report entries are echoed for the operator.

use super::shared;
use crate::cli::args::{ListArgs, OutputFormat, RegisterArgs, RemoveArgs};
use crate::{Error, Result};
use tracing::info;

/// Maximum report entries echoed when registration is refused
const REPORT_PREVIEW_LIMIT: usize = 10;

/// Register command runner
pub fn run_register(args: RegisterArgs) -> Result<()> {
    shared::setup_logging(args.get_log_level())?;
    args.validate()?;

    let mut catalog = shared::open_catalog(args.catalog_dir.clone())?;
    match catalog.register(&args.name, &args.file) {
        Ok(stored) => {
            info!("Stored export at {}", stored.display());
            println!("Registered product '{}' -> {}", args.name, stored.display());
            Ok(())
        }
        Err(Error::ValidationFailed { file, report }) => {
            eprintln!("The file has validation errors:");
            for entry in report.entries().iter().take(REPORT_PREVIEW_LIMIT) {
                eprintln!("  {}", entry);
            }
            if report.len() > REPORT_PREVIEW_LIMIT {
                eprintln!("  ... and {} more", report.len() - REPORT_PREVIEW_LIMIT);
            }
            Err(Error::ValidationFailed { file, report })
        }
        Err(e) => Err(e),
    }
}

/// List command runner
pub fn run_list(args: ListArgs) -> Result<()> {
    shared::setup_logging(args.get_log_level())?;

    let catalog = shared::open_catalog(args.catalog_dir.clone())?;
    let products = catalog.products()?;

    match args.output_format {
        OutputFormat::Human => {
            if products.is_empty() {
                println!("No products registered");
            } else {
                for (name, filename) in &products {
                    println!("{} -> {}", name, filename);
                }
                println!();
                println!("{} product(s)", products.len());
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&products)?);
        }
    }

    Ok(())
}

/// Remove command runner
pub fn run_remove(args: RemoveArgs) -> Result<()> {
    shared::setup_logging(args.get_log_level())?;

    let mut catalog = shared::open_catalog(args.catalog_dir.clone())?;
    catalog.remove(&args.name)?;
    println!("Removed product '{}'", args.name);
    Ok(())
}
