//! Validate command implementation
//!
//! Runs the strict validator over one export file and prints the
//! diagnostics report. The process exits non-zero when the report is
//! non-empty, so the command doubles as a scriptable acceptance check.

use super::shared;
use crate::app::services::validator;
use crate::cli::args::{OutputFormat, ValidateArgs};
use crate::{Error, Result};
use tracing::info;

/// Validate command runner
pub fn run_validate(args: ValidateArgs) -> Result<()> {
    shared::setup_logging(args.get_log_level())?;

    info!("Validating export: {}", args.file.display());
    let report = validator::validate_file(&args.file);

    match args.output_format {
        OutputFormat::Human => {
            if report.is_valid() {
                if !args.quiet {
                    println!("{}: no validation errors found", args.file.display());
                }
            } else if !args.quiet {
                print!("{}", report);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report.entries())?);
        }
    }

    if report.is_valid() {
        Ok(())
    } else {
        Err(Error::validation_failed(
            args.file.display().to_string(),
            report,
        ))
    }
}
