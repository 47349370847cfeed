//! Command-line argument definitions for the TX400 processor
//!
//! This module defines the complete CLI interface using the clap derive
//! API. Each subcommand carries its own argument struct with validation
//! and log-level helpers.

use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the TX400 export processor
///
/// Reads TX400 pick-and-place machine exports, validates them with
/// operator-readable diagnostics, and maintains a catalog of registered
/// product files.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "tx400-processor",
    version,
    about = "Parse, validate and catalog TX400 pick-and-place machine exports",
    long_about = "Reads TX400 CSV exports into a queryable dataset of feeders and placed \
                  components, validates files with line-numbered diagnostics before they \
                  may be registered, and maintains a file-backed catalog mapping product \
                  names to stored exports."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the TX400 processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Validate a TX400 export and print its diagnostics report
    Validate(ValidateArgs),
    /// Parse an export or registered product and print its components
    Show(ShowArgs),
    /// Validate and register an export under a product name
    Register(RegisterArgs),
    /// List registered products
    List(ListArgs),
    /// Remove a registered product and its stored export
    Remove(RemoveArgs),
    /// Generate a component order from a registered product
    Order(OrderArgs),
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

/// Arguments for the validate command
#[derive(Debug, Clone, Parser)]
pub struct ValidateArgs {
    /// TX400 export file to validate
    #[arg(value_name = "FILE", help = "TX400 export file to validate")]
    pub file: PathBuf,

    /// Output format for the diagnostics report
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the diagnostics report"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl ValidateArgs {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            verbosity_level(self.verbose)
        }
    }
}

/// Arguments for the show command
#[derive(Debug, Clone, Parser)]
pub struct ShowArgs {
    /// Registered product name to load from the catalog
    #[arg(value_name = "PRODUCT", help = "Registered product name to load")]
    pub product: Option<String>,

    /// Parse a file directly instead of a registered product
    #[arg(
        short = 'f',
        long = "file",
        value_name = "FILE",
        conflicts_with = "product",
        help = "Parse an export file directly instead of a registered product"
    )]
    pub file: Option<PathBuf>,

    /// Filter components by designator substring
    #[arg(
        short = 's',
        long = "search",
        value_name = "TERM",
        help = "Only show components whose designator contains TERM"
    )]
    pub search: Option<String>,

    /// Catalog directory override
    #[arg(
        long = "catalog-dir",
        value_name = "PATH",
        help = "Catalog directory (defaults to the user documents location)"
    )]
    pub catalog_dir: Option<PathBuf>,

    /// Output format for the dataset
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the dataset"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

impl ShowArgs {
    /// Validate the show command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if self.product.is_none() && self.file.is_none() {
            return Err(Error::configuration(
                "specify a registered product name or --file <FILE>",
            ));
        }
        if let Some(file) = &self.file {
            if !file.exists() {
                return Err(Error::configuration(format!(
                    "export file does not exist: {}",
                    file.display()
                )));
            }
        }
        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        verbosity_level(self.verbose)
    }
}

/// Arguments for the register command
#[derive(Debug, Clone, Parser)]
pub struct RegisterArgs {
    /// Product display name to register
    #[arg(value_name = "NAME", help = "Product display name")]
    pub name: String,

    /// TX400 export file to validate and store
    #[arg(value_name = "FILE", help = "TX400 export file to validate and store")]
    pub file: PathBuf,

    /// Catalog directory override
    #[arg(
        long = "catalog-dir",
        value_name = "PATH",
        help = "Catalog directory (defaults to the user documents location)"
    )]
    pub catalog_dir: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

impl RegisterArgs {
    /// Validate the register command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::configuration("product name must not be empty"));
        }
        if !self.file.exists() {
            return Err(Error::configuration(format!(
                "export file does not exist: {}",
                self.file.display()
            )));
        }
        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        verbosity_level(self.verbose)
    }
}

/// Arguments for the list command
#[derive(Debug, Clone, Parser)]
pub struct ListArgs {
    /// Catalog directory override
    #[arg(
        long = "catalog-dir",
        value_name = "PATH",
        help = "Catalog directory (defaults to the user documents location)"
    )]
    pub catalog_dir: Option<PathBuf>,

    /// Output format for the product listing
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the product listing"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

impl ListArgs {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        verbosity_level(self.verbose)
    }
}

/// Arguments for the remove command
#[derive(Debug, Clone, Parser)]
pub struct RemoveArgs {
    /// Registered product name to remove
    #[arg(value_name = "NAME", help = "Registered product name to remove")]
    pub name: String,

    /// Catalog directory override
    #[arg(
        long = "catalog-dir",
        value_name = "PATH",
        help = "Catalog directory (defaults to the user documents location)"
    )]
    pub catalog_dir: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

impl RemoveArgs {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        verbosity_level(self.verbose)
    }
}

/// Arguments for the order command
#[derive(Debug, Clone, Parser)]
pub struct OrderArgs {
    /// Registered product name to order components from
    #[arg(value_name = "PRODUCT", help = "Registered product name")]
    pub product: String,

    /// Filter components by designator substring
    #[arg(
        short = 's',
        long = "search",
        value_name = "TERM",
        help = "Only order components whose designator contains TERM"
    )]
    pub search: Option<String>,

    /// Quantity applied to every ordered line
    #[arg(
        short = 'n',
        long = "quantity",
        value_name = "COUNT",
        default_value_t = 100,
        help = "Quantity applied to every ordered line"
    )]
    pub quantity: u32,

    /// Write the order text to a file instead of stdout
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Write the order text to FILE instead of stdout"
    )]
    pub output: Option<PathBuf>,

    /// Catalog directory override
    #[arg(
        long = "catalog-dir",
        value_name = "PATH",
        help = "Catalog directory (defaults to the user documents location)"
    )]
    pub catalog_dir: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

impl OrderArgs {
    /// Validate the order command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if self.quantity == 0 {
            return Err(Error::configuration("quantity must be greater than 0"));
        }
        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        verbosity_level(self.verbose)
    }
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

/// Map a `-v` count to a tracing filter level
fn verbosity_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_validate_args_log_level() {
        let mut args = ValidateArgs {
            file: PathBuf::from("export.csv"),
            output_format: OutputFormat::Human,
            verbose: 0,
            quiet: false,
        };

        assert_eq!(args.get_log_level(), "warn");

        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");

        args.verbose = 3;
        assert_eq!(args.get_log_level(), "trace");

        args.quiet = true;
        assert_eq!(args.get_log_level(), "error");
    }

    #[test]
    fn test_show_args_require_a_source() {
        let args = ShowArgs {
            product: None,
            file: None,
            search: None,
            catalog_dir: None,
            output_format: OutputFormat::Human,
            verbose: 0,
        };
        assert!(args.validate().is_err());

        let args = ShowArgs {
            product: Some("Controller".to_string()),
            ..args
        };
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_register_args_validation() {
        let temp_dir = TempDir::new().unwrap();
        let export = temp_dir.path().join("export.csv");
        std::fs::write(&export, "Feeder,F1,8mm,N,1,0,0,R1 100R\n").unwrap();

        let args = RegisterArgs {
            name: "Controller".to_string(),
            file: export,
            catalog_dir: None,
            verbose: 0,
        };
        assert!(args.validate().is_ok());

        let mut blank_name = args.clone();
        blank_name.name = "  ".to_string();
        assert!(blank_name.validate().is_err());

        let mut missing_file = args;
        missing_file.file = PathBuf::from("/nonexistent/export.csv");
        assert!(missing_file.validate().is_err());
    }

    #[test]
    fn test_order_args_validation() {
        let args = OrderArgs {
            product: "Controller".to_string(),
            search: None,
            quantity: 100,
            output: None,
            catalog_dir: None,
            verbose: 0,
        };
        assert!(args.validate().is_ok());

        let mut zero_quantity = args;
        zero_quantity.quantity = 0;
        assert!(zero_quantity.validate().is_err());
    }
}
