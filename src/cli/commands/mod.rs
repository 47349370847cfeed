//! Command implementations for the TX400 processor CLI
//!
//! This module contains the command execution logic for the CLI interface.
//! Each command is implemented in its own module; `shared` holds the
//! logging setup and catalog plumbing they have in common.

pub mod catalog;
pub mod order;
pub mod shared;
pub mod show;
pub mod validate;

use crate::cli::args::{Args, Commands};
use crate::Result;

/// Main command runner for the TX400 processor
///
/// Dispatches to the appropriate subcommand handler based on CLI args:
/// - `validate`: diagnostics report for one export file
/// - `show`: parse and display a dataset
/// - `register` / `list` / `remove`: product catalog maintenance
/// - `order`: component order text generation
pub fn run(args: Args) -> Result<()> {
    match args.get_command() {
        Commands::Validate(validate_args) => validate::run_validate(validate_args),
        Commands::Show(show_args) => show::run_show(show_args),
        Commands::Register(register_args) => catalog::run_register(register_args),
        Commands::List(list_args) => catalog::run_list(list_args),
        Commands::Remove(remove_args) => catalog::run_remove(remove_args),
        Commands::Order(order_args) => order::run_order(order_args),
    }
}
