use clap::Parser;
use std::process;
use tx400_processor::cli::{args::Args, commands};

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => {
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("TX400 Processor - Pick-and-Place Export Reader");
    println!("==============================================");
    println!();
    println!("Parse, validate and catalog TX400 pick-and-place machine exports,");
    println!("and generate plain-text component orders from registered products.");
    println!();
    println!("USAGE:");
    println!("    tx400-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    validate    Validate an export and print its diagnostics report");
    println!("    show        Parse an export or registered product and print its components");
    println!("    register    Validate and register an export under a product name");
    println!("    list        List registered products");
    println!("    remove      Remove a registered product and its stored export");
    println!("    order       Generate a component order from a registered product");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Validate an export before registering it:");
    println!("    tx400-processor validate line3_export.csv");
    println!();
    println!("    # Register the export as a product and inspect it:");
    println!("    tx400-processor register \"Controller V2\" line3_export.csv");
    println!("    tx400-processor show \"Controller V2\" --search R1");
    println!();
    println!("    # Generate an order for all resistors:");
    println!("    tx400-processor order \"Controller V2\" --search R --quantity 250");
    println!();
    println!("For detailed help on any command, use:");
    println!("    tx400-processor <COMMAND> --help");
}
