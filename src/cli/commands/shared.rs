//! Shared components for CLI commands
//!
//! Logging setup and catalog plumbing used across the command
//! implementations.

use crate::app::services::catalog::Catalog;
use crate::config::Config;
use crate::Result;
use std::path::PathBuf;
use tracing::debug;

/// Set up structured logging at the requested level
pub fn setup_logging(log_level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("tx400_processor={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Resolve the catalog configuration from an optional CLI override
pub fn resolve_config(catalog_dir: Option<PathBuf>) -> Result<Config> {
    match catalog_dir {
        Some(dir) => Ok(Config::new(dir)),
        None => Config::with_default_catalog_dir(),
    }
}

/// Open the file-backed catalog for a command
pub fn open_catalog(catalog_dir: Option<PathBuf>) -> Result<Catalog> {
    Catalog::open(resolve_config(catalog_dir)?)
}
