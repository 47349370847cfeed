//! Configuration management and validation.
//!
//! The original tool kept its catalog location as process-wide state; here
//! the directory is an explicit configuration value handed to the catalog
//! constructor so tests and callers can point it anywhere.

use crate::constants::DEFAULT_CATALOG_DIR_NAME;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration for TX400 processing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the persisted catalog mapping and stored exports
    pub catalog_dir: PathBuf,
}

impl Config {
    /// Create a configuration with an explicit catalog directory
    pub fn new(catalog_dir: impl Into<PathBuf>) -> Self {
        Self {
            catalog_dir: catalog_dir.into(),
        }
    }

    /// Create a configuration pointing at the default catalog location
    pub fn with_default_catalog_dir() -> Result<Self> {
        Ok(Self::new(Self::default_catalog_dir()?))
    }

    /// Resolve the default catalog directory
    ///
    /// Prefers the user's documents directory (where operators expect the
    /// product files to live), falling back to the home directory.
    pub fn default_catalog_dir() -> Result<PathBuf> {
        let base = dirs::document_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| {
                Error::configuration("could not resolve a home or documents directory")
            })?;
        Ok(base.join(DEFAULT_CATALOG_DIR_NAME))
    }

    /// Path of the persisted catalog mapping file
    pub fn catalog_file(&self) -> PathBuf {
        self.catalog_dir.join(crate::constants::CATALOG_FILENAME)
    }

    /// Create the catalog directory if it does not exist yet
    pub fn ensure_catalog_dir(&self) -> Result<()> {
        if !self.catalog_dir.exists() {
            std::fs::create_dir_all(&self.catalog_dir).map_err(|e| {
                Error::io(
                    format!(
                        "failed to create catalog directory '{}'",
                        self.catalog_dir.display()
                    ),
                    e,
                )
            })?;
            debug!("Created catalog directory: {}", self.catalog_dir.display());
        }
        Ok(())
    }

    /// Validate the configuration for consistency
    pub fn validate(&self) -> Result<()> {
        if self.catalog_dir.as_os_str().is_empty() {
            return Err(Error::configuration("catalog directory must not be empty"));
        }
        if self.catalog_dir.exists() && !self.catalog_dir.is_dir() {
            return Err(Error::configuration(format!(
                "catalog path is not a directory: {}",
                self.catalog_dir.display()
            )));
        }
        Ok(())
    }
}

impl AsRef<Path> for Config {
    fn as_ref(&self) -> &Path {
        &self.catalog_dir
    }
}
