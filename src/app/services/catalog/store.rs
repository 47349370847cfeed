//! File-backed catalog store
//!
//! Persists the product mapping as pretty-printed UTF-8 JSON, written
//! whole-file on every mutation. Non-ASCII product names are stored
//! unescaped, so the file stays readable to an operator with a text
//! editor.

use std::collections::BTreeMap;
use std::fs;
use tracing::debug;

use super::CatalogStore;
use crate::config::Config;
use crate::{Error, Result};

/// Catalog store backed by a JSON file in the catalog directory
#[derive(Debug, Clone)]
pub struct FileCatalog {
    config: Config,
}

impl FileCatalog {
    /// Create a store over the configured catalog directory
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        let path = self.config.catalog_file();
        let content = serde_json::to_string_pretty(entries).map_err(|e| {
            Error::catalog_format(
                path.display().to_string(),
                "failed to encode catalog mapping",
                Some(e),
            )
        })?;

        self.config.ensure_catalog_dir()?;
        fs::write(&path, content).map_err(|e| {
            Error::io(
                format!("failed to write catalog file '{}'", path.display()),
                e,
            )
        })?;

        debug!("Persisted {} catalog entries", entries.len());
        Ok(())
    }
}

impl CatalogStore for FileCatalog {
    /// Load the whole mapping; a missing file is the empty mapping
    fn list_entries(&self) -> Result<BTreeMap<String, String>> {
        let path = self.config.catalog_file();
        if !path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            Error::io(
                format!("failed to read catalog file '{}'", path.display()),
                e,
            )
        })?;

        serde_json::from_str(&content).map_err(|e| {
            Error::catalog_format(
                path.display().to_string(),
                "catalog mapping is not valid JSON",
                Some(e),
            )
        })
    }

    fn put_entry(&mut self, name: &str, filename: &str) -> Result<()> {
        let mut entries = self.list_entries()?;
        entries.insert(name.to_string(), filename.to_string());
        self.save(&entries)
    }

    fn remove_entry(&mut self, name: &str) -> Result<()> {
        let mut entries = self.list_entries()?;
        entries.remove(name);
        self.save(&entries)
    }
}
