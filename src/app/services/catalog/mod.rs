//! Product catalog service
//!
//! Associates human-readable product names with stored TX400 export files.
//! The persisted artifact is a whole-file JSON mapping of display name to
//! stored filename, relative to a managed catalog directory; the exports
//! themselves are copied into that directory on registration.
//!
//! The parsing core never touches persistence directly: everything it
//! needs from storage is the narrow [`CatalogStore`] capability, and the
//! file-backed [`FileCatalog`] is one provider of it.
//!
//! ## Architecture
//!
//! - [`store`] - [`FileCatalog`], the JSON-file-backed store
//! - [`Catalog`] - product operations (gated registration, removal, lookup)

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::app::services::tx400_parser::{self, ParseResult};
use crate::app::services::validator;
use crate::config::Config;
use crate::constants::stored_filename;
use crate::{Error, Result};

pub mod store;

#[cfg(test)]
pub mod tests;

pub use store::FileCatalog;

/// The storage capability the catalog requires from its environment
///
/// Persistence is whole-mapping load/save; implementations only need to
/// return the current mapping and persist the mapping they are given.
/// Duplicate-name policy lives in [`Catalog::register`], not here.
pub trait CatalogStore {
    /// Load the complete name → filename mapping
    fn list_entries(&self) -> Result<BTreeMap<String, String>>;

    /// Insert or replace one association and persist the mapping
    fn put_entry(&mut self, name: &str, filename: &str) -> Result<()>;

    /// Drop one association and persist the mapping
    fn remove_entry(&mut self, name: &str) -> Result<()>;
}

/// Product catalog over a [`CatalogStore`]
///
/// Registration is gated by validation: a file enters the catalog only
/// with an empty validation report. Parsing alone is never an acceptance
/// test.
#[derive(Debug)]
pub struct Catalog<S: CatalogStore = FileCatalog> {
    config: Config,
    store: S,
}

impl Catalog<FileCatalog> {
    /// Open the file-backed catalog under the configured directory
    pub fn open(config: Config) -> Result<Self> {
        config.validate()?;
        config.ensure_catalog_dir()?;
        let store = FileCatalog::new(config.clone());
        Ok(Self { config, store })
    }
}

impl<S: CatalogStore> Catalog<S> {
    /// Build a catalog over any store implementation
    pub fn with_store(config: Config, store: S) -> Self {
        Self { config, store }
    }

    /// The complete name → stored-filename mapping
    pub fn products(&self) -> Result<BTreeMap<String, String>> {
        self.store.list_entries()
    }

    /// Register a product name for a TX400 export file
    ///
    /// Rejects duplicate names and any file whose validation report is
    /// non-empty, leaving the catalog untouched in both cases. On success
    /// the export is copied into the catalog directory under a filename
    /// derived from the product name, and the new mapping is persisted.
    /// Returns the stored file path.
    pub fn register(&mut self, name: &str, source: &Path) -> Result<PathBuf> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::configuration("product name must not be empty"));
        }

        if self.store.list_entries()?.contains_key(name) {
            return Err(Error::duplicate_name(name));
        }

        let report = validator::validate_file(source);
        if !report.is_valid() {
            return Err(Error::validation_failed(
                source.display().to_string(),
                report,
            ));
        }

        let filename = stored_filename(name);
        let destination = self.config.catalog_dir.join(&filename);
        fs::copy(source, &destination).map_err(|e| {
            Error::io(
                format!(
                    "failed to copy '{}' into the catalog directory",
                    source.display()
                ),
                e,
            )
        })?;

        self.store.put_entry(name, &filename)?;
        info!("Registered product '{}' as {}", name, filename);
        Ok(destination)
    }

    /// Remove a product from the catalog
    ///
    /// The backing file is deleted best-effort: a missing or undeletable
    /// file never blocks removal of the catalog entry.
    pub fn remove(&mut self, name: &str) -> Result<()> {
        let entries = self.store.list_entries()?;
        let filename = entries
            .get(name)
            .ok_or_else(|| Error::product_not_found(name))?;

        let stored_path = self.config.catalog_dir.join(filename);
        if let Err(e) = fs::remove_file(&stored_path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!(
                    "Could not delete stored export '{}': {}",
                    stored_path.display(),
                    e
                );
            }
        }

        self.store.remove_entry(name)?;
        info!("Removed product '{}'", name);
        Ok(())
    }

    /// Resolve a product name to its stored export path
    pub fn resolve(&self, name: &str) -> Result<PathBuf> {
        let entries = self.store.list_entries()?;
        let filename = entries
            .get(name)
            .ok_or_else(|| Error::product_not_found(name))?;
        Ok(self.config.catalog_dir.join(filename))
    }

    /// Resolve and parse a registered product's export
    pub fn load(&self, name: &str) -> Result<ParseResult> {
        let path = self.resolve(name)?;
        tx400_parser::parse_file(&path)
    }
}
