//! Test utilities for catalog testing

use std::collections::BTreeMap;
use std::path::PathBuf;
use tempfile::TempDir;

use super::CatalogStore;
use crate::config::Config;
use crate::Result;

mod store_tests;

/// A catalog configuration rooted in a fresh temporary directory
pub fn create_test_config() -> (TempDir, Config) {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::new(temp_dir.path().join("catalog"));
    (temp_dir, config)
}

/// Write a valid two-row export next to the catalog and return its path
pub fn create_valid_export(temp_dir: &TempDir) -> PathBuf {
    let path = temp_dir.path().join("export.csv");
    std::fs::write(&path, "Feeder,F1,8mm,N,1,0,0,R1 100R\nComp,F1,1,0402,R1\n").unwrap();
    path
}

/// Write an export that fails validation (no feeder rows)
pub fn create_invalid_export(temp_dir: &TempDir) -> PathBuf {
    let path = temp_dir.path().join("broken.csv");
    std::fs::write(&path, "Comp,F1,1,0402,R1\n").unwrap();
    path
}

/// In-memory store exercising the `CatalogStore` seam without a filesystem
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl CatalogStore for MemoryStore {
    fn list_entries(&self) -> Result<BTreeMap<String, String>> {
        Ok(self.entries.clone())
    }

    fn put_entry(&mut self, name: &str, filename: &str) -> Result<()> {
        self.entries.insert(name.to_string(), filename.to_string());
        Ok(())
    }

    fn remove_entry(&mut self, name: &str) -> Result<()> {
        self.entries.remove(name);
        Ok(())
    }
}
