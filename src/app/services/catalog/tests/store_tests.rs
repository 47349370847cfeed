//! Tests for the JSON-file-backed catalog store

use super::*;
use crate::app::services::catalog::FileCatalog;
use crate::Error;

#[test]
fn test_missing_file_is_empty_mapping() {
    let (_temp, config) = create_test_config();
    let store = FileCatalog::new(config);

    assert!(store.list_entries().unwrap().is_empty());
}

#[test]
fn test_put_then_list_reflects_entry() {
    let (_temp, config) = create_test_config();
    let mut store = FileCatalog::new(config);

    store.put_entry("Controller", "controller.csv").unwrap();
    let entries = store.list_entries().unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries.get("Controller").unwrap(), "controller.csv");
}

#[test]
fn test_remove_then_list_excludes_entry() {
    let (_temp, config) = create_test_config();
    let mut store = FileCatalog::new(config);

    store.put_entry("A", "a.csv").unwrap();
    store.put_entry("B", "b.csv").unwrap();
    store.remove_entry("A").unwrap();

    let entries = store.list_entries().unwrap();
    assert_eq!(entries.len(), 1);
    assert!(!entries.contains_key("A"));

    // Removing an absent name persists the unchanged mapping
    store.remove_entry("A").unwrap();
    assert_eq!(store.list_entries().unwrap().len(), 1);
}

#[test]
fn test_reload_yields_identical_mapping() {
    let (_temp, config) = create_test_config();
    let mut store = FileCatalog::new(config.clone());

    store.put_entry("Controller V2", "controller_v2.csv").unwrap();
    store.put_entry("Placa Mãe", "placa_mãe.csv").unwrap();

    // A fresh store over the same directory sees the same mapping
    let reloaded = FileCatalog::new(config);
    assert_eq!(
        store.list_entries().unwrap(),
        reloaded.list_entries().unwrap()
    );
}

#[test]
fn test_persisted_file_is_pretty_and_unescaped() {
    let (_temp, config) = create_test_config();
    let mut store = FileCatalog::new(config.clone());

    store.put_entry("Placa Mãe", "placa_mãe.csv").unwrap();

    let content = std::fs::read_to_string(config.catalog_file()).unwrap();
    assert!(content.contains('\n'));
    assert!(content.contains("Placa Mãe"));
    assert!(!content.contains("\\u"));
}

#[test]
fn test_corrupt_mapping_is_a_format_error() {
    let (_temp, config) = create_test_config();
    config.ensure_catalog_dir().unwrap();
    std::fs::write(config.catalog_file(), "not json {").unwrap();

    let store = FileCatalog::new(config);
    match store.list_entries() {
        Err(Error::CatalogFormat { .. }) => {}
        other => panic!("expected CatalogFormat error, got {:?}", other),
    }
}
