//! Test utilities for TX400 parser testing
//!
//! Shared export fixtures and helpers used across the parser test modules.

use std::io::Write;
use tempfile::NamedTempFile;


/// A well-formed export with two feeders and three components
pub fn create_test_export() -> String {
    [
        "Feeder,F1,8mm,N,1,0,0,R1 100R",
        "Feeder,F2,8mm,N,2,0,0,C5 100nF",
        "Comp,F1,1,0402,R1,extra",
        "Comp,F1,2,0402,R2",
        "Comp,F2,3,0603,C1",
    ]
    .join("\n")
}

/// An export mixing valid rows with short rows, unknown tags, and blanks
pub fn create_messy_export() -> String {
    [
        "Station,TX400,export",
        "Feeder,F1,8mm,N,1,0,0,R1 100R",
        "Feeder,F9,too,short",
        "",
        "Comp,F1,1,0402,R1",
        "Comp,F1,incomplete",
        "trailing,garbage",
    ]
    .join("\n")
}

/// Helper to create a temporary export file with given content
pub fn create_temp_export(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "{}", content).unwrap();
    temp_file
}
