//! TX400 Processor Library
//!
//! A Rust library for reading TX400 pick-and-place machine exports and
//! maintaining a small persistent catalog of registered product files.
//!
//! This library provides tools for:
//! - Parsing TX400 CSV exports into an in-memory dataset of feeders and
//!   placed components, with best-effort tolerance for malformed rows
//! - Validating exports with line-numbered, operator-readable diagnostics
//! - Deriving component value and tolerance class from feeder comments
//! - Registering validated exports into a file-backed product catalog
//! - Assembling plain-text component orders

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod catalog;
        pub mod heuristics;
        pub mod order;
        pub mod rows;
        pub mod tx400_parser;
        pub mod validator;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{ComponentRecord, Dataset, FeederAttributes, ValidationReport};
pub use config::Config;

/// Result type alias for the TX400 processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for TX400 processing operations
///
/// Validation deliberately has no variant here: a validation pass always
/// returns a [`ValidationReport`], translating even stream failures into
/// report entries. Errors below cover the parser's stream-level failures
/// and the catalog's filesystem and bookkeeping operations.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Export stream could not be read or decoded
    #[error("read error in file '{file}': {message}")]
    Read {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Configuration error
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// Persisted catalog mapping could not be decoded
    #[error("catalog file '{file}' is corrupt: {message}")]
    CatalogFormat {
        file: String,
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// Product name already registered in the catalog
    #[error("product '{name}' is already registered")]
    DuplicateName { name: String },

    /// Product name not present in the catalog
    #[error("product '{name}' is not registered")]
    ProductNotFound { name: String },

    /// Export rejected by the validation gate
    #[error("file '{file}' failed validation with {} error(s)", report.len())]
    ValidationFailed {
        file: String,
        report: ValidationReport,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a stream read error with context
    pub fn read(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::Read {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a catalog format error
    pub fn catalog_format(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<serde_json::Error>,
    ) -> Self {
        Self::CatalogFormat {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a duplicate product name error
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName { name: name.into() }
    }

    /// Create a product not found error
    pub fn product_not_found(name: impl Into<String>) -> Self {
        Self::ProductNotFound { name: name.into() }
    }

    /// Create a validation gate rejection
    pub fn validation_failed(file: impl Into<String>, report: ValidationReport) -> Self {
        Self::ValidationFailed {
            file: file.into(),
            report,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::Read {
            file: "unknown".to_string(),
            message: "CSV decoding failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::CatalogFormat {
            file: "unknown".to_string(),
            message: "catalog mapping decoding failed".to_string(),
            source: Some(error),
        }
    }
}
