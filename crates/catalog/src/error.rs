//! Error types for the catalog crate.
//!
//! Loading is the only fallible part of the system: once a `Catalog`
//! exists, every query over it is total.

use thiserror::Error;

/// Errors that can occur while loading and validating the restaurant dataset
#[derive(Error, Debug)]
pub enum CatalogError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The header row lacks a column the loader needs
    #[error("Missing required column: {column}")]
    MissingColumn { column: String },

    /// Line in data file couldn't be parsed
    #[error("Parse error at line {line}: {reason}")]
    ParseError { line: usize, reason: String },

    /// A data field had an invalid value
    #[error("Invalid value for {field} at line {line}: {value}")]
    InvalidValue {
        line: usize,
        field: String,
        value: String,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
