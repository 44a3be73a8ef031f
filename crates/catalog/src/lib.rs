//! # Catalog Crate
//!
//! This crate owns the restaurant dataset: the record type, the CSV loader
//! and the immutable `Catalog` that queries borrow.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Restaurant, CostCategory, GeoPoint, Catalog)
//! - **parser**: Parse the Latin-1 CSV export into validated records
//! - **loader**: Build a `Catalog` from a file and summarise it
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_file(Path::new("data/cleaned_zomato_data.csv"))?;
//! println!("{} restaurants across {} cities", catalog.len(), catalog.cities().len());
//! ```

pub mod error;
pub mod loader;
pub mod parser;
pub mod types;

pub use error::{CatalogError, Result};
pub use loader::CatalogSummary;
pub use types::{Catalog, CostCategory, GeoPoint, Restaurant, UnknownCostCategory};
