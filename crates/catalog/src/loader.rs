//! Building a `Catalog` from the dataset on disk.
//!
//! Loading happens once per process, before any query runs. The result is
//! immutable, so callers typically wrap it in an `Arc` or keep it on the
//! stack and hand out `&Catalog`.

use crate::error::Result;
use crate::parser;
use crate::types::*;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

impl Catalog {
    /// Load the restaurant dataset from a CSV file
    ///
    /// Steps:
    /// 1. Decode the file as Latin-1
    /// 2. Resolve columns from the header row
    /// 3. Parse and validate every row (in parallel, order preserved)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading restaurant catalog from {:?}", path);
        let start = Instant::now();

        let restaurants = parser::parse_restaurants(path)?;
        let catalog = Catalog::from_restaurants(restaurants);

        let summary = catalog.summary();
        info!(
            "Loaded {} restaurants ({} rated, {} with coordinates) in {:.2?}",
            summary.total,
            summary.rated,
            summary.located,
            start.elapsed()
        );
        debug!(
            "Catalog has {} cities and {} cuisines",
            summary.cities, summary.cuisines
        );
        Ok(catalog)
    }

    /// Counts for logging and the CLI header
    pub fn summary(&self) -> CatalogSummary {
        CatalogSummary {
            total: self.len(),
            rated: self.iter().filter(|r| r.rating.is_some()).count(),
            located: self.iter().filter(|r| r.location.is_some()).count(),
            cities: self.cities().len(),
            cuisines: self.cuisines().len(),
        }
    }
}

/// Aggregate counts over a catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogSummary {
    pub total: usize,
    pub rated: usize,
    pub located: usize,
    pub cities: usize,
    pub cuisines: usize,
}
