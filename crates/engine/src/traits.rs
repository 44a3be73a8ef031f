//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible predicates to be applied to the working set of a query.

use crate::criteria::Criteria;
use catalog::Restaurant;

/// Core trait for filtering restaurants.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows one pipeline to serve concurrent queries
/// - Filters take ownership of the working set and return the survivors
///   in their original relative order
/// - The working set borrows from the catalog; filters never copy or
///   mutate records
/// - A filter whose criterion is absent returns its input unchanged
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to the working set.
    fn apply<'a>(
        &self,
        candidates: Vec<&'a Restaurant>,
        criteria: &Criteria,
    ) -> Vec<&'a Restaurant>;
}
