//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::criteria::Criteria;
use crate::filters::{BudgetFilter, CityFilter, CuisineFilter, RatedFilter};
use crate::traits::Filter;
use catalog::Restaurant;
use tracing;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(CityFilter)
///     .add_filter(CuisineFilter)
///     .add_filter(RatedFilter);
///
/// let survivors = pipeline.apply(catalog.iter().collect(), &criteria);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The pipeline every recommendation query runs:
    /// city, then cuisine, then budget, then dropping unrated records.
    pub fn standard() -> Self {
        Self::new()
            .add_filter(CityFilter)
            .add_filter(CuisineFilter)
            .add_filter(BudgetFilter)
            .add_filter(RatedFilter)
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Names of the filters in the order they run
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Apply all filters in sequence to the working set.
    ///
    /// Stops early once nothing is left.
    pub fn apply<'a>(
        &self,
        candidates: Vec<&'a Restaurant>,
        criteria: &Criteria,
    ) -> Vec<&'a Restaurant> {
        let mut current = candidates;
        for filter in &self.filters {
            if current.is_empty() {
                break;
            }
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, criteria);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::standard()
    }
}
