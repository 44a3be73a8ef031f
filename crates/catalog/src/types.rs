//! Core domain types for the restaurant dataset.
//!
//! This module defines the record type every other crate works with and
//! the immutable `Catalog` that owns the loaded records.
//! - Enums for fixed sets of values (`CostCategory`)
//! - `Option<T>` for every field the dataset may leave blank
//! - Borrowing accessors so queries never copy the whole table

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Cost Category
// =============================================================================

/// Price band of a restaurant as labelled in the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostCategory {
    Low,
    Medium,
    High,
}

impl CostCategory {
    /// All categories, cheapest first
    pub const ALL: [CostCategory; 3] = [CostCategory::Low, CostCategory::Medium, CostCategory::High];

    /// Lowercase label used in the dataset and in explanations
    pub fn as_str(&self) -> &'static str {
        match self {
            CostCategory::Low => "low",
            CostCategory::Medium => "medium",
            CostCategory::High => "high",
        }
    }
}

impl fmt::Display for CostCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of `low`, `medium` or `high`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCostCategory(pub String);

impl fmt::Display for UnknownCostCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown cost category '{}' (expected low, medium or high)", self.0)
    }
}

impl std::error::Error for UnknownCostCategory {}

impl FromStr for CostCategory {
    type Err = UnknownCostCategory;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(CostCategory::Low),
            "medium" => Ok(CostCategory::Medium),
            "high" => Ok(CostCategory::High),
            _ => Err(UnknownCostCategory(s.to_string())),
        }
    }
}

// =============================================================================
// Restaurant Record
// =============================================================================

/// Geographic position of a restaurant.
///
/// Both coordinates travel together, so a record either has a full
/// position or none at all.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// One row of the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub name: String,
    pub city: String,
    pub primary_cuisine: Option<String>,
    pub cost_category: Option<CostCategory>,
    /// Approximate price for two
    pub cost: Option<f64>,
    pub rating: Option<f64>,
    pub location: Option<GeoPoint>,
}

impl Restaurant {
    /// Create a record with only the required fields set
    pub fn new(name: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            city: city.into(),
            primary_cuisine: None,
            cost_category: None,
            cost: None,
            rating: None,
            location: None,
        }
    }

    pub fn with_cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.primary_cuisine = Some(cuisine.into());
        self
    }

    pub fn with_cost_category(mut self, category: CostCategory) -> Self {
        self.cost_category = Some(category);
        self
    }

    pub fn with_cost(mut self, cost: f64) -> Self {
        self.cost = Some(cost);
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_location(mut self, latitude: f64, longitude: f64) -> Self {
        self.location = Some(GeoPoint { latitude, longitude });
        self
    }
}

// =============================================================================
// Catalog - The Immutable In-Memory Table
// =============================================================================

/// The full set of restaurant records, in dataset order.
///
/// A `Catalog` is built once (from a file or from records) and never
/// mutated afterwards. Queries take `&Catalog`, so one catalog can be
/// shared across threads freely.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    restaurants: Vec<Restaurant>,
}

impl Catalog {
    /// Build a catalog from records that have already been validated
    pub fn from_restaurants(restaurants: Vec<Restaurant>) -> Self {
        Self { restaurants }
    }

    /// All records in dataset order
    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Restaurant> {
        self.restaurants.iter()
    }

    /// Get a record by its position in the dataset
    pub fn get(&self, index: usize) -> Option<&Restaurant> {
        self.restaurants.get(index)
    }

    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }

    /// Distinct primary cuisines, sorted case-insensitively.
    ///
    /// Spellings differing only in case collapse to the first one seen.
    pub fn cuisines(&self) -> Vec<&str> {
        distinct_sorted(
            self.restaurants
                .iter()
                .filter_map(|r| r.primary_cuisine.as_deref()),
        )
    }

    /// Distinct cities, sorted case-insensitively
    pub fn cities(&self) -> Vec<&str> {
        distinct_sorted(self.restaurants.iter().map(|r| r.city.as_str()))
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Restaurant;
    type IntoIter = std::slice::Iter<'a, Restaurant>;

    fn into_iter(self) -> Self::IntoIter {
        self.restaurants.iter()
    }
}

fn distinct_sorted<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    let mut distinct: Vec<&str> = values
        .filter(|v| !v.trim().is_empty())
        .filter(|v| seen.insert(v.to_lowercase()))
        .collect();
    distinct.sort_by_key(|v| v.to_lowercase());
    distinct
}
