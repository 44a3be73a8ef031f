//! Query input for the recommender.

use catalog::CostCategory;
use serde::{Deserialize, Serialize};

/// Number of results returned when the caller does not say otherwise
pub const DEFAULT_TOP_N: usize = 10;

/// What the user is looking for.
///
/// Every field except `top_n` is optional; an absent field switches the
/// matching filter off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criteria {
    pub city: Option<String>,
    pub cuisines: Vec<String>,
    pub budget: Option<CostCategory>,
    pub top_n: usize,
}

impl Criteria {
    pub fn new() -> Self {
        Self {
            city: None,
            cuisines: Vec::new(),
            budget: None,
            top_n: DEFAULT_TOP_N,
        }
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Add one cuisine to the accepted set
    pub fn with_cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisines.push(cuisine.into());
        self
    }

    pub fn with_cuisines<I, S>(mut self, cuisines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cuisines.extend(cuisines.into_iter().map(Into::into));
        self
    }

    pub fn with_budget(mut self, budget: CostCategory) -> Self {
        self.budget = Some(budget);
        self
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// City criterion, or `None` when unset or blank
    pub fn city_filter(&self) -> Option<&str> {
        self.city.as_deref().filter(|c| !c.is_empty())
    }
}

impl Default for Criteria {
    fn default() -> Self {
        Self::new()
    }
}
