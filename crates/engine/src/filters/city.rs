//! Filter to keep only restaurants in the requested city.

use crate::criteria::Criteria;
use crate::traits::Filter;
use catalog::Restaurant;

/// Keeps restaurants whose city equals the requested one, ignoring case.
///
/// The comparison is exact: "Delhi" does not match "New Delhi".
pub struct CityFilter;

impl Filter for CityFilter {
    fn name(&self) -> &str {
        "CityFilter"
    }

    fn apply<'a>(
        &self,
        candidates: Vec<&'a Restaurant>,
        criteria: &Criteria,
    ) -> Vec<&'a Restaurant> {
        let Some(city) = criteria.city_filter() else {
            return candidates;
        };
        let city = city.to_lowercase();
        candidates
            .into_iter()
            .filter(|restaurant| restaurant.city.to_lowercase() == city)
            .collect()
    }
}
