//! Filter to drop restaurants that cannot be scored.

use crate::criteria::Criteria;
use crate::traits::Filter;
use catalog::Restaurant;

/// Removes restaurants with no rating.
///
/// The score is a multiple of the rating, so an unrated record has no
/// place in a ranking. Always active, independent of the criteria.
pub struct RatedFilter;

impl Filter for RatedFilter {
    fn name(&self) -> &str {
        "RatedFilter"
    }

    fn apply<'a>(
        &self,
        candidates: Vec<&'a Restaurant>,
        _criteria: &Criteria,
    ) -> Vec<&'a Restaurant> {
        candidates
            .into_iter()
            .filter(|restaurant| restaurant.rating.is_some())
            .collect()
    }
}
