//! Filter to keep only restaurants in the requested price band.

use crate::criteria::Criteria;
use crate::traits::Filter;
use catalog::Restaurant;

/// Keeps restaurants whose cost category equals the requested budget.
///
/// Restaurants with no cost category never match a budget.
pub struct BudgetFilter;

impl Filter for BudgetFilter {
    fn name(&self) -> &str {
        "BudgetFilter"
    }

    fn apply<'a>(
        &self,
        candidates: Vec<&'a Restaurant>,
        criteria: &Criteria,
    ) -> Vec<&'a Restaurant> {
        let Some(budget) = criteria.budget else {
            return candidates;
        };
        candidates
            .into_iter()
            .filter(|restaurant| restaurant.cost_category == Some(budget))
            .collect()
    }
}
