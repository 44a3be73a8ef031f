//! Filter to keep only restaurants serving one of the requested cuisines.

use crate::criteria::Criteria;
use crate::traits::Filter;
use catalog::Restaurant;
use std::collections::HashSet;

/// Keeps restaurants whose primary cuisine is in the requested set.
///
/// ## Algorithm
/// 1. Lowercase the requested cuisines into a set (blank entries dropped)
/// 2. Keep a restaurant if its lowercased primary cuisine is a member
/// 3. Restaurants without a primary cuisine never match
pub struct CuisineFilter;

impl Filter for CuisineFilter {
    fn name(&self) -> &str {
        "CuisineFilter"
    }

    fn apply<'a>(
        &self,
        candidates: Vec<&'a Restaurant>,
        criteria: &Criteria,
    ) -> Vec<&'a Restaurant> {
        let wanted: HashSet<String> = criteria
            .cuisines
            .iter()
            .filter(|c| !c.is_empty())
            .map(|c| c.to_lowercase())
            .collect();
        if wanted.is_empty() {
            return candidates;
        }

        candidates
            .into_iter()
            .filter(|restaurant| {
                restaurant
                    .primary_cuisine
                    .as_ref()
                    .is_some_and(|cuisine| wanted.contains(&cuisine.to_lowercase()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_data() -> Vec<Restaurant> {
        vec![
            Restaurant::new("A", "Delhi").with_cuisine("Italian"),
            Restaurant::new("B", "Delhi").with_cuisine("north indian"),
            Restaurant::new("C", "Delhi").with_cuisine("Chinese"),
            Restaurant::new("D", "Delhi"),
            Restaurant::new("E", "Delhi").with_cuisine("Italian Pizza"),
        ]
    }

    #[test]
    fn test_cuisine_filter_matches_any_requested() {
        let data = create_test_data();
        let criteria = Criteria::new().with_cuisines(["ITALIAN", "North Indian"]);

        let filtered = CuisineFilter.apply(data.iter().collect(), &criteria);

        let names: Vec<_> = filtered.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn test_cuisine_filter_without_cuisines_keeps_everything() {
        let data = create_test_data();

        let filtered = CuisineFilter.apply(data.iter().collect(), &Criteria::new());
        assert_eq!(filtered.len(), 5);

        let filtered = CuisineFilter.apply(data.iter().collect(), &Criteria::new().with_cuisine(""));
        assert_eq!(filtered.len(), 5);
    }
}
