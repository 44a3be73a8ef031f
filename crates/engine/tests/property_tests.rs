//! Property-based tests for the recommender.
//!
//! # Invariants tested
//!
//! - **Filter exactness:** every result satisfies every active filter.
//! - **Ordering:** scores are non-increasing.
//! - **Rated only:** no result lacks a rating.
//! - **Length:** `min(top_n, rated survivors)`.
//! - **Idempotence:** the same query twice gives the same output.
//! - **Empty catalog:** always an empty result.

use catalog::{Catalog, CostCategory, Restaurant};
use engine::{Criteria, recommend};
use proptest::prelude::*;

const CITIES: [&str; 3] = ["Delhi", "delhi", "Makati City"];
const CUISINES: [&str; 4] = ["Italian", "italian", "North Indian", "Cafe"];

fn category_strategy() -> impl Strategy<Value = CostCategory> {
    prop::sample::select(CostCategory::ALL.to_vec())
}

fn restaurant_strategy() -> impl Strategy<Value = Restaurant> {
    (
        prop::sample::select(CITIES.to_vec()),
        prop::option::of(prop::sample::select(CUISINES.to_vec())),
        prop::option::of(category_strategy()),
        prop::option::of(0.0_f64..5000.0),
        prop::option::of(0.0_f64..=5.0),
        any::<u16>(),
    )
        .prop_map(|(city, cuisine, category, cost, rating, id)| Restaurant {
            name: format!("R{id}"),
            city: city.to_string(),
            primary_cuisine: cuisine.map(str::to_string),
            cost_category: category,
            cost,
            rating,
            location: None,
        })
}

fn catalog_strategy() -> impl Strategy<Value = Catalog> {
    prop::collection::vec(restaurant_strategy(), 0..40).prop_map(Catalog::from_restaurants)
}

fn criteria_strategy() -> impl Strategy<Value = Criteria> {
    (
        prop::option::of(prop::sample::select(vec!["DELHI", "makati city", "Nowhere"])),
        prop::collection::vec(prop::sample::select(vec!["ITALIAN", "cafe", "Thai"]), 0..3),
        prop::option::of(category_strategy()),
        0_usize..15,
    )
        .prop_map(|(city, cuisines, budget, top_n)| Criteria {
            city: city.map(str::to_string),
            cuisines: cuisines.into_iter().map(str::to_string).collect(),
            budget,
            top_n,
        })
}

/// Reference predicate, written independently of the filter code
fn matches(restaurant: &Restaurant, criteria: &Criteria) -> bool {
    let city_ok = criteria
        .city
        .as_ref()
        .is_none_or(|c| restaurant.city.eq_ignore_ascii_case(c));
    let cuisine_ok = criteria.cuisines.is_empty()
        || restaurant.primary_cuisine.as_ref().is_some_and(|rc| {
            criteria.cuisines.iter().any(|c| rc.eq_ignore_ascii_case(c))
        });
    let budget_ok = criteria
        .budget
        .is_none_or(|b| restaurant.cost_category == Some(b));
    city_ok && cuisine_ok && budget_ok
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn results_satisfy_every_active_filter(
        catalog in catalog_strategy(),
        criteria in criteria_strategy(),
    ) {
        for rec in recommend(&catalog, &criteria) {
            prop_assert!(matches(&rec.restaurant, &criteria), "{:?} does not match {:?}", rec.restaurant, criteria);
        }
    }

    #[test]
    fn scores_are_non_increasing(
        catalog in catalog_strategy(),
        criteria in criteria_strategy(),
    ) {
        let results = recommend(&catalog, &criteria);
        for pair in results.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn every_result_is_rated(
        catalog in catalog_strategy(),
        criteria in criteria_strategy(),
    ) {
        prop_assert!(recommend(&catalog, &criteria).iter().all(|r| r.restaurant.rating.is_some()));
    }

    #[test]
    fn length_is_top_n_clamped_to_rated_matches(
        catalog in catalog_strategy(),
        criteria in criteria_strategy(),
    ) {
        let eligible = catalog
            .iter()
            .filter(|r| r.rating.is_some() && matches(r, &criteria))
            .count();
        prop_assert_eq!(recommend(&catalog, &criteria).len(), criteria.top_n.min(eligible));
    }

    #[test]
    fn recommend_is_idempotent(
        catalog in catalog_strategy(),
        criteria in criteria_strategy(),
    ) {
        prop_assert_eq!(recommend(&catalog, &criteria), recommend(&catalog, &criteria));
    }

    #[test]
    fn empty_catalog_gives_nothing(criteria in criteria_strategy()) {
        prop_assert!(recommend(&Catalog::default(), &criteria).is_empty());
    }
}
