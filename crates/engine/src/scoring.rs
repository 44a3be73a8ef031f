//! Cost-weighted scoring and ranking of filtered restaurants.
//!
//! `score = rating * (cost / (max_cost + 1))`, where `max_cost` is taken
//! over the current query's survivors, not the whole catalog. The `+ 1`
//! keeps the denominator positive when every cost is zero.

use catalog::Restaurant;
use std::cmp::Ordering;

/// A restaurant paired with its score for one query
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredRestaurant<'a> {
    pub restaurant: &'a Restaurant,
    pub score: f64,
}

/// Highest known cost among the candidates, `0.0` if none has a cost
pub fn max_cost(candidates: &[&Restaurant]) -> f64 {
    candidates
        .iter()
        .filter_map(|r| r.cost)
        .fold(0.0, f64::max)
}

/// Score a single restaurant against the query's `max_cost`.
///
/// A missing cost counts as zero, which yields a score of zero.
pub fn cost_weighted_score(rating: f64, cost: Option<f64>, max_cost: f64) -> f64 {
    rating * (cost.unwrap_or(0.0) / (max_cost + 1.0))
}

/// Score every rated candidate, keeping input order.
///
/// Unrated candidates are skipped so the output can be ranked even when a
/// custom pipeline forgot to drop them.
pub fn score_candidates(candidates: Vec<&Restaurant>) -> Vec<ScoredRestaurant<'_>> {
    let ceiling = max_cost(&candidates);
    candidates
        .into_iter()
        .filter_map(|restaurant| {
            let rating = restaurant.rating?;
            Some(ScoredRestaurant {
                restaurant,
                score: cost_weighted_score(rating, restaurant.cost, ceiling),
            })
        })
        .collect()
}

/// Sort by score, highest first.
///
/// The sort is stable, so equal scores keep their catalog order.
pub fn rank(scored: &mut [ScoredRestaurant<'_>]) {
    scored.sort_by(|a, b| compare_scores(b.score, a.score));
}

fn compare_scores(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}
