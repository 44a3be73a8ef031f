//! # Recommender
//!
//! Runs one query end to end:
//! 1. Take every catalog record as the working set
//! 2. Apply the filter pipeline
//! 3. Score survivors against the query's max cost
//! 4. Sort by score, highest first (ties keep catalog order)
//! 5. Keep the first `top_n`
//! 6. Attach an explanation to each result
//!
//! The recommender holds no per-query state. One instance can serve any
//! number of queries, from any number of threads.

use std::time::Instant;

use catalog::{Catalog, Restaurant};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::criteria::Criteria;
use crate::explain::explain;
use crate::filter_pipeline::FilterPipeline;
use crate::scoring;

/// One ranked result returned to the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(flatten)]
    pub restaurant: Restaurant,
    pub score: f64,
    pub explanation: String,
}

/// Filter-rank-explain engine over a borrowed catalog
pub struct Recommender {
    pipeline: FilterPipeline,
}

impl Recommender {
    /// Create a recommender with a custom filter pipeline
    pub fn new(pipeline: FilterPipeline) -> Self {
        Self { pipeline }
    }

    /// Create a recommender running the standard city/cuisine/budget/rating filters
    pub fn standard() -> Self {
        Self::new(FilterPipeline::standard())
    }

    /// Main entry point: rank the catalog against the criteria
    ///
    /// # Returns
    /// At most `criteria.top_n` results, non-increasing in score, each
    /// satisfying every active filter. Degenerate input (`top_n == 0`,
    /// empty catalog, nothing matching) yields an empty vector.
    pub fn recommend(&self, catalog: &Catalog, criteria: &Criteria) -> Vec<Recommendation> {
        if criteria.top_n == 0 {
            debug!("top_n is 0, returning no recommendations");
            return Vec::new();
        }
        let start_time = Instant::now();

        let survivors = self.pipeline.apply(catalog.iter().collect(), criteria);
        debug!(
            "{} of {} restaurants survived filtering",
            survivors.len(),
            catalog.len()
        );
        if survivors.is_empty() {
            info!("No restaurants matched {:?}", criteria);
            return Vec::new();
        }

        let mut scored = scoring::score_candidates(survivors);
        scoring::rank(&mut scored);
        scored.truncate(criteria.top_n);

        let recommendations: Vec<Recommendation> = scored
            .into_iter()
            .map(|s| Recommendation {
                restaurant: s.restaurant.clone(),
                score: s.score,
                explanation: explain(s.restaurant),
            })
            .collect();

        info!(
            "Selected {} recommendations in {:.2?}",
            recommendations.len(),
            start_time.elapsed()
        );
        recommendations
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::standard()
    }
}

/// Rank `catalog` against `criteria` with the standard pipeline
pub fn recommend(catalog: &Catalog, criteria: &Criteria) -> Vec<Recommendation> {
    Recommender::standard().recommend(catalog, criteria)
}
