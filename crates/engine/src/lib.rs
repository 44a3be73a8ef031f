//! Filter-rank-explain engine for restaurant recommendations.
//!
//! This crate provides:
//! - `Criteria`, the query input
//! - Filter trait and implementations for city, cuisine, budget and rating
//! - FilterPipeline for composing filters
//! - Cost-weighted scoring and stable ranking
//! - `explain`, a one-line justification per result
//! - `Recommender`, which ties the stages together
//!
//! ## Architecture
//! A query runs in stages over a borrowed `Catalog`:
//! 1. Filters narrow the working set (references into the catalog)
//! 2. Survivors are scored: `rating * cost / (max_cost + 1)`
//! 3. Results are sorted, truncated to `top_n` and explained
//!
//! ## Example Usage
//! ```ignore
//! use engine::{Criteria, recommend};
//! use catalog::CostCategory;
//!
//! let criteria = Criteria::new()
//!     .with_city("New Delhi")
//!     .with_cuisine("North Indian")
//!     .with_budget(CostCategory::Low)
//!     .with_top_n(5);
//!
//! for rec in recommend(&catalog, &criteria) {
//!     println!("{} ({:.2}): {}", rec.restaurant.name, rec.score, rec.explanation);
//! }
//! ```

pub mod criteria;
pub mod explain;
pub mod filter_pipeline;
pub mod filters;
pub mod recommender;
pub mod scoring;
pub mod traits;

// Re-export main types
pub use criteria::{Criteria, DEFAULT_TOP_N};
pub use explain::{explain, title_case};
pub use filter_pipeline::FilterPipeline;
pub use recommender::{Recommendation, Recommender, recommend};
pub use scoring::ScoredRestaurant;
pub use traits::Filter;
