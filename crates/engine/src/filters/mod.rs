//! Filter implementations for the recommendation pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod budget;
pub mod city;
pub mod cuisine;
pub mod rated;

// Re-export for convenience
pub use budget::BudgetFilter;
pub use city::CityFilter;
pub use cuisine::CuisineFilter;
pub use rated::RatedFilter;
