//! Filter implementations for ranked candidates.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod closure;
pub mod genre;
pub mod minimum_rating;
pub mod recency;
pub mod sentiment;

// Re-export for convenience
pub use closure::FnFilter;
pub use genre::GenreFilter;
pub use minimum_rating::MinimumRatingFilter;
pub use recency::YearRangeFilter;
pub use sentiment::{sentiment_score, SentimentFilter};
