//! Core traits for the post-ranking filter pipeline.
//!
//! A filter is a late-bound predicate over a full movie record. The ranker
//! never knows which scoring scheme a filter uses.

use data_loader::MovieRecord;

/// Core trait for filtering ranked candidates.
///
/// `Send + Sync` lets a configured pipeline be shared by concurrent queries.
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether a candidate movie stays in the result set
    fn keep(&self, movie: &MovieRecord) -> bool;
}
