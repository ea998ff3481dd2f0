//! Filter to ensure a minimum quality threshold.
//!
//! Removes movies whose average vote is below a cut-off.

use crate::traits::Filter;
use data_loader::MovieRecord;

/// Removes candidates below a vote-average threshold (0-10 scale).
pub struct MinimumRatingFilter {
    min_vote_average: f32,
}

impl MinimumRatingFilter {
    /// Create a new MinimumRatingFilter.
    ///
    /// # Arguments
    /// * `min_vote_average` - Lowest vote average to keep (inclusive)
    pub fn new(min_vote_average: f32) -> Self {
        Self { min_vote_average }
    }
}

impl Filter for MinimumRatingFilter {
    fn name(&self) -> &str {
        "MinimumRatingFilter"
    }

    fn keep(&self, movie: &MovieRecord) -> bool {
        movie.vote_average >= self.min_vote_average
    }
}
