//! The FilterPipeline chains filters applied to ranked candidates.

use crate::ranker::ScoredMovie;
use crate::traits::Filter;
use data_loader::{Corpus, MovieRecord};
use tracing;

/// Chains multiple filters together.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(MinimumRatingFilter::new(6.5))
///     .add_filter(SentimentFilter::new(0.0));
///
/// let kept = pipeline.apply(candidates, &corpus);
/// ```
#[derive(Default)]
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Names of the configured filters, in application order
    pub fn names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// True when every filter keeps the movie
    pub fn keeps(&self, movie: &MovieRecord) -> bool {
        self.filters.iter().all(|f| f.keep(movie))
    }

    /// Apply all filters in sequence, preserving candidate order.
    ///
    /// Candidates whose index is not in the corpus are dropped.
    pub fn apply(&self, candidates: Vec<ScoredMovie>, corpus: &Corpus) -> Vec<ScoredMovie> {
        let mut current = candidates;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current.retain(|candidate| {
                corpus
                    .get(candidate.index)
                    .is_some_and(|movie| filter.keep(movie))
            });
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}
