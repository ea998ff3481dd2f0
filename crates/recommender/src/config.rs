//! Recommender configuration.

use vectorizer::{TermWeighting, VectorSpaceConfig};

/// Number of recommendations returned when the caller does not say
pub const DEFAULT_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct RecommenderConfig {
    pub vector_space: VectorSpaceConfig,
    /// Build the full pairwise similarity matrix at start-up
    pub precompute_similarities: bool,
    pub default_limit: usize,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            vector_space: VectorSpaceConfig::default(),
            precompute_similarities: false,
            default_limit: DEFAULT_LIMIT,
        }
    }
}

impl RecommenderConfig {
    /// Configure the vocabulary cap (default: 5000)
    pub fn with_max_features(mut self, max_features: usize) -> Self {
        self.vector_space.max_features = max_features;
        self
    }

    /// Configure the term weighting (default: TF-IDF)
    pub fn with_weighting(mut self, weighting: TermWeighting) -> Self {
        self.vector_space.weighting = weighting;
        self
    }

    /// Trade O(n^2) memory for faster queries (default: false)
    pub fn with_precomputed_similarities(mut self, precompute: bool) -> Self {
        self.precompute_similarities = precompute;
        self
    }

    /// Configure the default result count (default: 10)
    pub fn with_default_limit(mut self, limit: usize) -> Self {
        self.default_limit = limit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = RecommenderConfig::default()
            .with_max_features(100)
            .with_weighting(TermWeighting::TermFrequency)
            .with_precomputed_similarities(true)
            .with_default_limit(3);

        assert_eq!(config.vector_space.max_features, 100);
        assert_eq!(config.vector_space.weighting, TermWeighting::TermFrequency);
        assert!(config.precompute_similarities);
        assert_eq!(config.default_limit, 3);
    }
}
