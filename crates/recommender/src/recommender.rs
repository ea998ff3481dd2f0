//! # Movie Recommender
//!
//! Load-once, query-many facade over the whole engine:
//! 1. Build one soup per corpus row
//! 2. Fit the vector space once
//! 3. Optionally precompute the pairwise similarity matrix
//! 4. Answer `recommend` queries against the frozen state
//!
//! Nothing is mutated after `initialize`, so a `Recommender` can be shared
//! across threads behind an `Arc` without locking.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use data_loader::{Corpus, MovieRecord};
use pipeline::{FilterPipeline, ScoredMovie, SimilarityRanker};
use vectorizer::{build_soups, extract_keywords, VectorSpace};

use crate::config::RecommenderConfig;
use crate::error::{RecommenderError, Result};

/// One recommended movie
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub vote_average: f32,
    pub popularity: f64,
    pub year: Option<u16>,
    /// Cosine similarity to the query movie
    pub score: f32,
}

/// Content-based recommendation service
#[derive(Clone)]
pub struct Recommender {
    corpus: Arc<Corpus>,
    space: Arc<VectorSpace>,
    ranker: SimilarityRanker,
    config: RecommenderConfig,
}

impl Recommender {
    /// Build the service over an in-memory corpus.
    ///
    /// Fails with `InvalidInput` when the corpus is empty or the vector
    /// space configuration is unusable.
    pub fn initialize(corpus: Corpus, config: RecommenderConfig) -> Result<Self> {
        let start = Instant::now();

        if corpus.is_empty() {
            return Err(RecommenderError::InvalidInput(
                "corpus contains no movies".to_string(),
            ));
        }

        let corpus = Arc::new(corpus);
        let soups = build_soups(&corpus);
        let space = Arc::new(VectorSpace::fit(&soups, &config.vector_space)?);

        let mut ranker = SimilarityRanker::new(corpus.clone(), space.clone());
        if config.precompute_similarities {
            ranker = ranker.with_precomputed_matrix();
        }

        info!(
            "Recommender ready: {} movies, {} dimensions in {:.2?}",
            corpus.len(),
            space.dimensions(),
            start.elapsed()
        );

        Ok(Self {
            corpus,
            space,
            ranker,
            config,
        })
    }

    /// Load a JSON Lines corpus file and build the service
    pub fn load(path: &Path, config: RecommenderConfig) -> Result<Self> {
        let corpus = Corpus::load_from_file(path)?;
        Self::initialize(corpus, config)
    }

    /// Movies most similar to `title`, best first.
    ///
    /// Returns an empty list when the title is unknown, when `n` is 0, or
    /// when no other movie survives `filters`. The query movie itself is
    /// never included. Filters only remove from the top `n`.
    #[instrument(skip(self, filters))]
    pub fn recommend(
        &self,
        title: &str,
        n: usize,
        filters: Option<&FilterPipeline>,
    ) -> Vec<Recommendation> {
        let Some(index) = self.corpus.find_index(title) else {
            debug!("Unknown title {:?}", title);
            return Vec::new();
        };

        let ranked = self.ranker.similar_to(index, n, filters);
        self.to_recommendations(ranked)
    }

    /// `recommend` with the configured default limit and no filters
    pub fn recommend_default(&self, title: &str) -> Vec<Recommendation> {
        self.recommend(title, self.config.default_limit, None)
    }

    /// Movies most similar to free text (e.g. a typed description)
    pub fn recommend_for_text(
        &self,
        text: &str,
        n: usize,
        filters: Option<&FilterPipeline>,
    ) -> Vec<Recommendation> {
        let query = self.space.transform(text);
        let ranked = self.ranker.similar_to_vector(&query, n, filters);
        self.to_recommendations(ranked)
    }

    /// Full record for an exact title
    pub fn details(&self, title: &str) -> Option<&MovieRecord> {
        self.corpus.get_by_title(title)
    }

    /// Titles containing `query` (case-insensitive), exact matches first
    pub fn search(&self, query: &str) -> Vec<&MovieRecord> {
        self.corpus
            .search_titles(query)
            .into_iter()
            .filter_map(|idx| self.corpus.get(idx))
            .collect()
    }

    /// Most frequent overview keywords of a movie; `None` if unknown
    pub fn keywords(&self, title: &str, n: usize) -> Option<Vec<(String, usize)>> {
        self.details(title)
            .map(|movie| extract_keywords(&movie.overview, n))
    }

    /// Every distinct title, sorted
    pub fn titles(&self) -> Vec<&str> {
        self.corpus.sorted_titles()
    }

    pub fn corpus(&self) -> &Arc<Corpus> {
        &self.corpus
    }

    pub fn space(&self) -> &Arc<VectorSpace> {
        &self.space
    }

    pub fn config(&self) -> &RecommenderConfig {
        &self.config
    }

    fn to_recommendations(&self, ranked: Vec<ScoredMovie>) -> Vec<Recommendation> {
        ranked
            .into_iter()
            .filter_map(|scored| {
                let movie = self.corpus.get(scored.index)?;
                Some(Recommendation {
                    title: movie.title.clone(),
                    vote_average: movie.vote_average,
                    popularity: movie.popularity,
                    year: movie.year,
                    score: scored.score,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pipeline::filters::MinimumRatingFilter;

    // ============================================================================
    // Test Fixtures
    // ============================================================================

    fn spy_corpus() -> Corpus {
        Corpus::from_records(vec![
            MovieRecord::new("A").with_genres(["Action"]).with_overview("a spy thriller"),
            MovieRecord::new("B")
                .with_genres(["Action"])
                .with_overview("a spy thriller")
                .with_vote_average(7.0)
                .with_popularity(12.5)
                .with_year(2001),
            MovieRecord::new("C").with_genres(["Documentary"]).with_overview("a cooking contest"),
        ])
    }

    fn build() -> Recommender {
        Recommender::initialize(spy_corpus(), RecommenderConfig::default()).unwrap()
    }

    #[test]
    fn test_empty_corpus_fails() {
        let err = Recommender::initialize(Corpus::new(), RecommenderConfig::default()).err();
        assert!(matches!(err, Some(RecommenderError::InvalidInput(_))));
    }

    #[test]
    fn test_zero_features_fails() {
        let config = RecommenderConfig::default().with_max_features(0);
        let err = Recommender::initialize(spy_corpus(), config).err();
        assert!(matches!(err, Some(RecommenderError::InvalidInput(_))));
    }

    #[test]
    fn test_missing_file_fails() {
        let err = Recommender::load(Path::new("missing.jsonl"), RecommenderConfig::default()).err();
        assert!(matches!(err, Some(RecommenderError::Load(_))));
    }

    #[test]
    fn test_recommend_scenario() {
        let recommender = build();
        let recs = recommender.recommend("A", 2, None);

        let titles: Vec<&str> = recs.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["B", "C"]);
        assert!(recs[0].score > recs[1].score);
        assert_eq!(recs[0].vote_average, 7.0);
        assert_eq!(recs[0].popularity, 12.5);
        assert_eq!(recs[0].year, Some(2001));
    }

    #[test]
    fn test_unknown_title_and_zero_n() {
        let recommender = build();
        assert!(recommender.recommend("Nope", 5, None).is_empty());
        assert!(recommender.recommend("A", 0, None).is_empty());
    }

    #[test]
    fn test_filter_does_not_backfill() {
        let recommender = build();
        let pipeline = FilterPipeline::new().add_filter(MinimumRatingFilter::new(9.0));
        assert!(recommender.recommend("A", 1, Some(&pipeline)).is_empty());
    }

    #[test]
    fn test_default_limit() {
        let config = RecommenderConfig::default().with_default_limit(1);
        let recommender = Recommender::initialize(spy_corpus(), config).unwrap();
        assert_eq!(recommender.recommend_default("A").len(), 1);
    }

    #[test]
    fn test_recommend_for_text() {
        let recommender = build();
        let recs = recommender.recommend_for_text("cooking documentary", 1, None);
        assert_eq!(recs[0].title, "C");
    }

    #[test]
    fn test_details_search_keywords() {
        let recommender = build();

        assert_eq!(recommender.details("C").unwrap().overview, "a cooking contest");
        assert_eq!(recommender.search("b").len(), 1);
        assert_eq!(recommender.titles(), vec!["A", "B", "C"]);
        assert_eq!(
            recommender.keywords("C", 5),
            Some(vec![("cooking".to_string(), 1), ("contest".to_string(), 1)])
        );
        assert!(recommender.keywords("Nope", 5).is_none());
    }
}
