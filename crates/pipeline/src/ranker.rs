//! Cosine-similarity ranking over a fitted vector space.
//!
//! ## Ordering contract
//! - Scores descending
//! - Equal scores by ascending corpus index
//! - The query row is never returned
//!
//! ## Filtering contract
//! Rank first, keep the top `n`, then drop candidates a filter rejects.
//! Rejected slots are not backfilled from lower-ranked movies.

use crate::filter_pipeline::FilterPipeline;
use data_loader::{Corpus, MovieIndex};
use rayon::prelude::*;
use std::cmp::Ordering;
use std::sync::Arc;
use tracing::{debug, info, instrument};
use vectorizer::{SparseVector, VectorSpace};

/// One ranked candidate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredMovie {
    pub index: MovieIndex,
    pub score: f32,
}

impl ScoredMovie {
    pub fn new(index: MovieIndex, score: f32) -> Self {
        Self { index, score }
    }
}

/// Candidates ordered by descending similarity
pub type SimilarityResult = Vec<ScoredMovie>;

/// Cosine similarity; 0.0 when either vector has zero norm
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f32 {
    let norm_a = a.norm();
    let norm_b = b.norm();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (a.dot(b) / (norm_a * norm_b)).clamp(-1.0, 1.0)
}

/// Descending score, then ascending index
fn by_rank(a: &ScoredMovie, b: &ScoredMovie) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.index.cmp(&b.index))
}

/// Score every vector against `query` and sort, skipping `exclude`
pub fn rank(
    query: &SparseVector,
    vectors: &[SparseVector],
    exclude: Option<MovieIndex>,
) -> SimilarityResult {
    let mut scored: Vec<ScoredMovie> = vectors
        .par_iter()
        .enumerate()
        .filter(|(idx, _)| Some(*idx) != exclude)
        .map(|(idx, vector)| ScoredMovie::new(idx, cosine_similarity(query, vector)))
        .collect();

    scored.sort_by(by_rank);
    scored
}

/// Top `n` most similar vectors, then filtered by `keep`.
///
/// Returns fewer than `n` entries when the corpus is too small or the
/// predicate rejects some of the top candidates.
pub fn top_similar<F>(
    query: &SparseVector,
    vectors: &[SparseVector],
    exclude: Option<MovieIndex>,
    n: usize,
    keep: Option<F>,
) -> SimilarityResult
where
    F: Fn(MovieIndex) -> bool,
{
    if n == 0 {
        return Vec::new();
    }

    let mut ranked = rank(query, vectors, exclude);
    ranked.truncate(n);
    if let Some(keep) = keep {
        ranked.retain(|candidate| keep(candidate.index));
    }
    ranked
}

/// Ranks corpus movies against each other.
///
/// Holds shared handles to the corpus and its vector space. With
/// `precompute` the full pairwise score matrix is built once up front and
/// queries become a row sort; results are identical either way.
#[derive(Clone)]
pub struct SimilarityRanker {
    corpus: Arc<Corpus>,
    space: Arc<VectorSpace>,
    /// Row-major scores, `len x len`
    matrix: Option<Arc<Vec<f32>>>,
}

impl SimilarityRanker {
    /// Create a ranker that scores on demand
    pub fn new(corpus: Arc<Corpus>, space: Arc<VectorSpace>) -> Self {
        Self {
            corpus,
            space,
            matrix: None,
        }
    }

    /// Precompute the pairwise similarity matrix (O(len^2) memory)
    pub fn with_precomputed_matrix(mut self) -> Self {
        let vectors = self.space.vectors();
        let len = vectors.len();
        info!("Precomputing {}x{} similarity matrix", len, len);

        let rows: Vec<Vec<f32>> = vectors
            .par_iter()
            .map(|query| vectors.iter().map(|v| cosine_similarity(query, v)).collect())
            .collect();
        let matrix: Vec<f32> = rows.into_iter().flatten().collect();

        self.matrix = Some(Arc::new(matrix));
        self
    }

    pub fn is_precomputed(&self) -> bool {
        self.matrix.is_some()
    }

    pub fn corpus(&self) -> &Arc<Corpus> {
        &self.corpus
    }

    pub fn space(&self) -> &Arc<VectorSpace> {
        &self.space
    }

    /// Top `n` movies similar to the corpus row `index`, excluding itself.
    ///
    /// An out-of-range index yields an empty result.
    #[instrument(skip(self, filters), fields(precomputed = self.matrix.is_some()))]
    pub fn similar_to(
        &self,
        index: MovieIndex,
        n: usize,
        filters: Option<&FilterPipeline>,
    ) -> SimilarityResult {
        let Some(query) = self.space.vector(index) else {
            return Vec::new();
        };
        if n == 0 {
            return Vec::new();
        }

        let mut ranked = match &self.matrix {
            Some(matrix) => self.rank_from_matrix(matrix, index),
            None => rank(query, self.space.vectors(), Some(index)),
        };
        ranked.truncate(n);

        let ranked = match filters {
            Some(pipeline) if !pipeline.is_empty() => pipeline.apply(ranked, &self.corpus),
            _ => ranked,
        };

        debug!("Ranked {} candidates for row {}", ranked.len(), index);
        ranked
    }

    /// Top `n` movies similar to an arbitrary vector (nothing excluded)
    pub fn similar_to_vector(
        &self,
        query: &SparseVector,
        n: usize,
        filters: Option<&FilterPipeline>,
    ) -> SimilarityResult {
        top_similar(
            query,
            self.space.vectors(),
            None,
            n,
            filters.map(|pipeline| {
                move |idx: MovieIndex| {
                    self.corpus
                        .get(idx)
                        .is_some_and(|movie| pipeline.keeps(movie))
                }
            }),
        )
    }

    fn rank_from_matrix(&self, matrix: &[f32], index: MovieIndex) -> SimilarityResult {
        let len = self.space.len();
        let row = &matrix[index * len..(index + 1) * len];

        let mut scored: Vec<ScoredMovie> = row
            .iter()
            .enumerate()
            .filter(|(idx, _)| *idx != index)
            .map(|(idx, &score)| ScoredMovie::new(idx, score))
            .collect();
        scored.sort_by(by_rank);
        scored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::MovieRecord;
    use vectorizer::{build_soups, VectorSpaceConfig};

    fn vector(entries: &[(usize, f32)]) -> SparseVector {
        SparseVector::from_entries(entries.to_vec())
    }

    fn ranker(records: Vec<MovieRecord>) -> SimilarityRanker {
        let corpus = Arc::new(Corpus::from_records(records));
        let space = Arc::new(
            VectorSpace::fit(&build_soups(&corpus), &VectorSpaceConfig::default()).unwrap(),
        );
        SimilarityRanker::new(corpus, space)
    }

    fn spy_corpus() -> Vec<MovieRecord> {
        vec![
            MovieRecord::new("A").with_genres(["Action"]).with_overview("a spy thriller"),
            MovieRecord::new("B").with_genres(["Action"]).with_overview("a spy thriller"),
            MovieRecord::new("C").with_genres(["Documentary"]).with_overview("a cooking contest"),
            MovieRecord::new("D").with_genres(["Action"]).with_overview("a heist thriller"),
        ]
    }

    #[test]
    fn test_cosine_self_similarity() {
        let v = vector(&[(0, 1.0), (3, 2.0)]);
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-6);

        let zero = SparseVector::default();
        assert_eq!(cosine_similarity(&zero, &zero), 0.0);
        assert_eq!(cosine_similarity(&v, &zero), 0.0);
    }

    #[test]
    fn test_cosine_orthogonal() {
        let a = vector(&[(0, 1.0)]);
        let b = vector(&[(1, 1.0)]);
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_rank_excludes_query_and_breaks_ties_by_index() {
        let vectors = vec![
            vector(&[(0, 1.0)]),
            vector(&[(1, 1.0)]),
            vector(&[(0, 1.0)]),
            vector(&[(1, 1.0)]),
            vector(&[(0, 1.0)]),
        ];

        let ranked = rank(&vectors[0], &vectors, Some(0));
        let order: Vec<usize> = ranked.iter().map(|s| s.index).collect();
        assert_eq!(order, vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_top_similar_truncates_without_padding() {
        let vectors = vec![vector(&[(0, 1.0)]), vector(&[(0, 1.0)])];

        let result = top_similar(&vectors[0], &vectors, Some(0), 5, None::<fn(usize) -> bool>);
        assert_eq!(result, vec![ScoredMovie::new(1, 1.0)]);

        let none = top_similar(&vectors[0], &vectors, Some(0), 0, None::<fn(usize) -> bool>);
        assert!(none.is_empty());
    }

    #[test]
    fn test_top_similar_filters_after_truncation() {
        let vectors = vec![
            vector(&[(0, 1.0)]),
            vector(&[(0, 1.0)]),
            vector(&[(0, 1.0), (1, 1.0)]),
            vector(&[(1, 1.0)]),
        ];

        // Top 2 are rows 1 and 2; rejecting row 1 must not pull in row 3
        let result = top_similar(&vectors[0], &vectors, Some(0), 2, Some(|idx: usize| idx != 1));
        let order: Vec<usize> = result.iter().map(|s| s.index).collect();
        assert_eq!(order, vec![2]);
    }

    #[test]
    fn test_similar_to_scenario() {
        let ranker = ranker(spy_corpus());
        let result = ranker.similar_to(0, 2, None);

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].index, 1);
        assert!((result[0].score - 1.0).abs() < 1e-5);
        assert_eq!(result[1].index, 3);
        assert!(result[0].score > result[1].score);
    }

    #[test]
    fn test_precomputed_matches_on_demand() {
        let on_demand = ranker(spy_corpus());
        let precomputed = on_demand.clone().with_precomputed_matrix();
        assert!(precomputed.is_precomputed());

        for index in 0..4 {
            let a = on_demand.similar_to(index, 10, None);
            let b = precomputed.similar_to(index, 10, None);
            let order_a: Vec<usize> = a.iter().map(|s| s.index).collect();
            let order_b: Vec<usize> = b.iter().map(|s| s.index).collect();
            assert_eq!(order_a, order_b);
            for (x, y) in a.iter().zip(&b) {
                assert!((x.score - y.score).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_similar_to_out_of_range() {
        let ranker = ranker(spy_corpus());
        assert!(ranker.similar_to(99, 3, None).is_empty());
    }

    #[test]
    fn test_similar_to_vector() {
        let ranker = ranker(spy_corpus());
        let query = ranker.space().transform("cooking contest");
        let result = ranker.similar_to_vector(&query, 1, None);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].index, 2);
    }
}
