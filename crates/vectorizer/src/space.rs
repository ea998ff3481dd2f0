//! Vector space fitting.
//!
//! ## Algorithm
//! 1. Tokenize every soup and drop stop words (in parallel)
//! 2. Count total corpus frequency per term, keep the top `max_features`
//!    (ties broken alphabetically)
//! 3. Assign dimensions in alphabetical term order
//! 4. Weight each document: raw count x smoothed idf `ln((1+N)/(1+df)) + 1`
//!    (idf is 1.0 under `TermWeighting::TermFrequency`)
//! 5. L2-normalize each row
//!
//! The vocabulary is frozen after `fit`; `transform` drops unseen terms.

use crate::error::{Result, VectorizeError};
use crate::normalizer::index_terms;
use crate::sparse::SparseVector;
use rayon::prelude::*;
use std::collections::{HashMap, HashSet};
use tracing::{debug, info, instrument};

/// Default vocabulary cap
pub const DEFAULT_MAX_FEATURES: usize = 5000;

/// How a term's in-document count is weighted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TermWeighting {
    /// Count scaled by inverse document frequency
    #[default]
    TfIdf,
    /// Raw count only
    TermFrequency,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VectorSpaceConfig {
    pub max_features: usize,
    pub weighting: TermWeighting,
}

impl Default for VectorSpaceConfig {
    fn default() -> Self {
        Self {
            max_features: DEFAULT_MAX_FEATURES,
            weighting: TermWeighting::TfIdf,
        }
    }
}

impl VectorSpaceConfig {
    /// Configure the vocabulary cap (default: 5000)
    pub fn with_max_features(mut self, max_features: usize) -> Self {
        self.max_features = max_features;
        self
    }

    /// Configure the weighting scheme (default: TF-IDF)
    pub fn with_weighting(mut self, weighting: TermWeighting) -> Self {
        self.weighting = weighting;
        self
    }
}

/// A frozen vocabulary plus one unit-length vector per fitted document.
#[derive(Debug, Clone)]
pub struct VectorSpace {
    /// Dimension -> term (alphabetical)
    terms: Vec<String>,
    /// Term -> dimension
    vocabulary: HashMap<String, usize>,
    /// Weight per dimension
    idf: Vec<f32>,
    /// One row per fitted document, in input order
    vectors: Vec<SparseVector>,
    weighting: TermWeighting,
}

impl VectorSpace {
    /// Fit a space over every soup in the corpus.
    ///
    /// Fails with `InvalidInput` on an empty corpus or a zero feature cap.
    #[instrument(skip(soups), fields(documents = soups.len()))]
    pub fn fit<S>(soups: &[S], config: &VectorSpaceConfig) -> Result<Self>
    where
        S: AsRef<str> + Sync,
    {
        if soups.is_empty() {
            return Err(VectorizeError::InvalidInput(
                "cannot fit a vector space over an empty corpus".to_string(),
            ));
        }
        if config.max_features == 0 {
            return Err(VectorizeError::InvalidInput(
                "max_features must be at least 1".to_string(),
            ));
        }

        let tokenized: Vec<Vec<String>> = soups
            .par_iter()
            .map(|soup| index_terms(soup.as_ref()))
            .collect();

        // Corpus-wide term and document frequencies
        let mut term_freq: HashMap<&str, usize> = HashMap::new();
        let mut doc_freq: HashMap<&str, usize> = HashMap::new();
        for tokens in &tokenized {
            let mut seen: HashSet<&str> = HashSet::new();
            for token in tokens {
                *term_freq.entry(token.as_str()).or_insert(0) += 1;
                if seen.insert(token.as_str()) {
                    *doc_freq.entry(token.as_str()).or_insert(0) += 1;
                }
            }
        }

        let mut ranked: Vec<(&str, usize)> = term_freq.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(config.max_features);

        let mut terms: Vec<String> = ranked.iter().map(|(t, _)| t.to_string()).collect();
        terms.sort_unstable();

        let vocabulary: HashMap<String, usize> = terms
            .iter()
            .enumerate()
            .map(|(dim, term)| (term.clone(), dim))
            .collect();

        let n_docs = soups.len() as f32;
        let idf: Vec<f32> = terms
            .iter()
            .map(|term| match config.weighting {
                TermWeighting::TfIdf => {
                    let df = doc_freq.get(term.as_str()).copied().unwrap_or(0) as f32;
                    ((1.0 + n_docs) / (1.0 + df)).ln() + 1.0
                }
                TermWeighting::TermFrequency => 1.0,
            })
            .collect();

        let mut space = Self {
            terms,
            vocabulary,
            idf,
            vectors: Vec::new(),
            weighting: config.weighting,
        };

        space.vectors = tokenized
            .par_iter()
            .map(|tokens| space.weigh(tokens))
            .collect();

        let zero_rows = space.vectors.iter().filter(|v| v.is_zero()).count();
        if zero_rows > 0 {
            debug!("{} documents have no vocabulary terms", zero_rows);
        }
        info!(
            "Fitted vector space: {} documents, {} dimensions ({:?})",
            space.vectors.len(),
            space.dimensions(),
            space.weighting
        );

        Ok(space)
    }

    /// Map a soup onto the frozen vocabulary; unseen terms are dropped
    pub fn transform(&self, soup: &str) -> SparseVector {
        self.weigh(&index_terms(soup))
    }

    fn weigh(&self, tokens: &[String]) -> SparseVector {
        let entries: Vec<(usize, f32)> = tokens
            .iter()
            .filter_map(|token| self.vocabulary.get(token.as_str()))
            .map(|&dim| (dim, self.idf[dim]))
            .collect();

        // Duplicate dimensions are summed: count x idf
        let mut vector = SparseVector::from_entries(entries);
        vector.normalize();
        vector
    }

    /// Vector of the fitted document at `index`
    pub fn vector(&self, index: usize) -> Option<&SparseVector> {
        self.vectors.get(index)
    }

    pub fn vectors(&self) -> &[SparseVector] {
        &self.vectors
    }

    /// Dimension of `term`, if it made the vocabulary
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    /// Vocabulary terms in dimension order
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn dimensions(&self) -> usize {
        self.terms.len()
    }

    /// Number of fitted documents
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    pub fn weighting(&self) -> TermWeighting {
        self.weighting
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Vec<&'static str> {
        vec![
            "Action en spy thriller",
            "Action en spy thriller",
            "Documentary en cooking contest",
        ]
    }

    #[test]
    fn test_empty_corpus_is_invalid() {
        let soups: Vec<String> = Vec::new();
        let err = VectorSpace::fit(&soups, &VectorSpaceConfig::default()).unwrap_err();
        assert!(matches!(err, VectorizeError::InvalidInput(_)));
    }

    #[test]
    fn test_zero_max_features_is_invalid() {
        let config = VectorSpaceConfig::default().with_max_features(0);
        assert!(VectorSpace::fit(&corpus(), &config).is_err());
    }

    #[test]
    fn test_vocabulary_is_alphabetical() {
        let space = VectorSpace::fit(&corpus(), &VectorSpaceConfig::default()).unwrap();

        assert_eq!(
            space.terms(),
            &["action", "contest", "cooking", "documentary", "en", "spy", "thriller"]
        );
        assert_eq!(space.len(), 3);
        assert_eq!(space.term_index("spy"), Some(5));
    }

    #[test]
    fn test_max_features_keeps_most_frequent() {
        let config = VectorSpaceConfig::default().with_max_features(2);
        let space = VectorSpace::fit(&corpus(), &config).unwrap();

        // "en" appears 3 times; "action", "spy" and "thriller" tie at 2
        assert_eq!(space.terms(), &["action", "en"]);
    }

    #[test]
    fn test_rows_are_unit_length() {
        let space = VectorSpace::fit(&corpus(), &VectorSpaceConfig::default()).unwrap();
        for vector in space.vectors() {
            assert!((vector.norm() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_idf_downweights_shared_terms() {
        let space = VectorSpace::fit(&corpus(), &VectorSpaceConfig::default()).unwrap();
        let row = space.vector(2).unwrap();

        let en = row.get(space.term_index("en").unwrap());
        let cooking = row.get(space.term_index("cooking").unwrap());
        assert!(cooking > en);
    }

    #[test]
    fn test_term_frequency_weighting() {
        let config = VectorSpaceConfig::default().with_weighting(TermWeighting::TermFrequency);
        let space = VectorSpace::fit(&corpus(), &config).unwrap();
        let row = space.vector(2).unwrap();

        let en = row.get(space.term_index("en").unwrap());
        let cooking = row.get(space.term_index("cooking").unwrap());
        assert!((cooking - en).abs() < 1e-6);
        assert_eq!(space.weighting(), TermWeighting::TermFrequency);
    }

    #[test]
    fn test_single_document_space() {
        let space = VectorSpace::fit(&["Drama en lonely lighthouse"], &VectorSpaceConfig::default())
            .unwrap();
        assert_eq!(space.len(), 1);
        assert!(!space.vector(0).unwrap().is_zero());
    }

    #[test]
    fn test_stop_word_only_document_is_zero_vector() {
        let space = VectorSpace::fit(&["spy thriller", "the and of"], &VectorSpaceConfig::default())
            .unwrap();
        assert!(space.vector(1).unwrap().is_zero());
    }

    #[test]
    fn test_transform_drops_unseen_terms() {
        let space = VectorSpace::fit(&corpus(), &VectorSpaceConfig::default()).unwrap();

        let fitted = space.vector(0).unwrap().clone();
        let transformed = space.transform("Action en spy thriller submarine");
        assert_eq!(transformed, fitted);

        assert!(space.transform("completely unknown words").is_zero());
    }
}
