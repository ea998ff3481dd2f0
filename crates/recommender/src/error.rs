//! Error types for building the recommender.

use data_loader::DataLoadError;
use thiserror::Error;
use vectorizer::VectorizeError;

/// Start-up failures. Per-query misses are never errors.
#[derive(Error, Debug)]
pub enum RecommenderError {
    /// The corpus file could not be loaded or validated
    #[error("failed to load corpus: {0}")]
    Load(#[from] DataLoadError),

    /// Empty corpus or an unusable configuration
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl From<VectorizeError> for RecommenderError {
    fn from(err: VectorizeError) -> Self {
        match err {
            VectorizeError::InvalidInput(reason) => RecommenderError::InvalidInput(reason),
        }
    }
}

pub type Result<T> = std::result::Result<T, RecommenderError>;
