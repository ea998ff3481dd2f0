//! Error types for the vectorizer crate.

use thiserror::Error;

/// Errors raised while fitting a vector space
#[derive(Error, Debug, PartialEq)]
pub enum VectorizeError {
    /// Input that can never produce a usable space (empty corpus, zero features)
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, VectorizeError>;
