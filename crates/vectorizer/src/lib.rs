//! # Vectorizer Crate
//!
//! Turns movie records into sparse weighted term vectors.
//!
//! ## Components
//!
//! - **normalizer**: tokenization, stop-word removal, soup building, keywords
//! - **space**: TF-IDF (or plain TF) vocabulary fitting and transform
//! - **sparse**: the `SparseVector` type and its vector math
//!
//! ## Example Usage
//!
//! ```ignore
//! use vectorizer::{build_soup, VectorSpace, VectorSpaceConfig};
//!
//! let soups: Vec<String> = corpus.movies().iter().map(build_soup).collect();
//! let space = VectorSpace::fit(&soups, &VectorSpaceConfig::default())?;
//! let query = space.transform("Action en spy thriller");
//! ```

pub mod error;
pub mod normalizer;
pub mod space;
pub mod sparse;
pub mod stop_words;

pub use error::{Result, VectorizeError};
pub use normalizer::{build_soup, content_tokens, extract_keywords, index_terms, normalize, tokenize};
pub use space::{TermWeighting, VectorSpace, VectorSpaceConfig, DEFAULT_MAX_FEATURES};
pub use sparse::SparseVector;

use data_loader::Corpus;
use rayon::prelude::*;

/// Build one soup per corpus row, in row order
pub fn build_soups(corpus: &Corpus) -> Vec<String> {
    corpus.movies().par_iter().map(build_soup).collect()
}
