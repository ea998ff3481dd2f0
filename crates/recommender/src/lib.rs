//! Recommender crate for the movie explorer.
//!
//! This crate contains the facade that composes the corpus store, the
//! vectorizer and the similarity ranker into one load-once, query-many
//! service, plus the metadata enrichment boundary.
//!
//! ## Example Usage
//! ```ignore
//! use recommender::{Recommender, RecommenderConfig};
//! use std::sync::Arc;
//!
//! let recommender = Arc::new(Recommender::load(path, RecommenderConfig::default())?);
//! for rec in recommender.recommend("Inception", 10, None) {
//!     println!("{} ({:.3})", rec.title, rec.score);
//! }
//! ```

pub mod config;
pub mod error;
pub mod metadata;
pub mod recommender;

pub use config::{RecommenderConfig, DEFAULT_LIMIT};
pub use error::{RecommenderError, Result};
pub use metadata::{MetadataProvider, MetadataService, MovieMetadata, UnconfiguredProvider};
pub use recommender::{Recommendation, Recommender};

// Re-exported so callers can build filters without extra dependencies
pub use pipeline::{filters, Filter, FilterPipeline};
pub use vectorizer::TermWeighting;
