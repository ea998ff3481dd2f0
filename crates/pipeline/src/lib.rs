//! Similarity ranking and post-ranking filters for movie candidates.
//!
//! This crate provides:
//! - Cosine similarity and the ranking contract (`rank`, `top_similar`)
//! - `SimilarityRanker`, scoring on demand or from a precomputed matrix
//! - Filter trait and implementations for candidate filtering
//! - FilterPipeline for composing filters
//!
//! ## Architecture
//! A query is processed in stages:
//! 1. Every corpus vector is scored against the query vector
//! 2. Scores are sorted (descending, ties by corpus index) and cut to `n`
//! 3. Filters drop unwanted candidates from that cut; nothing is backfilled
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{FilterPipeline, SimilarityRanker};
//! use pipeline::filters::*;
//!
//! let pipeline = FilterPipeline::new()
//!     .add_filter(MinimumRatingFilter::new(6.5))
//!     .add_filter(SentimentFilter::new(0.0));
//!
//! let ranker = SimilarityRanker::new(corpus.clone(), space.clone());
//! let similar = ranker.similar_to(idx, 10, Some(&pipeline));
//! ```

pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod ranker;

// Re-export main types
pub use traits::Filter;
pub use filter_pipeline::FilterPipeline;
pub use ranker::{cosine_similarity, rank, top_similar, ScoredMovie, SimilarityRanker, SimilarityResult};
