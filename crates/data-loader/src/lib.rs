//! # Data Loader Crate
//!
//! This crate loads and indexes the movie corpus the recommender is built on.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (MovieRecord, Corpus)
//! - **parser**: Parse JSON Lines corpus files into Rust structs
//! - **index**: Build title, genre and year indices for fast lookups
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::Corpus;
//! use std::path::Path;
//!
//! let corpus = Corpus::load_from_file(Path::new("data/movies.jsonl"))?;
//!
//! let idx = corpus.find_index("Inception").unwrap();
//! let movie = corpus.get(idx).unwrap();
//! println!("{} ({:?})", movie.title, movie.year);
//! ```
//!
//! Titles are assumed unique. When a title appears more than once, every
//! row is kept but title lookups resolve to the first one.

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use types::{Corpus, MovieIndex, MovieRecord};
