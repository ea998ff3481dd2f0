//! Corpus building and indexing logic.
//!
//! - Primary store: records in load order
//! - Title index: exact title -> first row
//! - Secondary indices: genre and year lookups

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::*;
use std::path::Path;
use tracing::{info, warn};

impl Corpus {
    /// Load a corpus from a JSON Lines file.
    ///
    /// Steps:
    /// 1. Parse the file
    /// 2. Build the title and secondary indices
    /// 3. Validate every record
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading movie corpus from {:?}", path);

        let movies = parser::parse_movies(path)?;
        let corpus = Self::from_records(movies);
        corpus.validate()?;

        info!("Loaded {} movies", corpus.len());
        Ok(corpus)
    }

    /// Build a corpus from records already in memory.
    ///
    /// Duplicate titles are kept as separate rows, but title lookups resolve
    /// to the first occurrence.
    pub fn from_records(records: Vec<MovieRecord>) -> Self {
        let mut corpus = Corpus::new();
        for record in records {
            corpus.insert_movie(record);
        }
        corpus.build_secondary_indices();
        corpus
    }

    /// Append a record and index its title
    pub(crate) fn insert_movie(&mut self, movie: MovieRecord) {
        let idx = self.movies.len();
        if let Some(&first) = self.title_index.get(&movie.title) {
            warn!(
                "Duplicate title {:?} at row {} (lookups resolve to row {})",
                movie.title, idx, first
            );
        } else {
            self.title_index.insert(movie.title.clone(), idx);
        }
        self.movies.push(movie);
    }

    /// Rebuild the genre and year indices from the primary store
    pub(crate) fn build_secondary_indices(&mut self) {
        self.genre_index.clear();
        self.year_index.clear();

        for (idx, movie) in self.movies.iter().enumerate() {
            for genre in &movie.genres {
                let rows = self.genre_index.entry(genre.clone()).or_default();
                // A genre listed twice on one movie is indexed once
                if rows.last() != Some(&idx) {
                    rows.push(idx);
                }
            }

            if let Some(year) = movie.year {
                self.year_index.entry(year).or_default().push(idx);
            }
        }
    }

    /// Validate data integrity
    ///
    /// Check that:
    /// - Every title is non-empty
    /// - Numeric attributes are finite and non-negative
    pub fn validate(&self) -> Result<()> {
        for (idx, movie) in self.iter() {
            if movie.title.trim().is_empty() {
                return Err(DataLoadError::ValidationError(format!(
                    "movie at row {} has an empty title",
                    idx
                )));
            }

            let numeric = [
                ("revenue", movie.revenue),
                ("popularity", movie.popularity),
                ("runtime", movie.runtime as f64),
                ("vote_average", movie.vote_average as f64),
                ("budget", movie.budget),
            ];
            for (field, value) in numeric {
                if !value.is_finite() || value < 0.0 {
                    return Err(DataLoadError::InvalidValue {
                        title: movie.title.clone(),
                        field: field.to_string(),
                        value: value.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}
