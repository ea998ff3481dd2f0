//! Core domain types for the movie corpus.
//!
//! A `MovieRecord` is one row of the source movie table; a `Corpus` owns
//! every record for the lifetime of the service and answers lookups by
//! title and by row index.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

// =============================================================================
// Type Aliases
// =============================================================================

/// Row index of a movie inside the corpus (0-based, stable after load)
pub type MovieIndex = usize;

// =============================================================================
// Movie Record
// =============================================================================

/// One movie with its structured and textual attributes.
///
/// Every field except `title` is optional in the source file and falls back
/// to its default. Field order inside `genres` and `production_companies` is
/// preserved because soups are built from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    /// External key; unique in a well-formed corpus
    pub title: String,

    #[serde(default)]
    pub revenue: f64,
    #[serde(default)]
    pub popularity: f64,
    /// Runtime in minutes
    #[serde(default)]
    pub runtime: f32,
    /// Average user vote on a 0-10 scale
    #[serde(default)]
    pub vote_average: f32,
    #[serde(default)]
    pub budget: f64,
    #[serde(default)]
    pub year: Option<u16>,

    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub production_companies: Vec<String>,

    /// Free-text plot summary, possibly empty
    #[serde(default)]
    pub overview: String,
    /// Short language code such as "en"
    #[serde(default)]
    pub original_language: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_path: Option<String>,
}

impl MovieRecord {
    /// Create a record with only a title; every other field is defaulted.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            revenue: 0.0,
            popularity: 0.0,
            runtime: 0.0,
            vote_average: 0.0,
            budget: 0.0,
            year: None,
            genres: Vec::new(),
            production_companies: Vec::new(),
            overview: String::new(),
            original_language: String::new(),
            poster_path: None,
        }
    }

    pub fn with_overview(mut self, overview: impl Into<String>) -> Self {
        self.overview = overview.into();
        self
    }

    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres = genres.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_companies<I, S>(mut self, companies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.production_companies = companies.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.original_language = language.into();
        self
    }

    pub fn with_year(mut self, year: u16) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_vote_average(mut self, vote_average: f32) -> Self {
        self.vote_average = vote_average;
        self
    }

    pub fn with_popularity(mut self, popularity: f64) -> Self {
        self.popularity = popularity;
        self
    }

    /// Poster URL on the TMDB image CDN, if the record has a poster path
    pub fn poster_url(&self) -> Option<String> {
        self.poster_path
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(|p| format!("https://image.tmdb.org/t/p/w500{}", p))
    }
}

// =============================================================================
// Corpus - The In-Memory Movie Store
// =============================================================================

/// Immutable collection of movie records plus lookup indices.
///
/// Records keep their load order; that order is the tie-breaker for every
/// ranking downstream, so it must never be shuffled after construction.
#[derive(Debug, Default)]
pub struct Corpus {
    pub(crate) movies: Vec<MovieRecord>,

    /// Exact title -> first row carrying that title
    pub(crate) title_index: HashMap<String, MovieIndex>,

    // Secondary indices for specialized queries
    /// Rows grouped by genre (a movie appears once per genre it has)
    pub(crate) genre_index: HashMap<String, Vec<MovieIndex>>,
    /// Rows grouped by release year (sorted by year)
    pub(crate) year_index: BTreeMap<u16, Vec<MovieIndex>>,
}

impl Corpus {
    /// Creates a new, empty Corpus
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a movie by row index
    pub fn get(&self, index: MovieIndex) -> Option<&MovieRecord> {
        self.movies.get(index)
    }

    /// Row index of the first movie whose title matches exactly
    pub fn find_index(&self, title: &str) -> Option<MovieIndex> {
        self.title_index.get(title).copied()
    }

    /// Get a movie by exact title
    pub fn get_by_title(&self, title: &str) -> Option<&MovieRecord> {
        self.find_index(title).and_then(|idx| self.get(idx))
    }

    /// Get all rows tagged with a genre (exact, case-sensitive)
    pub fn movies_by_genre(&self, genre: &str) -> &[MovieIndex] {
        self.genre_index
            .get(genre)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Get all rows released in an inclusive year range, ordered by year
    pub fn movies_in_year_range(&self, start: u16, end: u16) -> Vec<MovieIndex> {
        if start > end {
            return Vec::new();
        }
        self.year_index
            .range(start..=end)
            .flat_map(|(_, rows)| rows.iter().copied())
            .collect()
    }

    /// All movies in load order
    pub fn movies(&self) -> &[MovieRecord] {
        &self.movies
    }

    pub fn iter(&self) -> impl Iterator<Item = (MovieIndex, &MovieRecord)> {
        self.movies.iter().enumerate()
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Every distinct title, sorted alphabetically (for pickers)
    pub fn sorted_titles(&self) -> Vec<&str> {
        let mut titles: Vec<&str> = self.title_index.keys().map(|t| t.as_str()).collect();
        titles.sort_unstable();
        titles
    }

    /// Case-insensitive substring search over titles.
    ///
    /// Exact (case-insensitive) matches come first, then substring matches;
    /// each group is ordered alphabetically by title. An empty query
    /// matches every movie.
    pub fn search_titles(&self, query: &str) -> Vec<MovieIndex> {
        let query = query.trim().to_lowercase();

        let mut matches: Vec<(u8, &str, MovieIndex)> = self
            .iter()
            .filter_map(|(idx, movie)| {
                let title_lower = movie.title.to_lowercase();
                if title_lower == query {
                    Some((0, movie.title.as_str(), idx))
                } else if title_lower.contains(&query) {
                    Some((1, movie.title.as_str(), idx))
                } else {
                    None
                }
            })
            .collect();

        matches.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)).then(a.2.cmp(&b.2)));
        matches.into_iter().map(|(_, _, idx)| idx).collect()
    }
}
