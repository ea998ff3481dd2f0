//! Filter to keep only movies carrying one of a set of genres.

use crate::traits::Filter;
use data_loader::MovieRecord;
use std::collections::HashSet;

/// Keeps candidates sharing at least one genre with the allowed set.
///
/// Matching is case-insensitive. An empty allowed set keeps everything.
pub struct GenreFilter {
    genres: HashSet<String>,
}

impl GenreFilter {
    pub fn new<I, S>(genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            genres: genres
                .into_iter()
                .map(|g| g.as_ref().trim().to_lowercase())
                .filter(|g| !g.is_empty())
                .collect(),
        }
    }
}

impl Filter for GenreFilter {
    fn name(&self) -> &str {
        "GenreFilter"
    }

    fn keep(&self, movie: &MovieRecord) -> bool {
        if self.genres.is_empty() {
            return true;
        }
        movie
            .genres
            .iter()
            .any(|genre| self.genres.contains(&genre.to_lowercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genre_filter() {
        let filter = GenreFilter::new(["action", "Thriller"]);

        assert!(filter.keep(&MovieRecord::new("Heat").with_genres(["Crime", "Action"])));
        assert!(filter.keep(&MovieRecord::new("Se7en").with_genres(["THRILLER"])));
        assert!(!filter.keep(&MovieRecord::new("Up").with_genres(["Animation"])));
        assert!(!filter.keep(&MovieRecord::new("Untagged")));
    }

    #[test]
    fn test_empty_genre_filter_keeps_all() {
        let filter = GenreFilter::new(Vec::<String>::new());
        assert!(filter.keep(&MovieRecord::new("Untagged")));
    }
}
