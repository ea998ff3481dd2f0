//! Filter for release-year windows.

use crate::traits::Filter;
use data_loader::MovieRecord;

/// Keeps candidates released inside an inclusive year range.
///
/// Either bound may be open. Movies with no known year are kept only when
/// `keep_unknown` is set.
pub struct YearRangeFilter {
    min_year: Option<u16>,
    max_year: Option<u16>,
    keep_unknown: bool,
}

impl YearRangeFilter {
    /// Create a new YearRangeFilter.
    ///
    /// # Arguments
    /// * `min_year` - Earliest year to keep, `None` for no lower bound
    /// * `max_year` - Latest year to keep, `None` for no upper bound
    pub fn new(min_year: Option<u16>, max_year: Option<u16>) -> Self {
        Self {
            min_year,
            max_year,
            keep_unknown: true,
        }
    }

    /// Configure whether movies without a year pass (default: true)
    pub fn with_keep_unknown(mut self, keep_unknown: bool) -> Self {
        self.keep_unknown = keep_unknown;
        self
    }
}

impl Filter for YearRangeFilter {
    fn name(&self) -> &str {
        "YearRangeFilter"
    }

    fn keep(&self, movie: &MovieRecord) -> bool {
        match movie.year {
            Some(year) => {
                self.min_year.is_none_or(|min| year >= min)
                    && self.max_year.is_none_or(|max| year <= max)
            }
            None => self.keep_unknown,
        }
    }
}
