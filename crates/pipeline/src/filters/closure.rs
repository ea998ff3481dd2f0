//! Adapter turning any predicate closure into a `Filter`.

use crate::traits::Filter;
use data_loader::MovieRecord;

/// A named filter backed by a closure.
pub struct FnFilter<F> {
    name: String,
    predicate: F,
}

impl<F> FnFilter<F>
where
    F: Fn(&MovieRecord) -> bool + Send + Sync,
{
    pub fn new(name: impl Into<String>, predicate: F) -> Self {
        Self {
            name: name.into(),
            predicate,
        }
    }
}

impl<F> Filter for FnFilter<F>
where
    F: Fn(&MovieRecord) -> bool + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn keep(&self, movie: &MovieRecord) -> bool {
        (self.predicate)(movie)
    }
}
