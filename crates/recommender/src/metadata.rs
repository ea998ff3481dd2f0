//! Metadata enrichment boundary.
//!
//! Cast, director and trailer lookups live in an external service. This
//! module only owns the contract: `MetadataService::enrich` never fails and
//! falls back to a placeholder carrying a trailer search URL.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Environment variable holding the metadata API key
pub const API_KEY_ENV: &str = "TMDB_API_KEY";

/// Enrichment data for one movie
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieMetadata {
    pub actors: Vec<String>,
    pub director: Option<String>,
    pub trailer_url: String,
}

impl MovieMetadata {
    /// Empty cast and director with a best-effort trailer search link
    pub fn placeholder(title: &str) -> Self {
        Self {
            actors: Vec::new(),
            director: None,
            trailer_url: trailer_search_url(title),
        }
    }
}

/// YouTube search URL for "<title> trailer"
pub fn trailer_search_url(title: &str) -> String {
    let query = format!("{} trailer", title.trim());
    format!(
        "https://www.youtube.com/results?search_query={}",
        urlencoding::encode(&query)
    )
}

/// Source of movie metadata. Implementations may fail freely.
pub trait MetadataProvider: Send + Sync {
    fn lookup(&self, title: &str) -> Result<MovieMetadata>;
}

/// Provider used when no API key is configured
#[derive(Debug, Default, Clone, Copy)]
pub struct UnconfiguredProvider;

impl MetadataProvider for UnconfiguredProvider {
    fn lookup(&self, _title: &str) -> Result<MovieMetadata> {
        Err(anyhow!("{} is not set", API_KEY_ENV))
    }
}

/// Wraps a provider so lookups degrade instead of failing
pub struct MetadataService {
    provider: Box<dyn MetadataProvider>,
}

impl MetadataService {
    pub fn new(provider: impl MetadataProvider + 'static) -> Self {
        Self {
            provider: Box::new(provider),
        }
    }

    /// Service with no backing provider: every lookup is a placeholder
    pub fn unconfigured() -> Self {
        Self::new(UnconfiguredProvider)
    }

    /// Look up metadata, falling back to the placeholder on any failure
    pub fn enrich(&self, title: &str) -> MovieMetadata {
        match self.provider.lookup(title) {
            Ok(metadata) => metadata,
            Err(err) => {
                warn!("Metadata lookup for {:?} failed: {:#}", title, err);
                MovieMetadata::placeholder(title)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedProvider;

    impl MetadataProvider for FixedProvider {
        fn lookup(&self, title: &str) -> Result<MovieMetadata> {
            if title == "Heat" {
                Ok(MovieMetadata {
                    actors: vec!["Al Pacino".to_string(), "Robert De Niro".to_string()],
                    director: Some("Michael Mann".to_string()),
                    trailer_url: "https://example.com/heat".to_string(),
                })
            } else {
                Err(anyhow!("not found"))
            }
        }
    }

    #[test]
    fn test_trailer_search_url() {
        assert_eq!(
            trailer_search_url("Amélie & Co"),
            "https://www.youtube.com/results?search_query=Am%C3%A9lie%20%26%20Co%20trailer"
        );
    }

    #[test]
    fn test_enrich_success() {
        let service = MetadataService::new(FixedProvider);
        let metadata = service.enrich("Heat");

        assert_eq!(metadata.director.as_deref(), Some("Michael Mann"));
        assert_eq!(metadata.actors.len(), 2);
    }

    #[test]
    fn test_enrich_failure_degrades() {
        let service = MetadataService::new(FixedProvider);
        let metadata = service.enrich("Up");

        assert!(metadata.actors.is_empty());
        assert!(metadata.director.is_none());
        assert!(metadata.trailer_url.ends_with("search_query=Up%20trailer"));
    }

    #[test]
    fn test_unconfigured_service() {
        let metadata = MetadataService::unconfigured().enrich("Heat");
        assert_eq!(metadata, MovieMetadata::placeholder("Heat"));
    }
}
