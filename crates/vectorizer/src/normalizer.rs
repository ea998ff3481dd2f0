//! Text normalization and soup building.
//!
//! A soup is the single string a movie is vectorized from:
//!
//! ```text
//! "{genres} {companies} {language} {normalized overview}"
//! ```
//!
//! Lists are space-joined in source order and original case. Byte-identical
//! soups across implementations require exactly this layout.

use crate::stop_words::is_stop_word;
use data_loader::MovieRecord;
use std::collections::HashMap;

/// Vectorizer tokenizer: lowercase, split on every non-alphanumeric
/// character, keep tokens of two or more characters.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| w.chars().count() >= 2)
        .map(|w| w.to_string())
        .collect()
}

/// `tokenize` minus stop words; the terms a soup contributes to the space
pub fn index_terms(text: &str) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .filter(|t| !is_stop_word(t))
        .collect()
}

/// Lowercase, delete ASCII punctuation, split on whitespace and drop stop
/// words, preserving token order.
///
/// Punctuation is removed rather than treated as a break, so "Don't" yields
/// "dont" and "Spider-Man's" yields "spidermans".
pub fn content_tokens(text: &str) -> Vec<String> {
    let stripped: String = text
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect();

    stripped
        .split_whitespace()
        .filter(|t| !is_stop_word(t))
        .map(|t| t.to_string())
        .collect()
}

/// Normalize free text into a space-separated token string.
///
/// Empty or stop-word-only input yields an empty string.
pub fn normalize(text: &str) -> String {
    content_tokens(text).join(" ")
}

/// Build the soup for one movie
pub fn build_soup(record: &MovieRecord) -> String {
    let genres = record.genres.join(" ");
    let companies = record.production_companies.join(" ");
    let overview = normalize(&record.overview);
    format!(
        "{} {} {} {}",
        genres, companies, record.original_language, overview
    )
}

/// Most frequent content words in `text`, with their counts.
///
/// Ties keep first-appearance order.
pub fn extract_keywords(text: &str, n: usize) -> Vec<(String, usize)> {
    let tokens = content_tokens(text);

    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (position, token) in tokens.iter().enumerate() {
        counts.entry(token.as_str()).or_insert((0, position)).0 += 1;
    }

    let mut ranked: Vec<(&str, usize, usize)> = counts
        .into_iter()
        .map(|(term, (count, first))| (term, count, first))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    ranked.truncate(n);

    ranked
        .into_iter()
        .map(|(term, count, _)| (term.to_string(), count))
        .collect()
}
