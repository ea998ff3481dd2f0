//! Overview-sentiment filter.
//!
//! Sentiment is scored on demand from the overview text with a small
//! polarity lexicon: `(positive - negative) / (positive + negative)`, in
//! [-1, 1], and 0.0 when no lexicon word occurs. A negator ("not", "no",
//! "never") directly before a word flips its polarity.

use crate::traits::Filter;
use data_loader::MovieRecord;
use vectorizer::tokenize;

const POSITIVE_WORDS: &[&str] = &[
    "beautiful", "best", "brave", "celebrate", "charming", "cheerful", "delight", "delightful",
    "dream", "dreams", "friendship", "fun", "funny", "gentle", "good", "great", "happy",
    "heartwarming", "hero", "heroic", "hope", "hopeful", "inspiring", "joy", "joyful", "kind",
    "laugh", "love", "loves", "loving", "magical", "peace", "perfect", "rescue", "romance",
    "save", "saves", "success", "triumph", "victory", "warm", "win", "wins", "wonderful",
];

const NEGATIVE_WORDS: &[&str] = &[
    "abuse", "afraid", "angry", "brutal", "corrupt", "cruel", "dark", "dead", "death", "deadly",
    "despair", "destroy", "disaster", "evil", "fear", "grief", "guilt", "hate", "haunted",
    "horror", "kill", "killed", "killer", "lonely", "lose", "loss", "murder", "nightmare",
    "pain", "revenge", "sad", "terror", "tragedy", "tragic", "violent", "war", "worst",
];

const NEGATORS: &[&str] = &["not", "no", "never", "without"];

/// Lexicon sentiment of a text, in [-1, 1]
pub fn sentiment_score(text: &str) -> f32 {
    let tokens = tokenize(text);
    let mut positive = 0u32;
    let mut negative = 0u32;

    for (i, token) in tokens.iter().enumerate() {
        let polarity = if POSITIVE_WORDS.contains(&token.as_str()) {
            1
        } else if NEGATIVE_WORDS.contains(&token.as_str()) {
            -1
        } else {
            continue;
        };

        let negated = i > 0 && NEGATORS.contains(&tokens[i - 1].as_str());
        if (polarity > 0) != negated {
            positive += 1;
        } else {
            negative += 1;
        }
    }

    let total = positive + negative;
    if total == 0 {
        return 0.0;
    }
    (positive as f32 - negative as f32) / total as f32
}

/// Keeps candidates whose overview sentiment is at least `min_score`.
pub struct SentimentFilter {
    min_score: f32,
}

impl SentimentFilter {
    /// # Arguments
    /// * `min_score` - Lowest sentiment to keep (inclusive), in [-1, 1]
    pub fn new(min_score: f32) -> Self {
        Self { min_score }
    }
}

impl Filter for SentimentFilter {
    fn name(&self) -> &str {
        "SentimentFilter"
    }

    fn keep(&self, movie: &MovieRecord) -> bool {
        sentiment_score(&movie.overview) >= self.min_score
    }
}
