//! Text normalization shared by every measurement.
//!
//! All tokenization in this crate is deliberately naive: words are the
//! segments between single ASCII spaces, so doubled spaces and empty input
//! produce empty tokens. Reference readability scores were computed that
//! way, and the counters downstream depend on it.

pub mod syllables;

use once_cell::sync::Lazy;
use regex::{Regex, Split};

use crate::config::HeuristicsConfig;
use crate::errors::{ReadabilityError, Result};

pub use syllables::{syllable_matches, syllables_in_word, SYLLABLE_PATTERN};

static DEFAULT_HEURISTICS: Lazy<TextHeuristics> = Lazy::new(|| {
    TextHeuristics::from_config(&HeuristicsConfig::default())
        .expect("default sentence boundary pattern is valid")
});

/// Compiled form of [`HeuristicsConfig`]
#[derive(Debug, Clone)]
pub struct TextHeuristics {
    sentence_boundary: Regex,
    punctuation: Vec<char>,
}

impl TextHeuristics {
    pub fn from_config(config: &HeuristicsConfig) -> Result<Self> {
        let sentence_boundary = Regex::new(&config.sentence_boundary).map_err(|source| {
            ReadabilityError::InvalidPattern {
                pattern: config.sentence_boundary.clone(),
                source,
            }
        })?;
        let mut punctuation: Vec<char> = config.punctuation.chars().collect();
        punctuation.sort_unstable();
        punctuation.dedup();

        Ok(Self {
            sentence_boundary,
            punctuation,
        })
    }

    /// Heuristics built from the default configuration, compiled once
    pub fn standard() -> &'static TextHeuristics {
        &DEFAULT_HEURISTICS
    }

    pub fn is_punctuation(&self, c: char) -> bool {
        self.punctuation.binary_search(&c).is_ok()
    }

    /// Drop every punctuation character; whitespace is left alone.
    pub fn remove_punctuation(&self, text: &str) -> String {
        text.chars().filter(|&c| !self.is_punctuation(c)).collect()
    }

    /// Lowercased, punctuation-free tokens of `text`, split on single spaces.
    ///
    /// Sampling is the caller's job. Empty input yields one empty token.
    pub fn split_words(&self, text: &str) -> Vec<String> {
        self.remove_punctuation(&text.to_lowercase())
            .split(' ')
            .map(str::to_string)
            .collect()
    }

    /// Word count after punctuation removal: the number of space-separated
    /// segments, so never zero.
    pub fn lexicon_count(&self, text: &str) -> usize {
        self.remove_punctuation(text).split(' ').count()
    }

    /// Raw fragments between sentence boundaries.
    ///
    /// The boundary match consumes the first character of the following
    /// sentence, same as the reference implementation.
    pub fn sentence_fragments<'h>(&self, text: &'h str) -> Split<'_, 'h> {
        self.sentence_boundary.split(text)
    }
}

/// Keep the first `limit` space-delimited tokens of `text`.
///
/// A limit of zero disables sampling. Because tokens are rejoined with the
/// same single space they were split on, the sample is always a prefix of
/// the input.
pub fn apply_sampling(text: &str, limit: usize) -> &str {
    if limit == 0 {
        return text;
    }
    match text.match_indices(' ').nth(limit - 1) {
        Some((cut, _)) => &text[..cut],
        None => text,
    }
}

/// `text` with every whitespace character removed
pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}
