use serde::{Deserialize, Serialize};

use crate::errors::{ReadabilityError, Result};

/// Sentence boundary: terminal punctuation, whitespace, then anything that
/// is not a lowercase letter. Misses abbreviations on purpose; published
/// reference scores were computed with exactly this pattern.
pub const DEFAULT_SENTENCE_BOUNDARY: &str = r"[.?!]\s[^a-z]";

/// ASCII punctuation stripped before counting words and letters.
pub const DEFAULT_PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[]^_`{|}~";

/// Root configuration for the scoring engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityConfig {
    /// Leading words considered by sampled measurements (0 disables sampling)
    #[serde(default = "default_sample_limit")]
    pub sample_limit: usize,

    /// Reading speed used by the reading-time estimate
    #[serde(default = "default_words_per_second")]
    pub words_per_second: f64,

    /// Number of leading words examined by Linsear Write
    #[serde(default = "default_linsear_window")]
    pub linsear_window: usize,

    /// Tokenization heuristics
    #[serde(default)]
    pub heuristics: HeuristicsConfig,
}

impl Default for ReadabilityConfig {
    fn default() -> Self {
        Self {
            sample_limit: default_sample_limit(),
            words_per_second: default_words_per_second(),
            linsear_window: default_linsear_window(),
            heuristics: HeuristicsConfig::default(),
        }
    }
}

impl ReadabilityConfig {
    /// Default configuration with a different sampling limit
    pub fn with_sample_limit(sample_limit: usize) -> Self {
        Self {
            sample_limit,
            ..Self::default()
        }
    }

    /// Reject values that would make every score meaningless.
    ///
    /// The sentence pattern is validated separately when it is compiled.
    pub fn validate(&self) -> Result<()> {
        if !(self.words_per_second.is_finite() && self.words_per_second > 0.0) {
            return Err(ReadabilityError::invalid_config(format!(
                "words_per_second must be a positive number, got {}",
                self.words_per_second
            )));
        }
        if self.linsear_window == 0 {
            return Err(ReadabilityError::invalid_config(
                "linsear_window must be at least 1",
            ));
        }
        if self.heuristics.sentence_boundary.is_empty() {
            return Err(ReadabilityError::invalid_config(
                "heuristics.sentence_boundary must not be empty",
            ));
        }
        Ok(())
    }
}

/// Pattern constants driving tokenization.
///
/// Changing either value moves scores away from the published reference
/// numbers; they are exposed for experimentation, not for tuning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeuristicsConfig {
    #[serde(default = "default_sentence_boundary")]
    pub sentence_boundary: String,

    #[serde(default = "default_punctuation")]
    pub punctuation: String,
}

impl Default for HeuristicsConfig {
    fn default() -> Self {
        Self {
            sentence_boundary: default_sentence_boundary(),
            punctuation: default_punctuation(),
        }
    }
}

fn default_sample_limit() -> usize {
    1000
}
fn default_words_per_second() -> f64 {
    4.17
}
fn default_linsear_window() -> usize {
    100
}
fn default_sentence_boundary() -> String {
    DEFAULT_SENTENCE_BOUNDARY.to_string()
}
fn default_punctuation() -> String {
    DEFAULT_PUNCTUATION.to_string()
}
