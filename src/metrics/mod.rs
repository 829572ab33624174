//! Primitive text counters and the averages built from them.
//!
//! [`TextMetrics`] wraps one input text for the duration of one scoring
//! call. Sampled counters look only at the first `sample_limit` tokens;
//! the counters shared by several formulas are memoized in a private
//! [`MeasurementCache`].

mod averages;
pub mod cache;

pub use cache::{CacheStats, MeasurementCache, MeasurementKey};

use crate::text::{apply_sampling, strip_whitespace, syllables_in_word, TextHeuristics};

/// Syllable count at which a word is considered polysyllabic
pub const POLYSYLLABLE_THRESHOLD: usize = 3;

/// Measurements of a single text, memoized per call
#[derive(Debug)]
pub struct TextMetrics<'a> {
    text: &'a str,
    heuristics: &'a TextHeuristics,
    sample_limit: usize,
    cache: MeasurementCache,
}

impl<'a> TextMetrics<'a> {
    pub fn new(text: &'a str, heuristics: &'a TextHeuristics, sample_limit: usize) -> Self {
        Self {
            text,
            heuristics,
            sample_limit,
            cache: MeasurementCache::new(),
        }
    }

    /// Metrics using the default heuristics
    pub fn standard(text: &'a str, sample_limit: usize) -> Self {
        Self::new(text, TextHeuristics::standard(), sample_limit)
    }

    /// The unsampled input
    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn heuristics(&self) -> &'a TextHeuristics {
        self.heuristics
    }

    pub fn sample_limit(&self) -> usize {
        self.sample_limit
    }

    pub fn cache(&self) -> &MeasurementCache {
        &self.cache
    }

    /// The window most measurements operate on
    pub fn sampled(&self) -> &'a str {
        apply_sampling(self.text, self.sample_limit)
    }

    /// Non-whitespace characters in the sample
    pub fn char_count(&self) -> usize {
        self.cache
            .char_count(|| strip_whitespace(self.sampled()).chars().count())
    }

    /// Non-whitespace, non-punctuation characters in the sample
    pub fn letter_count(&self) -> usize {
        let compact = strip_whitespace(self.sampled());
        self.heuristics
            .remove_punctuation(&compact)
            .chars()
            .count()
    }

    /// Word count of the sample
    pub fn lexicon_count(&self) -> usize {
        self.cache
            .lexicon_count(|| self.heuristics.lexicon_count(self.sampled()))
    }

    /// Word count of the whole input, bypassing both sample and cache
    pub fn full_lexicon_count(&self) -> usize {
        self.heuristics.lexicon_count(self.text)
    }

    /// Normalized tokens of the sample
    pub fn words(&self) -> &[String] {
        self.cache
            .words(|| self.heuristics.split_words(self.sampled()))
    }

    pub fn syllable_count(&self) -> usize {
        self.cache.syllable_count(|| {
            self.words()
                .iter()
                .map(|word| syllables_in_word(word))
                .sum()
        })
    }

    /// Words with at least [`POLYSYLLABLE_THRESHOLD`] syllables
    pub fn poly_syllable_count(&self) -> usize {
        self.words()
            .iter()
            .filter(|word| syllables_in_word(word) >= POLYSYLLABLE_THRESHOLD)
            .count()
    }

    pub fn sentence_count(&self) -> usize {
        self.cache
            .sentence_count(|| self.count_sentences(self.text))
    }

    /// Uncached sentence count of an arbitrary text, sampled with this
    /// instance's limit.
    ///
    /// Fragments of two words or fewer are discarded as abbreviation
    /// debris; the result is never below one.
    pub fn count_sentences(&self, text: &str) -> usize {
        let sample = apply_sampling(text, self.sample_limit);
        let sentences = self
            .heuristics
            .sentence_fragments(sample)
            .filter(|fragment| self.heuristics.lexicon_count(fragment) > 2)
            .count();
        sentences.max(1)
    }
}
