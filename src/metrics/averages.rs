//! Ratios of primitive counters, rounded to two decimals.
//!
//! Division is plain `f64` division: a zero denominator yields NaN or
//! infinity, which the formulas then carry through untouched.

use super::TextMetrics;
use crate::rounding::round2;

impl TextMetrics<'_> {
    /// Words per sentence
    pub fn avg_sentence_length(&self) -> f64 {
        round2(self.lexicon_count() as f64 / self.sentence_count() as f64)
    }

    pub fn avg_syllables_per_word(&self) -> f64 {
        round2(self.syllable_count() as f64 / self.lexicon_count() as f64)
    }

    pub fn avg_letters_per_word(&self) -> f64 {
        round2(self.letter_count() as f64 / self.lexicon_count() as f64)
    }

    pub fn avg_sentences_per_word(&self) -> f64 {
        round2(self.sentence_count() as f64 / self.lexicon_count() as f64)
    }
}
