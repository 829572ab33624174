//! The seven readability formulas.
//!
//! Each formula reads its inputs from a [`TextMetrics`] and rounds the
//! result to two decimals. Constants are the published English values.

use crate::metrics::{TextMetrics, POLYSYLLABLE_THRESHOLD};
use crate::rounding::round2;
use crate::text::{apply_sampling, syllables_in_word};

/// Flesch Reading Ease constants for English
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FleschBaseline {
    pub base: f64,
    pub sentence_length: f64,
    pub syllables_per_word: f64,
}

pub const ENGLISH_FRE: FleschBaseline = FleschBaseline {
    base: 206.835,
    sentence_length: 1.015,
    syllables_per_word: 84.6,
};

/// SMOG needs this many sentences before it reports anything but zero
pub const SMOG_MIN_SENTENCES: usize = 3;

/// Words longer than this many characters count as long for RIX
pub const RIX_LONG_WORD: usize = 6;

/// Raw outputs of every formula for one text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormulaScores {
    pub flesch_reading_ease: f64,
    pub flesch_kincaid_grade: f64,
    pub smog_index: f64,
    pub coleman_liau_index: f64,
    pub automated_readability_index: f64,
    pub linsear_write_formula: f64,
    pub rix: f64,
}

impl FormulaScores {
    pub fn compute(metrics: &TextMetrics<'_>, linsear_window: usize) -> Self {
        Self {
            flesch_reading_ease: flesch_reading_ease(metrics),
            flesch_kincaid_grade: flesch_kincaid_grade(metrics),
            smog_index: smog_index(metrics),
            coleman_liau_index: coleman_liau_index(metrics),
            automated_readability_index: automated_readability_index(metrics),
            linsear_write_formula: linsear_write_formula(metrics, linsear_window),
            rix: rix(metrics),
        }
    }
}

pub fn flesch_reading_ease(metrics: &TextMetrics<'_>) -> f64 {
    let baseline = ENGLISH_FRE;
    round2(
        baseline.base
            - baseline.sentence_length * metrics.avg_sentence_length()
            - baseline.syllables_per_word * metrics.avg_syllables_per_word(),
    )
}

pub fn flesch_kincaid_grade(metrics: &TextMetrics<'_>) -> f64 {
    round2(
        0.39 * metrics.avg_sentence_length() + 11.8 * metrics.avg_syllables_per_word() - 15.59,
    )
}

/// SMOG grade; short texts get a flat, unrounded 0.0
pub fn smog_index(metrics: &TextMetrics<'_>) -> f64 {
    let sentences = metrics.sentence_count();
    if sentences < SMOG_MIN_SENTENCES {
        return 0.0;
    }
    let poly_syllables = metrics.poly_syllable_count() as f64;
    let smog = 1.043 * (poly_syllables * (30.0 / sentences as f64)).sqrt() + 3.1291;
    round2(smog)
}

pub fn coleman_liau_index(metrics: &TextMetrics<'_>) -> f64 {
    let letters = round2(metrics.avg_letters_per_word() * 100.0);
    let sentences = round2(metrics.avg_sentences_per_word() * 100.0);
    round2(0.0588 * letters - 0.296 * sentences - 15.8)
}

pub fn automated_readability_index(metrics: &TextMetrics<'_>) -> f64 {
    let chars = metrics.char_count() as f64;
    let words = metrics.lexicon_count() as f64;
    let sentences = metrics.sentence_count() as f64;
    round2(4.71 * round2(chars / words) + 0.5 * round2(words / sentences) - 21.43)
}

/// Linsear Write over the first `window` words.
///
/// Word difficulty comes from the sampled tokens, while the sentence count
/// is taken from the first `window` raw tokens of the unsampled input.
pub fn linsear_write_formula(metrics: &TextMetrics<'_>, window: usize) -> f64 {
    let (easy, difficult) = metrics
        .words()
        .iter()
        .take(window)
        .fold((0usize, 0usize), |(easy, difficult), word| {
            if syllables_in_word(word) < POLYSYLLABLE_THRESHOLD {
                (easy + 1, difficult)
            } else {
                (easy, difficult + 1)
            }
        });

    let leading_text = apply_sampling(metrics.text(), window);
    let sentences = metrics.count_sentences(leading_text) as f64;

    let mut number = (easy + difficult * 3) as f64 / sentences;
    if number <= 20.0 {
        number -= 2.0;
    }
    round2(number / 2.0)
}

/// Long words per sentence
pub fn rix(metrics: &TextMetrics<'_>) -> f64 {
    let long_words = metrics
        .words()
        .iter()
        .filter(|word| word.chars().count() > RIX_LONG_WORD)
        .count();
    round2(long_words as f64 / metrics.sentence_count() as f64)
}
