use crate::metrics::TextMetrics;
use crate::rounding::round2;

/// Average silent reading speed for short English text
pub const WORDS_PER_SECOND: f64 = 4.17;

/// Seconds needed to read `word_count` words at `words_per_second`
pub fn reading_time(word_count: usize, words_per_second: f64) -> f64 {
    round2(word_count as f64 / words_per_second)
}

/// Reading time for the whole input.
///
/// Uses the full word count, never the sample or the cache, so long texts
/// are timed by their real length whatever the sampling limit is.
pub fn estimate_reading_time(metrics: &TextMetrics<'_>, words_per_second: f64) -> f64 {
    reading_time(metrics.full_lexicon_count(), words_per_second)
}
