//! Readability scoring entry points.
//!
//! A scoring call runs synchronously in one pass: the aggregator pulls
//! formula scores, the formulas pull averages and counters from a fresh
//! [`TextMetrics`], and the reading-time estimate is taken separately from
//! the unsampled text. Nothing outlives the call except the returned
//! [`ReadabilityResult`].
//!
//! # Example
//!
//! ```rust
//! use readscore::scoring::score;
//!
//! let result = score("How to Win Friends");
//! assert_eq!(result.reading_time, 0.96);
//! assert!(result.flesch_kincaid_grade.is_finite());
//! ```

pub mod formulas;
pub mod grade;
pub mod reading_time;

pub use formulas::FormulaScores;
pub use grade::{grade_estimates, median_grade};
pub use reading_time::{estimate_reading_time, WORDS_PER_SECOND};

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug_span, trace};

use crate::config::ReadabilityConfig;
use crate::errors::Result;
use crate::metrics::TextMetrics;
use crate::text::TextHeuristics;

/// Every score produced for one text.
///
/// Fields serialize under the camelCase names downstream report code
/// expects (`fleschReadingEase`, `medianGrade`, ...). Degenerate input can
/// leave individual scores non-numeric; they are never replaced with zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadabilityResult {
    pub flesch_reading_ease: f64,
    pub flesch_kincaid_grade: f64,
    pub smog_index: f64,
    pub coleman_liau_index: f64,
    pub automated_readability_index: f64,
    pub linsear_write_formula: f64,
    pub rix: f64,
    pub median_grade: f64,
    pub reading_time: f64,
}

impl ReadabilityResult {
    fn new(formulas: FormulaScores, median_grade: f64, reading_time: f64) -> Self {
        Self {
            flesch_reading_ease: formulas.flesch_reading_ease,
            flesch_kincaid_grade: formulas.flesch_kincaid_grade,
            smog_index: formulas.smog_index,
            coleman_liau_index: formulas.coleman_liau_index,
            automated_readability_index: formulas.automated_readability_index,
            linsear_write_formula: formulas.linsear_write_formula,
            rix: formulas.rix,
            median_grade,
            reading_time,
        }
    }

    /// The seven formula outputs without the aggregates
    pub fn formula_scores(&self) -> FormulaScores {
        FormulaScores {
            flesch_reading_ease: self.flesch_reading_ease,
            flesch_kincaid_grade: self.flesch_kincaid_grade,
            smog_index: self.smog_index,
            coleman_liau_index: self.coleman_liau_index,
            automated_readability_index: self.automated_readability_index,
            linsear_write_formula: self.linsear_write_formula,
            rix: self.rix,
        }
    }

    /// `(name, value)` pairs in report order
    pub fn fields(&self) -> [(&'static str, f64); 9] {
        [
            ("fleschReadingEase", self.flesch_reading_ease),
            ("fleschKincaidGrade", self.flesch_kincaid_grade),
            ("smogIndex", self.smog_index),
            ("colemanLiauIndex", self.coleman_liau_index),
            ("automatedReadabilityIndex", self.automated_readability_index),
            ("linsearWriteFormula", self.linsear_write_formula),
            ("rix", self.rix),
            ("medianGrade", self.median_grade),
            ("readingTime", self.reading_time),
        ]
    }
}

/// Scorer bound to one configuration.
///
/// Building the engine validates the configuration and compiles the
/// sentence pattern once. The engine holds no per-call state, so it can be
/// shared freely between threads.
#[derive(Debug, Clone)]
pub struct ReadabilityEngine {
    config: ReadabilityConfig,
    heuristics: TextHeuristics,
}

impl ReadabilityEngine {
    pub fn new(config: ReadabilityConfig) -> Result<Self> {
        config.validate()?;
        let heuristics = TextHeuristics::from_config(&config.heuristics)?;
        Ok(Self { config, heuristics })
    }

    pub fn config(&self) -> &ReadabilityConfig {
        &self.config
    }

    pub fn score(&self, text: &str) -> ReadabilityResult {
        score_text(text, &self.config, &self.heuristics)
    }

    /// Score many texts in parallel; results keep the input order.
    pub fn score_batch<S>(&self, texts: &[S]) -> Vec<ReadabilityResult>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| self.score(text.as_ref()))
            .collect()
    }
}

impl Default for ReadabilityEngine {
    fn default() -> Self {
        Self {
            config: ReadabilityConfig::default(),
            heuristics: TextHeuristics::standard().clone(),
        }
    }
}

/// Score `text` with the default configuration (sampling limit 1000)
pub fn score(text: &str) -> ReadabilityResult {
    score_with_config(text, &ReadabilityConfig::default())
}

/// Score `text` looking at no more than `sample_limit` leading words;
/// zero disables sampling.
pub fn score_with_limit(text: &str, sample_limit: usize) -> ReadabilityResult {
    score_with_config(text, &ReadabilityConfig::with_sample_limit(sample_limit))
}

/// Score `text` with the standard heuristics and the numeric settings of
/// `config`. Its `heuristics` section is ignored; build a
/// [`ReadabilityEngine`] to use custom patterns.
pub fn score_with_config(text: &str, config: &ReadabilityConfig) -> ReadabilityResult {
    score_text(text, config, TextHeuristics::standard())
}

fn score_text(
    text: &str,
    config: &ReadabilityConfig,
    heuristics: &TextHeuristics,
) -> ReadabilityResult {
    let _span = debug_span!("score", sample_limit = config.sample_limit).entered();

    let metrics = TextMetrics::new(text, heuristics, config.sample_limit);
    let formulas = FormulaScores::compute(&metrics, config.linsear_window);
    let grades = grade_estimates(&formulas);
    let median = median_grade(&grades);
    let reading_time = estimate_reading_time(&metrics, config.words_per_second);

    trace!(
        words = metrics.lexicon_count(),
        sentences = metrics.sentence_count(),
        ?grades,
        cache = ?metrics.cache().stats(),
        "scored text"
    );

    ReadabilityResult::new(formulas, median, reading_time)
}
