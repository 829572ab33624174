//! Readability scoring for headlines and other short texts.
//!
//! Seven classical formulas (Flesch Reading Ease, Flesch-Kincaid Grade,
//! SMOG, Coleman-Liau, Automated Readability Index, Linsear Write and RIX)
//! share one set of text measurements and are aggregated into a median
//! school grade, alongside an estimated reading time.
//!
//! ```rust
//! let result = readscore::score("How to Win Friends");
//! assert_eq!(result.reading_time, 0.96);
//! ```

pub mod cli;
pub mod config;
pub mod errors;
pub mod io;
pub mod metrics;
pub mod rounding;
pub mod scoring;
pub mod text;

// Re-export commonly used types
pub use crate::config::{HeuristicsConfig, ReadabilityConfig};
pub use crate::errors::ReadabilityError;
pub use crate::metrics::{MeasurementCache, MeasurementKey, TextMetrics};
pub use crate::rounding::round_half_away;
pub use crate::scoring::{
    score, score_with_config, score_with_limit, FormulaScores, ReadabilityEngine,
    ReadabilityResult,
};
pub use crate::text::TextHeuristics;
