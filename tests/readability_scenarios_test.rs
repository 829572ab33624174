//! End-to-end scoring scenarios with hand-checked numbers.

use pretty_assertions::assert_eq;
use readscore::scoring::{grade_estimates, median_grade};
use readscore::{score, score_with_limit, ReadabilityConfig, ReadabilityEngine, TextMetrics};

/// Four sentences, 27 words and 35 syllables: exactly 90.00 reading ease
const FRE_BOUNDARY_TEXT: &str = "The happy cat ran to the happy dog. A happy kid had a happy hat. \
                                 We sat in happy sun. A happy fox hid in happy water.";

fn repeated_sentences(count: usize) -> String {
    vec!["The cat sat."; count].join(" ")
}

#[test]
fn test_headline_scores() {
    let result = score("How to Win Friends");

    assert_eq!(result.flesch_reading_ease, 118.18);
    assert_eq!(result.flesch_kincaid_grade, -2.24);
    assert_eq!(result.smog_index, 0.0);
    assert_eq!(result.coleman_liau_index, -1.16);
    assert_eq!(result.automated_readability_index, -1.78);
    assert_eq!(result.linsear_write_formula, 1.0);
    assert_eq!(result.rix, 1.0);
    assert_eq!(result.median_grade, -1.0);
    assert_eq!(result.reading_time, 0.96);
}

#[test]
fn test_headline_measurements() {
    let metrics = TextMetrics::standard("How to Win Friends", 1000);

    assert_eq!(metrics.char_count(), 15);
    assert_eq!(metrics.letter_count(), 15);
    assert_eq!(metrics.lexicon_count(), 4);
    assert_eq!(metrics.syllable_count(), 4);
    assert_eq!(metrics.sentence_count(), 1);
}

#[test]
fn test_empty_text_counts_one_token() {
    let metrics = TextMetrics::standard("", 1000);
    assert_eq!(metrics.lexicon_count(), 1);
    assert_eq!(metrics.sentence_count(), 1);
    assert_eq!(metrics.syllable_count(), 1);
    assert_eq!(metrics.char_count(), 0);

    let result = score("");
    assert_eq!(result.flesch_reading_ease, 121.22);
    assert_eq!(result.flesch_kincaid_grade, -3.41);
    assert_eq!(result.coleman_liau_index, -45.41);
    assert_eq!(result.automated_readability_index, -20.94);
    assert_eq!(result.linsear_write_formula, -0.51);
    assert_eq!(result.rix, 0.0);
    // the middle grades -3 and -1 average to -2, which rounds to -3
    assert_eq!(result.median_grade, -3.0);
    assert_eq!(result.reading_time, 0.24);
}

#[test]
fn test_sampling_limits_measurements_but_not_reading_time() {
    let text = repeated_sentences(40);
    let metrics = TextMetrics::standard(&text, 50);

    assert_eq!(metrics.lexicon_count(), 50);
    assert_eq!(metrics.full_lexicon_count(), 120);
    // The trailing "The cat" fragment is too short to count
    assert_eq!(metrics.sentence_count(), 16);

    let first_fifty = text.split(' ').take(50).collect::<Vec<_>>().join(" ");
    let prefix = TextMetrics::standard(&first_fifty, 0);
    assert_eq!(metrics.char_count(), prefix.char_count());
    assert_eq!(metrics.char_count(), 166);
    assert_eq!(metrics.syllable_count(), prefix.syllable_count());
    assert_eq!(metrics.syllable_count(), 50);

    let sampled = score_with_limit(&text, 50);
    let unsampled = score_with_limit(&text, 0);
    assert_eq!(sampled.reading_time, 28.78);
    assert_eq!(unsampled.reading_time, 28.78);
    assert_eq!(sampled.flesch_reading_ease, 119.06);
    assert_eq!(unsampled.flesch_reading_ease, 119.19);
}

#[test]
fn test_reading_ease_on_bucket_boundary_maps_to_grade_five() {
    let result = score(FRE_BOUNDARY_TEXT);
    assert_eq!(result.flesch_reading_ease, 90.0);

    let grades = grade_estimates(&result.formula_scores());
    assert_eq!(grades[0], 5.0);
    assert_eq!(grades.len(), 12);
    assert_eq!(median_grade(&grades), result.median_grade);
    assert_eq!(result.median_grade, 2.0);
}

#[test]
fn test_engine_matches_free_function() {
    let engine = ReadabilityEngine::new(ReadabilityConfig::default()).unwrap();
    assert_eq!(engine.score(FRE_BOUNDARY_TEXT), score(FRE_BOUNDARY_TEXT));
}

#[test]
fn test_batch_keeps_input_order() {
    let engine = ReadabilityEngine::default();
    let texts = vec!["How to Win Friends", "", FRE_BOUNDARY_TEXT];
    let results = engine.score_batch(&texts);

    assert_eq!(results.len(), 3);
    for (text, result) in texts.iter().zip(&results) {
        assert_eq!(*result, score(text));
    }
}
