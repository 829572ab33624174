//! Aggregation of formula scores into a single school grade.
//!
//! Flesch Reading Ease and RIX are mapped through fixed bucket tables; the
//! five grade-level formulas contribute both their floor and their ceiling.
//! The median of the resulting list is the consensus grade.

use super::formulas::FormulaScores;
use crate::rounding::round_half_away;

/// Half-open `[low, high)` Flesch Reading Ease ranges and their grades.
///
/// Anything outside every range, including scores of 100 and above and
/// non-numeric scores, falls back to [`FRE_FALLBACK_GRADE`].
const FRE_BANDS: [(f64, f64, &[f64]); 7] = [
    (90.0, 100.0, &[5.0]),
    (80.0, 90.0, &[6.0]),
    (70.0, 80.0, &[7.0]),
    (60.0, 70.0, &[8.0, 9.0]),
    (50.0, 60.0, &[10.0]),
    (40.0, 50.0, &[11.0]),
    (30.0, 40.0, &[12.0]),
];

pub const FRE_FALLBACK_GRADE: f64 = 13.0;

/// RIX lower bounds, highest first; the first bound reached wins.
const RIX_BANDS: [(f64, f64); 12] = [
    (7.2, 13.0),
    (6.2, 12.0),
    (5.3, 11.0),
    (4.5, 10.0),
    (3.7, 9.0),
    (3.0, 8.0),
    (2.4, 7.0),
    (1.8, 6.0),
    (1.3, 5.0),
    (0.8, 4.0),
    (0.5, 3.0),
    (0.2, 2.0),
];

pub const RIX_FALLBACK_GRADE: f64 = 1.0;

/// Grades for a Flesch Reading Ease score; `[60, 70)` yields two.
pub fn fre_grades(score: f64) -> &'static [f64] {
    FRE_BANDS
        .iter()
        .find(|(low, high, _)| score >= *low && score < *high)
        .map(|(_, _, grades)| *grades)
        .unwrap_or(&[FRE_FALLBACK_GRADE])
}

pub fn rix_grade(score: f64) -> f64 {
    RIX_BANDS
        .iter()
        .find(|(low, _)| score >= *low)
        .map(|(_, grade)| *grade)
        .unwrap_or(RIX_FALLBACK_GRADE)
}

/// `ceil` without the negative zero it produces for values in (-1, 0)
fn ceil_grade(score: f64) -> f64 {
    let ceiling = score.ceil();
    if ceiling == 0.0 {
        0.0
    } else {
        ceiling
    }
}

/// Every per-formula grade estimate, in formula order
pub fn grade_estimates(scores: &FormulaScores) -> Vec<f64> {
    let mut grades = Vec::with_capacity(13);
    grades.extend_from_slice(fre_grades(scores.flesch_reading_ease));

    for score in [
        scores.flesch_kincaid_grade,
        scores.smog_index,
        scores.coleman_liau_index,
        scores.automated_readability_index,
        scores.linsear_write_formula,
    ] {
        grades.push(score.floor());
        grades.push(ceil_grade(score));
    }

    grades.push(rix_grade(scores.rix));
    grades
}

/// Median of `grades`, order-independent.
///
/// Even-length lists average the two middle values. Either way the result
/// goes through [`round_half_away`] at precision 0, which pushes negative
/// integers one grade lower. An empty list has no median and yields NaN.
pub fn median_grade(grades: &[f64]) -> f64 {
    let mut sorted = grades.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    match sorted.len() {
        0 => f64::NAN,
        n if n % 2 == 1 => round_half_away(sorted[mid], 0),
        _ => round_half_away((sorted[mid - 1] + sorted[mid]) / 2.0, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fre_bucket_boundaries_are_half_open() {
        assert_eq!(fre_grades(90.0), &[5.0]);
        assert_eq!(fre_grades(89.99), &[6.0]);
        assert_eq!(fre_grades(99.99), &[5.0]);
        assert_eq!(fre_grades(30.0), &[12.0]);
        assert_eq!(fre_grades(29.99), &[13.0]);
    }

    #[test]
    fn test_fre_sixties_push_two_grades() {
        assert_eq!(fre_grades(65.0), &[8.0, 9.0]);
        assert_eq!(fre_grades(60.0), &[8.0, 9.0]);
    }

    #[test]
    fn test_fre_out_of_range_falls_back() {
        assert_eq!(fre_grades(100.0), &[13.0]);
        assert_eq!(fre_grades(121.22), &[13.0]);
        assert_eq!(fre_grades(-40.0), &[13.0]);
        assert_eq!(fre_grades(f64::NAN), &[13.0]);
    }

    #[test]
    fn test_rix_bands() {
        assert_eq!(rix_grade(10.0), 13.0);
        assert_eq!(rix_grade(7.2), 13.0);
        assert_eq!(rix_grade(7.19), 12.0);
        assert_eq!(rix_grade(3.0), 8.0);
        assert_eq!(rix_grade(1.0), 4.0);
        assert_eq!(rix_grade(0.2), 2.0);
        assert_eq!(rix_grade(0.19), 1.0);
        assert_eq!(rix_grade(0.0), 1.0);
        assert_eq!(rix_grade(f64::NAN), 1.0);
    }

    #[test]
    fn test_grade_estimates_shape() {
        let scores = FormulaScores {
            flesch_reading_ease: 65.0,
            flesch_kincaid_grade: 7.4,
            smog_index: 0.0,
            coleman_liau_index: 9.0,
            automated_readability_index: -0.5,
            linsear_write_formula: 6.5,
            rix: 2.5,
        };
        assert_eq!(
            grade_estimates(&scores),
            vec![8.0, 9.0, 7.0, 8.0, 0.0, 0.0, 9.0, 9.0, -1.0, 0.0, 6.0, 7.0, 7.0]
        );
    }

    #[test]
    fn test_ceil_never_yields_negative_zero() {
        let scores = FormulaScores {
            flesch_reading_ease: 95.0,
            flesch_kincaid_grade: -0.3,
            smog_index: 0.0,
            coleman_liau_index: 0.0,
            automated_readability_index: 0.0,
            linsear_write_formula: 0.0,
            rix: 0.0,
        };
        let grades = grade_estimates(&scores);
        assert_eq!(grades[1], -1.0);
        assert_eq!(grades[2], 0.0);
        assert!(grades[2].is_sign_positive());
    }

    #[test]
    fn test_median_odd_length() {
        assert_eq!(median_grade(&[9.0, 1.0, 5.0]), 5.0);
    }

    #[test]
    fn test_median_even_length_rounds_half_away() {
        assert_eq!(median_grade(&[4.0, 1.0, 2.0, 9.0]), 3.0);
        assert_eq!(median_grade(&[0.0, -1.0]), -1.0);
        assert_eq!(median_grade(&[7.0, 8.0]), 8.0);
    }

    #[test]
    fn test_median_of_negative_grades_rounds_down() {
        assert_eq!(median_grade(&[-2.0, -5.0, 1.0]), -3.0);
        assert_eq!(median_grade(&[-3.0, -1.0]), -3.0);
    }

    #[test]
    fn test_median_ignores_input_order() {
        let grades = [13.0, -3.0, -2.0, 0.0, 0.0, -2.0, -1.0, -2.0, -1.0, 1.0, 1.0, 4.0];
        let mut reversed = grades;
        reversed.reverse();
        assert_eq!(median_grade(&grades), median_grade(&reversed));
        assert_eq!(median_grade(&grades), -1.0);
    }

    #[test]
    fn test_median_of_empty_is_nan() {
        assert!(median_grade(&[]).is_nan());
    }
}
