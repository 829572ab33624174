//! The rounding rule shared by every average and formula.
//!
//! Scores use `floor(x * 10^p + 0.5 * sign(x)) / 10^p`. Published reference
//! scores were produced with exactly this expression, and the grade
//! aggregation floors and ceils the rounded values, so any other rounding
//! would move grades.

/// Round `value` to `precision` decimal places.
///
/// Positive input rounds half up. Negative input subtracts `0.5` before
/// flooring, so it always moves at least one step below the value
/// (`-2.2299...` becomes `-2.24`, `-1.0` becomes `-1.01`) and the operation
/// is only idempotent for `x >= 0`. Zero never comes back negative. NaN and
/// infinities pass through unchanged.
pub fn round_half_away(value: f64, precision: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scale = 10f64.powi(precision);
    let sign = if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    };
    let rounded = (value * scale + 0.5 * sign).floor() / scale;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// [`round_half_away`] to two decimals, the precision every score uses
pub fn round2(value: f64) -> f64 {
    round_half_away(value, 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounds_half_up_for_positive() {
        assert_eq!(round_half_away(2.5, 0), 3.0);
        assert_eq!(round_half_away(0.125, 2), 0.13);
        assert_eq!(round_half_away(1.234, 2), 1.23);
    }

    #[test]
    fn test_negative_input_floors_after_subtracting_half() {
        assert_eq!(round_half_away(-2.5, 0), -3.0);
        assert_eq!(round_half_away(-2.0, 0), -3.0);
        assert_eq!(round_half_away(-0.5, 0), -1.0);
        assert_eq!(round_half_away(-1.236, 2), -1.25);
        assert_eq!(round_half_away(-2.2299999999999986, 2), -2.24);
        assert_eq!(round_half_away(-1.7675, 2), -1.78);
    }

    #[test]
    fn test_zero_stays_zero() {
        assert_eq!(round_half_away(0.0, 2), 0.0);
        assert!(round_half_away(-0.0, 2).is_sign_positive());
        assert_eq!(round_half_away(-0.004, 2), -0.01);
    }

    #[test]
    fn test_reading_time_example() {
        assert_eq!(round2(4.0 / 4.17), 0.96);
    }

    #[test]
    fn test_non_finite_passes_through() {
        assert!(round2(f64::NAN).is_nan());
        assert_eq!(round2(f64::INFINITY), f64::INFINITY);
        assert_eq!(round2(f64::NEG_INFINITY), f64::NEG_INFINITY);
    }

    #[test]
    fn test_idempotent_for_non_negative_input() {
        for value in [0.0, 0.004, 0.005, 1.0, 3.14159, 121.22, 206.835] {
            let once = round2(value);
            assert_eq!(round2(once), once, "value {}", value);
        }
    }

    #[test]
    fn test_negative_values_drift_when_rounded_again() {
        assert_eq!(round2(-1.0), -1.01);
        assert_eq!(round2(round2(-1.0)), -1.02);
    }
}
