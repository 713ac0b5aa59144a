//! Display formatting for evaluated values.

/// Significant digits kept for non-integer results.
pub const DEFAULT_SIGNIFICANT_DIGITS: usize = 12;

// Same cut-offs JavaScript uses for switching to exponent notation.
const EXPONENT_UPPER: f64 = 1e21;
const EXPONENT_LOWER: f64 = 1e-7;

/// Render a value for display.
///
/// Integers print without a decimal point. Everything else is rounded to
/// `significant_digits` and printed in its shortest round-trip form, so
/// `0.1 + 0.2` shows as `0.3` and `10 / 4` as `2.5`. Returns `None` for
/// NaN and infinities.
pub fn format_value(value: f64, significant_digits: usize) -> Option<String> {
    if !value.is_finite() {
        return None;
    }
    // Also folds -0 into 0
    if value == 0.0 {
        return Some("0".to_string());
    }
    if value.fract() == 0.0 && value.abs() < EXPONENT_UPPER {
        return Some(format!("{}", value));
    }

    let digits = significant_digits.clamp(1, 17);
    let rounded: f64 = format!("{:.*e}", digits - 1, value)
        .parse()
        .unwrap_or(value);

    let magnitude = rounded.abs();
    if magnitude >= EXPONENT_UPPER || magnitude < EXPONENT_LOWER {
        Some(format!("{:e}", rounded))
    } else {
        Some(format!("{}", rounded))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(v: f64) -> String {
        format_value(v, DEFAULT_SIGNIFICANT_DIGITS).unwrap()
    }

    #[test]
    fn test_integers_have_no_decimal_point() {
        assert_eq!(fmt(4.0), "4");
        assert_eq!(fmt(-2012.0), "-2012");
        assert_eq!(fmt(1e20), "100000000000000000000");
    }

    #[test]
    fn test_negative_zero() {
        assert_eq!(fmt(-0.0), "0");
    }

    #[test]
    fn test_float_noise_is_rounded_away() {
        assert_eq!(fmt(10.0 / 4.0), "2.5");
        assert_eq!(fmt(0.1 + 0.2), "0.3");
        assert_eq!(fmt(1.1 * 3.0), "3.3");
    }

    #[test]
    fn test_repeating_decimals_are_bounded() {
        assert_eq!(fmt(1.0 / 3.0), "0.333333333333");
        assert_eq!(fmt(2.0 / 3.0), "0.666666666667");
        assert_eq!(fmt(-1.0 / 3.0), "-0.333333333333");
    }

    #[test]
    fn test_rounding_can_land_on_an_integer() {
        assert_eq!(fmt(2.0000000000001), "2");
    }

    #[test]
    fn test_exponent_notation_for_extremes() {
        assert_eq!(fmt(1.5e-8), "1.5e-8");
        assert_eq!(fmt(2.5e21), "2.5e21");
        assert_eq!(fmt(1e22), "1e22");
    }

    #[test]
    fn test_precision_is_configurable_and_clamped() {
        assert_eq!(format_value(1.0 / 3.0, 3).as_deref(), Some("0.333"));
        assert_eq!(format_value(2.7, 0).as_deref(), Some("3"));
        assert_eq!(format_value(0.1 + 0.2, 100).as_deref(), Some("0.30000000000000004"));
    }

    #[test]
    fn test_non_finite_is_rejected() {
        assert_eq!(format_value(f64::INFINITY, 12), None);
        assert_eq!(format_value(f64::NEG_INFINITY, 12), None);
        assert_eq!(format_value(f64::NAN, 12), None);
    }
}
