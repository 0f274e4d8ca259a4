// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing::debug;

use crate::{Percent, PercentArg};

/// Calculate the value from the percent, truncated toward zero (not rounded).
///
/// - `percent` can be a number (eg: `50`, which is truncated to an integer first) or
///   text (eg: `"33%"`, where only the leading integer counts).
/// - Malformed percent text (eg: `"abc%"`) doesn't produce an error. The result is
///   `NaN` instead, so check for it with [`f64::is_nan`] if that matters to you. Use
///   [`Percent`] directly to get the parse error.
///
/// ```rust
/// use r3bl_number::value_according_percent;
///
/// assert_eq!(value_according_percent(200.0, "50%"), 100.0);
/// assert_eq!(value_according_percent(200.0, 50), 100.0);
/// assert_eq!(value_according_percent(7.0, "33%"), 2.0);
/// assert!(value_according_percent(100.0, "abc%").is_nan());
/// ```
#[must_use]
pub fn value_according_percent<'a>(value: f64, percent: impl Into<PercentArg<'a>>) -> f64 {
    let arg = percent.into();
    match Percent::try_from(arg) {
        Ok(percent) => percent.apply_to(value),
        Err(error) => {
            // % is Display, ? is Debug.
            debug!(
                message = "value_according_percent -> malformed percent",
                ?arg,
                %error
            );
            f64::NAN
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test_case(200.0, "50%", 100.0)]
    #[test_case(7.0, "33%", 2.0 ; "truncates instead of rounding")]
    #[test_case(-7.0, "33%", -2.0 ; "truncates toward zero")]
    #[test_case(5000.0, "50", 2500.0)]
    #[test_case(10.0, "150%", 15.0)]
    #[test_case(10.0, "-20%", -2.0)]
    #[test_case(99.0, " 1.99%", 0.0 ; "only the leading integer counts")]
    fn test_text_percent(value: f64, percent: &str, expected: f64) {
        assert_eq2!(value_according_percent(value, percent), expected);
    }

    #[test]
    fn test_number_percent() {
        assert_eq2!(value_according_percent(200.0, 50), 100.0);
        assert_eq2!(value_according_percent(200.0, 50.9), 100.0);
        assert_eq2!(value_according_percent(200.0, 50u8), 100.0);
        assert_eq2!(value_according_percent(3.0, 50i64), 1.0);
    }

    #[test]
    fn test_owned_string_percent() {
        let percent = String::from("25%");
        assert_eq2!(value_according_percent(8.0, &percent), 2.0);
    }

    #[test_case("abc%")]
    #[test_case("%")]
    #[test_case("")]
    fn test_malformed_percent_is_nan(percent: &str) {
        assert!(value_according_percent(100.0, percent).is_nan());
    }

    #[test]
    fn test_not_finite_inputs_are_nan() {
        assert!(value_according_percent(100.0, f64::NAN).is_nan());
        assert!(value_according_percent(f64::NAN, 50).is_nan());
        assert!(value_according_percent(f64::INFINITY, 50).is_nan());
    }
}
