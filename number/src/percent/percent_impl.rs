// Copyright (c) 2022-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{self, Debug, Display, Formatter},
          ops::Deref,
          str::FromStr};

use miette::Diagnostic;
use nom::{IResult, Parser,
          bytes::complete::take_while,
          character::complete::{digit1, one_of},
          combinator::{opt, recognize},
          sequence::preceded};

use crate::{PercentArg, is_trimmable_whitespace};

/// Only the first occurrence is removed before parsing, so `"%%50"` is malformed.
pub const PERCENT_SIGN: &str = "%";

/// Represents an integral percentage. Unlike a display percentage, it isn't limited to
/// `0..=100`: `-20%` and `250%` are both fine, so it can scale values in either
/// direction.
///
/// You can create it in one of these ways (depending on what you start with):
///
/// 1. [`Percent::try_parse`] (or [`str::parse`]) from text like `"33%"`. Only the
///    integer at the start of the text counts: `"33.9%"` is `33%`.
/// 2. [`Percent::try_from_number`] from a number, which is truncated toward zero.
/// 3. [`TryFrom<PercentArg>`], which does one of the above.
///
/// # Traits Implementations
///
/// - [`Deref`]: Dereferences to [`f64`].
/// - [`Debug`] and [`Display`]: Format the value followed by a `%` sign.
///
/// # Example
///
/// ```rust
/// use r3bl_number::Percent;
///
/// let percent: Percent = "33%".parse().unwrap();
/// assert_eq!(*percent, 33.0);
/// assert_eq!(format!("{percent:?}"), "33%");
/// assert_eq!(percent.apply_to(7.0), 2.0);
///
/// assert!(Percent::try_parse("abc%").is_err());
/// ```
#[derive(Copy, Clone, PartialEq, Default)]
pub struct Percent {
    value: f64,
}

/// Failed to turn a [`PercentArg`] into a [`Percent`].
#[derive(Debug, Clone, PartialEq, thiserror::Error, Diagnostic)]
pub enum PercentParseError {
    #[error("Percent text {input:?} doesn't start with an integer")]
    #[diagnostic(
        code(r3bl_number::percent::no_leading_digits),
        help("Use text like `33%`, `50` or `-5%`")
    )]
    NoLeadingDigits { input: String },

    #[error("Percent value {value} is not a finite number")]
    #[diagnostic(code(r3bl_number::percent::not_finite))]
    NotFinite { value: f64 },
}

impl Deref for Percent {
    type Target = f64;

    fn deref(&self) -> &Self::Target { &self.value }
}

impl Debug for Percent {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result { write!(f, "{}%", self.value) }
}

impl Display for Percent {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result { Debug::fmt(self, f) }
}

impl Percent {
    /// Remove the first [`PERCENT_SIGN`], then read the integer at the start of the
    /// text: leading whitespace, an optional `+` or `-`, and a run of ASCII digits.
    /// Everything after the digits is ignored.
    ///
    /// # Errors
    ///
    /// [`PercentParseError::NoLeadingDigits`] if there is no such integer.
    pub fn try_parse(text: &str) -> Result<Percent, PercentParseError> {
        let without_sign = text.replacen(PERCENT_SIGN, "", 1);
        let no_leading_digits = || PercentParseError::NoLeadingDigits {
            input: text.to_string(),
        };

        let (_, integer) =
            parse_leading_integer(&without_sign).map_err(|_| no_leading_digits())?;
        let value = integer.parse::<f64>().map_err(|_| no_leading_digits())?;

        Ok(Percent { value })
    }

    /// Truncate the given number toward zero.
    ///
    /// # Errors
    ///
    /// [`PercentParseError::NotFinite`] for `NaN` and infinities.
    pub fn try_from_number(number: f64) -> Result<Percent, PercentParseError> {
        if !number.is_finite() {
            return Err(PercentParseError::NotFinite { value: number });
        }
        Ok(Percent {
            value: number.trunc(),
        })
    }

    /// Given the value, calculate the result of the percentage, truncated toward zero
    /// (not rounded). Results that aren't finite collapse to `NaN`.
    ///
    /// ```rust
    /// use r3bl_number::Percent;
    ///
    /// let percent = Percent::try_from_number(50.0).unwrap();
    /// assert_eq!(percent.apply_to(200.0), 100.0);
    /// assert_eq!(percent.apply_to(-3.0), -1.0);
    /// assert!(percent.apply_to(f64::NAN).is_nan());
    /// ```
    #[must_use]
    pub fn apply_to(&self, value: f64) -> f64 {
        let result = (value * self.value / 100.0).trunc();
        if result.is_finite() { result } else { f64::NAN }
    }
}

impl FromStr for Percent {
    type Err = PercentParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> { Percent::try_parse(text) }
}

impl TryFrom<f64> for Percent {
    type Error = PercentParseError;

    fn try_from(number: f64) -> Result<Self, Self::Error> {
        Percent::try_from_number(number)
    }
}

impl TryFrom<PercentArg<'_>> for Percent {
    type Error = PercentParseError;

    fn try_from(arg: PercentArg<'_>) -> Result<Self, Self::Error> {
        match arg {
            PercentArg::Number(number) => Percent::try_from_number(number),
            PercentArg::Text(text) => Percent::try_parse(text),
        }
    }
}

/// `\s* [+-]? digit+`, returning the signed digits.
fn parse_leading_integer(input: &str) -> IResult<&str, &str> {
    preceded(
        take_while(is_trimmable_whitespace),
        recognize((opt(one_of("+-")), digit1)),
    )
    .parse(input)
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test_case("50%", 50.0)]
    #[test_case("50", 50.0)]
    #[test_case("33.9%", 33.0 ; "fraction is ignored")]
    #[test_case("  -5%", -5.0 ; "leading whitespace and sign")]
    #[test_case("+12%", 12.0)]
    #[test_case("%50", 50.0 ; "sign in front")]
    #[test_case("50%%", 50.0 ; "two signs at the end")]
    #[test_case("12px", 12.0 ; "trailing garbage")]
    #[test_case("007", 7.0)]
    #[test_case("\u{FEFF}50%", 50.0 ; "leading byte order mark")]
    #[test_case("\u{00A0}-5%", -5.0 ; "leading no break space")]
    fn test_try_parse(text: &str, expected: f64) {
        let percent = Percent::try_parse(text).unwrap();
        assert_eq2!(*percent, expected);
    }

    #[test_case("abc%")]
    #[test_case("")]
    #[test_case("%")]
    #[test_case("%%50" ; "only the first sign is removed")]
    #[test_case("- 5" ; "whitespace after sign")]
    #[test_case(".5")]
    #[test_case("\u{85}50%" ; "leading next line")]
    fn test_try_parse_fails(text: &str) {
        assert_eq2!(
            Percent::try_parse(text),
            Err(PercentParseError::NoLeadingDigits {
                input: text.to_string()
            })
        );
    }

    #[test]
    fn test_try_from_number_truncates() {
        assert_eq2!(*Percent::try_from_number(33.9).unwrap(), 33.0);
        assert_eq2!(*Percent::try_from_number(-33.9).unwrap(), -33.0);
        assert_eq2!(*Percent::try_from(250.0).unwrap(), 250.0);
        assert!(matches!(
            Percent::try_from_number(f64::NAN),
            Err(PercentParseError::NotFinite { .. })
        ));
        assert!(Percent::try_from_number(f64::INFINITY).is_err());
    }

    #[test]
    fn test_try_from_percent_arg() {
        assert_eq2!(*Percent::try_from(PercentArg::from(50)).unwrap(), 50.0);
        assert_eq2!(*Percent::try_from(PercentArg::from("50%")).unwrap(), 50.0);
        assert!(Percent::try_from(PercentArg::from("x")).is_err());
    }

    #[test]
    fn test_apply_to_truncates_toward_zero() {
        let pc_33 = Percent::try_parse("33%").unwrap();
        assert_eq2!(pc_33.apply_to(7.0), 2.0);
        assert_eq2!(pc_33.apply_to(-7.0), -2.0);

        let pc_100 = Percent::try_parse("100").unwrap();
        assert_eq2!(pc_100.apply_to(500.0), 500.0);

        let pc_0 = Percent::try_parse("0%").unwrap();
        assert_eq2!(pc_0.apply_to(500.0), 0.0);

        let pc_huge = Percent::try_from_number(f64::MAX).unwrap();
        assert!(pc_huge.apply_to(f64::MAX).is_nan());
    }

    #[test]
    fn test_formats_with_percent_sign() {
        let percent = Percent::try_parse("-20").unwrap();
        assert_eq2!(format!("{percent:?}"), "-20%");
        assert_eq2!(format!("{percent}"), "-20%");
    }
}
