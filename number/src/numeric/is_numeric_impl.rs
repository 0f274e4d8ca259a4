// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing::trace;

use crate::{NumericCandidate, PrimitiveKind, ValueOf, build_delimiters,
            parse_numeric_text, trim_whitespace};

/// Fraction delimiters that are accepted (in addition to [`crate::DECIMAL_POINT`]) when
/// none are given.
pub const DEFAULT_ADDITIONAL_DELIMITERS: &[&str] = &[","];

/// Checks if the given value should be treated as a number, using
/// [`DEFAULT_ADDITIONAL_DELIMITERS`]. These are all numeric (as text or as numbers):
///
/// - `0.001`, `.001`
/// - `- 10000`, `10000`
/// - `1e+26`, `22e-26`, `.45e+26`
/// - `0xabcdef`, `0x1`
///
/// ```rust
/// use r3bl_number::{BoxedNumber, NumericCandidate, is_numeric};
///
/// assert!(is_numeric(0.001));
/// assert!(is_numeric("- 10000"));
/// assert!(is_numeric("0xabcdef"));
/// assert!(is_numeric(NumericCandidate::Object(&BoxedNumber(5.0))));
///
/// assert!(!is_numeric(""));
/// assert!(!is_numeric("a"));
/// assert!(!is_numeric(f64::INFINITY));
/// assert!(!is_numeric(true));
/// ```
#[must_use]
pub fn is_numeric<'a>(value: impl Into<NumericCandidate<'a>>) -> bool {
    is_numeric_with_delimiters(value, DEFAULT_ADDITIONAL_DELIMITERS)
}

/// Same as [`is_numeric()`] but the fraction delimiters that are accepted (in addition
/// to [`crate::DECIMAL_POINT`]) are given by `additional_delimiters`.
///
/// ```rust
/// use r3bl_number::is_numeric_with_delimiters;
///
/// assert!(is_numeric_with_delimiters("1'5", &["'"]));
/// assert!(!is_numeric_with_delimiters("1,5", &["'"]));
/// assert!(is_numeric_with_delimiters("1.5", &[]));
/// ```
#[must_use]
pub fn is_numeric_with_delimiters<'a>(
    value: impl Into<NumericCandidate<'a>>,
    additional_delimiters: &[&str],
) -> bool {
    match value.into() {
        NumericCandidate::Number(number) => is_numeric_number(number),
        NumericCandidate::Text(text) => is_numeric_text(text, additional_delimiters),
        NumericCandidate::Object(object) => is_numeric_object(object),
        NumericCandidate::Other => false,
    }
}

fn is_numeric_number(number: f64) -> bool { number.is_finite() }

fn is_numeric_text(text: &str, additional_delimiters: &[&str]) -> bool {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (None, _) => false,
        (Some(only_char), None) => only_char.is_ascii_digit(),
        _ => {
            let delimiters = build_delimiters(additional_delimiters);
            match parse_numeric_text(trim_whitespace(text), &delimiters) {
                Ok((_, literal)) => {
                    trace!(message = "is_numeric -> numeric text", ?text, ?literal);
                    true
                }
                Err(error) => {
                    trace!(message = "is_numeric -> not numeric text", ?text, %error);
                    false
                }
            }
        }
    }
}

fn is_numeric_object(object: &dyn ValueOf) -> bool {
    object.value_of_kind() == PrimitiveKind::Number && !object.is_date_time()
}
