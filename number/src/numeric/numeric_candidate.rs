// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The kinds of values that [`crate::is_numeric()`] can classify.
//!
//! Instead of sniffing the type of a value at runtime, the caller converts it into a
//! [`NumericCandidate`] (usually via [`Into`]) and the classifier handles each variant in
//! a closed `match`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

/// A value that may or may not be numeric.
///
/// | Variant  | Numeric when                                                  |
/// |----------|---------------------------------------------------------------|
/// | `Number` | finite (not `NaN`, not infinite)                              |
/// | `Text`   | it matches the grammar in [`crate::parse_numeric_text()`]     |
/// | `Object` | [`ValueOf`] coerces it to a number and it isn't a date / time |
/// | `Other`  | never (booleans, `None`, unit, ...)                           |
///
/// # Example
///
/// ```rust
/// use r3bl_number::{BoxedNumber, NumericCandidate};
///
/// assert_eq!(NumericCandidate::from(5u8), NumericCandidate::Number(5.0));
/// assert_eq!(NumericCandidate::from("5"), NumericCandidate::Text("5"));
/// assert_eq!(NumericCandidate::from(true), NumericCandidate::Other);
/// assert_eq!(NumericCandidate::from(None::<i32>), NumericCandidate::Other);
///
/// let boxed = BoxedNumber(5.0);
/// let candidate = NumericCandidate::Object(&boxed);
/// assert!(matches!(candidate, NumericCandidate::Object(_)));
/// ```
#[derive(Clone, Copy)]
pub enum NumericCandidate<'a> {
    Number(f64),
    Text(&'a str),
    Object(&'a dyn ValueOf),
    Other,
}

/// The kind of primitive that a [`ValueOf`] coercion yields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    Number,
    Text,
    Boolean,
    /// The coercion doesn't produce a primitive at all; the object is its own value.
    Object,
}

/// Coercion of a boxed / wrapper value into a primitive.
pub trait ValueOf {
    fn value_of_kind(&self) -> PrimitiveKind;

    /// Date and time values coerce to a number (a timestamp) but are never numeric.
    fn is_date_time(&self) -> bool { false }
}

/// A number wrapped in an object. Even a boxed `NaN` is considered numeric, since only
/// the kind of the coercion is checked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxedNumber(pub f64);

/// Text wrapped in an object. Never numeric, regardless of its content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxedText(pub String);

/// A boolean wrapped in an object. Never numeric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxedBool(pub bool);

impl ValueOf for BoxedNumber {
    fn value_of_kind(&self) -> PrimitiveKind { PrimitiveKind::Number }
}

impl ValueOf for BoxedText {
    fn value_of_kind(&self) -> PrimitiveKind { PrimitiveKind::Text }
}

impl ValueOf for BoxedBool {
    fn value_of_kind(&self) -> PrimitiveKind { PrimitiveKind::Boolean }
}

impl<Tz: TimeZone> ValueOf for DateTime<Tz> {
    fn value_of_kind(&self) -> PrimitiveKind { PrimitiveKind::Number }

    fn is_date_time(&self) -> bool { true }
}

impl ValueOf for NaiveDateTime {
    fn value_of_kind(&self) -> PrimitiveKind { PrimitiveKind::Number }

    fn is_date_time(&self) -> bool { true }
}

impl ValueOf for NaiveDate {
    fn value_of_kind(&self) -> PrimitiveKind { PrimitiveKind::Number }

    fn is_date_time(&self) -> bool { true }
}

impl std::fmt::Debug for NumericCandidate<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(it) => f.debug_tuple("Number").field(it).finish(),
            Self::Text(it) => f.debug_tuple("Text").field(it).finish(),
            Self::Object(it) => f
                .debug_struct("Object")
                .field("kind", &it.value_of_kind())
                .field("is_date_time", &it.is_date_time())
                .finish(),
            Self::Other => f.write_str("Other"),
        }
    }
}

/// Objects are compared by what they coerce to, since `dyn ValueOf` has no equality.
impl PartialEq for NumericCandidate<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(lhs), Self::Number(rhs)) => lhs == rhs,
            (Self::Text(lhs), Self::Text(rhs)) => lhs == rhs,
            (Self::Object(lhs), Self::Object(rhs)) => {
                lhs.value_of_kind() == rhs.value_of_kind()
                    && lhs.is_date_time() == rhs.is_date_time()
            }
            (Self::Other, Self::Other) => true,
            _ => false,
        }
    }
}

macro_rules! impl_from_number_for_numeric_candidate {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for NumericCandidate<'_> {
                #[allow(trivial_numeric_casts, clippy::cast_precision_loss, clippy::cast_lossless)]
                fn from(it: $ty) -> Self { NumericCandidate::Number(it as f64) }
            }
        )*
    };
}

impl_from_number_for_numeric_candidate!(
    f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

impl<'a> From<&'a str> for NumericCandidate<'a> {
    fn from(it: &'a str) -> Self { NumericCandidate::Text(it) }
}

impl<'a> From<&'a String> for NumericCandidate<'a> {
    fn from(it: &'a String) -> Self { NumericCandidate::Text(it.as_str()) }
}

impl From<bool> for NumericCandidate<'_> {
    fn from(_: bool) -> Self { NumericCandidate::Other }
}

impl From<()> for NumericCandidate<'_> {
    fn from((): ()) -> Self { NumericCandidate::Other }
}

/// `None` plays the part of "null".
impl<'a, T: Into<NumericCandidate<'a>>> From<Option<T>> for NumericCandidate<'a> {
    fn from(it: Option<T>) -> Self {
        match it {
            Some(it) => it.into(),
            None => NumericCandidate::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test_case(NumericCandidate::from(0.001f64), NumericCandidate::Number(0.001))]
    #[test_case(NumericCandidate::from(-3i64), NumericCandidate::Number(-3.0))]
    #[test_case(NumericCandidate::from(7usize), NumericCandidate::Number(7.0))]
    #[test_case(NumericCandidate::from("0x1"), NumericCandidate::Text("0x1"))]
    #[test_case(NumericCandidate::from(false), NumericCandidate::Other)]
    #[test_case(NumericCandidate::from(()), NumericCandidate::Other)]
    #[test_case(NumericCandidate::from(Some(2u8)), NumericCandidate::Number(2.0))]
    #[test_case(NumericCandidate::from(None::<&str>), NumericCandidate::Other)]
    fn test_into_numeric_candidate(actual: NumericCandidate<'_>, expected: NumericCandidate<'_>) {
        assert_eq2!(actual, expected);
    }

    #[test]
    fn test_owned_string_borrows_as_text() {
        let owned = String::from("42");
        assert_eq2!(NumericCandidate::from(&owned), NumericCandidate::Text("42"));
    }

    #[test]
    fn test_value_of_kinds() {
        assert_eq2!(BoxedNumber(1.0).value_of_kind(), PrimitiveKind::Number);
        assert_eq2!(BoxedText("1".into()).value_of_kind(), PrimitiveKind::Text);
        assert_eq2!(BoxedBool(true).value_of_kind(), PrimitiveKind::Boolean);
        assert!(!BoxedNumber(1.0).is_date_time());

        let now = Utc::now();
        assert_eq2!(now.value_of_kind(), PrimitiveKind::Number);
        assert!(now.is_date_time());
        assert!(now.naive_utc().is_date_time());
        assert!(now.date_naive().is_date_time());
    }
}
