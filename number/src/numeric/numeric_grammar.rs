// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! nom grammar for numeric text. The whole input must match:
//!
//! ```text
//! [+-]? \s* ( D? digit+ (D digit+)? ([eE] [+-]? digit+)?  |  0x hex+ )
//! ```
//!
//! - `D` is any one of the fraction delimiters (see [`build_delimiters()`]), matched
//!   case-insensitively as literal text.
//! - `\s` is [`crate::is_trimmable_whitespace()`].
//! - Both digit runs around a delimiter are required, so a bare delimiter (`"."`), a
//!   trailing delimiter (`"1."`) and doubled delimiters (`"1..2"`) are rejected, while
//!   a leading one (`".5"`) is accepted.
//! - The hex prefix and hex digits are case-insensitive (`0XAbC`).
//! - There is no trailing sign and no whitespace between the digits.
//!
//! Delimiters are free form text, so they can overlap each other (`a` and `ab`), or
//! start with a sign, whitespace, or a digit. Each optional group and each run is
//! therefore matched as the set of [`Remainders`] it can leave behind, and the text is
//! numeric if any combination reaches the end of the input. Runs only stop short of
//! their longest match where a delimiter starts, which keeps the sets small.

use nom::{IResult, Parser,
          branch::alt,
          bytes::complete::{tag_no_case, take_while, take_while1},
          character::complete::{digit1, one_of},
          combinator::{eof, map, opt, recognize},
          error::{Error, ErrorKind},
          sequence::terminated};

use crate::{InlineVec, InlineVecStr, is_trimmable_whitespace};

/// Always the first fraction delimiter, whatever additional ones are configured.
pub const DECIMAL_POINT: &str = ".";

/// The body of a numeric text, after the optional sign and whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericLiteral<'i> {
    /// Eg: `10000`, `.001`, `1,5`, `22e-26`.
    Decimal(&'i str),
    /// Eg: `0x1`, `0xabcdef`.
    Hexadecimal(&'i str),
}

/// Every place where a part of the grammar can stop, as the input that is left over.
/// They are all suffixes of the same input, so two of them are equal when their lengths
/// are.
type Remainders<'i> = InlineVec<&'i str>;

/// Union of [`DECIMAL_POINT`] and the `additional` delimiters, in order, without
/// duplicates. Empty strings are dropped since they can never delimit anything.
#[must_use]
pub fn build_delimiters<'a>(additional: &[&'a str]) -> InlineVecStr<'a> {
    let mut acc: InlineVecStr<'a> = InlineVec::new();
    acc.push(DECIMAL_POINT);
    for delimiter in additional {
        if delimiter.is_empty() || acc.contains(delimiter) {
            continue;
        }
        acc.push(delimiter);
    }
    acc
}

/// Match the entire `input` against the numeric grammar. Expects text that has already
/// been trimmed.
///
/// When the sign or whitespace could also be read as part of a delimiter, the longest
/// sign and whitespace prefix that still matches wins.
///
/// # Errors
///
/// Returns a nom parsing error if any part of `input` falls outside of the grammar.
///
/// # Example
///
/// ```rust
/// use r3bl_number::{NumericLiteral, build_delimiters, parse_numeric_text};
///
/// let delimiters = build_delimiters(&[","]);
/// let (_, it) = parse_numeric_text("- .45e+26", &delimiters).unwrap();
/// assert_eq!(it, NumericLiteral::Decimal(".45e+26"));
///
/// let (_, it) = parse_numeric_text("0xFF", &delimiters).unwrap();
/// assert_eq!(it, NumericLiteral::Hexadecimal("0xFF"));
///
/// assert!(parse_numeric_text("1.", &delimiters).is_err());
///
/// // Overlapping delimiters.
/// let delimiters = build_delimiters(&["a", "ab"]);
/// assert!(parse_numeric_text("1ab5", &delimiters).is_ok());
/// ```
pub fn parse_numeric_text<'i>(
    input: &'i str,
    delimiters: &[&str],
) -> IResult<&'i str, NumericLiteral<'i>> {
    for body in parse_sign_and_whitespace(input, delimiters) {
        let result = alt((
            map(
                |it: &'i str| parse_decimal(it, delimiters),
                NumericLiteral::Decimal,
            ),
            map(terminated(parse_hexadecimal, eof), NumericLiteral::Hexadecimal),
        ))
        .parse(body);
        if result.is_ok() {
            return result;
        }
    }
    Err(nom::Err::Error(Error::new(input, ErrorKind::Alt)))
}

/// `[+-]? \s*`, longest first.
fn parse_sign_and_whitespace<'i>(input: &'i str, delimiters: &[&str]) -> Remainders<'i> {
    let mut starts: Remainders<'i> = InlineVec::new();
    let signed: IResult<&'i str, char> = one_of("+-").parse(input);
    if let Ok((rest, _sign)) = signed {
        starts.push(rest);
    }
    starts.push(input);

    let mut acc = Remainders::new();
    for start in starts {
        for rest in parse_run(start, RunLength::ZeroOrMore, is_trimmable_whitespace, delimiters)
        {
            push_unique(&mut acc, rest);
        }
    }
    acc
}

/// `D? digit+ (D digit+)? ([eE] [+-]? digit+)?`, which must consume all of `input`.
fn parse_decimal<'i>(input: &'i str, delimiters: &[&str]) -> IResult<&'i str, &'i str> {
    // D?
    let mut heads = Remainders::new();
    heads.push(input);
    for rest in parse_delimiters(input, delimiters) {
        push_unique(&mut heads, rest);
    }

    // digit+
    let mut integers = Remainders::new();
    for head in heads {
        for rest in parse_run(head, RunLength::OneOrMore, is_digit, delimiters) {
            push_unique(&mut integers, rest);
        }
    }

    // (D digit+)?
    let mut fractions = integers.clone();
    for integer in integers {
        for after_delimiter in parse_delimiters(integer, delimiters) {
            for rest in parse_run(after_delimiter, RunLength::OneOrMore, is_digit, delimiters)
            {
                push_unique(&mut fractions, rest);
            }
        }
    }

    // ([eE] [+-]? digit+)? and nothing after it.
    let is_match = fractions.into_iter().any(|fraction| {
        let result: IResult<&'i str, _> =
            terminated(opt(parse_exponent), eof).parse(fraction);
        result.is_ok()
    });

    if is_match {
        let (decimal, rest) = input.split_at(input.len());
        Ok((rest, decimal))
    } else {
        Err(nom::Err::Error(Error::new(input, ErrorKind::Digit)))
    }
}

/// `[eE] [+-]? digit+`
fn parse_exponent(input: &str) -> IResult<&str, &str> {
    recognize((one_of("eE"), opt(one_of("+-")), digit1)).parse(input)
}

/// `0x hex+`
fn parse_hexadecimal(input: &str) -> IResult<&str, &str> {
    recognize((tag_no_case("0x"), take_while1(|it: char| it.is_ascii_hexdigit())))
        .parse(input)
}

/// What is left after each delimiter that `input` starts with.
fn parse_delimiters<'i>(input: &'i str, delimiters: &[&str]) -> Remainders<'i> {
    let mut acc = Remainders::new();
    for delimiter in delimiters {
        let result: IResult<&'i str, &'i str> = tag_no_case(*delimiter).parse(input);
        if let Ok((rest, _delimiter)) = result {
            push_unique(&mut acc, rest);
        }
    }
    acc
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunLength {
    ZeroOrMore,
    OneOrMore,
}

/// Where a run of `predicate` chars can end. The longest run always counts. A shorter
/// one only counts where a delimiter starts right after it, since nothing else that can
/// follow a run (digits, an exponent, `0x`, or the end of input) can start inside it.
fn parse_run<'i>(
    input: &'i str,
    run_length: RunLength,
    predicate: fn(char) -> bool,
    delimiters: &[&str],
) -> Remainders<'i> {
    let mut acc = Remainders::new();
    let result: IResult<&'i str, &'i str> = take_while(predicate).parse(input);
    let Ok((rest, run)) = result else {
        return acc;
    };
    if run_length == RunLength::OneOrMore && run.is_empty() {
        return acc;
    }

    push_unique(&mut acc, rest);
    let skip = usize::from(run_length == RunLength::OneOrMore);
    for (offset, _) in run.char_indices().skip(skip) {
        let (_, shorter) = input.split_at(offset);
        if !parse_delimiters(shorter, delimiters).is_empty() {
            push_unique(&mut acc, shorter);
        }
    }
    acc
}

fn is_digit(it: char) -> bool { it.is_ascii_digit() }

fn push_unique<'i>(acc: &mut Remainders<'i>, remainder: &'i str) {
    if !acc.iter().any(|it| it.len() == remainder.len()) {
        acc.push(remainder);
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_build_delimiters_dedups_and_keeps_order() {
        assert_eq2!(build_delimiters(&[]).as_slice(), &["."]);
        assert_eq2!(build_delimiters(&[","]).as_slice(), &[".", ","]);
        assert_eq2!(
            build_delimiters(&[",", ".", "'", ",", ""]).as_slice(),
            &[".", ",", "'"]
        );
    }

    #[test_case("0.001", NumericLiteral::Decimal("0.001"))]
    #[test_case(".001", NumericLiteral::Decimal(".001"))]
    #[test_case("- 10000", NumericLiteral::Decimal("10000"))]
    #[test_case("+7", NumericLiteral::Decimal("7"))]
    #[test_case("1,5", NumericLiteral::Decimal("1,5"))]
    #[test_case(",5", NumericLiteral::Decimal(",5"))]
    #[test_case("1e+26", NumericLiteral::Decimal("1e+26"))]
    #[test_case("22e-26", NumericLiteral::Decimal("22e-26"))]
    #[test_case(".45E+26", NumericLiteral::Decimal(".45E+26"))]
    #[test_case("1.5e3", NumericLiteral::Decimal("1.5e3"))]
    #[test_case("0x1", NumericLiteral::Hexadecimal("0x1"))]
    #[test_case("0XAbCdEf", NumericLiteral::Hexadecimal("0XAbCdEf"))]
    #[test_case("-0x1f", NumericLiteral::Hexadecimal("0x1f"))]
    fn test_accepts(input: &str, expected: NumericLiteral<'_>) {
        let delimiters = build_delimiters(&[","]);
        let (rem, literal) = parse_numeric_text(input, &delimiters).unwrap();
        assert_eq2!(rem, "");
        assert_eq2!(literal, expected);
    }

    #[test_case("." ; "bare delimiter")]
    #[test_case(".." ; "two bare delimiters")]
    #[test_case("1." ; "trailing delimiter")]
    #[test_case("1..2" ; "doubled delimiter")]
    #[test_case("1.5.5" ; "two fractions")]
    #[test_case("1.5,5" ; "mixed delimiters")]
    #[test_case("1e" ; "exponent without digits")]
    #[test_case("e5" ; "exponent without mantissa")]
    #[test_case("5-" ; "trailing sign")]
    #[test_case("+-1" ; "two signs")]
    #[test_case("1 000" ; "inner whitespace")]
    #[test_case("0x" ; "hex prefix only")]
    #[test_case("0xg" ; "not a hex digit")]
    #[test_case("0x1.5" ; "hex fraction")]
    #[test_case("1'5" ; "unknown delimiter")]
    #[test_case("abc" ; "letters")]
    fn test_rejects(input: &str) {
        let delimiters = build_delimiters(&[","]);
        assert!(parse_numeric_text(input, &delimiters).is_err());
    }

    #[test]
    fn test_custom_delimiters_are_literal_and_case_insensitive() {
        let delimiters = build_delimiters(&["'", "d"]);
        assert!(parse_numeric_text("1'5", &delimiters).is_ok());
        assert!(parse_numeric_text("1d5", &delimiters).is_ok());
        assert!(parse_numeric_text("1D5", &delimiters).is_ok());
        // The comma is only there by default, not when other delimiters are passed.
        assert!(parse_numeric_text("1,5", &delimiters).is_err());
    }

    #[test_case("1ab5", &["a", "ab"], true ; "longer delimiter after integer")]
    #[test_case("ab5", &["a", "ab"], true ; "longer delimiter in front")]
    #[test_case("1a5", &["a", "ab"], true ; "shorter delimiter after integer")]
    #[test_case("1ab", &["a", "ab"], false ; "no digits after delimiter")]
    #[test_case("51x2", &["1x"], true ; "delimiter starts with a digit")]
    #[test_case("1x2", &["1x"], true ; "leading delimiter starts with a digit")]
    #[test_case("1x", &["1x"], false ; "delimiter without digits after it")]
    #[test_case("+x5", &["+x"], true ; "delimiter starts with a sign")]
    #[test_case("- x5", &[" x"], true ; "delimiter starts with whitespace")]
    #[test_case("1e5", &["e"], true ; "delimiter looks like an exponent")]
    fn test_overlapping_delimiters(input: &str, additional: &[&str], expected: bool) {
        let delimiters = build_delimiters(additional);
        assert_eq2!(parse_numeric_text(input, &delimiters).is_ok(), expected);
    }

    #[test]
    fn test_sign_and_whitespace_prefix_is_longest_first() {
        let delimiters = build_delimiters(&["+x"]);
        let (rest, literal) = parse_numeric_text("+5", &delimiters).unwrap();
        assert_eq2!(rest, "");
        assert_eq2!(literal, NumericLiteral::Decimal("5"));

        let (_, literal) = parse_numeric_text("+x5", &delimiters).unwrap();
        assert_eq2!(literal, NumericLiteral::Decimal("+x5"));
    }

    #[test]
    fn test_multi_char_delimiter_matches_as_a_whole() {
        let delimiters = build_delimiters(&["::"]);
        assert!(parse_numeric_text("1::5", &delimiters).is_ok());
        assert!(parse_numeric_text("1:5", &delimiters).is_err());
    }
}
