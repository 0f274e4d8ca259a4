// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Whitespace that numeric and percent text may be padded with.
//!
//! This is narrower than [`char::is_whitespace`] in one place and wider in another:
//! `U+0085` (next line) is not trimmed, while `U+FEFF` (byte order mark) is.

/// `\t`, `\n`, vertical tab, form feed, `\r`, space, no-break space, and the Unicode
/// space separators, plus the line and paragraph separators and the byte order mark.
#[must_use]
pub const fn is_trimmable_whitespace(it: char) -> bool {
    matches!(
        it,
        '\u{0009}'..='\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Like [`str::trim`], but only strips [`is_trimmable_whitespace`] characters.
#[must_use]
pub fn trim_whitespace(text: &str) -> &str { text.trim_matches(is_trimmable_whitespace) }

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test_case('\t')]
    #[test_case('\u{000B}' ; "vertical tab")]
    #[test_case(' ')]
    #[test_case('\u{00A0}' ; "no break space")]
    #[test_case('\u{2003}' ; "em space")]
    #[test_case('\u{2028}' ; "line separator")]
    #[test_case('\u{3000}' ; "ideographic space")]
    #[test_case('\u{FEFF}' ; "byte order mark")]
    fn test_trimmable(it: char) {
        assert!(is_trimmable_whitespace(it));
    }

    #[test_case('\u{0085}' ; "next line")]
    #[test_case('\u{200B}' ; "zero width space")]
    #[test_case('5')]
    #[test_case('a')]
    fn test_not_trimmable(it: char) {
        assert!(!is_trimmable_whitespace(it));
    }

    #[test]
    fn test_trim_whitespace() {
        assert_eq2!(trim_whitespace("\u{FEFF} 42\n"), "42");
        assert_eq2!(trim_whitespace("\u{0085}42"), "\u{0085}42");
        assert_eq2!(trim_whitespace(" \t "), "");
    }
}
