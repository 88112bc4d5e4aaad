//! Utility functions for number literals.

use std::borrow::Cow;

/// Separator emitted by the tokenizer between the integral and fractional part of a literal.
pub const DECIMAL_SEPARATOR: char = ',';

/// Replaces every `.` in a literal with the [`DECIMAL_SEPARATOR`].
#[must_use]
pub fn to_comma_decimal(s: &str) -> Cow<str> {
    if s.contains('.') {
        Cow::Owned(s.replace('.', ","))
    } else {
        Cow::Borrowed(s)
    }
}

/// Replaces every [`DECIMAL_SEPARATOR`] in a literal with `.`, the form [`str::parse`] accepts.
#[must_use]
pub fn from_comma_decimal(s: &str) -> Cow<str> {
    if s.contains(DECIMAL_SEPARATOR) {
        Cow::Owned(s.replace(DECIMAL_SEPARATOR, "."))
    } else {
        Cow::Borrowed(s)
    }
}

/// Checks whether `s` is a numeric literal: an optional sign, then digits with at most one
/// decimal separator (`,` or `.`) and at least one digit.
#[must_use]
pub fn is_numeric_literal(s: &str) -> bool {
    let unsigned = s.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(s);

    let mut digits = 0_usize;
    let mut separators = 0_usize;
    for c in unsigned.chars() {
        match c {
            '0'..='9' => digits += 1,
            ',' | '.' => separators += 1,
            _ => return false,
        }
    }

    digits > 0 && separators <= 1
}

/// Parses a numeric literal in either decimal separator form.
///
/// Returns [`None`] if `s` is not a numeric literal according to [`is_numeric_literal`].
#[must_use]
pub fn parse_numeric_literal(s: &str) -> Option<f64> {
    if !is_numeric_literal(s) {
        return None;
    }

    from_comma_decimal(s).parse().ok()
}
