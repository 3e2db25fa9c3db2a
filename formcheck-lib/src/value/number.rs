//! Numeric literal handling

use std::sync::LazyLock;

use regex::Regex;

/// Sign, digits with optional fraction (or a bare fraction), optional exponent.
static NUMERIC_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?$").expect("numeric literal pattern")
});

/// Returns true if the whole string (ignoring surrounding whitespace) is a
/// finite numeric literal.
pub fn is_numeric(value: &str) -> bool {
    parse_number(value).is_some()
}

/// Parses a numeric literal, rejecting trailing garbage like `"12abc"`.
pub fn parse_number(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if !NUMERIC_LITERAL.is_match(trimmed) {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Formats a number for display in messages: `5.0` renders as `5`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // avoid "-0"
        return "0".to_string();
    }
    value.to_string()
}
