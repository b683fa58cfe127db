//! Pick the interesting lines out of noisy tool output

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref LEADING_INT: Regex = Regex::new(r"^\s*([-+]?[0-9]+)").unwrap();
}

/// All lines containing `token`, in the order they appear
pub fn grep<'a>(text: &'a str, token: &str) -> Vec<&'a str> {
    text.lines().filter(|line| line.contains(token)).collect()
}

/// A line split into its label and the text following a separator
#[derive(Debug, PartialEq)]
pub struct ParsedField<'a> {
    pub label: &'a str,
    pub raw: &'a str,
}

impl<'a> ParsedField<'a> {
    pub fn int(&self) -> i64 {
        coerce_int(self.raw)
    }
}

/// Split `line` on `sep`, keeping the first two segments
///
/// A line without the separator has an empty `raw`.
pub fn split_field<'a>(line: &'a str, sep: &str) -> ParsedField<'a> {
    let mut parts = line.split(sep);
    ParsedField {
        label: parts.next().unwrap_or(""),
        raw: parts.next().unwrap_or(""),
    }
}

/// Read the integer at the start of `raw`, or 0 if there isn't one
pub fn coerce_int(raw: &str) -> i64 {
    LEADING_INT
        .captures(raw)
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or(0)
}
