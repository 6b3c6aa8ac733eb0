use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    // A tag must open with a letter, so "x < 3 and y > 2" is left alone
    static ref TAG_REGEX: Regex = Regex::new(r"</?[A-Za-z][^<>]*>").unwrap();
    static ref ENTITY_REGEX: Regex = Regex::new(r"&(nbsp|amp|lt|gt|quot);").unwrap();
    static ref SPACE_REGEX: Regex = Regex::new(r"\s+").unwrap();
}

pub fn strip_tags(input: &str) -> Cow<'_, str> {
    TAG_REGEX.replace_all(input, "")
}

/// Decode the handful of entities rich-text editors commonly emit.
/// Single pass, so `&amp;lt;` becomes `&lt;` rather than `<`.
pub fn decode_entities(input: &str) -> Cow<'_, str> {
    ENTITY_REGEX.replace_all(input, |cap: &Captures| {
        let decoded = match &cap[1] {
            "nbsp" => " ",
            "amp" => "&",
            "lt" => "<",
            "gt" => ">",
            _ => "\"",
        };
        decoded.to_string()
    })
}

pub fn collapse_whitespace(input: &str) -> Cow<'_, str> {
    SPACE_REGEX.replace_all(input, " ")
}
