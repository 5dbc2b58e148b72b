//! Markup to plain text
//!
//! Pattern-based stripping, applied in a fixed order:
//! 1. remove `<...>` tags (a single tag per match, never spanning two)
//! 2. decode the entity table, one sequential pass per rule
//! 3. collapse runs of spaces and tabs inside a line
//! 4. trim the whole text

use guide_common::EntityRule;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TAG_PATTERN: Regex = Regex::new(r"<[^>]+>").expect("valid regex");
    static ref INLINE_SPACE: Regex = Regex::new(r"[ \t]+").expect("valid regex");
}

/// Convert a markup region to plain text, keeping line breaks
pub fn strip_tags(markup: &str, entities: &[EntityRule]) -> String {
    let text = remove_tags(markup);
    let text = decode_entities(&text, entities);
    let text = collapse_inline_whitespace(&text);
    text.trim().to_string()
}

/// Remove every `<...>` tag
pub fn remove_tags(markup: &str) -> String {
    TAG_PATTERN.replace_all(markup, "").into_owned()
}

/// Apply each rule in order over the whole text
///
/// Unlisted entities are left untouched.
pub fn decode_entities(text: &str, entities: &[EntityRule]) -> String {
    let mut decoded = text.to_string();
    for rule in entities {
        if decoded.contains(rule.entity.as_str()) {
            decoded = decoded.replace(rule.entity.as_str(), &rule.replacement);
        }
    }
    decoded
}

/// Collapse `[ \t]+` to one space; newlines are not touched
pub fn collapse_inline_whitespace(text: &str) -> String {
    INLINE_SPACE.replace_all(text, " ").into_owned()
}
