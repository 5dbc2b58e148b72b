//! Section lookup inside extracted text
//!
//! The first case-insensitive occurrence of the section name starts the
//! excerpt, even when it sits mid-line. The excerpt runs for at most
//! `line_cap` lines from there.

use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};

lazy_static! {
    // CRLF first so it counts as one break
    static ref LINE_BREAK: Regex =
        Regex::new("\r\n|[\n\r\u{0085}\u{2028}\u{2029}]").expect("valid regex");
}

/// Message returned when the section was found
pub fn found_message(section: &str, excerpt: &str) -> String {
    format!("Content for section \"{}\":\n\n{}", section, excerpt)
}

/// Message returned when the section is missing, with a sample of the text
pub fn not_found_message(section: &str, sample: &str) -> String {
    format!(
        "Section \"{}\" was not found.\n\nPart of the available content:\n{}",
        section, sample
    )
}

/// Byte offset of the first case-insensitive occurrence of `needle`
///
/// The needle is literal text. An empty needle matches at 0.
pub fn find_ignore_case(haystack: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }

    match RegexBuilder::new(&regex::escape(needle))
        .case_insensitive(true)
        .build()
    {
        Ok(pattern) => pattern.find(haystack).map(|m| m.start()),
        Err(e) => {
            // Oversized needles exceed the regex size limit
            tracing::warn!(error = %e, "Falling back to ASCII case-insensitive search");
            haystack
                .to_ascii_lowercase()
                .find(&needle.to_ascii_lowercase())
        }
    }
}

/// Up to `line_cap` lines of `text`, joined with `\n`
///
/// `\n`, `\r`, `\r\n`, U+0085, U+2028 and U+2029 all end a line.
pub fn leading_lines(text: &str, line_cap: usize) -> String {
    LINE_BREAK
        .split(text)
        .take(line_cap)
        .collect::<Vec<_>>()
        .join("\n")
}

/// First `count` Unicode scalar values of `text`
///
/// A combining sequence straddling the cut is split.
pub fn sample(text: &str, count: usize) -> &str {
    match text.char_indices().nth(count) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// Narrow `text` to the named section, or explain that it is missing
pub fn match_section(text: &str, section: &str, line_cap: usize, sample_chars: usize) -> String {
    match find_ignore_case(text, section) {
        Some(start) => {
            let excerpt = leading_lines(&text[start..], line_cap);
            tracing::debug!(section, offset = start, "Section matched");
            found_message(section, &excerpt)
        }
        None => {
            tracing::debug!(section, "Section not found");
            not_found_message(section, sample(text, sample_chars))
        }
    }
}
