//! Body region lookup
//!
//! Finds the readable part of a page by plain marker search. There is no tag
//! nesting awareness: the first closing marker after the opening one ends the
//! region.

/// Return the content between `<primary` and `</primary>`, else between
/// `<fallback` and `</fallback>`, else the whole input.
///
/// Markers match ASCII case-insensitively. The opening marker has no `>`, so
/// any attributes of the opening tag stay at the start of the region.
pub fn locate_body<'a>(raw: &'a str, primary: &str, fallback: &str) -> &'a str {
    // ASCII lowercasing keeps byte offsets identical to `raw`
    let lowered = raw.to_ascii_lowercase();

    for tag in [primary, fallback] {
        if let Some(region) = region_between(raw, &lowered, tag) {
            tracing::debug!(tag, bytes = region.len(), "Located body region");
            return region;
        }
        tracing::debug!(tag, "Boundary missing or unterminated");
    }

    raw
}

fn region_between<'a>(raw: &'a str, lowered: &str, tag: &str) -> Option<&'a str> {
    let tag = tag.trim().to_ascii_lowercase();
    let open = format!("<{}", tag);
    let close = format!("</{}>", tag);

    let start = lowered.find(&open)? + open.len();
    let end = start + lowered[start..].find(&close)?;
    Some(&raw[start..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_wins_over_fallback() {
        let html = "<body>outer<main>inner</main></body>";
        assert_eq!(locate_body(html, "main", "body"), ">inner");
    }

    #[test]
    fn test_fallback_when_primary_absent() {
        let html = "<html><BODY class=\"x\">content</Body></html>";
        assert_eq!(locate_body(html, "main", "body"), " class=\"x\">content");
    }

    #[test]
    fn test_fallback_when_primary_unterminated() {
        let html = "<body><main>never closed</body>";
        assert_eq!(locate_body(html, "main", "body"), "><main>never closed");
    }

    #[test]
    fn test_whole_input_when_no_boundary() {
        let html = "<div>just a fragment</div>";
        assert_eq!(locate_body(html, "main", "body"), html);
    }

    #[test]
    fn test_first_closing_marker_ends_region() {
        let html = "<main>a<main>b</main>c</main>";
        assert_eq!(locate_body(html, "main", "body"), ">a<main>b");
    }

    #[test]
    fn test_non_ascii_content_keeps_offsets() {
        let html = "<p>前文</p><MAIN>本文 – ünïcode</MAIN>";
        assert_eq!(locate_body(html, "main", "body"), ">本文 – ünïcode");
    }
}
