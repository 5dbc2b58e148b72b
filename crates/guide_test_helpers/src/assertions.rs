//! Assertions for JSON-RPC frames and extracted text

use predicates::prelude::*;
use predicates::str::contains;
use serde_json::Value;

/// Basic JSON-RPC response shape: jsonrpc, id, and result or error
///
/// # Example
/// ```rust
/// use guide_test_helpers::assertions::valid_jsonrpc_response;
/// use predicates::prelude::*;
///
/// let response = r#"{"jsonrpc":"2.0","id":1,"result":{}}"#;
/// assert!(valid_jsonrpc_response().eval(response));
/// ```
pub fn valid_jsonrpc_response() -> impl Predicate<str> {
    contains("\"jsonrpc\"")
        .and(contains("\"id\""))
        .and(contains("\"result\"").or(contains("\"error\"")))
}

/// Text contains nothing shaped like `<...>`
pub fn no_markup() -> impl Predicate<str> {
    predicate::str::is_match(r"<[^>]+>")
        .expect("valid regex")
        .not()
}

/// Parse every non-empty stdout line as a JSON value
pub fn parse_frames(stdout: &[u8]) -> Vec<Value> {
    String::from_utf8_lossy(stdout)
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str(line).expect("stdout line is not JSON"))
        .collect()
}

/// Text payload and error flag of a `tools/call` result frame
pub fn tool_text(frame: &Value) -> (String, bool) {
    let result = &frame["result"];
    let text = result["content"][0]["text"]
        .as_str()
        .expect("tool result has no text content")
        .to_string();
    let is_error = result["isError"].as_bool().unwrap_or(false);
    (text, is_error)
}
