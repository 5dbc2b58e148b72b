use guide_config::ServerConfig;
use guide_core::{DocumentPipeline, GuidelinesService, StaticSource};
use guide_mcp::{JsonRpcError, JsonRpcRequest, McpServer};
use guide_test_helpers::assertions::tool_text;
use guide_test_helpers::fixtures::GUIDELINES_HTML;
use serde_json::{json, Value};

fn server() -> McpServer<StaticSource> {
    let service = GuidelinesService::new(StaticSource::new(GUIDELINES_HTML), DocumentPipeline::default());
    McpServer::new(service, ServerConfig::default())
}

fn request(method: &str, params: Option<Value>) -> JsonRpcRequest {
    JsonRpcRequest {
        jsonrpc: "2.0".to_string(),
        id: Some(json!(1)),
        method: method.to_string(),
        params,
    }
}

async fn call(server: &McpServer<StaticSource>, method: &str, params: Option<Value>) -> Value {
    let resp = server
        .handle_request(request(method, params))
        .await
        .expect("request with id must get a response");
    serde_json::to_value(resp).unwrap()
}

#[tokio::test]
async fn test_initialize_echoes_protocol_version() {
    let server = server();

    let resp = call(&server, "initialize", Some(json!({"protocolVersion": "2025-03-26"}))).await;
    assert_eq!(resp["result"]["protocolVersion"], "2025-03-26");
    assert_eq!(resp["result"]["serverInfo"]["name"], "swift-api-guidelines");
    assert!(resp["result"]["capabilities"]["tools"].is_object());

    let resp = call(&server, "initialize", None).await;
    assert_eq!(resp["result"]["protocolVersion"], "2024-11-05");
}

#[tokio::test]
async fn test_tools_list_declares_optional_section() {
    let resp = call(&server(), "tools/list", None).await;
    let tools = resp["result"]["tools"].as_array().unwrap();

    assert_eq!(tools.len(), 1);
    assert_eq!(tools[0]["name"], "readSwiftGuidelines");
    assert_eq!(tools[0]["inputSchema"]["properties"]["section"]["type"], "string");
    assert!(tools[0]["inputSchema"].get("required").is_none());
}

#[tokio::test]
async fn test_call_without_section_returns_full_text() {
    let resp = call(
        &server(),
        "tools/call",
        Some(json!({"name": "readSwiftGuidelines", "arguments": {}})),
    )
    .await;

    let (text, is_error) = tool_text(&resp);
    assert!(!is_error);
    assert!(text.contains("Fundamentals"));
    assert!(text.contains("Conventions"));
}

#[tokio::test]
async fn test_call_with_section() {
    let resp = call(
        &server(),
        "tools/call",
        Some(json!({"name": "readSwiftGuidelines", "arguments": {"section": "naming"}})),
    )
    .await;

    let (text, is_error) = tool_text(&resp);
    assert!(!is_error);
    assert!(text.starts_with("Content for section \"naming\":\n\nNaming\n"));
    assert!(text.contains("Use descriptive names"));
}

#[tokio::test]
async fn test_call_with_missing_section() {
    let resp = call(
        &server(),
        "tools/call",
        Some(json!({"name": "readSwiftGuidelines", "arguments": {"section": "Generics"}})),
    )
    .await;

    let (text, is_error) = tool_text(&resp);
    assert!(!is_error);
    assert!(text.starts_with("Section \"Generics\" was not found."));
}

#[tokio::test]
async fn test_non_string_section_is_ignored() {
    let server = server();
    let full = call(
        &server,
        "tools/call",
        Some(json!({"name": "readSwiftGuidelines"})),
    )
    .await;
    let numeric = call(
        &server,
        "tools/call",
        Some(json!({"name": "readSwiftGuidelines", "arguments": {"section": 42}})),
    )
    .await;

    assert_eq!(tool_text(&full), tool_text(&numeric));
}

#[tokio::test]
async fn test_unknown_tool_is_tool_error() {
    let resp = call(&server(), "tools/call", Some(json!({"name": "readKotlinGuidelines"}))).await;

    assert!(resp.get("error").is_none());
    let (text, is_error) = tool_text(&resp);
    assert!(is_error);
    assert_eq!(text, "Tool not found: readKotlinGuidelines");
}

#[tokio::test]
async fn test_call_without_name_is_invalid_params() {
    let server = server();

    let resp = call(&server, "tools/call", Some(json!({"arguments": {}}))).await;
    assert_eq!(resp["error"]["code"], JsonRpcError::INVALID_PARAMS);

    let resp = call(&server, "tools/call", None).await;
    assert_eq!(resp["error"]["code"], JsonRpcError::INVALID_PARAMS);
    assert_eq!(resp["error"]["message"], "Invalid input: Missing params");
}

#[tokio::test]
async fn test_unknown_method() {
    let resp = call(&server(), "resources/list", None).await;
    assert_eq!(resp["error"]["code"], JsonRpcError::METHOD_NOT_FOUND);
    assert_eq!(resp["id"], 1);
}

#[tokio::test]
async fn test_notifications_get_no_response() {
    let server = server();
    let note = JsonRpcRequest {
        jsonrpc: "2.0".to_string(),
        id: None,
        method: "notifications/initialized".to_string(),
        params: None,
    };

    assert!(server.handle_request(note).await.is_none());
    assert!(server
        .handle_line(r#"{"jsonrpc":"2.0","method":"notifications/cancelled"}"#)
        .await
        .is_none());
}

#[tokio::test]
async fn test_wrong_jsonrpc_version() {
    let mut req = request("ping", None);
    req.jsonrpc = "1.0".to_string();

    let resp = serde_json::to_value(server().handle_request(req).await.unwrap()).unwrap();
    assert_eq!(resp["error"]["code"], JsonRpcError::INVALID_REQUEST);
}

#[tokio::test]
async fn test_unparseable_line_is_parse_error() {
    let line = server().handle_line("{not json").await.unwrap();
    let resp: Value = serde_json::from_str(&line).unwrap();

    assert_eq!(resp["error"]["code"], JsonRpcError::PARSE_ERROR);
    assert!(resp["id"].is_null());
}

#[tokio::test]
async fn test_custom_tool_name() {
    let service = GuidelinesService::new(StaticSource::new(GUIDELINES_HTML), DocumentPipeline::default());
    let server = McpServer::new(
        service,
        ServerConfig {
            name: "guides".to_string(),
            tool_name: "readGuidelines".to_string(),
        },
    );

    assert_eq!(server.tool_name(), "readGuidelines");
    let line = server
        .handle_line(r#"{"jsonrpc":"2.0","id":"a","method":"tools/call","params":{"name":"readGuidelines","arguments":{"section":"clarity"}}}"#)
        .await
        .unwrap();
    let resp: Value = serde_json::from_str(&line).unwrap();

    assert_eq!(resp["id"], "a");
    let (text, is_error) = tool_text(&resp);
    assert!(!is_error);
    assert!(text.contains("Clarity at the point of use"));
}
