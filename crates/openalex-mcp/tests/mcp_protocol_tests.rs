//! Tests for MCP protocol JSON-RPC handling.
//!
//! Drives the stdio dispatch function directly with protocol messages.

use std::sync::Arc;

use openalex_mcp::client::OpenAlexClient;
use openalex_mcp::config::Config;
use openalex_mcp::server::rpc::JsonRpcRequest;
use openalex_mcp::server::stdio::handle_request;
use openalex_mcp::server::McpServer;
use openalex_mcp::tools::{McpTool, ToolContext, register_all_tools};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn request(method: &str, params: serde_json::Value) -> JsonRpcRequest {
    serde_json::from_value(json!({
        "jsonrpc": "2.0",
        "method": method,
        "params": params,
        "id": 1
    }))
    .unwrap()
}

fn setup(mock_server: &MockServer) -> (Vec<Box<dyn McpTool>>, ToolContext) {
    let client = OpenAlexClient::new(Config::for_testing(&mock_server.uri())).unwrap();
    (register_all_tools(), ToolContext::new(Arc::new(client)))
}

// =============================================================================
// Handshake Tests
// =============================================================================

#[tokio::test]
async fn test_initialize_reports_server_identity() {
    let mock_server = MockServer::start().await;
    let (tools, ctx) = setup(&mock_server);

    let response =
        handle_request(&request("initialize", json!({"protocolVersion": "2024-11-05"})), &tools, &ctx)
            .await;

    let result = response.result.unwrap();
    assert_eq!(result["serverInfo"]["name"], "openalex-mcp");
    assert_eq!(result["protocolVersion"], "2024-11-05");
    assert!(result["capabilities"]["tools"].is_object());
}

#[tokio::test]
async fn test_ping_and_initialized_succeed() {
    let mock_server = MockServer::start().await;
    let (tools, ctx) = setup(&mock_server);

    for method in ["ping", "initialized", "notifications/initialized"] {
        let response = handle_request(&request(method, json!({})), &tools, &ctx).await;
        assert!(response.error.is_none(), "{method} should succeed");
    }
}

#[tokio::test]
async fn test_unknown_method_is_rejected() {
    let mock_server = MockServer::start().await;
    let (tools, ctx) = setup(&mock_server);

    let response = handle_request(&request("resources/list", json!({})), &tools, &ctx).await;

    let error = response.error.unwrap();
    assert_eq!(error.code, -32601);
    assert!(error.message.contains("resources/list"));
}

// =============================================================================
// tools/list Tests
// =============================================================================

#[tokio::test]
async fn test_tools_list_contains_openalex_search() {
    let mock_server = MockServer::start().await;
    let (tools, ctx) = setup(&mock_server);

    let response = handle_request(&request("tools/list", json!({})), &tools, &ctx).await;

    let result = response.result.unwrap();
    let listed = result["tools"].as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["name"], "openalex_search");
    assert!(listed[0]["inputSchema"]["properties"]["query"].is_object());
}

// =============================================================================
// tools/call Tests
// =============================================================================

#[tokio::test]
async fn test_tools_call_returns_text_content() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/works"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"results": [{"title": "Sample"}]})),
        )
        .mount(&mock_server)
        .await;

    let (tools, ctx) = setup(&mock_server);
    let params = json!({
        "name": "openalex_search",
        "arguments": {"query": "crispr", "responseFormat": "text"}
    });

    let response = handle_request(&request("tools/call", params), &tools, &ctx).await;

    let result = response.result.unwrap();
    assert_eq!(result["content"][0]["type"], "text");
    let text = result["content"][0]["text"].as_str().unwrap();
    assert!(text.contains("Title: Sample"));
    assert!(text.contains("Number of works found: 1"));
}

#[tokio::test]
async fn test_tools_call_missing_name_is_invalid_params() {
    let mock_server = MockServer::start().await;
    let (tools, ctx) = setup(&mock_server);

    let response =
        handle_request(&request("tools/call", json!({"arguments": {}})), &tools, &ctx).await;

    assert_eq!(response.error.unwrap().code, -32602);
}

#[tokio::test]
async fn test_tools_call_unknown_tool_is_invalid_params() {
    let mock_server = MockServer::start().await;
    let (tools, ctx) = setup(&mock_server);

    let params = json!({"name": "crossref_search", "arguments": {}});
    let response = handle_request(&request("tools/call", params), &tools, &ctx).await;

    let error = response.error.unwrap();
    assert_eq!(error.code, -32602);
    assert!(error.message.contains("crossref_search"));
}

#[tokio::test]
async fn test_tools_call_failure_maps_to_tool_error() {
    let mock_server = MockServer::start().await;
    let (tools, ctx) = setup(&mock_server);

    let params = json!({
        "name": "openalex_search",
        "arguments": {"query": "crispr", "endpoint": "journals"}
    });
    let response = handle_request(&request("tools/call", params), &tools, &ctx).await;

    let error = response.error.unwrap();
    assert_eq!(error.code, -32000);
    assert!(error.message.contains("journals"));
}

// =============================================================================
// Server Facade Tests
// =============================================================================

#[test]
fn test_server_lists_registered_tools() {
    let client = OpenAlexClient::new(Config::default()).unwrap();
    let server = McpServer::new(client);

    let tools = server.list_tools();
    assert_eq!(tools.len(), 1);
    assert_eq!(tools[0].0, "openalex_search");

    assert!(server.get_tool("openalex_search").is_some());
    assert!(server.get_tool("nope").is_none());
}

#[tokio::test]
async fn test_server_executes_tools_via_context() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/works"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .mount(&mock_server)
        .await;

    let client = OpenAlexClient::new(Config::for_testing(&mock_server.uri())).unwrap();
    let server = McpServer::new(client);

    let tool = server.get_tool("openalex_search").unwrap();
    let output = tool.execute(server.context(), json!({"query": "q"})).await.unwrap();
    assert!(output.contains("results"));
}
