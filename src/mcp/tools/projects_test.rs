//! Tests for project MCP tools

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::ErrorCode;
use serde_json::json;

use crate::mcp::tools::projects::{ListProjectsParams, ProjectTools};
use crate::mcp::tools::test_support::{context, context_without_key, result_json};
use crate::runn::testing::FakeTransport;

#[tokio::test]
async fn test_list_projects_sorted_pairs() {
    let (_, ctx) = context(FakeTransport::new().with_json(
        "/projects",
        json!([
            {"id": 3, "name": "Gamma", "isConfirmed": true},
            {"id": 1, "name": "Alpha"},
            {"id": 2, "name": "Beta"}
        ]),
    ));
    let tools = ProjectTools::new(ctx);

    let result = tools
        .list_projects(Parameters(ListProjectsParams::default()))
        .await
        .unwrap();

    assert_eq!(
        result_json(&result),
        json!([
            {"id": 1, "name": "Alpha"},
            {"id": 2, "name": "Beta"},
            {"id": 3, "name": "Gamma"}
        ])
    );
}

#[tokio::test]
async fn test_list_projects_empty() {
    let (_, ctx) = context(FakeTransport::new());
    let tools = ProjectTools::new(ctx);

    let result = tools
        .list_projects(Parameters(ListProjectsParams::default()))
        .await
        .unwrap();

    assert_eq!(result_json(&result), json!([]));
}

#[tokio::test]
async fn test_list_projects_without_credential_makes_no_call() {
    let (transport, ctx) = context_without_key(FakeTransport::unreachable());
    let tools = ProjectTools::new(ctx);

    let err = tools
        .list_projects(Parameters(ListProjectsParams::default()))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::INVALID_REQUEST);
    assert_eq!(err.message, "authentication_error");
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn test_list_projects_accepts_explicit_key() {
    let (transport, ctx) = context_without_key(
        FakeTransport::new().with_json("/projects", json!([{"id": 1, "name": "Alpha"}])),
    );
    let tools = ProjectTools::new(ctx);

    let result = tools
        .list_projects(Parameters(ListProjectsParams {
            api_key: Some("LIVE_explicit".to_string()),
        }))
        .await
        .unwrap();

    assert_eq!(result_json(&result), json!([{"id": 1, "name": "Alpha"}]));
    assert_eq!(transport.request_count(), 1);
}
