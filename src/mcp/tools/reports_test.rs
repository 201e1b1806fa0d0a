//! Tests for the billable hours MCP tool

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::ErrorCode;
use serde_json::json;

use crate::mcp::tools::reports::{BillableHoursParams, ReportTools};
use crate::mcp::tools::test_support::{context, context_without_key, result_json};
use crate::runn::testing::FakeTransport;

fn fixture_transport() -> FakeTransport {
    FakeTransport::new()
        .with_json("/projects", json!([{"id": 1, "name": "Apollo"}]))
        .with_json("/people", json!([{"id": 10, "firstName": "Ada"}]))
        .with_json(
            "/actuals",
            json!([
                {"project": 1, "person": 10, "date": "2024-01-05", "hours": 3},
                {"project": 1, "person": 10, "date": "2024-01-20", "hours": 2},
                {"project": 1, "person": 10, "date": "2024-02-01", "hours": 5}
            ]),
        )
}

#[tokio::test]
async fn test_billable_hours_without_filters() {
    let (_, ctx) = context(fixture_transport());
    let tools = ReportTools::new(ctx);

    let result = tools
        .billable_hours(Parameters(BillableHoursParams::default()))
        .await
        .unwrap();

    assert_eq!(
        result_json(&result),
        json!([
            {
                "project_id": 1,
                "project_name": "Apollo",
                "person_id": 10,
                "person_name": "Ada",
                "month": "2024-01",
                "billable_hours": 5.0
            },
            {
                "project_id": 1,
                "project_name": "Apollo",
                "person_id": 10,
                "person_name": "Ada",
                "month": "2024-02",
                "billable_hours": 5.0
            }
        ])
    );
}

#[tokio::test]
async fn test_billable_hours_date_window() {
    let (_, ctx) = context(fixture_transport());
    let tools = ReportTools::new(ctx);

    let result = tools
        .billable_hours(Parameters(BillableHoursParams {
            start: Some("2024-02-01".to_string()),
            ..Default::default()
        }))
        .await
        .unwrap();

    let rows = result_json(&result);
    assert_eq!(rows.as_array().unwrap().len(), 1);
    assert_eq!(rows[0]["month"], "2024-02");
}

#[tokio::test]
async fn test_billable_hours_unknown_person_is_empty() {
    let (_, ctx) = context(fixture_transport());
    let tools = ReportTools::new(ctx);

    let result = tools
        .billable_hours(Parameters(BillableHoursParams {
            project_id: Some(1),
            person_id: Some(99),
            ..Default::default()
        }))
        .await
        .unwrap();

    assert_eq!(result_json(&result), json!([]));
}

#[tokio::test]
async fn test_billable_hours_malformed_date() {
    let (transport, ctx) = context(FakeTransport::unreachable());
    let tools = ReportTools::new(ctx);

    let err = tools
        .billable_hours(Parameters(BillableHoursParams {
            end: Some("31/01/2024".to_string()),
            ..Default::default()
        }))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn test_billable_hours_without_credential_makes_no_call() {
    let (transport, ctx) = context_without_key(FakeTransport::unreachable());
    let tools = ReportTools::new(ctx);

    let err = tools
        .billable_hours(Parameters(BillableHoursParams::default()))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::INVALID_REQUEST);
    assert_eq!(transport.request_count(), 0);
}
