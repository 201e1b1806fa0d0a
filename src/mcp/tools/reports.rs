//! Billable hours report tool

use rmcp::{
    ErrorData as McpError, handler::server::wrapper::Parameters, model::CallToolResult, schemars,
    schemars::JsonSchema,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::{ToolContext, json_result, map_runn_error};
use crate::report::{build_billable_hours_report, filter_rows, parse_date};
use crate::runn::Transport;

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct BillableHoursParams {
    #[schemars(description = "Inclusive start date (YYYY-MM-DD). Optional.")]
    pub start: Option<String>,
    #[schemars(description = "Inclusive end date (YYYY-MM-DD). Optional.")]
    pub end: Option<String>,
    #[schemars(description = "Only return rows for this project ID. Optional.")]
    pub project_id: Option<i64>,
    #[schemars(description = "Only return rows for this person ID. Optional.")]
    pub person_id: Option<i64>,
    #[schemars(description = "Runn API key (optional). Defaults to RUNN_API_KEY.")]
    pub api_key: Option<String>,
}

/// Report tools
pub struct ReportTools<T: Transport> {
    ctx: ToolContext<T>,
}

impl<T: Transport> ReportTools<T> {
    pub fn new(ctx: ToolContext<T>) -> Self {
        Self { ctx }
    }

    #[instrument(skip_all)]
    pub async fn billable_hours(
        &self,
        params: Parameters<BillableHoursParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let client = self
            .ctx
            .client(params.api_key.as_deref())
            .map_err(map_runn_error)?;
        let start = parse_date(params.start.as_deref()).map_err(map_runn_error)?;
        let end = parse_date(params.end.as_deref()).map_err(map_runn_error)?;

        let rows = build_billable_hours_report(&client, start, end)
            .await
            .map_err(map_runn_error)?;
        json_result(&filter_rows(rows, params.project_id, params.person_id))
    }
}
