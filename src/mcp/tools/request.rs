//! Generic request tool

use rmcp::{
    ErrorData as McpError, handler::server::wrapper::Parameters, model::CallToolResult, schemars,
    schemars::JsonSchema,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{info, instrument};

use super::{ToolContext, json_result, map_runn_error};
use crate::runn::{HttpMethod, RunnError, Transport};

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct RunnRequestParams {
    #[schemars(description = "HTTP method: GET, POST, PUT, PATCH or DELETE")]
    pub method: String,
    #[schemars(description = "API path, e.g. '/projects/123'")]
    pub path: String,
    #[schemars(description = "Query parameters (optional)")]
    pub params: Option<Map<String, Value>>,
    #[schemars(description = "JSON request body (optional)")]
    pub json_body: Option<Value>,
    #[schemars(description = "Follow pagination and return every record. GET only. Default: false")]
    pub paginate: Option<bool>,
    #[schemars(description = "Page size when paginating")]
    pub limit: Option<usize>,
    #[schemars(description = "Runn API key (optional). Defaults to RUNN_API_KEY.")]
    pub api_key: Option<String>,
}

/// Escape hatch for endpoints without a dedicated tool.
pub struct RequestTools<T: Transport> {
    ctx: ToolContext<T>,
}

impl<T: Transport> RequestTools<T> {
    pub fn new(ctx: ToolContext<T>) -> Self {
        Self { ctx }
    }

    #[instrument(skip_all, fields(method = %params.0.method, path = %params.0.path))]
    pub async fn runn_request(
        &self,
        params: Parameters<RunnRequestParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let method: HttpMethod = params.method.parse().map_err(map_runn_error)?;
        let paginate = params.paginate.unwrap_or(false);
        if paginate && !method.is_read() {
            return Err(map_runn_error(RunnError::validation(format!(
                "paginate=true is only supported for GET requests, got {}",
                method
            ))));
        }

        let client = self
            .ctx
            .client(params.api_key.as_deref())
            .map_err(map_runn_error)?;

        let value = if paginate {
            Value::Array(
                client
                    .collect(&params.path, params.params.as_ref(), params.limit)
                    .await
                    .map_err(map_runn_error)?,
            )
        } else {
            client
                .request(method, &params.path, params.params.as_ref(), params.json_body)
                .await
                .map_err(map_runn_error)?
        };
        info!("Runn request completed");
        json_result(&value)
    }
}
