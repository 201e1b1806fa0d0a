//! Raw list tools for the remaining upstream collections.

use rmcp::{
    ErrorData as McpError, handler::server::wrapper::Parameters, model::CallToolResult, schemars,
    schemars::JsonSchema,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{instrument, warn};

use super::{ToolContext, fetch_collection, json_result, map_runn_error};
use crate::runn::{Collection, Transport};

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct ListCollectionParams {
    #[schemars(description = "Extra query parameters passed to the endpoint")]
    pub params: Option<Map<String, Value>>,
    #[schemars(
        description = "Fetch every page (default: true). When false, the raw first page is returned."
    )]
    pub paginate: Option<bool>,
    #[schemars(description = "Page size sent as the 'limit' query parameter")]
    pub limit: Option<usize>,
    #[schemars(description = "Runn API key (optional). Defaults to RUNN_API_KEY.")]
    pub api_key: Option<String>,
}

/// Clients, assignments, actuals, roles, skills, teams and rate cards.
pub struct CollectionTools<T: Transport> {
    ctx: ToolContext<T>,
}

impl<T: Transport> CollectionTools<T> {
    pub fn new(ctx: ToolContext<T>) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self, params))]
    pub async fn list(
        &self,
        collection: Collection,
        params: Parameters<ListCollectionParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let client = self
            .ctx
            .client(params.api_key.as_deref())
            .map_err(map_runn_error)?;

        let value = fetch_collection(
            &client,
            collection.path(),
            params.params.as_ref(),
            params.paginate.unwrap_or(true),
            params.limit,
        )
        .await
        .map_err(|e| {
            warn!(error = %e, "Collection fetch failed");
            map_runn_error(e)
        })?;
        json_result(&value)
    }
}
