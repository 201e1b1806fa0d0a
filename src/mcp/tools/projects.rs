//! Project tool implementations

use rmcp::{
    ErrorData as McpError, handler::server::wrapper::Parameters, model::CallToolResult, schemars,
    schemars::JsonSchema,
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::{ToolContext, json_result, map_runn_error};
use crate::runn::{Project, Transport};

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct ListProjectsParams {
    #[schemars(description = "Runn API key (optional). Defaults to RUNN_API_KEY.")]
    pub api_key: Option<String>,
}

/// Project tools
pub struct ProjectTools<T: Transport> {
    ctx: ToolContext<T>,
}

impl<T: Transport> ProjectTools<T> {
    pub fn new(ctx: ToolContext<T>) -> Self {
        Self { ctx }
    }

    /// List every project as `{id, name}`, sorted by id.
    #[instrument(skip_all)]
    pub async fn list_projects(
        &self,
        params: Parameters<ListProjectsParams>,
    ) -> Result<CallToolResult, McpError> {
        let client = self
            .ctx
            .client(params.0.api_key.as_deref())
            .map_err(map_runn_error)?;
        let lookup = client.projects_lookup().await.map_err(map_runn_error)?;

        let projects: Vec<Project> = lookup
            .into_iter()
            .map(|(id, name)| Project { id, name })
            .collect();
        info!(count = projects.len(), "Listed projects");
        json_result(&projects)
    }
}
