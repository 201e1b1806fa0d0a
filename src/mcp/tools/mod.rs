//! MCP tool implementations
//!
//! Tool handlers organized by upstream resource. Every handler resolves the
//! credential, builds a fresh [`RunnClient`] and returns JSON text content.

mod collections;
mod people;
mod projects;
mod reports;
mod request;

#[cfg(test)]
mod projects_test;
#[cfg(test)]
mod reports_test;

pub use collections::{CollectionTools, ListCollectionParams};
pub use people::{ListPeopleParams, PeopleTools};
pub use projects::{ListProjectsParams, ProjectTools};
pub use reports::{BillableHoursParams, ReportTools};
pub use request::{RequestTools, RunnRequestParams};

use std::sync::Arc;

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use serde::Serialize;
use serde_json::{Map, Value, json};

use crate::config::Config;
use crate::runn::{Credential, HttpMethod, RunnClient, RunnError, RunnResult, Transport};

/// Shared state handed to every tool struct.
///
/// Holds no per-call state: each invocation builds its own client.
pub struct ToolContext<T: Transport> {
    transport: Arc<T>,
    config: Arc<Config>,
}

impl<T: Transport> Clone for ToolContext<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            config: Arc::clone(&self.config),
        }
    }
}

impl<T: Transport> ToolContext<T> {
    pub fn new(transport: Arc<T>, config: Arc<Config>) -> Self {
        Self { transport, config }
    }

    /// Build a client for one call. Fails before any network access when no
    /// credential is available.
    pub fn client(&self, api_key: Option<&str>) -> RunnResult<RunnClient<T>> {
        let credential = Credential::resolve(api_key, self.config.api_key.as_ref())?;
        Ok(RunnClient::new(Arc::clone(&self.transport), credential)
            .with_page_size(self.config.page_size)
            .with_stop_rule(self.config.stop_rule))
    }
}

/// Fetch a list endpoint, either every page or a single raw response.
pub(crate) async fn fetch_collection<T: Transport>(
    client: &RunnClient<T>,
    path: &str,
    params: Option<&Map<String, Value>>,
    paginate: bool,
    limit: Option<usize>,
) -> RunnResult<Value> {
    if paginate {
        return Ok(Value::Array(client.collect(path, params, limit).await?));
    }

    let mut query = params.cloned().unwrap_or_default();
    if let Some(limit) = limit {
        query.insert("limit".to_string(), json!(limit));
    }
    client.request(HttpMethod::Get, path, Some(&query), None).await
}

/// Map client errors onto MCP error codes.
pub(crate) fn map_runn_error(e: RunnError) -> McpError {
    match &e {
        RunnError::Authentication { .. } => McpError::invalid_request(
            "authentication_error",
            Some(json!({"error": e.to_string()})),
        ),
        RunnError::Validation { .. } => {
            McpError::invalid_params("validation_error", Some(json!({"error": e.to_string()})))
        }
        RunnError::Upstream { status, body } => McpError::internal_error(
            "upstream_error",
            Some(json!({"status": status, "body": body, "error": e.to_string()})),
        ),
        RunnError::Decode { .. } => {
            McpError::internal_error("decode_error", Some(json!({"error": e.to_string()})))
        }
    }
}

/// Serialize a tool result as pretty JSON text content.
pub(crate) fn json_result<S: Serialize>(value: &S) -> Result<CallToolResult, McpError> {
    let text = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(
            "serialization_error",
            Some(json!({"error": e.to_string()})),
        )
    })?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use rmcp::model::{CallToolResult, RawContent};
    use serde_json::Value;

    use super::ToolContext;
    use crate::config::Config;
    use crate::runn::testing::FakeTransport;

    pub fn context(transport: FakeTransport) -> (Arc<FakeTransport>, ToolContext<FakeTransport>) {
        let transport = Arc::new(transport);
        let config = Config::default().with_api_key("LIVE_default");
        (
            Arc::clone(&transport),
            ToolContext::new(transport, Arc::new(config)),
        )
    }

    pub fn context_without_key(
        transport: FakeTransport,
    ) -> (Arc<FakeTransport>, ToolContext<FakeTransport>) {
        let transport = Arc::new(transport);
        (
            Arc::clone(&transport),
            ToolContext::new(transport, Arc::new(Config::default())),
        )
    }

    /// Parse the single text content of a tool result as JSON.
    pub fn result_json(call_result: &CallToolResult) -> Value {
        assert!(call_result.is_error.is_none() || call_result.is_error == Some(false));
        assert_eq!(call_result.content.len(), 1);
        let content_text = match &call_result.content[0].raw {
            RawContent::Text(text) => text.text.as_str(),
            _ => panic!("Expected text content"),
        };
        serde_json::from_str(content_text).unwrap()
    }
}
