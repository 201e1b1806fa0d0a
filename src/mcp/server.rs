//! MCP server implementation
//!
//! The server registers every tool and delegates to the per-resource tool
//! structs in [`super::tools`].

use std::sync::Arc;

use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};

use crate::config::Config;
use crate::runn::{Collection, Transport};

use super::tools::{
    BillableHoursParams, CollectionTools, ListCollectionParams, ListPeopleParams,
    ListProjectsParams, PeopleTools, ProjectTools, ReportTools, RequestTools, RunnRequestParams,
    ToolContext,
};

/// Main MCP server coordinator
///
/// Generic over `T: Transport` so tests can run every tool against an
/// in-memory upstream.
pub struct RunnMcpServer<T: Transport> {
    projects: ProjectTools<T>,
    people: PeopleTools<T>,
    reports: ReportTools<T>,
    collections: CollectionTools<T>,
    requests: RequestTools<T>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl<T: Transport + 'static> RunnMcpServer<T> {
    pub fn new(transport: Arc<T>, config: Arc<Config>) -> Self {
        let ctx = ToolContext::new(transport, config);
        Self {
            projects: ProjectTools::new(ctx.clone()),
            people: PeopleTools::new(ctx.clone()),
            reports: ReportTools::new(ctx.clone()),
            collections: CollectionTools::new(ctx.clone()),
            requests: RequestTools::new(ctx),
            tool_router: Self::tool_router(),
        }
    }

    /// Get the tool router for this handler
    pub fn router(&self) -> &ToolRouter<Self> {
        &self.tool_router
    }

    #[tool(description = "List all Runn projects as {id, name}, sorted by id.")]
    pub async fn list_projects(
        &self,
        params: Parameters<ListProjectsParams>,
    ) -> Result<CallToolResult, McpError> {
        self.projects.list_projects(params).await
    }

    #[tool(
        description = "List Runn people as {id, name, email}. Set full=true for raw records. Supports extra query params, pagination and page size."
    )]
    pub async fn list_people(
        &self,
        params: Parameters<ListPeopleParams>,
    ) -> Result<CallToolResult, McpError> {
        self.people.list_people(params).await
    }

    #[tool(
        description = "Billable hours grouped by project, person and month (YYYY-MM). Optional inclusive start/end dates (YYYY-MM-DD) and project_id/person_id filters."
    )]
    pub async fn billable_hours(
        &self,
        params: Parameters<BillableHoursParams>,
    ) -> Result<CallToolResult, McpError> {
        self.reports.billable_hours(params).await
    }

    #[tool(description = "List Runn clients (raw records).")]
    pub async fn list_clients(
        &self,
        params: Parameters<ListCollectionParams>,
    ) -> Result<CallToolResult, McpError> {
        self.collections.list(Collection::Clients, params).await
    }

    #[tool(description = "List Runn assignments (raw records).")]
    pub async fn list_assignments(
        &self,
        params: Parameters<ListCollectionParams>,
    ) -> Result<CallToolResult, McpError> {
        self.collections.list(Collection::Assignments, params).await
    }

    #[tool(description = "List Runn actuals, the recorded time entries (raw records).")]
    pub async fn list_actuals(
        &self,
        params: Parameters<ListCollectionParams>,
    ) -> Result<CallToolResult, McpError> {
        self.collections.list(Collection::Actuals, params).await
    }

    #[tool(description = "List Runn roles (raw records).")]
    pub async fn list_roles(
        &self,
        params: Parameters<ListCollectionParams>,
    ) -> Result<CallToolResult, McpError> {
        self.collections.list(Collection::Roles, params).await
    }

    #[tool(description = "List Runn skills (raw records).")]
    pub async fn list_skills(
        &self,
        params: Parameters<ListCollectionParams>,
    ) -> Result<CallToolResult, McpError> {
        self.collections.list(Collection::Skills, params).await
    }

    #[tool(description = "List Runn teams (raw records).")]
    pub async fn list_teams(
        &self,
        params: Parameters<ListCollectionParams>,
    ) -> Result<CallToolResult, McpError> {
        self.collections.list(Collection::Teams, params).await
    }

    #[tool(description = "List Runn rate cards (raw records).")]
    pub async fn list_rate_cards(
        &self,
        params: Parameters<ListCollectionParams>,
    ) -> Result<CallToolResult, McpError> {
        self.collections.list(Collection::RateCards, params).await
    }

    #[tool(
        description = "Send an arbitrary request to the Runn API. paginate=true collects every page and is only allowed with GET."
    )]
    pub async fn runn_request(
        &self,
        params: Parameters<RunnRequestParams>,
    ) -> Result<CallToolResult, McpError> {
        self.requests.runn_request(params).await
    }
}

#[tool_handler]
impl<T: Transport + 'static> ServerHandler for RunnMcpServer<T> {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(ServerCapabilities::builder().enable_tools().build()).with_instructions(
            "Runn MCP Server - Query Runn projects, people, clients, assignments, actuals, roles, skills, teams and rate cards, and report billable hours by project, person and month",
        )
    }
}
