//! People tool implementations

use futures_util::TryStreamExt;
use rmcp::{
    ErrorData as McpError, handler::server::wrapper::Parameters, model::CallToolResult, schemars,
    schemars::JsonSchema,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{info, instrument};

use super::{ToolContext, fetch_collection, json_result, map_runn_error};
use crate::runn::{Collection, Page, Person, Transport};

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct ListPeopleParams {
    #[schemars(
        description = "Return raw upstream person records instead of {id, name, email}. Default: false"
    )]
    pub full: Option<bool>,
    #[schemars(description = "Extra query parameters passed to /people")]
    pub params: Option<Map<String, Value>>,
    #[schemars(
        description = "Fetch every page (default: true). When false, only one page is read."
    )]
    pub paginate: Option<bool>,
    #[schemars(description = "Page size sent as the 'limit' query parameter")]
    pub limit: Option<usize>,
    #[schemars(description = "Runn API key (optional). Defaults to RUNN_API_KEY.")]
    pub api_key: Option<String>,
}

/// People tools
pub struct PeopleTools<T: Transport> {
    ctx: ToolContext<T>,
}

impl<T: Transport> PeopleTools<T> {
    pub fn new(ctx: ToolContext<T>) -> Self {
        Self { ctx }
    }

    #[instrument(skip_all)]
    pub async fn list_people(
        &self,
        params: Parameters<ListPeopleParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let client = self
            .ctx
            .client(params.api_key.as_deref())
            .map_err(map_runn_error)?;
        let paginate = params.paginate.unwrap_or(true);
        let path = Collection::People.path();

        if params.full.unwrap_or(false) {
            let query = params.params.as_ref();
            let raw = fetch_collection(&client, path, query, paginate, params.limit)
                .await
                .map_err(map_runn_error)?;
            return json_result(&raw);
        }

        let records = if paginate {
            client
                .paginate(path, params.params.as_ref(), params.limit)
                .try_collect::<Vec<_>>()
                .await
                .map_err(map_runn_error)?
        } else {
            let raw = fetch_collection(&client, path, params.params.as_ref(), false, params.limit)
                .await
                .map_err(map_runn_error)?;
            Page::from_value(raw).map_err(map_runn_error)?.into_parts().0
        };

        let people: Vec<Person> = records.iter().filter_map(Person::from_record).collect();
        info!(count = people.len(), "Listed people");
        json_result(&people)
    }
}
