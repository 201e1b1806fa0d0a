//! Runn API client with cursor/offset pagination.

use std::collections::BTreeMap;
use std::sync::Arc;

use futures_util::stream::{self, BoxStream, StreamExt, TryStreamExt};
use serde_json::{Map, Value};
use tracing::{debug, instrument, warn};

use super::credential::Credential;
use super::error::{RunnError, RunnResult};
use super::models::{Person, Project};
use super::page::{Page, StopRule};
use super::transport::{ApiRequest, HttpMethod, Transport, query_pairs};

/// Default number of records requested per page.
pub const DEFAULT_PAGE_SIZE: usize = 200;

/// Query keys owned by the paginator.
const PAGINATION_KEYS: [&str; 3] = ["limit", "cursor", "offset"];

/// Upstream list endpoints exposed as tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Projects,
    People,
    Clients,
    Assignments,
    Actuals,
    Roles,
    Skills,
    Teams,
    RateCards,
}

impl Collection {
    pub fn path(self) -> &'static str {
        match self {
            Collection::Projects => "/projects",
            Collection::People => "/people",
            Collection::Clients => "/clients",
            Collection::Assignments => "/assignments",
            Collection::Actuals => "/actuals",
            Collection::Roles => "/roles",
            Collection::Skills => "/skills",
            Collection::Teams => "/teams",
            Collection::RateCards => "/rate-cards",
        }
    }
}

/// Authenticated client for one tool invocation.
///
/// Cheap to build: the transport (and its connection pool) is shared, the
/// credential is per call.
pub struct RunnClient<T: Transport> {
    transport: Arc<T>,
    credential: Credential,
    page_size: usize,
    stop_rule: StopRule,
}

enum Cursor {
    Next { cursor: Option<String>, offset: usize },
    Done,
}

impl<T: Transport> RunnClient<T> {
    pub fn new(transport: Arc<T>, credential: Credential) -> Self {
        Self {
            transport,
            credential,
            page_size: DEFAULT_PAGE_SIZE,
            stop_rule: StopRule::default(),
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn with_stop_rule(mut self, stop_rule: StopRule) -> Self {
        self.stop_rule = stop_rule;
        self
    }

    /// Send a single request and return the decoded body.
    #[instrument(skip(self, params, body))]
    pub async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        params: Option<&Map<String, Value>>,
        body: Option<Value>,
    ) -> RunnResult<Value> {
        let request = ApiRequest {
            method,
            path: path.to_string(),
            query: query_pairs(params),
            body,
        };
        self.transport.send(&self.credential, &request).await
    }

    /// Lazily stream every record of a list endpoint.
    ///
    /// Each pull that exhausts the buffered page triggers exactly one fetch.
    /// The stream is single-pass; call again to restart from the first page.
    pub fn paginate(
        &self,
        path: &str,
        params: Option<&Map<String, Value>>,
        limit: Option<usize>,
    ) -> BoxStream<'_, RunnResult<Value>> {
        let limit = limit.unwrap_or(self.page_size).max(1);
        let base_query: Vec<(String, String)> = query_pairs(params)
            .into_iter()
            .filter(|(k, _)| !PAGINATION_KEYS.contains(&k.as_str()))
            .collect();
        let path = path.to_string();
        let start = Cursor::Next {
            cursor: None,
            offset: 0,
        };

        stream::try_unfold(start, move |state| {
            let path = path.clone();
            let base_query = base_query.clone();
            async move {
                let (cursor, offset) = match state {
                    Cursor::Done => return Ok(None),
                    Cursor::Next { cursor, offset } => (cursor, offset),
                };

                let mut query = base_query;
                query.push(("limit".to_string(), limit.to_string()));
                match &cursor {
                    Some(c) => query.push(("cursor".to_string(), c.clone())),
                    None if offset > 0 => query.push(("offset".to_string(), offset.to_string())),
                    None => {}
                }

                let request = ApiRequest {
                    method: HttpMethod::Get,
                    path,
                    query,
                    body: None,
                };
                let response = self.transport.send(&self.credential, &request).await?;
                let (values, next_cursor) = Page::from_value(response)?.into_parts();
                debug!(
                    path = %request.path,
                    records = values.len(),
                    has_cursor = next_cursor.is_some(),
                    "Fetched page"
                );

                let next = if self.stop_rule.is_last(values.len(), limit, next_cursor.as_deref()) {
                    Cursor::Done
                } else {
                    Cursor::Next {
                        offset: offset + values.len(),
                        cursor: next_cursor,
                    }
                };
                Ok::<_, RunnError>(Some((values, next)))
            }
        })
        .map_ok(|values| stream::iter(values.into_iter().map(Ok::<Value, RunnError>)))
        .try_flatten()
        .boxed()
    }

    /// Drain [`paginate`](Self::paginate) into a vector.
    ///
    /// A failure on any page discards the records fetched so far.
    pub async fn collect(
        &self,
        path: &str,
        params: Option<&Map<String, Value>>,
        limit: Option<usize>,
    ) -> RunnResult<Vec<Value>> {
        self.paginate(path, params, limit).try_collect().await
    }

    /// Project id to name for every project.
    #[instrument(skip(self))]
    pub async fn projects_lookup(&self) -> RunnResult<BTreeMap<i64, String>> {
        let mut lookup = BTreeMap::new();
        let mut records = self.paginate(Collection::Projects.path(), None, None);
        while let Some(record) = records.try_next().await? {
            match Project::from_record(&record) {
                Some(project) => {
                    lookup.insert(project.id, project.name);
                }
                None => warn!("Skipping project record without numeric id"),
            }
        }
        Ok(lookup)
    }

    /// Person id to display name for every person.
    #[instrument(skip(self))]
    pub async fn people_lookup(&self) -> RunnResult<BTreeMap<i64, String>> {
        let mut lookup = BTreeMap::new();
        let mut records = self.iter_people();
        while let Some(record) = records.try_next().await? {
            match Person::from_record(&record) {
                Some(person) => {
                    lookup.insert(person.id, person.name);
                }
                None => warn!("Skipping person record without numeric id"),
            }
        }
        Ok(lookup)
    }

    pub fn iter_people(&self) -> BoxStream<'_, RunnResult<Value>> {
        self.paginate(Collection::People.path(), None, None)
    }

    pub fn iter_actuals(&self) -> BoxStream<'_, RunnResult<Value>> {
        self.paginate(Collection::Actuals.path(), None, None)
    }
}
