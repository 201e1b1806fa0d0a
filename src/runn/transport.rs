//! HTTP transport for the Runn API.
//!
//! [`Transport`] is the seam between the client and the network. The
//! production implementation is [`HttpTransport`] (reqwest); tests substitute
//! in-memory fakes.

use std::fmt;
use std::future::Future;
use std::str::FromStr;

use reqwest::{Client, header};
use serde_json::{Map, Value};
use tracing::debug;

use super::credential::Credential;
use super::error::{RunnError, RunnResult};

/// HTTP methods accepted by the generic request tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    /// Only reads may be paginated.
    pub fn is_read(self) -> bool {
        matches!(self, HttpMethod::Get)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = RunnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "PATCH" => Ok(HttpMethod::Patch),
            "DELETE" => Ok(HttpMethod::Delete),
            other => Err(RunnError::validation(format!(
                "unsupported HTTP method '{}'",
                other
            ))),
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// One outbound call.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Value of the last query pair named `key`.
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Sends authenticated requests and decodes the JSON response.
pub trait Transport: Send + Sync {
    fn send(
        &self,
        credential: &Credential,
        request: &ApiRequest,
    ) -> impl Future<Output = RunnResult<Value>> + Send;
}

/// reqwest-backed transport bound to one base URL.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
    accept_version: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>, accept_version: impl Into<String>) -> RunnResult<Self> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            accept_version: accept_version.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Transport for HttpTransport {
    async fn send(&self, credential: &Credential, request: &ApiRequest) -> RunnResult<Value> {
        let url = self.url(&request.path);
        debug!(method = %request.method, url = %url, "Runn API request");

        let mut builder = self
            .client
            .request(request.method.into(), &url)
            .bearer_auth(credential.expose())
            .header("Accept-Version", &self.accept_version)
            .header(header::ACCEPT, "application/json");
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(RunnError::Upstream {
                status: Some(status.as_u16()),
                body: text,
            });
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }
}

/// Flatten a JSON object of query parameters into key/value pairs.
///
/// Arrays become repeated keys, `null` is dropped and nested objects are sent
/// as compact JSON.
pub fn query_pairs(params: Option<&Map<String, Value>>) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    let Some(params) = params else {
        return pairs;
    };

    for (key, value) in params {
        match value {
            Value::Null => {}
            Value::Array(items) => {
                for item in items {
                    if let Some(rendered) = render_scalar(item) {
                        pairs.push((key.clone(), rendered));
                    }
                }
            }
            other => {
                if let Some(rendered) = render_scalar(other) {
                    pairs.push((key.clone(), rendered));
                }
            }
        }
    }
    pairs
}

fn render_scalar(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}
