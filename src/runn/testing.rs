//! In-memory transport for tests.
//!
//! Serves queued responses per path and records every request it receives.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use serde_json::{Value, json};

use super::{ApiRequest, Credential, RunnError, RunnResult, Transport};

#[derive(Debug, Clone)]
pub enum FakeResponse {
    Json(Value),
    Status(u16, String),
}

#[derive(Default)]
pub struct FakeTransport {
    responses: Mutex<HashMap<String, VecDeque<FakeResponse>>>,
    requests: Mutex<Vec<ApiRequest>>,
    forbid_calls: bool,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transport that fails the test on any call.
    pub fn unreachable() -> Self {
        Self {
            forbid_calls: true,
            ..Self::default()
        }
    }

    /// Queue a JSON response for `path`. Once the queue is drained the path
    /// answers with an empty array.
    pub fn with_json(self, path: &str, body: Value) -> Self {
        self.push(path, FakeResponse::Json(body));
        self
    }

    /// Queue several pages for `path`, in fetch order.
    pub fn with_pages(self, path: &str, pages: Vec<Value>) -> Self {
        for page in pages {
            self.push(path, FakeResponse::Json(page));
        }
        self
    }

    pub fn with_status(self, path: &str, status: u16, body: &str) -> Self {
        self.push(path, FakeResponse::Status(status, body.to_string()));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn push(&self, path: &str, response: FakeResponse) {
        self.responses
            .lock()
            .unwrap()
            .entry(path.to_string())
            .or_default()
            .push_back(response);
    }

    fn respond(&self, request: &ApiRequest) -> RunnResult<Value> {
        assert!(
            !self.forbid_calls,
            "unexpected upstream call: {} {}",
            request.method, request.path
        );
        self.requests.lock().unwrap().push(request.clone());

        let next = self
            .responses
            .lock()
            .unwrap()
            .get_mut(&request.path)
            .and_then(VecDeque::pop_front);
        match next {
            Some(FakeResponse::Json(body)) => Ok(body),
            Some(FakeResponse::Status(status, body)) => Err(RunnError::Upstream {
                status: Some(status),
                body,
            }),
            None => Ok(json!([])),
        }
    }
}

impl Transport for FakeTransport {
    async fn send(&self, _credential: &Credential, request: &ApiRequest) -> RunnResult<Value> {
        self.respond(request)
    }
}

pub fn test_credential() -> Credential {
    Credential::new("LIVE_test").unwrap()
}
