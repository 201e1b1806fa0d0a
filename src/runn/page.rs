//! List response shapes and pagination termination.

use serde::Deserialize;
use serde_json::Value;

use super::error::{RunnError, RunnResult};

/// One page of a list endpoint.
///
/// The Runn API answers list calls either with a bare array or with an
/// envelope holding the records under `values`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Page {
    Array(Vec<Value>),
    Envelope {
        values: Vec<Value>,
        #[serde(default, rename = "nextCursor", alias = "next_cursor")]
        next_cursor: Option<String>,
    },
}

impl Page {
    pub fn from_value(value: Value) -> RunnResult<Self> {
        serde_json::from_value(value).map_err(|e| RunnError::Decode {
            message: format!("expected an array or an object with 'values': {}", e),
        })
    }

    /// Records and the non-empty continuation cursor, if any.
    pub fn into_parts(self) -> (Vec<Value>, Option<String>) {
        match self {
            Page::Array(values) => (values, None),
            Page::Envelope {
                values,
                next_cursor,
            } => (values, next_cursor.filter(|c| !c.is_empty())),
        }
    }
}

/// Decides when pagination is exhausted.
///
/// An empty page always ends iteration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum StopRule {
    /// Stop on the first page holding fewer records than the page size.
    #[default]
    ShortPage,
    /// Stop when the envelope no longer carries a `nextCursor`.
    Cursor,
}

impl StopRule {
    pub fn is_last(self, page_len: usize, limit: usize, next_cursor: Option<&str>) -> bool {
        if page_len == 0 {
            return true;
        }
        match self {
            StopRule::ShortPage => page_len < limit,
            StopRule::Cursor => next_cursor.is_none(),
        }
    }
}
