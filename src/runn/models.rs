//! Typed projections of upstream records.
//!
//! Upstream records are passed through largely unvalidated; these types are
//! the small shapes the tools return to callers.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A project as listed by `list_projects`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
}

impl Project {
    pub fn from_record(record: &Value) -> Option<Self> {
        Some(Self {
            id: record.get("id")?.as_i64()?,
            name: string_field(record, "name").unwrap_or_default(),
        })
    }
}

/// A person reduced to id, display name and email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
}

impl Person {
    pub fn from_record(record: &Value) -> Option<Self> {
        let first =
            string_field(record, "firstName").or_else(|| string_field(record, "first_name"));
        let last = string_field(record, "lastName").or_else(|| string_field(record, "last_name"));
        Some(Self {
            id: record.get("id")?.as_i64()?,
            name: display_name(first.as_deref(), last.as_deref()),
            email: string_field(record, "email"),
        })
    }
}

/// Join first and last name with one space, trimming when a part is absent.
pub fn display_name(first: Option<&str>, last: Option<&str>) -> String {
    format!("{} {}", first.unwrap_or_default(), last.unwrap_or_default())
        .trim()
        .to_string()
}

fn string_field(record: &Value, key: &str) -> Option<String> {
    record.get(key).and_then(Value::as_str).map(str::to_string)
}
