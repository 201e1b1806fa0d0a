//! Extraction of time entries from raw `/actuals` records.

use chrono::{Datelike, NaiveDate};
use serde_json::Value;

/// The parts of an actual the report needs.
#[derive(Debug, Clone, PartialEq)]
pub struct ActualEntry {
    pub project_id: i64,
    pub person_id: i64,
    pub date: NaiveDate,
    pub billable_hours: f64,
}

impl ActualEntry {
    /// Read an upstream record. Returns `None` when the project, person or
    /// date cannot be determined. A missing or non-numeric hour value counts
    /// as zero.
    pub fn from_record(record: &Value) -> Option<Self> {
        Some(Self {
            project_id: reference_id(record, &["projectId", "project_id", "project"])?,
            person_id: reference_id(record, &["personId", "person_id", "person"])?,
            date: record_date(record.get("date")?)?,
            billable_hours: billable_hours(record),
        })
    }

    /// Calendar month as `YYYY-MM`.
    pub fn month(&self) -> String {
        format!("{:04}-{:02}", self.date.year(), self.date.month())
    }
}

/// First key holding an integer id, or an object with an integer `id`.
fn reference_id(record: &Value, keys: &[&str]) -> Option<i64> {
    keys.iter().find_map(|key| match record.get(*key)? {
        Value::Object(inner) => inner.get("id").and_then(as_integer),
        other => as_integer(other),
    })
}

fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

// Upstream dates are read as-is; anything after the date part is ignored.
fn record_date(value: &Value) -> Option<NaiveDate> {
    let raw = value.as_str()?.trim();
    let day = raw.split(['T', ' ']).next()?;
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

fn billable_hours(record: &Value) -> f64 {
    if let Some(value) = present(record, &["billableHours", "billable_hours", "hours"]) {
        return as_number(value).unwrap_or(0.0);
    }
    if let Some(value) = present(record, &["billableMinutes", "billable_minutes"]) {
        return as_number(value).map(|m| m / 60.0).unwrap_or(0.0);
    }
    0.0
}

// First key holding a non-null value.
fn present<'a>(record: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| record.get(*key))
        .find(|value| !value.is_null())
}

fn as_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}
