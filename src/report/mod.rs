//! Billable hours report.
//!
//! Streams `/actuals`, buckets each time entry by project, person and
//! calendar month, and sums the billable hours of every bucket.

mod actual;

#[cfg(test)]
mod actual_test;

use std::collections::BTreeMap;

use chrono::NaiveDate;
use futures_util::TryStreamExt;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::runn::{RunnClient, RunnError, RunnResult, Transport};

pub use actual::ActualEntry;

/// One aggregated `(project, person, month)` bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillableHoursRow {
    pub project_id: i64,
    pub project_name: Option<String>,
    pub person_id: i64,
    pub person_name: Option<String>,
    /// Calendar month as `YYYY-MM`.
    pub month: String,
    pub billable_hours: f64,
}

/// Inclusive date bounds. A missing bound does not filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateWindow {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateWindow {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.is_none_or(|start| date >= start) && self.end.is_none_or(|end| date <= end)
    }
}

/// Parse an optional ISO-8601 calendar date (`YYYY-MM-DD`).
///
/// `None` and blank strings pass through as `None`.
pub fn parse_date(value: Option<&str>) -> RunnResult<Option<NaiveDate>> {
    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(Some)
        .map_err(|e| RunnError::validation(format!("invalid date '{}': {}", raw, e)))
}

type BucketKey = (i64, i64, String);

/// Group entries inside `window` and sum their hours.
///
/// Rows come back ordered by project id, person id, then month. Names are
/// left empty; see [`build_billable_hours_report`] for the joined version.
pub fn aggregate<I>(entries: I, window: DateWindow) -> Vec<BillableHoursRow>
where
    I: IntoIterator<Item = ActualEntry>,
{
    let mut buckets: BTreeMap<BucketKey, f64> = BTreeMap::new();
    for entry in entries {
        add_entry(&mut buckets, &entry, window);
    }
    into_rows(buckets)
}

fn add_entry(buckets: &mut BTreeMap<BucketKey, f64>, entry: &ActualEntry, window: DateWindow) {
    if !window.contains(entry.date) {
        return;
    }
    *buckets
        .entry((entry.project_id, entry.person_id, entry.month()))
        .or_insert(0.0) += entry.billable_hours;
}

fn into_rows(buckets: BTreeMap<BucketKey, f64>) -> Vec<BillableHoursRow> {
    buckets
        .into_iter()
        .map(
            |((project_id, person_id, month), billable_hours)| BillableHoursRow {
                project_id,
                project_name: None,
                person_id,
                person_name: None,
                month,
                billable_hours,
            },
        )
        .collect()
}

/// Build the billable hours report for an optional date window.
///
/// Fetches the project and person lookups, then pages through every actual.
/// Records that cannot be attributed to a project, person and date are
/// skipped.
#[instrument(skip(client))]
pub async fn build_billable_hours_report<T: Transport>(
    client: &RunnClient<T>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> RunnResult<Vec<BillableHoursRow>> {
    let window = DateWindow::new(start, end);
    let projects = client.projects_lookup().await?;
    let people = client.people_lookup().await?;

    let mut buckets: BTreeMap<BucketKey, f64> = BTreeMap::new();
    let mut seen = 0usize;
    let mut skipped = 0usize;
    let mut actuals = client.iter_actuals();
    while let Some(record) = actuals.try_next().await? {
        seen += 1;
        match ActualEntry::from_record(&record) {
            Some(entry) => add_entry(&mut buckets, &entry, window),
            None => {
                skipped += 1;
                debug!(record = %record, "Skipping actual without project, person or date");
            }
        }
    }

    let mut rows = into_rows(buckets);
    for row in &mut rows {
        row.project_name = projects.get(&row.project_id).cloned();
        row.person_name = people.get(&row.person_id).cloned();
    }
    info!(actuals = seen, skipped, rows = rows.len(), "Built billable hours report");
    Ok(rows)
}

/// Keep rows matching the optional project and person ids.
pub fn filter_rows(
    rows: Vec<BillableHoursRow>,
    project_id: Option<i64>,
    person_id: Option<i64>,
) -> Vec<BillableHoursRow> {
    rows.into_iter()
        .filter(|row| project_id.is_none_or(|id| row.project_id == id))
        .filter(|row| person_id.is_none_or(|id| row.person_id == id))
        .collect()
}
