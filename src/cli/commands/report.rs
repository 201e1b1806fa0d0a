//! Billable hours report command

use tabled::{Table, Tabled};

use crate::cli::error::CliResult;
use crate::cli::utils::{apply_table_style, format_hours, or_dash};
use crate::report::{BillableHoursRow, build_billable_hours_report, filter_rows, parse_date};
use crate::runn::{RunnClient, Transport};

#[derive(Tabled)]
struct RowDisplay {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Project ID")]
    project_id: i64,
    #[tabled(rename = "Project")]
    project: String,
    #[tabled(rename = "Person ID")]
    person_id: i64,
    #[tabled(rename = "Person")]
    person: String,
    #[tabled(rename = "Billable Hours")]
    hours: String,
}

impl From<&BillableHoursRow> for RowDisplay {
    fn from(row: &BillableHoursRow) -> Self {
        Self {
            month: row.month.clone(),
            project_id: row.project_id,
            project: or_dash(row.project_name.as_deref()),
            person_id: row.person_id,
            person: or_dash(row.person_name.as_deref()),
            hours: format_hours(row.billable_hours),
        }
    }
}

/// Build the billable hours report and render it as a table or JSON
pub async fn billable_hours<T: Transport>(
    client: &RunnClient<T>,
    start: Option<&str>,
    end: Option<&str>,
    project_id: Option<i64>,
    person_id: Option<i64>,
    format: &str,
) -> CliResult<String> {
    let start = parse_date(start)?;
    let end = parse_date(end)?;
    let rows = filter_rows(
        build_billable_hours_report(client, start, end).await?,
        project_id,
        person_id,
    );

    match format {
        "json" => Ok(serde_json::to_string_pretty(&rows)?),
        _ => Ok(format_table(&rows)),
    }
}

fn format_table(rows: &[BillableHoursRow]) -> String {
    if rows.is_empty() {
        return "No billable hours found.".to_string();
    }

    let total: f64 = rows.iter().map(|r| r.billable_hours).sum();
    let display_rows: Vec<RowDisplay> = rows.iter().map(|r| r.into()).collect();
    let mut table = Table::new(display_rows);
    apply_table_style(&mut table);
    format!("{}\nTotal billable hours: {}", table, format_hours(total))
}
