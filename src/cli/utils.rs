//! Shared utilities for CLI commands

use tabled::{Table, settings::Style};

/// Format an hour total with two decimals
pub fn format_hours(hours: f64) -> String {
    format!("{:.2}", hours)
}

/// Display an optional value, or "-" when absent
pub fn or_dash(value: Option<&str>) -> String {
    value
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| "-".to_string())
}

/// Apply consistent table styling
pub fn apply_table_style(table: &mut Table) {
    table.with(Style::rounded());
}
