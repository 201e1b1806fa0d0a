//! Tests for actual record extraction.

use chrono::NaiveDate;
use serde_json::json;

use crate::report::ActualEntry;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_reads_simple_fields() {
    let entry = ActualEntry::from_record(&json!({
        "project": 1,
        "person": 10,
        "date": "2024-01-05",
        "hours": 3
    }))
    .unwrap();

    assert_eq!(entry.project_id, 1);
    assert_eq!(entry.person_id, 10);
    assert_eq!(entry.date, date(2024, 1, 5));
    assert_eq!(entry.billable_hours, 3.0);
    assert_eq!(entry.month(), "2024-01");
}

#[test]
fn test_reads_runn_camel_case_with_minutes() {
    let entry = ActualEntry::from_record(&json!({
        "id": 99,
        "projectId": 4,
        "personId": 8,
        "date": "2024-03-15",
        "billableMinutes": 90,
        "nonbillableMinutes": 30
    }))
    .unwrap();

    assert_eq!(entry.project_id, 4);
    assert_eq!(entry.person_id, 8);
    assert_eq!(entry.billable_hours, 1.5);
}

#[test]
fn test_reads_nested_references() {
    let entry = ActualEntry::from_record(&json!({
        "project": {"id": 2, "name": "Apollo"},
        "person": {"id": "12"},
        "date": "2024-02-01T00:00:00Z",
        "billableHours": "2.5"
    }))
    .unwrap();

    assert_eq!(entry.project_id, 2);
    assert_eq!(entry.person_id, 12);
    assert_eq!(entry.date, date(2024, 2, 1));
    assert_eq!(entry.billable_hours, 2.5);
}

#[test]
fn test_non_numeric_hours_count_as_zero() {
    let entry = ActualEntry::from_record(
        &json!({"project": 1, "person": 1, "date": "2024-01-01", "hours": "lots"}),
    )
    .unwrap();
    assert_eq!(entry.billable_hours, 0.0);

    let entry =
        ActualEntry::from_record(&json!({"project": 1, "person": 1, "date": "2024-01-01"}))
            .unwrap();
    assert_eq!(entry.billable_hours, 0.0);
}

#[test]
fn test_null_hours_fall_back_to_minutes() {
    let entry = ActualEntry::from_record(&json!({
        "project": 1,
        "person": 1,
        "date": "2024-01-01",
        "billableHours": null,
        "billableMinutes": 120
    }))
    .unwrap();
    assert_eq!(entry.billable_hours, 2.0);

    let entry = ActualEntry::from_record(&json!({
        "project": 1,
        "person": 1,
        "date": "2024-01-01",
        "billableHours": null,
        "hours": 1.5
    }))
    .unwrap();
    assert_eq!(entry.billable_hours, 1.5);
}

#[test]
fn test_missing_reference_or_date_is_skipped() {
    assert!(
        ActualEntry::from_record(&json!({"person": 1, "date": "2024-01-01", "hours": 1})).is_none()
    );
    assert!(
        ActualEntry::from_record(&json!({"project": 1, "date": "2024-01-01", "hours": 1})).is_none()
    );
    assert!(ActualEntry::from_record(&json!({"project": 1, "person": 1, "hours": 1})).is_none());
    assert!(
        ActualEntry::from_record(&json!({"project": 1, "person": 1, "date": "01/02/2024"}))
            .is_none()
    );
}
