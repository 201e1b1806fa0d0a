use crate::cli::utils::*;

#[test]
fn test_format_hours_two_decimals() {
    assert_eq!(format_hours(5.0), "5.00");
    assert_eq!(format_hours(1.0 / 3.0), "0.33");
}

#[test]
fn test_or_dash() {
    assert_eq!(or_dash(Some("Apollo")), "Apollo");
    assert_eq!(or_dash(Some("")), "-");
    assert_eq!(or_dash(None), "-");
}
