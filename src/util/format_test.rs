use super::*;

#[test]
fn format_amount_uses_two_decimals() {
    assert_eq!(format_amount(1500.0), "₹1500.00");
    assert_eq!(format_amount(20.456), "₹20.46");
}

#[test]
fn format_amount_puts_sign_before_symbol() {
    assert_eq!(format_amount(-20.5), "-₹20.50");
}

#[test]
fn compact_timestamp_drops_fraction_and_t_separator() {
    assert_eq!(compact_timestamp("2024-05-01T10:20:30.123456"), "2024-05-01 10:20:30");
    assert_eq!(compact_timestamp("2024-05-01T10:20:30"), "2024-05-01 10:20:30");
}

#[test]
fn compact_timestamp_passes_through_unexpected_input() {
    assert_eq!(compact_timestamp("yesterday"), "yesterday");
}

#[test]
fn format_time_outside_browser_is_compact() {
    assert_eq!(format_time("2024-05-01T10:20:30.5"), "2024-05-01 10:20:30");
}
