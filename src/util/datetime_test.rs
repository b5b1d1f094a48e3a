use super::*;

#[test]
fn empty_timestamp_stays_empty() {
    assert_eq!(format_timestamp(""), "");
}

#[test]
fn native_formatting_passes_through() {
    // Locale formatting needs a browser; off-wasm the raw ISO string
    // is shown as-is.
    assert_eq!(
        format_timestamp("2024-03-01T10:00:00.000Z"),
        "2024-03-01T10:00:00.000Z"
    );
}
