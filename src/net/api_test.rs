use super::*;

// =============================================================
// ApiError display
// =============================================================

#[test]
fn encode_error_is_not_reported_as_transport() {
    let err = ApiError::Encode("key must be a string".to_owned());
    assert_eq!(
        err.to_string(),
        "failed to encode request body: key must be a string"
    );
}

#[test]
fn transport_error_mentions_cause() {
    let err = ApiError::Transport("connection reset".to_owned());
    assert_eq!(err.to_string(), "request failed: connection reset");
}

#[test]
fn status_error_carries_code() {
    let err = ApiError::Status(502);
    assert_eq!(err.to_string(), "gateway returned status 502");
}

#[test]
fn decode_error_mentions_cause() {
    let err = ApiError::Decode("missing field `incidents`".to_owned());
    assert!(err.to_string().starts_with("malformed response:"));
}

// =============================================================
// Endpoint paths
// =============================================================

#[test]
fn base_url_has_no_trailing_slash() {
    assert!(!API_BASE.ends_with('/'));
    assert!(API_BASE.starts_with("https://"));
}
