use super::*;

#[test]
fn extract_detail_reads_plain_string() {
    assert_eq!(
        extract_detail(r#"{"detail":"Invalid credentials"}"#),
        Some("Invalid credentials".to_owned())
    );
}

#[test]
fn extract_detail_reads_first_validation_message() {
    let body = r#"{"detail":[{"loc":["body","amount"],"msg":"field required"},{"msg":"second"}]}"#;
    assert_eq!(extract_detail(body), Some("field required".to_owned()));
}

#[test]
fn extract_detail_is_none_for_non_json_or_missing_field() {
    assert_eq!(extract_detail("<html>502 Bad Gateway</html>"), None);
    assert_eq!(extract_detail(r#"{"message":"nope"}"#), None);
    assert_eq!(extract_detail(r#"{"detail":[]}"#), None);
    assert_eq!(extract_detail(r#"{"detail":""}"#), None);
}

#[test]
fn user_message_prefers_backend_detail() {
    let err = ApiError::from_status(400, r#"{"detail":"Invalid PAN format"}"#);
    assert_eq!(err.user_message("KYC submission failed"), "Invalid PAN format");
}

#[test]
fn user_message_falls_back_without_detail() {
    assert_eq!(
        ApiError::from_status(500, "").user_message("Transfer failed"),
        "Transfer failed"
    );
    assert_eq!(
        ApiError::Network("offline".to_owned()).user_message("Login failed"),
        "Login failed"
    );
    assert_eq!(ApiError::Unavailable.user_message("Signup failed"), "Signup failed");
}

#[test]
fn unauthorized_covers_401_and_403_only() {
    assert!(ApiError::from_status(401, "").is_unauthorized());
    assert!(ApiError::from_status(403, "").is_unauthorized());
    assert!(!ApiError::from_status(404, "").is_unauthorized());
    assert!(!ApiError::Decode("eof".to_owned()).is_unauthorized());
}

#[test]
fn display_includes_status_code() {
    let err = ApiError::Status { status: 502, detail: None };
    assert_eq!(err.to_string(), "server responded 502");
}
