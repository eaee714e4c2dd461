use super::*;

#[test]
fn role_from_admin_token() {
    assert_eq!(role_from_token("a.eyJyb2xlIjoiYWRtaW4ifQ.b").as_deref(), Some("admin"));
    assert!(is_admin_token("a.eyJyb2xlIjoiYWRtaW4ifQ.b"));
}

#[test]
fn role_accepts_padded_payload() {
    assert_eq!(role_from_token("a.eyJyb2xlIjoiYWRtaW4ifQ==.b").as_deref(), Some("admin"));
}

#[test]
fn role_from_user_token() {
    assert_eq!(role_from_token("h.eyJyb2xlIjoidXNlciJ9.s").as_deref(), Some("user"));
    assert!(!is_admin_token("h.eyJyb2xlIjoidXNlciJ9.s"));
}

#[test]
fn role_accepts_url_safe_alphabet() {
    // {"role":"admin","sub":"u0","n":"~~?>"} encodes with '-' characters.
    let token = "h.eyJyb2xlIjoiYWRtaW4iLCJzdWIiOiJ1MCIsIm4iOiJ-fj8-In0.s";
    assert_eq!(role_from_token(token).as_deref(), Some("admin"));
}

#[test]
fn role_missing_claim_is_none() {
    assert_eq!(role_from_token("h.eyJzdWIiOiI0MiJ9.s"), None);
}

#[test]
fn role_non_string_claim_is_none() {
    assert_eq!(role_from_token("h.eyJyb2xlIjo3fQ.s"), None);
}

#[test]
fn role_non_json_payload_is_none() {
    assert_eq!(role_from_token("h.bm90LWpzb24.s"), None);
}

#[test]
fn role_non_object_payload_is_none() {
    assert_eq!(role_from_token("h.WzEsMl0.s"), None);
    assert_eq!(decode_claims("h.WzEsMl0.s"), None);
}

#[test]
fn role_invalid_base64_is_none() {
    assert_eq!(role_from_token("h.%%%not-base64%%%.s"), None);
}

#[test]
fn role_wrong_segment_count_is_none() {
    assert_eq!(role_from_token(""), None);
    assert_eq!(role_from_token("opaque"), None);
    assert_eq!(role_from_token("h.eyJyb2xlIjoiYWRtaW4ifQ"), None);
    assert_eq!(role_from_token("h.eyJyb2xlIjoiYWRtaW4ifQ.s.extra"), None);
}

#[test]
fn role_empty_middle_segment_is_none() {
    assert_eq!(role_from_token("h..s"), None);
}

#[test]
fn decode_claims_returns_all_fields() {
    let claims = decode_claims("h.eyJyb2xlIjoiYWRtaW4iLCJzdWIiOiJ1MCIsIm4iOiJ-fj8-In0.s").unwrap();
    assert_eq!(claims.get("sub").and_then(Value::as_str), Some("u0"));
    assert_eq!(claims.len(), 3);
}
