use super::*;

// =============================================================
// Dashboard / onboarding
// =============================================================

#[test]
fn dashboard_without_account_reports_missing_account() {
    let data: DashboardData = serde_json::from_value(serde_json::json!({
        "name": "Asha",
        "email": "asha@example.com",
        "kyc_completed": true,
        "account": null
    }))
    .unwrap();
    assert_eq!(
        data.onboarding(),
        OnboardingStatus { kyc_completed: true, has_account: false }
    );
}

#[test]
fn dashboard_missing_kyc_flag_defaults_to_incomplete() {
    let data: DashboardData = serde_json::from_value(serde_json::json!({})).unwrap();
    assert!(!data.onboarding().kyc_completed);
    assert!(!data.onboarding().has_account);
}

#[test]
fn dashboard_with_account_parses_numbers() {
    let data: DashboardData = serde_json::from_value(serde_json::json!({
        "name": "Asha",
        "email": "asha@example.com",
        "kyc_completed": true,
        "account": {
            "account_number": "1234567890",
            "account_type": "savings",
            "balance": 1500,
            "daily_limit": 50000.5,
            "is_active": true
        }
    }))
    .unwrap();
    let account = data.account.clone().unwrap();
    assert_eq!(account.balance, 1500.0);
    assert_eq!(account.daily_limit, 50000.5);
    assert!(data.onboarding().has_account);
}

#[test]
fn dashboard_with_malformed_account_fails_to_decode() {
    let parsed = serde_json::from_value::<DashboardData>(serde_json::json!({
        "kyc_completed": true,
        "account": { "account_number": 42 }
    }));
    assert!(parsed.is_err());
}

// =============================================================
// Requests
// =============================================================

#[test]
fn create_account_request_serializes_lowercase_type() {
    let body = serde_json::to_value(CreateAccountRequest { account_type: AccountType::Fd }).unwrap();
    assert_eq!(body, serde_json::json!({ "account_type": "fd" }));
}

#[test]
fn admin_signup_request_carries_bank_secret() {
    let body = serde_json::to_value(AdminSignupRequest {
        name: "Admin".to_owned(),
        email: "ops@bank.test".to_owned(),
        password: "pw".to_owned(),
        bank_secret: "s3cret".to_owned(),
    })
    .unwrap();
    assert_eq!(body["bank_secret"], "s3cret");
    assert_eq!(body["name"], "Admin");
}

#[test]
fn account_type_parse_accepts_known_values_only() {
    assert_eq!(AccountType::parse("current"), Some(AccountType::Current));
    assert_eq!(AccountType::parse("fd"), Some(AccountType::Fd));
    assert_eq!(AccountType::parse("checking"), None);
    assert_eq!(AccountType::default(), AccountType::Savings);
}

// =============================================================
// History and admin payloads
// =============================================================

#[test]
fn history_entry_reads_backend_shape() {
    let entry: HistoryEntry = serde_json::from_value(serde_json::json!({
        "name": "Ravi",
        "account_number": "999",
        "amount": 250.0,
        "type": "debit",
        "time": "2024-05-01T10:20:30"
    }))
    .unwrap();
    assert_eq!(entry.kind, TransactionKind::Debit);
    assert_eq!(entry.account_number, "999");
    assert_eq!(entry.kind.label(), "DEBIT");
}

#[test]
fn history_entry_accepts_receiver_aliases() {
    let entry: HistoryEntry = serde_json::from_value(serde_json::json!({
        "receiver_name": "Ravi",
        "receiver_account_number": "999",
        "amount": 10,
        "type": "credit",
        "time": "2024-05-01T10:20:30"
    }))
    .unwrap();
    assert_eq!(entry.name.as_deref(), Some("Ravi"));
    assert_eq!(entry.account_number, "999");
    assert_eq!(entry.kind, TransactionKind::Credit);
}

#[test]
fn search_response_normalizes_single_object() {
    let hit = serde_json::json!({
        "name": "Asha",
        "email": "asha@example.com",
        "account_number": "111",
        "account_type": "savings",
        "balance": 10.0,
        "daily_limit": 100.0,
        "is_active": true
    });
    let one: SearchResponse = serde_json::from_value(hit.clone()).unwrap();
    assert_eq!(one.into_vec().len(), 1);

    let many: SearchResponse = serde_json::from_value(serde_json::json!([hit.clone(), hit])).unwrap();
    assert_eq!(many.into_vec().len(), 2);
}

#[test]
fn admin_user_detail_defaults_optional_fields() {
    let detail: AdminUserDetail = serde_json::from_value(serde_json::json!({
        "name": "Asha",
        "email": "asha@example.com",
        "account": {
            "account_number": "111",
            "account_type": "current",
            "balance": 0,
            "daily_limit": 100,
            "is_active": false
        }
    }))
    .unwrap();
    assert_eq!(detail.phone, None);
    assert!(detail.transactions.is_empty());
    assert!(!detail.account.is_active);
}
