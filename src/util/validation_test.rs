use super::*;

// =============================================================
// Landing page
// =============================================================

#[test]
fn home_login_does_not_require_name() {
    assert_eq!(
        validate_home(AuthMode::Login, "", " a@b.com ", "pw", ""),
        Ok(HomeSubmission::Login(Credentials { email: "a@b.com".to_owned(), password: "pw".to_owned() }))
    );
}

#[test]
fn home_signup_requires_name() {
    assert_eq!(
        validate_home(AuthMode::Signup, "  ", "a@b.com", "pw", ""),
        Err(FILL_REQUIRED_FIELDS)
    );
    assert!(matches!(
        validate_home(AuthMode::Signup, "Asha", "a@b.com", "pw", ""),
        Ok(HomeSubmission::Signup(_))
    ));
}

#[test]
fn home_requires_email_and_password_in_every_mode() {
    for mode in AuthMode::ALL {
        assert_eq!(validate_home(mode, "Asha", "", "pw", ""), Err(FILL_REQUIRED_FIELDS));
        assert_eq!(validate_home(mode, "Asha", "a@b.com", "", ""), Err(FILL_REQUIRED_FIELDS));
    }
}

#[test]
fn home_admin_without_secret_logs_in() {
    assert!(matches!(
        validate_home(AuthMode::Admin, "Ops", "ops@bank.test", "pw", ""),
        Ok(HomeSubmission::AdminLogin(_))
    ));
}

#[test]
fn home_admin_with_secret_signs_up() {
    let Ok(HomeSubmission::AdminSignup(req)) = validate_home(AuthMode::Admin, "Ops", "ops@bank.test", "pw", "s3") else {
        panic!("expected admin signup");
    };
    assert_eq!(req.bank_secret, "s3");
    assert_eq!(req.name, "Ops");
}

#[test]
fn auth_mode_labels() {
    assert_eq!(AuthMode::default(), AuthMode::Login);
    assert_eq!(AuthMode::Signup.submit_label(), "Create Account");
    assert_eq!(AuthMode::Admin.tab_label(), "ADMIN");
    assert!(!AuthMode::Login.requires_name());
}

// =============================================================
// Login / signup
// =============================================================

#[test]
fn login_trims_email_but_not_password() {
    assert_eq!(
        validate_login(" a@b.com ", " pw "),
        Ok(Credentials { email: "a@b.com".to_owned(), password: " pw ".to_owned() })
    );
    assert_eq!(validate_login("a@b.com", ""), Err(ALL_FIELDS_REQUIRED));
}

#[test]
fn signup_requires_all_fields() {
    assert_eq!(validate_signup("", "a@b.com", "pw"), Err(ALL_FIELDS_REQUIRED));
    assert_eq!(validate_signup("Asha", "a@b.com", "pw").map(|r| r.name), Ok("Asha".to_owned()));
}

// =============================================================
// KYC
// =============================================================

#[test]
fn kyc_uppercases_pan_and_requires_fields() {
    assert_eq!(
        validate_kyc(" abcde1234f ", " 12 MG Road ", " 9876543210 "),
        Ok(KycRequest {
            pan_number: "ABCDE1234F".to_owned(),
            address: "12 MG Road".to_owned(),
            phone: "9876543210".to_owned(),
        })
    );
    assert_eq!(validate_kyc("ABCDE1234F", "", "98"), Err(ALL_FIELDS_REQUIRED));
}

#[test]
fn normalize_pan_input_uppercases_letters() {
    assert_eq!(normalize_pan_input("abcde1234f"), "ABCDE1234F");
}

// =============================================================
// Transfer / admin inputs
// =============================================================

#[test]
fn transfer_parses_positive_amount() {
    assert_eq!(
        validate_transfer(" 1234567890 ", " 250.50 "),
        Ok(TransferRequest { to_account_number: "1234567890".to_owned(), amount: 250.5 })
    );
}

#[test]
fn transfer_requires_both_fields() {
    assert_eq!(validate_transfer("", "10"), Err(ALL_FIELDS_REQUIRED));
    assert_eq!(validate_transfer("123", "  "), Err(ALL_FIELDS_REQUIRED));
}

#[test]
fn transfer_rejects_non_positive_or_garbage_amount() {
    assert_eq!(validate_transfer("123", "0"), Err(INVALID_AMOUNT));
    assert_eq!(validate_transfer("123", "-5"), Err(INVALID_AMOUNT));
    assert_eq!(validate_transfer("123", "ten"), Err(INVALID_AMOUNT));
    assert_eq!(validate_transfer("123", "NaN"), Err(INVALID_AMOUNT));
    assert_eq!(validate_transfer("123", "inf"), Err(INVALID_AMOUNT));
}

#[test]
fn limit_allows_zero_but_not_negative() {
    assert_eq!(validate_limit("0"), Ok(0.0));
    assert_eq!(validate_limit(" 75000 "), Ok(75000.0));
    assert_eq!(validate_limit("-1"), Err(INVALID_LIMIT));
    assert_eq!(validate_limit(""), Err(INVALID_LIMIT));
}

#[test]
fn search_query_is_trimmed_and_required() {
    assert_eq!(validate_search_query("  asha "), Ok("asha".to_owned()));
    assert_eq!(validate_search_query("   "), Err(SEARCH_QUERY_REQUIRED));
}
