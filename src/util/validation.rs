//! Form input validation shared by the auth, KYC, and transfer pages.
//!
//! Each validator trims text fields and returns either the request body to
//! send or the inline message to show. Passwords are never trimmed.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use crate::net::types::{AdminSignupRequest, Credentials, KycRequest, SignupRequest, TransferRequest};

pub const ALL_FIELDS_REQUIRED: &str = "All fields are required";
pub const FILL_REQUIRED_FIELDS: &str = "Please fill all required fields";
pub const INVALID_AMOUNT: &str = "Enter a valid amount";
pub const INVALID_LIMIT: &str = "Enter a valid limit";
pub const SEARCH_QUERY_REQUIRED: &str = "Enter account number or user name";

/// Tabs of the landing page form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    Signup,
    #[default]
    Login,
    Admin,
}

impl AuthMode {
    pub const ALL: [Self; 3] = [Self::Signup, Self::Login, Self::Admin];

    pub fn tab_label(self) -> &'static str {
        match self {
            Self::Signup => "SIGNUP",
            Self::Login => "LOGIN",
            Self::Admin => "ADMIN",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            Self::Signup => "Create Account",
            Self::Login => "Login",
            Self::Admin => "Admin Access",
        }
    }

    pub fn requires_name(self) -> bool {
        !matches!(self, Self::Login)
    }
}

/// What the landing page should send for the chosen mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HomeSubmission {
    /// Sign up, then log in with the same credentials.
    Signup(SignupRequest),
    Login(Credentials),
    AdminSignup(AdminSignupRequest),
    AdminLogin(Credentials),
}

/// Validate the landing page form.
///
/// Email and password are always required; name is required for signup and
/// admin. In admin mode a non-empty bank secret selects admin signup.
///
/// # Errors
///
/// Returns [`FILL_REQUIRED_FIELDS`] when a required field is blank.
pub fn validate_home(
    mode: AuthMode,
    name: &str,
    email: &str,
    password: &str,
    bank_secret: &str,
) -> Result<HomeSubmission, &'static str> {
    let name = name.trim();
    let email = email.trim();
    if email.is_empty() || password.is_empty() || (mode.requires_name() && name.is_empty()) {
        return Err(FILL_REQUIRED_FIELDS);
    }
    let credentials = Credentials { email: email.to_owned(), password: password.to_owned() };
    Ok(match mode {
        AuthMode::Signup => HomeSubmission::Signup(SignupRequest {
            name: name.to_owned(),
            email: credentials.email,
            password: credentials.password,
        }),
        AuthMode::Login => HomeSubmission::Login(credentials),
        AuthMode::Admin if bank_secret.is_empty() => HomeSubmission::AdminLogin(credentials),
        AuthMode::Admin => HomeSubmission::AdminSignup(AdminSignupRequest {
            name: name.to_owned(),
            email: credentials.email,
            password: credentials.password,
            bank_secret: bank_secret.to_owned(),
        }),
    })
}

/// Validate the login form.
///
/// # Errors
///
/// Returns [`ALL_FIELDS_REQUIRED`] when either field is blank.
pub fn validate_login(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(ALL_FIELDS_REQUIRED);
    }
    Ok(Credentials { email: email.to_owned(), password: password.to_owned() })
}

/// Validate the signup form.
///
/// # Errors
///
/// Returns [`ALL_FIELDS_REQUIRED`] when any field is blank.
pub fn validate_signup(name: &str, email: &str, password: &str) -> Result<SignupRequest, &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err(ALL_FIELDS_REQUIRED);
    }
    Ok(SignupRequest { name: name.to_owned(), email: email.to_owned(), password: password.to_owned() })
}

/// Validate the KYC form. PAN format itself is checked by the backend.
///
/// # Errors
///
/// Returns [`ALL_FIELDS_REQUIRED`] when any field is blank.
pub fn validate_kyc(pan: &str, address: &str, phone: &str) -> Result<KycRequest, &'static str> {
    let pan = normalize_pan_input(pan);
    let address = address.trim();
    let phone = phone.trim();
    if pan.is_empty() || address.is_empty() || phone.is_empty() {
        return Err(ALL_FIELDS_REQUIRED);
    }
    Ok(KycRequest { pan_number: pan, address: address.to_owned(), phone: phone.to_owned() })
}

/// PAN numbers are upper-case alphanumerics; normalize as the user types.
pub fn normalize_pan_input(raw: &str) -> String {
    raw.trim().to_ascii_uppercase()
}

/// Validate the transfer form.
///
/// # Errors
///
/// Returns [`ALL_FIELDS_REQUIRED`] for blank fields and [`INVALID_AMOUNT`]
/// when the amount is not a positive number.
pub fn validate_transfer(to_account: &str, amount: &str) -> Result<TransferRequest, &'static str> {
    let to_account = to_account.trim();
    let amount = amount.trim();
    if to_account.is_empty() || amount.is_empty() {
        return Err(ALL_FIELDS_REQUIRED);
    }
    let amount = parse_positive(amount).ok_or(INVALID_AMOUNT)?;
    Ok(TransferRequest { to_account_number: to_account.to_owned(), amount })
}

/// Validate a new daily limit typed by an admin. Zero is allowed (freeze).
///
/// # Errors
///
/// Returns [`INVALID_LIMIT`] when the value is blank, negative, or not a number.
pub fn validate_limit(raw: &str) -> Result<f64, &'static str> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
        .ok_or(INVALID_LIMIT)
}

/// Validate an admin search query.
///
/// # Errors
///
/// Returns [`SEARCH_QUERY_REQUIRED`] when the query is blank.
pub fn validate_search_query(raw: &str) -> Result<String, &'static str> {
    let query = raw.trim();
    if query.is_empty() {
        return Err(SEARCH_QUERY_REQUIRED);
    }
    Ok(query.to_owned())
}

fn parse_positive(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|v| v.is_finite() && *v > 0.0)
}
