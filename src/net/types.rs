//! Request/response DTOs for the banking REST API.
//!
//! DESIGN
//! ======
//! Field names mirror the backend JSON exactly so serde needs no renaming
//! beyond the `type` keyword. Monetary values are `f64` because the backend
//! serializes them as JSON numbers.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::util::access::OnboardingStatus;

// =============================================================
// Auth
// =============================================================

/// Email + password body for user and admin login.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Body for `POST /auth/signup`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Body for `POST /admin/signup`; `bank_secret` authorizes admin creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AdminSignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub bank_secret: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

/// Generic `{ "message": ... }` acknowledgement.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

// =============================================================
// Accounts and onboarding
// =============================================================

/// Product type offered at account creation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    #[default]
    Savings,
    Current,
    Fd,
}

impl AccountType {
    pub const ALL: [Self; 3] = [Self::Savings, Self::Current, Self::Fd];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Savings => "savings",
            Self::Current => "current",
            Self::Fd => "fd",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Savings => "Savings Account",
            Self::Current => "Current Account",
            Self::Fd => "Fixed Deposit (FD)",
        }
    }

    /// Parse a `<select>` value; unknown values yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == raw)
    }
}

/// A bank account as returned by account creation and the dashboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub account_number: String,
    pub account_type: String,
    pub balance: f64,
    pub daily_limit: f64,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// Payload of `GET /user/dashboard`; also the onboarding probe for guards.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DashboardData {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub kyc_completed: bool,
    #[serde(default)]
    pub account: Option<Account>,
}

impl DashboardData {
    /// Onboarding progress derived from this payload.
    pub fn onboarding(&self) -> OnboardingStatus {
        OnboardingStatus {
            kyc_completed: self.kyc_completed,
            has_account: self.account.is_some(),
        }
    }
}

/// Body for `POST /user/kyc`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct KycRequest {
    pub pan_number: String,
    pub address: String,
    pub phone: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CreateAccountRequest {
    pub account_type: AccountType,
}

// =============================================================
// Transactions
// =============================================================

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TransferRequest {
    pub to_account_number: String,
    pub amount: f64,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TransferResponse {
    pub message: String,
    #[serde(default)]
    pub transaction_id: Option<String>,
}

/// Direction of money movement relative to the viewing account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Credit,
    Debit,
}

impl TransactionKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Credit => "CREDIT",
            Self::Debit => "DEBIT",
        }
    }
}

/// One row of `GET /transaction/history` for the signed-in user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Counterparty name (`"Self"` for credits).
    #[serde(default, alias = "receiver_name")]
    pub name: Option<String>,
    #[serde(alias = "receiver_account_number")]
    pub account_number: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// ISO-8601 timestamp as emitted by the backend.
    pub time: String,
}

// =============================================================
// Admin console
// =============================================================

/// Search hit from `GET /admin/search`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccountSummary {
    pub name: String,
    pub email: String,
    pub account_number: String,
    pub account_type: String,
    pub balance: f64,
    pub daily_limit: f64,
    pub is_active: bool,
}

/// The search endpoint returns a bare object for an exact account-number
/// match and an array for name matches.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SearchResponse {
    Many(Vec<AccountSummary>),
    One(AccountSummary),
}

impl SearchResponse {
    pub fn into_vec(self) -> Vec<AccountSummary> {
        match self {
            Self::Many(items) => items,
            Self::One(item) => vec![item],
        }
    }
}

/// Raw ledger row between two accounts, as shown to admins.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub from_account: String,
    pub to_account: String,
    pub amount: f64,
    pub time: String,
}

/// Payload of `GET /admin/user/{account_number}`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AdminUserDetail {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub pan_number: Option<String>,
    pub account: Account,
    #[serde(default)]
    pub transactions: Vec<LedgerEntry>,
}

/// Body for `PATCH /admin/account/limit`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UpdateLimitRequest {
    pub account_number: String,
    pub new_limit: f64,
}
