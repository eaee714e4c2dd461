//! REST client for the banking backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, carrying the
//! session token as a bearer credential.
//! Server-side (SSR): every call resolves to [`ApiError::Unavailable`] since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so failed calls degrade to
//! redirects or inline messages without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::ApiError;
use super::types::{
    Account, AccountSummary, AccountType, AdminSignupRequest, AdminUserDetail, CreateAccountRequest, Credentials,
    DashboardData, HistoryEntry, KycRequest, MessageResponse, SearchResponse, SignupRequest, TokenResponse,
    TransferRequest, TransferResponse, UpdateLimitRequest,
};
use crate::config::ClientConfig;
use crate::state::session::Session;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

fn admin_user_endpoint(account_number: &str) -> String {
    format!("/admin/user/{account_number}")
}

fn admin_account_endpoint(account_number: &str) -> String {
    format!("/admin/account/{account_number}")
}

fn to_body<B: Serialize>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Handle for issuing backend calls on behalf of one session snapshot.
///
/// Build a fresh client per action so a login/logout between actions is
/// picked up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: &ClientConfig, session: &Session) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
            token: session.token().map(str::to_owned),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn authorization(&self) -> Option<String> {
        self.token.as_deref().map(bearer_header)
    }

    #[cfg(feature = "hydrate")]
    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<Value>,
    ) -> Result<T, ApiError> {
        use gloo_net::http::Request;

        let url = self.url(path);
        let mut builder = match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Patch => Request::patch(&url),
            Method::Delete => Request::delete(&url),
        };
        if !query.is_empty() {
            builder = builder.query(query.iter().copied());
        }
        if let Some(auth) = self.authorization() {
            builder = builder.header("Authorization", &auth);
        }
        let request = match body {
            Some(body) => builder.json(&body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            log::warn!("{method:?} {path} failed with status {status}");
            return Err(ApiError::from_status(status, &text));
        }
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    #[cfg(not(feature = "hydrate"))]
    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<Value>,
    ) -> Result<T, ApiError> {
        let _ = (method, self.url(path), self.authorization(), query, body);
        Err(ApiError::Unavailable)
    }

    // =============================================================
    // Auth
    // =============================================================

    /// `POST /auth/login`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails or credentials are rejected.
    pub async fn login(&self, credentials: &Credentials) -> Result<TokenResponse, ApiError> {
        self.request(Method::Post, "/auth/login", &[], Some(to_body(credentials)?)).await
    }

    /// `POST /auth/signup`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails or the backend rejects the signup.
    pub async fn signup(&self, request: &SignupRequest) -> Result<TokenResponse, ApiError> {
        self.request(Method::Post, "/auth/signup", &[], Some(to_body(request)?)).await
    }

    /// `POST /admin/login`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails or credentials are rejected.
    pub async fn admin_login(&self, credentials: &Credentials) -> Result<TokenResponse, ApiError> {
        self.request(Method::Post, "/admin/login", &[], Some(to_body(credentials)?)).await
    }

    /// `POST /admin/signup`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails or the bank secret is wrong.
    pub async fn admin_signup(&self, request: &AdminSignupRequest) -> Result<TokenResponse, ApiError> {
        self.request(Method::Post, "/admin/signup", &[], Some(to_body(request)?)).await
    }

    // =============================================================
    // Onboarding and accounts
    // =============================================================

    /// `GET /user/dashboard`. Doubles as the onboarding status probe.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for any transport, status, or decode failure.
    pub async fn dashboard(&self) -> Result<DashboardData, ApiError> {
        self.request(Method::Get, "/user/dashboard", &[], None).await
    }

    /// `POST /user/kyc`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails or the KYC data is rejected.
    pub async fn submit_kyc(&self, request: &KycRequest) -> Result<MessageResponse, ApiError> {
        self.request(Method::Post, "/user/kyc", &[], Some(to_body(request)?)).await
    }

    /// `POST /account/create`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails or the account cannot be opened.
    pub async fn create_account(&self, account_type: AccountType) -> Result<Account, ApiError> {
        let body = to_body(&CreateAccountRequest { account_type })?;
        self.request(Method::Post, "/account/create", &[], Some(body)).await
    }

    // =============================================================
    // Transactions
    // =============================================================

    /// `POST /transaction/transfer`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails or the transfer is refused.
    pub async fn transfer(&self, request: &TransferRequest) -> Result<TransferResponse, ApiError> {
        self.request(Method::Post, "/transaction/transfer", &[], Some(to_body(request)?)).await
    }

    /// `GET /transaction/history`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for any transport, status, or decode failure.
    pub async fn history(&self) -> Result<Vec<HistoryEntry>, ApiError> {
        self.request(Method::Get, "/transaction/history", &[], None).await
    }

    // =============================================================
    // Admin console
    // =============================================================

    /// `GET /admin/search?query=...` by account number or (partial) name.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`]; the backend answers 404 when nothing matches.
    pub async fn admin_search(&self, query: &str) -> Result<Vec<AccountSummary>, ApiError> {
        let resp: SearchResponse = self
            .request(Method::Get, "/admin/search", &[("query", query)], None)
            .await?;
        Ok(resp.into_vec())
    }

    /// `GET /admin/user/{account_number}`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for any transport, status, or decode failure.
    pub async fn admin_user(&self, account_number: &str) -> Result<AdminUserDetail, ApiError> {
        self.request(Method::Get, &admin_user_endpoint(account_number), &[], None)
            .await
    }

    /// `PATCH /admin/account/limit`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails or the account is unknown.
    pub async fn update_daily_limit(&self, account_number: &str, new_limit: f64) -> Result<MessageResponse, ApiError> {
        let body = to_body(&UpdateLimitRequest {
            account_number: account_number.to_owned(),
            new_limit,
        })?;
        self.request(Method::Patch, "/admin/account/limit", &[], Some(body)).await
    }

    /// `DELETE /admin/account/{account_number}` (soft deactivation).
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails or the account is unknown.
    pub async fn deactivate_account(&self, account_number: &str) -> Result<MessageResponse, ApiError> {
        self.request(Method::Delete, &admin_account_endpoint(account_number), &[], None)
            .await
    }
}
