//! API failure taxonomy.
//!
//! ERROR HANDLING
//! ==============
//! Guards collapse every variant into "not signed in". Pages instead surface
//! the backend's `detail` text when there is one and fall back to a fixed
//! per-page message otherwise.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

/// Failure of a single REST call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS).
    #[error("request failed: {0}")]
    Network(String),
    /// The backend answered with a non-2xx status.
    #[error("server responded {status}")]
    Status { status: u16, detail: Option<String> },
    /// A 2xx response whose body did not match the expected schema.
    #[error("unexpected response body: {0}")]
    Decode(String),
    /// HTTP is only performed in the browser build.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Build a status error, extracting `detail` from a JSON error body.
    pub fn from_status(status: u16, body: &str) -> Self {
        Self::Status { status, detail: extract_detail(body) }
    }

    /// Inline message for a page: backend detail when present, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status { detail: Some(detail), .. } => detail.clone(),
            _ => fallback.to_owned(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401 | 403, .. })
    }
}

/// Pull the human-readable message out of a backend error body.
///
/// Handles both `{"detail": "text"}` and validation errors shaped like
/// `{"detail": [{"msg": "text", ...}, ...]}` (first entry wins).
pub fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Array(items) => items.first()?.get("msg")?.as_str().map(str::to_owned),
        _ => None,
    }
}
