//! Auth session for the current browser tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` constructs exactly one `Session` at start-up and provides it as a
//! `RwSignal<Session>` context. Guards and pages only read it; the login and
//! logout mutators are the only writers. The token is mirrored to
//! `localStorage` so a reload keeps the tab signed in.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::util::{jwt, storage};

pub const TOKEN_STORAGE_KEY: &str = "smartbank_token";

/// The bearer token issued at login, if any.
///
/// An empty string is never stored: it is treated exactly like "no token".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    /// Session seeded from a token without touching storage.
    pub fn from_token(token: Option<String>) -> Self {
        Self { token: token.filter(|t| !t.trim().is_empty()) }
    }

    /// Session persisted by a previous page load in this browser.
    pub fn restore() -> Self {
        Self::from_token(storage::load_string(TOKEN_STORAGE_KEY))
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Role claim of the token payload. Advisory only; never verified here.
    pub fn role(&self) -> Option<String> {
        self.token.as_deref().and_then(jwt::role_from_token)
    }

    /// Replace the session with a freshly issued token.
    pub fn login(&mut self, token: impl Into<String>) {
        let token = token.into();
        if token.trim().is_empty() {
            self.logout();
            return;
        }
        storage::save_string(TOKEN_STORAGE_KEY, &token);
        self.token = Some(token);
    }

    /// Drop the token from memory and storage.
    pub fn logout(&mut self) {
        self.token = None;
        storage::remove(TOKEN_STORAGE_KEY);
    }
}
