//! Route-guard decisions for onboarding and admin gating.
//!
//! SYSTEM CONTEXT
//! ==============
//! A signed-in customer must finish KYC, then open an account, before any
//! other protected page renders. The decision functions here are pure; the
//! `ProtectedRoute` and `AdminRoute` components feed them and perform the
//! resulting navigation.
//!
//! The loop guard compares against the *current* path only: a visitor
//! already on the step they are being steered toward is rendered, never
//! redirected to the same page again.

#[cfg(test)]
#[path = "access_test.rs"]
mod access_test;

use crate::state::session::Session;
use crate::util::jwt::ADMIN_ROLE;

pub const ENTRY_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const SIGNUP_PATH: &str = "/signup";
pub const KYC_PATH: &str = "/kyc";
pub const CREATE_ACCOUNT_PATH: &str = "/create-account";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const ADMIN_PATH: &str = "/admin";
pub const ADMIN_LOGIN_PATH: &str = "/admin/login";

/// Onboarding progress as reported by the backend for one navigation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OnboardingStatus {
    pub kyc_completed: bool,
    pub has_account: bool,
}

impl OnboardingStatus {
    /// Page of the first unfinished onboarding step, if any.
    pub fn pending_step(self) -> Option<&'static str> {
        if !self.kyc_completed {
            Some(KYC_PATH)
        } else if !self.has_account {
            Some(CREATE_ACCOUNT_PATH)
        } else {
            None
        }
    }
}

/// Progress of the single status fetch a protected route performs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusCheck {
    #[default]
    Pending,
    /// Any failure: network, 401, 500, or an undecodable body.
    Failed,
    Loaded(OnboardingStatus),
}

/// What a guarded route should do right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessDecision {
    Loading,
    Redirect(&'static str),
    Render,
}

/// Decide a customer route from the current path and the status fetch.
pub fn decide_access(path: &str, check: StatusCheck) -> AccessDecision {
    match check {
        StatusCheck::Pending => AccessDecision::Loading,
        StatusCheck::Failed => AccessDecision::Redirect(ENTRY_PATH),
        StatusCheck::Loaded(status) => match status.pending_step() {
            Some(step) if path != step => AccessDecision::Redirect(step),
            _ => AccessDecision::Render,
        },
    }
}

/// Decide the admin console route from the session alone.
///
/// A UX convenience: admin endpoints authorize every call themselves.
pub fn decide_admin(session: &Session) -> AccessDecision {
    if !session.is_authenticated() {
        return AccessDecision::Redirect(ENTRY_PATH);
    }
    match session.role().as_deref() {
        Some(ADMIN_ROLE) => AccessDecision::Render,
        _ => AccessDecision::Redirect(DASHBOARD_PATH),
    }
}
