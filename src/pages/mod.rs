//! Routed page components.
//!
//! Customer onboarding flows `home`/`signup` -> `kyc` -> `create_account` ->
//! `dashboard`; the admin console lives in `admin_login` and `admin_dashboard`.

pub mod admin_dashboard;
pub mod admin_login;
pub mod create_account;
pub mod dashboard;
pub mod home;
pub mod kyc;
pub mod login;
pub mod signup;
pub mod transaction;
