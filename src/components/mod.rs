//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards read the session and onboarding status from Leptos context;
//! the remaining components are presentational and take their data as props.

pub mod account_card;
pub mod admin_route;
pub mod history_list;
pub mod notice;
pub mod protected_route;
pub mod summary_card;
