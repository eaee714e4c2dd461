//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure decision
//! logic from page and component code to improve reuse and testability.

pub mod access;
pub mod auth;
pub mod browser;
pub mod format;
pub mod jwt;
pub mod storage;
pub mod tx_filter;
pub mod validation;
