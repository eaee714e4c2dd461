//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `error` classifies failures into what pages
//! display, and `types` defines the request/response schema.

pub mod api;
pub mod error;
pub mod types;
