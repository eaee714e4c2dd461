//! Client-side application state.
//!
//! DESIGN
//! ======
//! The session is the only state shared across routes. Page data (dashboard,
//! history, admin search results) is owned by the page that fetched it.

pub mod session;
