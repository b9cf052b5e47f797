//! Service layer for business logic.
//!
//! Services coordinate repositories and hold the rules that do not belong in a single
//! query, such as credential validation and session resolution.

pub mod auth;
