//! Session data models.
//!
//! Type-safe wrappers for the values stored in a tower-sessions session.

pub mod user;
