//! Test fixtures for inserting records during test execution.
//!
//! - `user` - users and their credential accounts

pub mod user;
