//! Database access layer.
//!
//! Repositories wrap sea-orm queries for a single table. They are generic over
//! [`sea_orm::ConnectionTrait`] so that services can run them inside a transaction.

pub mod account;
pub mod session;
pub mod user;
