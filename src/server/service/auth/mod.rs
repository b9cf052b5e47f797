//! Authentication service layer.
//!
//! Email and password accounts and the session lookup used to build request contexts.
//! Sign up and sign in only validate credentials and return the user; binding the user to
//! the cookie session is left to the controller.

pub mod credential;
pub mod session;


use sea_orm::DatabaseConnection;

/// Service for credential accounts and session resolution.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}
