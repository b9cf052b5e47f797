//! Error types for the homepage server.
//!
//! Domain errors (authentication, configuration) and library errors are aggregated into a
//! single [`Error`] that converts into an HTTP response. Expected failures map to client
//! errors; anything else is logged and answered with a generic 500.

pub mod auth;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError},
};

/// Main error type for the homepage server.
///
/// Uses `thiserror`'s `#[from]` so the underlying errors convert with `?`. The
/// `IntoResponse` implementation maps each error to the response sent to the caller.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (unauthorized access, bad credentials, untrusted origin).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug or an unexpected runtime condition.
    #[error("Internal error: {0}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Password hashing or verification failure.
    #[error(transparent)]
    PasswordHashError(#[from] bcrypt::BcryptError),
    /// A blocking task panicked or was cancelled.
    #[error(transparent)]
    JoinError(#[from] tokio::task::JoinError),
    /// I/O error while binding or serving the HTTP listener.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400/401/403/422 - Authentication failures, see [`AuthError`]
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message so that
/// implementation details never reach the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
