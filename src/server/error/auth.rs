use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Request requires an authenticated session")]
    Unauthorized,
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("A user with email {0:?} already exists")]
    EmailAlreadyRegistered(String),
    #[error("Invalid email address: {0:?}")]
    InvalidEmail(String),
    #[error("Name must not be empty")]
    EmptyName,
    #[error("Password must be at least {min} characters and at most {max_bytes} bytes")]
    InvalidPasswordLength { min: usize, max_bytes: usize },
    #[error("Request origin {0:?} is not trusted")]
    UntrustedOrigin(String),
}

impl AuthError {
    fn response(status: StatusCode, message: impl Into<String>) -> Response {
        (
            status,
            Json(ErrorDto {
                error: message.into(),
            }),
        )
            .into_response()
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::Unauthorized => Self::response(StatusCode::UNAUTHORIZED, "Unauthorized"),
            Self::InvalidCredentials => {
                Self::response(StatusCode::UNAUTHORIZED, "Invalid email or password")
            }
            Self::EmailAlreadyRegistered(_) => {
                Self::response(StatusCode::UNPROCESSABLE_ENTITY, "User already exists")
            }
            Self::InvalidEmail(_) | Self::EmptyName | Self::InvalidPasswordLength { .. } => {
                Self::response(StatusCode::BAD_REQUEST, self.to_string())
            }
            Self::UntrustedOrigin(_) => Self::response(StatusCode::FORBIDDEN, "Invalid origin"),
        }
    }
}
