use axum::http::{header::ORIGIN, HeaderMap};

use crate::server::error::{auth::AuthError, Error};

/// Validate that the request `Origin`, when present, is the trusted origin.
///
/// Requests without the header come from non-browser clients and are let through.
pub fn validate_origin(headers: &HeaderMap, trusted_origin: &str) -> Result<(), Error> {
    let Some(origin) = headers.get(ORIGIN) else {
        return Ok(());
    };

    let origin = origin.to_str().unwrap_or_default();
    if origin.trim_end_matches('/') == trusted_origin.trim_end_matches('/') {
        return Ok(());
    }

    Err(Error::AuthError(AuthError::UntrustedOrigin(origin.to_string())))
}
