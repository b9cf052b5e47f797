//! Per-request context construction.
//!
//! [`create_context`] resolves the caller's session through [`AuthService`] and merges it
//! with the shared [`Api`] bundle. The axum extractors below run it once per request and keep
//! the resolved [`Identity`] in the request extensions, so every context extracted from the same
//! request is identical. A lookup failure rejects the request before the handler runs.

use axum::{extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;

use crate::server::{
    api::Api,
    error::Error,
    model::{
        app::AppState,
        context::{AuthenticatedContext, Identity, RequestContext},
    },
    service::auth::AuthService,
};

/// Builds the context for one request.
///
/// No retries: a session store or database failure is returned as is.
///
/// # Arguments
/// - `api` - The process-wide API bundle
/// - `session` - The caller's cookie session
///
/// # Returns
/// - `Ok(RequestContext)` - Context with an anonymous or authenticated identity
/// - `Err(Error)` - Session resolution failed
pub async fn create_context(api: &Api, session: &Session) -> Result<RequestContext, Error> {
    let auth_session = AuthService::new(&api.db).get_session(session).await?;

    Ok(RequestContext::new(api, Identity::from(auth_session)))
}

async fn session_from_parts(parts: &mut Parts, state: &AppState) -> Result<Session, Error> {
    Session::from_request_parts(parts, state)
        .await
        .map_err(|(_, message)| Error::InternalError(message.to_string()))
}

impl FromRequestParts<AppState> for RequestContext {
    type Rejection = Error;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(identity) = parts.extensions.get::<Identity>() {
            return Ok(RequestContext::new(&state.api, identity.clone()));
        }

        let session = session_from_parts(parts, state).await?;
        let context = create_context(&state.api, &session).await?;

        parts.extensions.insert(context.identity.clone());

        Ok(context)
    }
}

impl FromRequestParts<AppState> for AuthenticatedContext {
    type Rejection = Error;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let context = RequestContext::from_request_parts(parts, state).await?;

        Ok(context.require_session()?)
    }
}
