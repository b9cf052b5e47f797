//! Per-request context handed to RPC handlers.
//!
//! A [`RequestContext`] is built once per request from the process-wide [`Api`] bundle and
//! the caller's resolved session. The caller's identity is either anonymous or
//! authenticated; private procedures take an [`AuthenticatedContext`], which can only be
//! obtained through [`RequestContext::require_session`].

use sea_orm::DatabaseConnection;

use crate::{
    model::auth::AuthSession,
    server::{
        api::{Api, Services},
        error::auth::AuthError,
    },
};

/// Who is making the request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Identity {
    /// The request carried no valid authentication credential
    Anonymous,
    /// The request carried a valid session
    Authenticated(AuthSession),
}

impl From<Option<AuthSession>> for Identity {
    fn from(session: Option<AuthSession>) -> Self {
        match session {
            Some(session) => Self::Authenticated(session),
            None => Self::Anonymous,
        }
    }
}

/// Context of a request whose caller may or may not be signed in.
#[derive(Clone, Debug)]
pub struct RequestContext {
    pub db: DatabaseConnection,
    pub services: Services,
    pub identity: Identity,
}

/// Context of a request whose caller is signed in.
#[derive(Clone, Debug)]
pub struct AuthenticatedContext {
    pub db: DatabaseConnection,
    pub services: Services,
    pub session: AuthSession,
}

impl RequestContext {
    /// Merges the shared API bundle with the caller's identity.
    pub fn new(api: &Api, identity: Identity) -> Self {
        Self {
            db: api.db.clone(),
            services: api.services.clone(),
            identity,
        }
    }

    pub fn session(&self) -> Option<&AuthSession> {
        match &self.identity {
            Identity::Authenticated(session) => Some(session),
            Identity::Anonymous => None,
        }
    }

    /// Gate for private procedures.
    ///
    /// # Returns
    /// - `Ok(AuthenticatedContext)` - The caller has a valid session
    /// - `Err(AuthError::Unauthorized)` - The caller is anonymous
    pub fn require_session(self) -> Result<AuthenticatedContext, AuthError> {
        match self.identity {
            Identity::Authenticated(session) => Ok(AuthenticatedContext {
                db: self.db,
                services: self.services,
                session,
            }),
            Identity::Anonymous => Err(AuthError::Unauthorized),
        }
    }
}
