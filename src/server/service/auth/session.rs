use tower_sessions::Session;

use crate::{
    model::auth::AuthSession,
    server::{
        data::user::UserRepository, error::Error, model::session::user::SessionUserId,
        service::auth::AuthService, util::time::offset_to_utc,
    },
};

impl<'a> AuthService<'a> {
    /// Resolves the cookie session into an authenticated session.
    ///
    /// A session is only valid when it holds a user ID of an existing user. A session
    /// pointing at a user that no longer exists is cleared and treated as anonymous.
    ///
    /// # Arguments
    /// - `session` - The caller's cookie session, already loaded by the session layer
    ///
    /// # Returns
    /// - `Ok(Some(AuthSession))` - The caller is signed in
    /// - `Ok(None)` - The caller has no valid session
    /// - `Err(Error)` - Session store or database failure
    pub async fn get_session(&self, session: &Session) -> Result<Option<AuthSession>, Error> {
        let Some(user_id) = SessionUserId::get(session).await? else {
            return Ok(None);
        };

        let Some(user) = UserRepository::new(self.db).get_by_id(user_id).await? else {
            session.clear().await;

            tracing::debug!(
                "Session cleared for user ID {} with active session but was not found in database",
                user_id
            );

            return Ok(None);
        };

        Ok(Some(AuthSession {
            user: user.into(),
            expires_at: offset_to_utc(session.expiry_date())?,
        }))
    }
}
