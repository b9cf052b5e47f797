use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::user::UserDto;

/// A resolved, server-verified session of an authenticated user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AuthSession {
    pub user: UserDto,
    /// When the session expires unless the user stays active
    pub expires_at: DateTime<Utc>,
}

impl AuthSession {
    pub fn user_id(&self) -> i32 {
        self.user.id
    }
}

/// Request body for creating an account with email and password
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SignUpDto {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Request body for signing in with email and password
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SignInDto {
    pub email: String,
    pub password: String,
}

/// Response body after a successful sign up or sign in
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SignedInDto {
    pub user: UserDto,
}
