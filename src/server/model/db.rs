//! Type aliases for the sea-orm database models.

/// A registered user.
pub type UserModel = entity::user::Model;

/// A login method of a user; credential accounts hold the password hash.
pub type AccountModel = entity::account::Model;

/// A stored session record, keyed by the session cookie id.
pub type SessionModel = entity::session::Model;
