use std::sync::OnceLock;

use sea_orm::{DbErr, SqlErr, TransactionTrait};

use crate::server::{
    data::{account::AccountRepository, user::UserRepository},
    error::{auth::AuthError, Error},
    model::db::UserModel,
    service::auth::AuthService,
};

pub const MIN_PASSWORD_LENGTH: usize = 8;
/// bcrypt ignores input past 72 bytes, so longer passwords are rejected
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Verified against when there is no stored hash, so every failed sign in costs one bcrypt run
static DUMMY_PASSWORD_HASH: OnceLock<String> = OnceLock::new();

impl<'a> AuthService<'a> {
    /// Creates a user with a credential account.
    ///
    /// The email is trimmed and lower-cased before it is checked and stored. The user and
    /// the credential account are created in one transaction.
    ///
    /// # Arguments
    /// - `name` - Display name, must not be blank
    /// - `email` - Email address used to sign in
    /// - `password` - Plain text password, hashed with bcrypt before storage
    ///
    /// # Returns
    /// - `Ok(UserModel)` - The created user
    /// - `Err(Error::AuthError)` - Invalid input or the email is already registered
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn sign_up(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<UserModel, Error> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AuthError::EmptyName.into());
        }

        let email = normalize_email(email)?;
        validate_password(password)?;

        if UserRepository::new(self.db)
            .find_by_email(&email)
            .await?
            .is_some()
        {
            return Err(AuthError::EmailAlreadyRegistered(email).into());
        }

        let password_hash = hash_password(password.to_string()).await?;

        let user = self.insert_credential_user(name, &email, password_hash).await?;

        tracing::info!(user_id = %user.id, "Created user with credential account");

        Ok(user)
    }

    /// Creates the user and their credential account in one transaction.
    ///
    /// A concurrent sign up can register the email after the duplicate check in
    /// [`AuthService::sign_up`]; the unique constraint then reports it as
    /// [`AuthError::EmailAlreadyRegistered`].
    pub(super) async fn insert_credential_user(
        &self,
        name: &str,
        email: &str,
        password_hash: String,
    ) -> Result<UserModel, Error> {
        let txn = self.db.begin().await?;

        let user = UserRepository::new(&txn)
            .create(name, email)
            .await
            .map_err(|err| map_duplicate_email(err, email))?;
        AccountRepository::new(&txn)
            .create_credential(user.id, password_hash)
            .await?;

        txn.commit().await?;

        Ok(user)
    }

    /// Verifies an email and password pair.
    ///
    /// Unknown emails, users without a credential account and wrong passwords all fail with
    /// the same [`AuthError::InvalidCredentials`].
    ///
    /// # Returns
    /// - `Ok(UserModel)` - The credentials are valid
    /// - `Err(Error::AuthError(AuthError::InvalidCredentials))` - The credentials are not valid
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<UserModel, Error> {
        let email = email.trim().to_lowercase();

        let credential = match UserRepository::new(self.db).find_by_email(&email).await? {
            Some(user) => AccountRepository::new(self.db)
                .get_credential_by_user_id(user.id)
                .await?
                .and_then(|account| account.password)
                .map(|password_hash| (user, password_hash)),
            None => None,
        };

        let Some((user, password_hash)) = credential else {
            verify_dummy_password(password.to_string()).await?;

            return Err(AuthError::InvalidCredentials.into());
        };

        // bcrypt would match a longer password on its first 72 bytes alone
        let matches = verify_password(password.to_string(), password_hash).await?;
        if !matches || password.len() > MAX_PASSWORD_BYTES {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }
}

fn map_duplicate_email(err: DbErr, email: &str) -> Error {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            AuthError::EmailAlreadyRegistered(email.to_string()).into()
        }
        _ => err.into(),
    }
}

/// Trims and lower-cases an email address, rejecting anything that is not `local@domain`.
pub fn normalize_email(email: &str) -> Result<String, AuthError> {
    let email = email.trim().to_lowercase();

    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    };

    if !valid {
        return Err(AuthError::InvalidEmail(email));
    }

    Ok(email)
}

/// Checks the password is at least [`MIN_PASSWORD_LENGTH`] characters and at most
/// [`MAX_PASSWORD_BYTES`] bytes.
pub fn validate_password(password: &str) -> Result<(), AuthError> {
    let too_short = password.chars().count() < MIN_PASSWORD_LENGTH;
    let too_long = password.len() > MAX_PASSWORD_BYTES;

    if too_short || too_long {
        return Err(AuthError::InvalidPasswordLength {
            min: MIN_PASSWORD_LENGTH,
            max_bytes: MAX_PASSWORD_BYTES,
        });
    }

    Ok(())
}

async fn hash_password(password: String) -> Result<String, Error> {
    let hash =
        tokio::task::spawn_blocking(move || bcrypt::hash(password, bcrypt::DEFAULT_COST)).await??;

    Ok(hash)
}

async fn verify_password(password: String, password_hash: String) -> Result<bool, Error> {
    let valid =
        tokio::task::spawn_blocking(move || bcrypt::verify(password, &password_hash)).await??;

    Ok(valid)
}

/// Hash of a throwaway password at the production cost, created on first use
pub(super) fn dummy_password_hash() -> Result<&'static str, bcrypt::BcryptError> {
    if let Some(hash) = DUMMY_PASSWORD_HASH.get() {
        return Ok(hash.as_str());
    }

    let hash = bcrypt::hash("dummy password", bcrypt::DEFAULT_COST)?;

    Ok(DUMMY_PASSWORD_HASH.get_or_init(|| hash).as_str())
}

async fn verify_dummy_password(password: String) -> Result<(), Error> {
    tokio::task::spawn_blocking(move || {
        let hash = dummy_password_hash()?;

        bcrypt::verify(password, hash).map(|_| ())
    })
    .await??;

    Ok(())
}
