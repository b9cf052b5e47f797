//! Standard values shared across tests.

/// Password used for credential fixtures.
///
/// Long enough to pass sign-up validation.
pub static TEST_PASSWORD: &str = "correct horse battery staple";

/// Display name given to user fixtures.
pub static TEST_USER_NAME: &str = "Test User";

/// Origin configured as trusted in test application state.
pub static TEST_TRUSTED_ORIGIN: &str = "http://localhost:3001";

/// Provider ID of email and password accounts.
pub static TEST_CREDENTIAL_PROVIDER_ID: &str = "credential";

/// bcrypt cost for fixture hashes, the lowest the crate accepts.
pub const TEST_BCRYPT_COST: u32 = 4;
