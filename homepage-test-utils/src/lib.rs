//! Test environment for the homepage backend.
//!
//! Tests are set up in two phases: a [`TestBuilder`] declares the tables and users to create,
//! and the [`TestContext`] it builds gives the test an in-memory SQLite database, an in-memory
//! session and fixture helpers for inserting more records.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod setup;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::{TEST_BCRYPT_COST, TEST_PASSWORD, TEST_TRUSTED_ORIGIN, TEST_USER_NAME},
        test_setup_with_tables, TestBuilder, TestContext, TestError,
    };
}
