//! Declarative test builder.
//!
//! The builder queues tables and fixtures, then creates them all during the final `build()`
//! call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_auth_tables: bool,

    // Emails of users to insert
    users: Vec<String>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_auth_tables: false,
            users: Vec::new(),
        }
    }

    /// Add the tables used by authentication: User, Account and Session.
    pub fn with_auth_tables(mut self) -> Self {
        self.include_auth_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`
    /// after the auth tables.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use homepage_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), homepage_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(User)
    ///     .with_table(Account)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a user without an account during `build()`.
    ///
    /// Requires the user table, usually via `with_auth_tables`.
    pub fn with_user(mut self, email: impl Into<String>) -> Self {
        self.users.push(email.into());
        self
    }

    /// Build the test context by creating all configured tables, then inserting fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut test = TestContext::new().await?;

        let mut all_tables = Vec::new();

        if self.include_auth_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::Account),
                schema.create_table_from_entity(entity::prelude::Session),
            ]);
        }

        all_tables.extend(self.tables);
        test.with_tables(all_tables).await?;

        for email in self.users {
            test.user().insert_user(&email).await?;
        }

        Ok(test)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
