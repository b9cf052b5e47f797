//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`. The context holds an
//! in-memory SQLite database and a session backed by an in-memory store.

use std::sync::Arc;

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use tower_sessions::{MemoryStore, Session};

use crate::error::TestError;

/// Test context structure returned by `TestBuilder`
///
/// # Usage
///
/// Most users should create this via [`TestBuilder`](crate::TestBuilder) rather
/// than constructing it directly.
///
/// ```ignore
/// let mut test = TestBuilder::new().with_auth_tables().build().await?;
///
/// // Access the database
/// let db = &test.db;
///
/// // Access fixtures helpers
/// let user = test.user().insert_user("ada@example.com").await?;
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
    /// Session for test authentication flows
    pub session: Session,
}

impl TestContext {
    /// Create a new test context with an empty database.
    ///
    /// Used by [`TestBuilder`](crate::TestBuilder) and the `test_setup_with_tables!` macro.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context
    /// - `Err(TestError::DbErr)` - Database connection failed
    #[doc(hidden)]
    pub async fn new() -> Result<Self, TestError> {
        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext { db, session })
    }

    /// Create database tables from schema statements.
    ///
    /// # Arguments
    /// - `stmts` - Vector of CREATE TABLE statements to execute, parents before children
    ///
    /// # Returns
    /// - `Ok(())` - All tables created successfully
    /// - `Err(TestError::DbErr)` - Table creation failed
    #[doc(hidden)]
    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
