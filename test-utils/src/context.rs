use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use std::sync::Arc;
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

/// Inactivity expiry used for test sessions, matching the server's session layer.
const SESSION_INACTIVITY_DAYS: i64 = 7;

/// Test environment holding an in-memory database and an optional session.
///
/// Both are created lazily on first access and live as long as the context.
pub struct TestContext {
    /// Connection to the in-memory SQLite database.
    pub db: Option<DatabaseConnection>,

    /// Session stored in the same database as `db`.
    pub session: Option<Session>,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            db: None,
            session: None,
        }
    }

    /// Gets or creates the in-memory SQLite database connection.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Reference to the database connection
    /// - `Err(TestError::Database)` - Failed to connect
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        if self.db.is_none() {
            let db = Database::connect("sqlite::memory:").await?;
            self.db = Some(db);
        }

        match self.db {
            Some(ref db) => Ok(db),
            None => unreachable!("database connection initialized above"),
        }
    }

    /// Executes the provided CREATE TABLE statements in order.
    ///
    /// Called by `TestBuilder::build()`.
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(db.get_database_backend().build(&stmt)).await?;
        }

        Ok(())
    }

    /// Gets or creates a session backed by the test database.
    ///
    /// On first call the session store table is migrated into the in-memory database and
    /// a fresh, empty session is created. Later calls return the same session.
    ///
    /// # Returns
    /// - `Ok(&Session)` - Reference to the session
    /// - `Err(TestError)` - Failed to connect or migrate the session table
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        if self.session.is_none() {
            let db = self.database().await?;

            let pool = db.get_sqlite_connection_pool();
            let session_store = SqliteStore::new(pool.clone());
            session_store
                .migrate()
                .await
                .map_err(|e| TestError::SessionStore(e.to_string()))?;

            let session = Session::new(
                None,
                Arc::new(session_store),
                Some(Expiry::OnInactivity(Duration::days(
                    SESSION_INACTIVITY_DAYS,
                ))),
            );
            self.session = Some(session);
        }

        match self.session {
            Some(ref session) => Ok(session),
            None => unreachable!("session initialized above"),
        }
    }

    /// Gets or creates both the database and the session.
    ///
    /// Avoids holding two mutable borrows when a test needs both.
    ///
    /// # Returns
    /// - `Ok((&DatabaseConnection, &Session))` - References to both
    /// - `Err(TestError)` - Failed to initialize either
    pub async fn db_and_session(&mut self) -> Result<(&DatabaseConnection, &Session), TestError> {
        self.database().await?;
        self.session().await?;

        match (&self.db, &self.session) {
            (Some(db), Some(session)) => Ok((db, session)),
            _ => unreachable!("database and session initialized above"),
        }
    }
}
