//! Test context returned by [`TestBuilder`](crate::TestBuilder).
//!
//! The context owns a connection to an in-memory SQLite database. SQLite in-memory databases live
//! as long as their connection, so every test gets a fresh, isolated schema. File-backed
//! contexts keep their temporary directory until they are dropped.

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Schema, StatementBuilder,
};
use tempfile::TempDir;

use crate::error::TestError;

/// Test environment created by `TestBuilder::build()`
///
/// ```ignore
/// let test = TestBuilder::new().with_equipment_tables().build().await?;
///
/// // Insert fixtures
/// let lnb = test.equipment().insert_lnb("Universal").await?;
///
/// // Run repositories or services against the database
/// let repository = LnbRepository::new(&test.db);
/// ```
pub struct TestContext {
    /// Connection to the test SQLite database
    pub db: DatabaseConnection,
    _dir: Option<TempDir>,
}

impl TestContext {
    /// Convert the database connection into any type that can be constructed from it
    ///
    /// Lets integration tests build the application state without the test-utils crate
    /// depending on the main crate.
    ///
    /// ```ignore
    /// let state: AppState = test.to_app_state();
    /// ```
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.db.clone())
    }
}

impl TestContext {
    /// Connect to a fresh in-memory SQLite database.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with an empty database
    /// - `Err(TestError::DbErr)` - Database connection failed
    pub(crate) async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext { db, _dir: None })
    }

    /// Connect a pool of several connections to a fresh SQLite file.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with an empty database
    /// - `Err(TestError::IoError)` - The temporary directory could not be created
    /// - `Err(TestError::DbErr)` - Database connection failed
    pub(crate) async fn with_file() -> Result<Self, TestError> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("test.db");

        let mut opt = ConnectOptions::new(format!("sqlite://{}?mode=rwc", path.display()));
        opt.max_connections(4).min_connections(2).sqlx_logging(false);
        let db = Database::connect(opt).await?;

        Ok(TestContext { db, _dir: Some(dir) })
    }

    /// Execute schema statements in order.
    ///
    /// # Arguments
    /// - `stmts` - CREATE TABLE / CREATE INDEX statements to execute
    ///
    /// # Returns
    /// - `Ok(())` - All statements executed
    /// - `Err(TestError::DbErr)` - A statement failed
    pub(crate) async fn with_statements<S: StatementBuilder>(
        &self,
        stmts: Vec<S>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Schema helper for the SQLite backend used by every test context
    pub(crate) fn schema() -> Schema {
        Schema::new(sea_orm::DbBackend::Sqlite)
    }
}
