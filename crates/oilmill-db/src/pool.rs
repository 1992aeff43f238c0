//! # Database Connection Management
//!
//! Opens SQLite connections, one per ledger operation.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 Scoped Connection Acquisition                           │
//! │                                                                         │
//! │  Server Startup                                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbConfig::new(path) ← Configure file path, busy timeout               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Database::new(config).await ← Build connect options + init schema     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Request 1 ──► acquire() ──► Conn ──► query ──► drop (closed)          │
//! │  Request 2 ──► acquire() ──► Conn ──► query ──► drop (closed)          │
//! │                                                                         │
//! │  No pool: nothing outlives the operation that opened it.               │
//! │  Concurrent writers are serialized by SQLite (busy timeout).           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## WAL Mode
//! SQLite WAL (Write-Ahead Logging) mode is enabled so readers don't block
//! the single writer.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqliteSynchronous};
use sqlx::{Connection, SqliteConnection};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use crate::migrations;
use crate::repository::batch::BatchRepository;
use crate::repository::product::ProductRepository;
use crate::repository::report::ReportRepository;
use crate::repository::sale::SaleRepository;

// =============================================================================
// Configuration
// =============================================================================

/// Database configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = DbConfig::new("/var/lib/oilmill/data.db")
///     .busy_timeout(Duration::from_secs(10));
/// ```
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Path to the SQLite database file. Created if missing.
    pub database_path: PathBuf,

    /// How long a connection waits on a locked database before failing.
    /// Default: 5 seconds
    pub busy_timeout: Duration,
}

impl DbConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DbConfig {
            database_path: path.into(),
            busy_timeout: Duration::from_secs(5),
        }
    }

    /// Sets the SQLite busy timeout.
    pub fn busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }
}

// =============================================================================
// Database
// =============================================================================

/// Handle to the ledger database.
///
/// Holds connection options only, so cloning is cheap and no connection is
/// kept open between operations. Every repository call goes through
/// [`Database::acquire`].
#[derive(Debug, Clone)]
pub struct Database {
    options: SqliteConnectOptions,
    path: PathBuf,
}

impl Database {
    /// Prepares the database and initialises the schema.
    ///
    /// ## What This Does
    /// 1. Builds connect options:
    ///    - create the file if it doesn't exist
    ///    - WAL mode, NORMAL synchronous
    ///    - foreign keys ON (needed for ON DELETE CASCADE)
    /// 2. Runs migrations
    pub async fn new(config: DbConfig) -> DbResult<Self> {
        info!(
            path = %config.database_path.display(),
            "Initializing database"
        );

        let options = SqliteConnectOptions::new()
            .filename(&config.database_path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            // SQLite has them disabled by default for backwards compatibility
            .foreign_keys(true)
            .busy_timeout(config.busy_timeout);

        let db = Database {
            options,
            path: config.database_path,
        };

        db.init_schema().await?;

        Ok(db)
    }

    /// Creates the ledger tables if they are absent.
    ///
    /// Idempotent: safe to call on every startup.
    pub async fn init_schema(&self) -> DbResult<()> {
        let mut conn = self.acquire().await?;
        migrations::run_migrations(&mut conn).await?;
        info!("Schema ready");
        Ok(())
    }

    /// Opens a connection for a single operation.
    ///
    /// The connection is closed when dropped, including on `?` early
    /// returns, so callers keep it in a local and let it go out of scope.
    pub async fn acquire(&self) -> DbResult<SqliteConnection> {
        debug!(path = %self.path.display(), "Opening connection");
        SqliteConnection::connect_with(&self.options)
            .await
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))
    }

    pub fn products(&self) -> ProductRepository {
        ProductRepository::new(self.clone())
    }

    pub fn batches(&self) -> BatchRepository {
        BatchRepository::new(self.clone())
    }

    pub fn sales(&self) -> SaleRepository {
        SaleRepository::new(self.clone())
    }

    pub fn reports(&self) -> ReportRepository {
        ReportRepository::new(self.clone())
    }

    /// Checks if the database is reachable (can execute queries).
    pub async fn health_check(&self) -> bool {
        let Ok(mut conn) = self.acquire().await else {
            return false;
        };
        sqlx::query("SELECT 1").execute(&mut conn).await.is_ok()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use tempfile::TempDir;

    /// Fresh database in its own temp directory. Keep the `TempDir` alive
    /// for the duration of the test.
    pub(crate) async fn temp_db() -> (TempDir, Database) {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(DbConfig::new(dir.path().join("ledger.db")))
            .await
            .unwrap();
        (dir, db)
    }

    #[tokio::test]
    async fn test_new_database_is_healthy() {
        let (dir, db) = temp_db().await;
        assert!(db.health_check().await);
        assert!(dir.path().join("ledger.db").exists());
    }

    #[tokio::test]
    async fn test_init_schema_is_idempotent() {
        let (dir, db) = temp_db().await;
        db.init_schema().await.unwrap();
        db.init_schema().await.unwrap();

        // Reopening the same file runs the migrator again.
        let reopened = Database::new(DbConfig::new(dir.path().join("ledger.db")))
            .await
            .unwrap();
        assert!(reopened.health_check().await);
    }

    #[tokio::test]
    async fn test_foreign_keys_enabled_per_connection() {
        let (_dir, db) = temp_db().await;
        let mut conn = db.acquire().await.unwrap();
        let enabled: i64 = sqlx::query_scalar("PRAGMA foreign_keys")
            .fetch_one(&mut conn)
            .await
            .unwrap();
        assert_eq!(enabled, 1);
    }

    #[test]
    fn test_config_builder() {
        let config = DbConfig::new("/tmp/test.db")
            .busy_timeout(Duration::from_secs(9));

        assert_eq!(config.busy_timeout, Duration::from_secs(9));
        assert_eq!(DbConfig::new("x.db").busy_timeout, Duration::from_secs(5));
    }
}
