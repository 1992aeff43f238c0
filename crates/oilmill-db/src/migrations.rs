//! # Database Migrations
//!
//! Embedded SQL migrations for the ledger schema.
//!
//! ## How Migrations Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Migration Process                                  │
//! │                                                                         │
//! │  Server Startup                                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Check _sqlx_migrations table (create if missing)                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  0001_ledger_schema.sql  ✓ applied? skip : run                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Server continues startup                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Adding New Migrations
//!
//! 1. Create a new file in `migrations/` with the next sequence number
//! 2. Write idempotent SQL (use `IF NOT EXISTS` where possible)
//! 3. **NEVER** modify existing migrations - always add new ones

use sqlx::SqliteConnection;
use tracing::info;

use crate::error::DbResult;

/// Embedded migrations from the workspace `migrations` directory.
static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations");

/// Runs all pending database migrations on the given connection.
pub async fn run_migrations(conn: &mut SqliteConnection) -> DbResult<()> {
    info!("Checking for pending migrations");

    MIGRATOR.run(conn).await?;

    info!("All migrations applied successfully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::tests::temp_db;

    #[tokio::test]
    async fn test_all_migrations_applied() {
        let (_dir, db) = temp_db().await;
        let mut conn = db.acquire().await.unwrap();

        let applied: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations")
            .fetch_one(&mut conn)
            .await
            .unwrap();
        assert_eq!(applied as usize, MIGRATOR.migrations.len());
        assert!(applied >= 1);
    }

    #[tokio::test]
    async fn test_schema_has_ledger_tables() {
        let (_dir, db) = temp_db().await;
        let mut conn = db.acquire().await.unwrap();

        let tables: Vec<String> = sqlx::query_scalar(
            r#"
            SELECT name FROM sqlite_master
            WHERE type = 'table' AND name IN ('products', 'batches', 'sales')
            ORDER BY name
            "#,
        )
        .fetch_all(&mut conn)
        .await
        .unwrap();

        assert_eq!(tables, vec!["batches", "products", "sales"]);
    }
}
