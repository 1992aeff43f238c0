//! # Report Repository
//!
//! Aggregates computed on demand from the current ledger state.
//!
//! ## Zero, Never Null
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  SUM(quantity_liters) over no rows    → NULL   ✗                        │
//! │  TOTAL(quantity_liters) over no rows  → 0.0    ✓                        │
//! │                                                                         │
//! │  TOTAL() always yields a REAL, so products with no batches still get   │
//! │  a produced_liters of 0.0 through the LEFT JOIN.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use crate::error::DbResult;
use crate::pool::Database;
use oilmill_core::{ProductProduction, Summary};

/// Repository for reporting queries.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    db: Database,
}

impl ReportRepository {
    pub fn new(db: Database) -> Self {
        ReportRepository { db }
    }

    /// Product count plus total liters produced and sold.
    ///
    /// One statement, so the three numbers come from the same snapshot.
    pub async fn summary(&self) -> DbResult<Summary> {
        let mut conn = self.db.acquire().await?;
        let (product_count, total_produced_liters, total_sold_liters): (i64, f64, f64) =
            sqlx::query_as(
                r#"
                SELECT
                    (SELECT COUNT(*) FROM products),
                    (SELECT TOTAL(quantity_liters) FROM batches),
                    (SELECT TOTAL(quantity_liters) FROM sales)
                "#,
            )
            .fetch_one(&mut conn)
            .await?;

        debug!(
            product_count,
            total_produced_liters, total_sold_liters, "Computed summary"
        );

        Ok(Summary {
            product_count,
            total_produced_liters,
            total_sold_liters,
        })
    }

    /// Total produced liters for every product, including products with no
    /// batches, ordered by product id.
    pub async fn produced_by_product(&self) -> DbResult<Vec<ProductProduction>> {
        let mut conn = self.db.acquire().await?;
        let rows = sqlx::query_as::<_, ProductProduction>(
            r#"
            SELECT
                p.id,
                p.name,
                p.oil_type,
                TOTAL(b.quantity_liters) AS produced_liters
            FROM products p
            LEFT JOIN batches b ON b.product_id = p.id
            GROUP BY p.id, p.name, p.oil_type
            ORDER BY p.id
            "#,
        )
        .fetch_all(&mut conn)
        .await?;

        Ok(rows)
    }
}
