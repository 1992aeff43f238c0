//! # Batch Repository
//!
//! Database operations for production batches. Batches are insert-only;
//! they disappear only when their product is deleted.

use tracing::debug;

use crate::error::DbResult;
use crate::pool::Database;
use oilmill_core::{Batch, BatchRow, NewBatch};

/// Repository for batch database operations.
#[derive(Debug, Clone)]
pub struct BatchRepository {
    db: Database,
}

impl BatchRepository {
    pub fn new(db: Database) -> Self {
        BatchRepository { db }
    }

    /// Records one production run.
    ///
    /// ## Returns
    /// * `Ok(Batch)` - Inserted batch
    /// * `Err(DbError::ForeignKeyViolation)` - No product with that id
    /// * `Err(DbError::CheckViolation)` - Negative quantity or cost
    pub async fn insert(&self, batch: &NewBatch) -> DbResult<Batch> {
        debug!(
            product_id = batch.product_id,
            batch_date = %batch.batch_date,
            quantity_liters = batch.quantity_liters,
            "Inserting batch"
        );

        let mut conn = self.db.acquire().await?;
        let id = sqlx::query(
            r#"
            INSERT INTO batches (product_id, batch_date, quantity_liters, cost_per_liter)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(batch.product_id)
        .bind(batch.batch_date)
        .bind(batch.quantity_liters)
        .bind(batch.cost_per_liter)
        .execute(&mut conn)
        .await?
        .last_insert_rowid();

        Ok(Batch {
            id,
            product_id: batch.product_id,
            batch_date: batch.batch_date,
            quantity_liters: batch.quantity_liters,
            cost_per_liter: batch.cost_per_liter,
        })
    }

    /// Lists all batches with their product's name and oil type,
    /// most recently recorded first.
    pub async fn list(&self) -> DbResult<Vec<BatchRow>> {
        let mut conn = self.db.acquire().await?;
        let rows = sqlx::query_as::<_, BatchRow>(
            r#"
            SELECT
                b.id,
                p.name AS product,
                p.oil_type,
                b.batch_date,
                b.quantity_liters,
                b.cost_per_liter
            FROM batches b
            INNER JOIN products p ON p.id = b.product_id
            ORDER BY b.id DESC
            "#,
        )
        .fetch_all(&mut conn)
        .await?;

        debug!(count = rows.len(), "Listed batches");
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DbError;
    use crate::pool::tests::temp_db;
    use chrono::NaiveDate;
    use oilmill_core::{NewProduct, OilType};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_insert_and_list_joined_newest_first() {
        let (_dir, db) = temp_db().await;
        let product = db
            .products()
            .insert(&NewProduct {
                name: "Farm A".into(),
                oil_type: OilType::Coconut,
            })
            .await
            .unwrap();

        let repo = db.batches();
        for (day, qty) in [(1, 10.0), (2, 12.5)] {
            repo.insert(&NewBatch {
                product_id: product.id,
                batch_date: date(2024, 3, day),
                quantity_liters: qty,
                cost_per_liter: 50.0,
            })
            .await
            .unwrap();
        }

        let rows = repo.list().await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].batch_date, date(2024, 3, 2));
        assert_eq!(rows[0].quantity_liters, 12.5);
        assert_eq!(rows[0].product, "Farm A");
        assert_eq!(rows[0].oil_type, OilType::Coconut);
        assert_eq!(rows[1].batch_date, date(2024, 3, 1));
        assert_eq!(rows[1].quantity_liters, 10.0);
    }

    #[tokio::test]
    async fn test_insert_for_missing_product_is_rejected() {
        let (_dir, db) = temp_db().await;

        let err = db
            .batches()
            .insert(&NewBatch {
                product_id: 404,
                batch_date: date(2024, 3, 1),
                quantity_liters: 1.0,
                cost_per_liter: 1.0,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, DbError::ForeignKeyViolation { .. }), "got {err:?}");
    }

    #[tokio::test]
    async fn test_storage_rejects_free_form_dates() {
        let (_dir, db) = temp_db().await;
        let product = db
            .products()
            .insert(&NewProduct {
                name: "Farm A".into(),
                oil_type: OilType::Coconut,
            })
            .await
            .unwrap();
        let mut conn = db.acquire().await.unwrap();

        for bad in ["March 1st", "2024-3-1", "2024-02-30"] {
            let err: DbError = sqlx::query(
                r#"
                INSERT INTO batches (product_id, batch_date, quantity_liters, cost_per_liter)
                VALUES (?1, ?2, 1, 1)
                "#,
            )
            .bind(product.id)
            .bind(bad)
            .execute(&mut conn)
            .await
            .unwrap_err()
            .into();

            assert!(matches!(err, DbError::CheckViolation { .. }), "{bad}: {err:?}");
        }

        // Rows that got in are always decodable.
        assert!(db.batches().list().await.unwrap().is_empty());
    }
}
