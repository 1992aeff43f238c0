//! # Sale Repository
//!
//! Database operations for sales. Same lifecycle as batches: inserted once,
//! removed only by deleting the product.

use tracing::debug;

use crate::error::DbResult;
use crate::pool::Database;
use oilmill_core::{NewSale, Sale, SaleRow};

/// Repository for sale database operations.
#[derive(Debug, Clone)]
pub struct SaleRepository {
    db: Database,
}

impl SaleRepository {
    pub fn new(db: Database) -> Self {
        SaleRepository { db }
    }

    /// Records one sale. A `None` customer is stored as NULL.
    pub async fn insert(&self, sale: &NewSale) -> DbResult<Sale> {
        debug!(
            product_id = sale.product_id,
            sale_date = %sale.sale_date,
            quantity_liters = sale.quantity_liters,
            "Inserting sale"
        );

        let mut conn = self.db.acquire().await?;
        let id = sqlx::query(
            r#"
            INSERT INTO sales (product_id, sale_date, quantity_liters, price_per_liter, customer)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(sale.product_id)
        .bind(sale.sale_date)
        .bind(sale.quantity_liters)
        .bind(sale.price_per_liter)
        .bind(sale.customer.as_deref())
        .execute(&mut conn)
        .await?
        .last_insert_rowid();

        Ok(Sale {
            id,
            product_id: sale.product_id,
            sale_date: sale.sale_date,
            quantity_liters: sale.quantity_liters,
            price_per_liter: sale.price_per_liter,
            customer: sale.customer.clone(),
        })
    }

    /// Lists all sales with their product's name and oil type,
    /// most recently recorded first.
    pub async fn list(&self) -> DbResult<Vec<SaleRow>> {
        let mut conn = self.db.acquire().await?;
        let rows = sqlx::query_as::<_, SaleRow>(
            r#"
            SELECT
                s.id,
                p.name AS product,
                p.oil_type,
                s.sale_date,
                s.quantity_liters,
                s.price_per_liter,
                s.customer
            FROM sales s
            INNER JOIN products p ON p.id = s.product_id
            ORDER BY s.id DESC
            "#,
        )
        .fetch_all(&mut conn)
        .await?;

        debug!(count = rows.len(), "Listed sales");
        Ok(rows)
    }
}
