//! # Ledger Operations
//!
//! The write and list operations behind the HTTP surface.
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    record_batch(form)                                   │
//! │                                                                         │
//! │  BatchForm (raw text)                                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  form.parse(today_utc()) ── Err ──► LedgerError::Validation            │
//! │       │ Ok(NewBatch)                                                    │
//! │       ▼                                                                 │
//! │  db.batches().insert() ──── Err ──► LedgerError::Storage               │
//! │       │ Ok(Batch)                                                       │
//! │       ▼                                                                 │
//! │  Batch (plus a Flash built by the handler)                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every write is a single statement: it either commits fully or not at all.

use chrono::{NaiveDate, Utc};
use thiserror::Error;
use tracing::{info, warn};

use oilmill_core::{
    Batch, BatchForm, BatchRow, Product, ProductForm, ProductOption, ProductProduction, Sale,
    SaleForm, SaleRow, Summary, ValidationError,
};
use oilmill_db::{Database, DbError, DbResult};

/// Failure of a ledger write.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The submitted fields were rejected before touching storage.
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// Storage refused the write or could not be reached.
    #[error("Error: {0}")]
    Storage(#[from] DbError),
}

pub type LedgerResult<T> = Result<T, LedgerError>;

/// Current calendar date in UTC, the default for batch and sale dates.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// Ledger operations over one database.
#[derive(Debug, Clone)]
pub struct Ledger {
    db: Database,
}

impl Ledger {
    pub fn new(db: Database) -> Self {
        Ledger { db }
    }

    // =========================================================================
    // Writes
    // =========================================================================

    /// Adds a product after checking the name and oil type.
    pub async fn add_product(&self, form: &ProductForm) -> LedgerResult<Product> {
        let new_product = form.parse().inspect_err(|e| warn!(error = %e, "Rejected product"))?;
        let product = self.db.products().insert(&new_product).await?;

        info!(id = product.id, name = %product.name, oil_type = %product.oil_type, "Product added");
        Ok(product)
    }

    /// Deletes a product and, by cascade, its batches and sales.
    ///
    /// Returns whether the product existed. A missing id is not an error:
    /// either way the product is no longer present afterwards.
    pub async fn delete_product(&self, id: i64) -> LedgerResult<bool> {
        let existed = self.db.products().delete(id).await?;

        info!(id, existed, "Product deleted");
        Ok(existed)
    }

    /// Records a production batch; a blank date means today (UTC).
    pub async fn record_batch(&self, form: &BatchForm) -> LedgerResult<Batch> {
        let new_batch = form
            .parse(today_utc())
            .inspect_err(|e| warn!(error = %e, "Rejected batch"))?;
        let batch = self.db.batches().insert(&new_batch).await?;

        info!(
            id = batch.id,
            product_id = batch.product_id,
            quantity_liters = batch.quantity_liters,
            "Batch recorded"
        );
        Ok(batch)
    }

    /// Records a sale; a blank date means today (UTC), a blank customer is
    /// stored as absent.
    pub async fn record_sale(&self, form: &SaleForm) -> LedgerResult<Sale> {
        let new_sale = form
            .parse(today_utc())
            .inspect_err(|e| warn!(error = %e, "Rejected sale"))?;
        let sale = self.db.sales().insert(&new_sale).await?;

        info!(
            id = sale.id,
            product_id = sale.product_id,
            quantity_liters = sale.quantity_liters,
            "Sale recorded"
        );
        Ok(sale)
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// All products, newest first.
    pub async fn list_products(&self) -> DbResult<Vec<Product>> {
        self.db.products().list().await
    }

    /// Products for a selection list, by name.
    pub async fn product_options(&self) -> DbResult<Vec<ProductOption>> {
        self.db.products().options().await
    }

    /// All batches joined with their product, newest first.
    pub async fn list_batches(&self) -> DbResult<Vec<BatchRow>> {
        self.db.batches().list().await
    }

    /// All sales joined with their product, newest first.
    pub async fn list_sales(&self) -> DbResult<Vec<SaleRow>> {
        self.db.sales().list().await
    }

    pub async fn summary(&self) -> DbResult<Summary> {
        self.db.reports().summary().await
    }

    pub async fn produced_by_product(&self) -> DbResult<Vec<ProductProduction>> {
        self.db.reports().produced_by_product().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oilmill_core::OilType;
    use oilmill_db::DbConfig;
    use tempfile::TempDir;

    async fn temp_ledger() -> (TempDir, Ledger) {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(DbConfig::new(dir.path().join("ledger.db")))
            .await
            .unwrap();
        (dir, Ledger::new(db))
    }

    fn product_form(name: &str, oil_type: &str) -> ProductForm {
        ProductForm {
            name: name.into(),
            oil_type: oil_type.into(),
        }
    }

    #[tokio::test]
    async fn test_add_product_accepts_only_known_oil_types() {
        let (_dir, ledger) = temp_ledger().await;

        for oil in OilType::ALL {
            let product = ledger.add_product(&product_form("Farm", oil.as_str())).await.unwrap();
            assert_eq!(product.oil_type, oil);
        }

        for bad in ["Olive", "coconut", ""] {
            let err = ledger.add_product(&product_form("Farm", bad)).await.unwrap_err();
            assert!(matches!(err, LedgerError::Validation(_)), "accepted {bad:?}");
        }

        let err = ledger.add_product(&product_form("  ", "Coconut")).await.unwrap_err();
        assert!(matches!(
            err,
            LedgerError::Validation(ValidationError::Required { field: "name" })
        ));

        assert_eq!(ledger.summary().await.unwrap().product_count, 3);
    }

    #[tokio::test]
    async fn test_record_batch_defaults_to_today_and_counts_production() {
        let (_dir, ledger) = temp_ledger().await;
        let product = ledger.add_product(&product_form("Farm A", "Coconut")).await.unwrap();

        let batch = ledger
            .record_batch(&BatchForm {
                product_id: product.id.to_string(),
                quantity_liters: "10".into(),
                cost_per_liter: "50".into(),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(batch.batch_date, today_utc());

        let production = ledger.produced_by_product().await.unwrap();
        assert_eq!(production.len(), 1);
        assert_eq!(production[0].name, "Farm A");
        assert_eq!(production[0].produced_liters, 10.0);
    }

    #[tokio::test]
    async fn test_record_batch_for_unknown_product_is_storage_error() {
        let (_dir, ledger) = temp_ledger().await;

        let err = ledger
            .record_batch(&BatchForm {
                product_id: "77".into(),
                quantity_liters: "1".into(),
                cost_per_liter: "1".into(),
                ..Default::default()
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            LedgerError::Storage(DbError::ForeignKeyViolation { .. })
        ));
        assert!(err.to_string().starts_with("Error: "));
    }

    #[tokio::test]
    async fn test_record_sale_with_empty_customer_stores_none() {
        let (_dir, ledger) = temp_ledger().await;
        let product = ledger.add_product(&product_form("Farm A", "Gingelly")).await.unwrap();

        let sale = ledger
            .record_sale(&SaleForm {
                product_id: product.id.to_string(),
                quantity_liters: "3".into(),
                price_per_liter: "420".into(),
                customer: "".into(),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(sale.customer, None);
        assert_eq!(ledger.list_sales().await.unwrap()[0].customer, None);
    }

    #[tokio::test]
    async fn test_concurrent_deletes_of_missing_product_both_succeed() {
        let (_dir, ledger) = temp_ledger().await;
        let product = ledger.add_product(&product_form("Farm A", "Coconut")).await.unwrap();
        assert!(ledger.delete_product(product.id).await.unwrap());

        let (a, b) = tokio::join!(
            ledger.delete_product(product.id),
            ledger.delete_product(product.id)
        );

        assert!(!a.unwrap());
        assert!(!b.unwrap());
    }
}
