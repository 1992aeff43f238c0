//! # Product Repository
//!
//! Database operations for products.
//!
//! ## Key Operations
//! - Insert with auto-assigned integer id
//! - Listing (newest first) and selection options (by name)
//! - Hard delete, which cascades to batches and sales
//!
//! ## Cascade Delete
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  DELETE FROM products WHERE id = 7                                      │
//! │       │                                                                 │
//! │       ├── batches.product_id = 7  → deleted (ON DELETE CASCADE)         │
//! │       └── sales.product_id = 7    → deleted (ON DELETE CASCADE)         │
//! │                                                                         │
//! │  Requires PRAGMA foreign_keys = ON, set on every connection.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use crate::error::DbResult;
use crate::pool::Database;
use oilmill_core::{NewProduct, Product, ProductOption};

/// Repository for product database operations.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    db: Database,
}

impl ProductRepository {
    pub fn new(db: Database) -> Self {
        ProductRepository { db }
    }

    /// Inserts a new product and returns it with its assigned id.
    ///
    /// ## Returns
    /// * `Ok(Product)` - Inserted product
    /// * `Err(DbError::CheckViolation)` - Name blank or oil type outside the allowed set
    pub async fn insert(&self, product: &NewProduct) -> DbResult<Product> {
        debug!(name = %product.name, oil_type = %product.oil_type, "Inserting product");

        let mut conn = self.db.acquire().await?;
        let id = sqlx::query("INSERT INTO products (name, oil_type) VALUES (?1, ?2)")
            .bind(&product.name)
            .bind(product.oil_type)
            .execute(&mut conn)
            .await?
            .last_insert_rowid();

        Ok(Product {
            id,
            name: product.name.clone(),
            oil_type: product.oil_type,
        })
    }

    /// Lists all products, most recently created first.
    pub async fn list(&self) -> DbResult<Vec<Product>> {
        let mut conn = self.db.acquire().await?;
        let products = sqlx::query_as::<_, Product>(
            "SELECT id, name, oil_type FROM products ORDER BY id DESC",
        )
        .fetch_all(&mut conn)
        .await?;

        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    /// Lists products for a selection list, ordered by name.
    pub async fn options(&self) -> DbResult<Vec<ProductOption>> {
        let mut conn = self.db.acquire().await?;
        let options =
            sqlx::query_as::<_, ProductOption>("SELECT id, name FROM products ORDER BY name, id")
                .fetch_all(&mut conn)
                .await?;

        Ok(options)
    }

    /// Deletes a product together with its batches and sales.
    ///
    /// Idempotent: returns `false` when no such product existed.
    pub async fn delete(&self, id: i64) -> DbResult<bool> {
        debug!(id, "Deleting product");

        let mut conn = self.db.acquire().await?;
        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&mut conn)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DbError;
    use crate::pool::tests::temp_db;
    use oilmill_core::OilType;

    fn new_product(name: &str, oil_type: OilType) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            oil_type,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids() {
        let (_dir, db) = temp_db().await;
        let repo = db.products();

        let a = repo.insert(&new_product("Farm A", OilType::Coconut)).await.unwrap();
        let b = repo.insert(&new_product("Farm B", OilType::Gingelly)).await.unwrap();

        assert!(b.id > a.id);
        assert_eq!(repo.list().await.unwrap(), vec![b, a]);
    }

    #[tokio::test]
    async fn test_list_is_newest_first_and_options_by_name() {
        let (_dir, db) = temp_db().await;
        let repo = db.products();

        repo.insert(&new_product("Zeta", OilType::Groundnut)).await.unwrap();
        repo.insert(&new_product("Alpha", OilType::Coconut)).await.unwrap();
        repo.insert(&new_product("Mid", OilType::Gingelly)).await.unwrap();

        let names: Vec<_> = repo.list().await.unwrap().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Mid", "Alpha", "Zeta"]);

        let options: Vec<_> = repo
            .options()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(options, vec!["Alpha", "Mid", "Zeta"]);
    }

    #[tokio::test]
    async fn test_storage_rejects_unknown_oil_type() {
        let (_dir, db) = temp_db().await;
        let mut conn = db.acquire().await.unwrap();

        let insert = "INSERT INTO products (name, oil_type) VALUES ('X', 'Olive')";
        let err: DbError = sqlx::query(insert)
            .execute(&mut conn)
            .await
            .unwrap_err()
            .into();

        assert!(matches!(err, DbError::CheckViolation { .. }), "got {err:?}");
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let (_dir, db) = temp_db().await;
        let repo = db.products();

        let p = repo.insert(&new_product("Farm A", OilType::Coconut)).await.unwrap();

        assert!(repo.delete(p.id).await.unwrap());
        assert!(!repo.delete(p.id).await.unwrap());
        assert!(!repo.delete(9999).await.unwrap());
        assert!(repo.list().await.unwrap().is_empty());
    }
}
