//! Product repository
//!
//! Single-row CRUD. Writes run inside a transaction that commits only on
//! success; duplicate names come back as `DbError::Integrity`.

use sqlx::{FromRow, PgPool};

use crate::models::ProductName;
use super::DbError;

/// Product record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
}

/// Product repository
pub struct ProductRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get a single product by id.
    pub async fn get(&self, id: i32) -> Result<Product, DbError> {
        sqlx::query_as::<_, Product>("SELECT id, name FROM product WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(DbError::NotFound {
                resource: "product",
                id,
            })
    }

    /// Insert a product.
    pub async fn create(&self, name: ProductName) -> Result<Product, DbError> {
        let mut tx = self.pool.begin().await?;

        let product: Product =
            sqlx::query_as("INSERT INTO product (name) VALUES ($1) RETURNING id, name")
                .bind(name.as_str())
                .fetch_one(&mut *tx)
                .await?;

        tx.commit().await?;
        tracing::debug!(id = product.id, "product created");
        Ok(product)
    }

    /// Replace the name of an existing product.
    pub async fn update(&self, id: i32, name: ProductName) -> Result<Product, DbError> {
        let mut tx = self.pool.begin().await?;

        let product: Product = sqlx::query_as(
            "UPDATE product SET name = $2 WHERE id = $1 RETURNING id, name",
        )
        .bind(id)
        .bind(name.as_str())
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(DbError::NotFound {
            resource: "product",
            id,
        })?;

        tx.commit().await?;
        Ok(product)
    }

    /// Delete a product. Fails with an integrity error while models reference it.
    pub async fn delete(&self, id: i32) -> Result<(), DbError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM product WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "product",
                id,
            });
        }

        tx.commit().await?;
        tracing::debug!(id, "product deleted");
        Ok(())
    }
}
