//! Model repository
//!
//! `product_id` is checked by the foreign key, not by a pre-read, so a
//! missing product surfaces as `DbError::Integrity`.

use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};

use crate::models::{ModelName, Price};
use super::DbError;

const COLUMNS: &str = "id, name, product_id, price";

/// Model record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Model {
    pub id: i32,
    pub name: String,
    pub product_id: i32,
    pub price: Decimal,
}

/// Fields for a new model
#[derive(Debug, Clone)]
pub struct NewModel {
    pub name: ModelName,
    pub product_id: i32,
    pub price: Price,
}

/// Partial update; `None` keeps the stored value
#[derive(Debug, Clone, Default)]
pub struct ModelPatch {
    pub name: Option<ModelName>,
    pub product_id: Option<i32>,
    pub price: Option<Price>,
}

impl ModelPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.product_id.is_none() && self.price.is_none()
    }
}

/// Model repository
pub struct ModelRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ModelRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn get(&self, id: i32) -> Result<Model, DbError> {
        sqlx::query_as::<_, Model>(&format!("SELECT {COLUMNS} FROM model WHERE id = $1"))
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(DbError::NotFound {
                resource: "model",
                id,
            })
    }

    pub async fn create(&self, new: NewModel) -> Result<Model, DbError> {
        let mut tx = self.pool.begin().await?;

        let model: Model = sqlx::query_as(&format!(
            "INSERT INTO model (name, product_id, price) VALUES ($1, $2, $3) RETURNING {COLUMNS}"
        ))
        .bind(new.name.as_str())
        .bind(new.product_id)
        .bind(new.price.value())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        tracing::debug!(id = model.id, product_id = model.product_id, "model created");
        Ok(model)
    }

    /// Apply a partial update and return the stored row.
    ///
    /// An empty patch is a plain read.
    pub async fn update(&self, id: i32, patch: ModelPatch) -> Result<Model, DbError> {
        if patch.is_empty() {
            return self.get(id).await;
        }

        let mut tx = self.pool.begin().await?;

        let model: Model = sqlx::query_as(&format!(
            r#"
            UPDATE model SET
                name = COALESCE($2, name),
                product_id = COALESCE($3, product_id),
                price = COALESCE($4, price)
            WHERE id = $1
            RETURNING {COLUMNS}
            "#
        ))
        .bind(id)
        .bind(patch.name.as_ref().map(ModelName::as_str))
        .bind(patch.product_id)
        .bind(patch.price.map(|p| p.value()))
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(DbError::NotFound {
            resource: "model",
            id,
        })?;

        tx.commit().await?;
        Ok(model)
    }

    /// Delete a model. Fails with an integrity error while receipts reference it.
    pub async fn delete(&self, id: i32) -> Result<(), DbError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM model WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "model",
                id,
            });
        }

        tx.commit().await?;
        tracing::debug!(id, "model deleted");
        Ok(())
    }
}
