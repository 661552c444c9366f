//! Receipt repository

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use crate::models::{AcceptorName, Quantity};
use super::DbError;

const COLUMNS: &str = "id, model_id, receipt_date, quantity, who_accepted";

/// Receipt record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Receipt {
    pub id: i32,
    pub model_id: i32,
    pub receipt_date: DateTime<Utc>,
    pub quantity: i32,
    pub who_accepted: String,
}

/// Fields for a new receipt
#[derive(Debug, Clone)]
pub struct NewReceipt {
    pub model_id: i32,
    pub receipt_date: DateTime<Utc>,
    pub quantity: Quantity,
    pub who_accepted: AcceptorName,
}

/// Partial update; `None` keeps the stored value
#[derive(Debug, Clone, Default)]
pub struct ReceiptPatch {
    pub model_id: Option<i32>,
    pub receipt_date: Option<DateTime<Utc>>,
    pub quantity: Option<Quantity>,
    pub who_accepted: Option<AcceptorName>,
}

impl ReceiptPatch {
    pub fn is_empty(&self) -> bool {
        self.model_id.is_none()
            && self.receipt_date.is_none()
            && self.quantity.is_none()
            && self.who_accepted.is_none()
    }
}

/// Receipt repository
pub struct ReceiptRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ReceiptRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn get(&self, id: i32) -> Result<Receipt, DbError> {
        sqlx::query_as::<_, Receipt>(&format!("SELECT {COLUMNS} FROM receipt WHERE id = $1"))
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(DbError::NotFound {
                resource: "receipt",
                id,
            })
    }

    /// Record a stock intake. A missing model is an integrity error.
    pub async fn create(&self, new: NewReceipt) -> Result<Receipt, DbError> {
        let mut tx = self.pool.begin().await?;

        let receipt: Receipt = sqlx::query_as(&format!(
            r#"
            INSERT INTO receipt (model_id, receipt_date, quantity, who_accepted)
            VALUES ($1, $2, $3, $4)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(new.model_id)
        .bind(new.receipt_date)
        .bind(new.quantity.get())
        .bind(new.who_accepted.as_str())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        tracing::debug!(
            id = receipt.id,
            model_id = receipt.model_id,
            quantity = receipt.quantity,
            "receipt recorded"
        );
        Ok(receipt)
    }

    /// Change exactly the fields present in `patch`.
    pub async fn update(&self, id: i32, patch: ReceiptPatch) -> Result<Receipt, DbError> {
        if patch.is_empty() {
            return self.get(id).await;
        }

        let mut tx = self.pool.begin().await?;

        let receipt: Receipt = sqlx::query_as(&format!(
            r#"
            UPDATE receipt SET
                model_id = COALESCE($2, model_id),
                receipt_date = COALESCE($3, receipt_date),
                quantity = COALESCE($4, quantity),
                who_accepted = COALESCE($5, who_accepted)
            WHERE id = $1
            RETURNING {COLUMNS}
            "#
        ))
        .bind(id)
        .bind(patch.model_id)
        .bind(patch.receipt_date)
        .bind(patch.quantity.map(|q| q.get()))
        .bind(patch.who_accepted.as_ref().map(AcceptorName::as_str))
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(DbError::NotFound {
            resource: "receipt",
            id,
        })?;

        tx.commit().await?;
        Ok(receipt)
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM receipt WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "receipt",
                id,
            });
        }

        tx.commit().await?;
        tracing::debug!(id, "receipt deleted");
        Ok(())
    }
}
