//! Receipt (stock intake) endpoints
//!
//! Wire names are `receiptDate` and `whoAccepted`; the rest is snake_case.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::db::repos::{NewReceipt, Receipt, ReceiptPatch, ReceiptRepo};
use crate::http::error::ApiError;
use crate::http::extractors::ValidId;
use crate::http::server::AppState;
use crate::models::{AcceptorName, Quantity, ValidationError};

/// Create receipt request
#[derive(Deserialize)]
pub struct CreateReceiptRequest {
    pub model_id: i32,
    #[serde(rename = "receiptDate")]
    pub receipt_date: DateTime<Utc>,
    pub quantity: i32,
    #[serde(rename = "whoAccepted")]
    pub who_accepted: String,
}

impl CreateReceiptRequest {
    fn validate(self) -> Result<NewReceipt, ValidationError> {
        Ok(NewReceipt {
            model_id: self.model_id,
            receipt_date: self.receipt_date,
            quantity: Quantity::new(self.quantity)?,
            who_accepted: AcceptorName::new(&self.who_accepted)?,
        })
    }
}

/// Update receipt request; absent fields are left unchanged
#[derive(Deserialize, Default)]
pub struct UpdateReceiptRequest {
    pub model_id: Option<i32>,
    #[serde(rename = "receiptDate")]
    pub receipt_date: Option<DateTime<Utc>>,
    pub quantity: Option<i32>,
    #[serde(rename = "whoAccepted")]
    pub who_accepted: Option<String>,
}

impl UpdateReceiptRequest {
    fn validate(self) -> Result<ReceiptPatch, ValidationError> {
        Ok(ReceiptPatch {
            model_id: self.model_id,
            receipt_date: self.receipt_date,
            quantity: self.quantity.map(Quantity::new).transpose()?,
            who_accepted: self
                .who_accepted
                .as_deref()
                .map(AcceptorName::new)
                .transpose()?,
        })
    }
}

/// Receipt response
#[derive(Debug, Serialize)]
pub struct ReceiptResponse {
    pub id: i32,
    pub model_id: i32,
    #[serde(rename = "receiptDate")]
    pub receipt_date: String,
    pub quantity: i32,
    #[serde(rename = "whoAccepted")]
    pub who_accepted: String,
}

impl From<Receipt> for ReceiptResponse {
    fn from(r: Receipt) -> Self {
        Self {
            id: r.id,
            model_id: r.model_id,
            receipt_date: r.receipt_date.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            quantity: r.quantity,
            who_accepted: r.who_accepted,
        }
    }
}

/// POST /receipt
async fn create_receipt(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateReceiptRequest>,
) -> Result<(StatusCode, Json<ReceiptResponse>), ApiError> {
    let new = req.validate()?;
    let receipt = ReceiptRepo::new(&state.pool).create(new).await?;

    Ok((StatusCode::CREATED, Json(ReceiptResponse::from(receipt))))
}

/// GET /receipt/{id}
async fn get_receipt(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<ReceiptResponse>, ApiError> {
    let receipt = ReceiptRepo::new(&state.pool).get(id).await?;
    Ok(Json(ReceiptResponse::from(receipt)))
}

/// PUT /receipt/{id}
async fn update_receipt(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
    Json(req): Json<UpdateReceiptRequest>,
) -> Result<Json<ReceiptResponse>, ApiError> {
    let patch = req.validate()?;
    let receipt = ReceiptRepo::new(&state.pool).update(id, patch).await?;

    Ok(Json(ReceiptResponse::from(receipt)))
}

/// DELETE /receipt/{id}
async fn delete_receipt(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<StatusCode, ApiError> {
    ReceiptRepo::new(&state.pool).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Receipt routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/receipt", post(create_receipt))
        .route(
            "/receipt/{id}",
            get(get_receipt).put(update_receipt).delete(delete_receipt),
        )
}
