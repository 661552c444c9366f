//! Model endpoints
//!
//! Prices are accepted as JSON numbers or decimal strings and returned as
//! decimal strings.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::db::repos::{Model, ModelPatch, ModelRepo, NewModel};
use crate::http::error::ApiError;
use crate::http::extractors::ValidId;
use crate::http::server::AppState;
use crate::models::{ModelName, Price, ValidationError};

/// Create model request
#[derive(Deserialize)]
pub struct CreateModelRequest {
    pub name: String,
    pub product_id: i32,
    pub price: Decimal,
}

impl CreateModelRequest {
    fn validate(self) -> Result<NewModel, ValidationError> {
        Ok(NewModel {
            name: ModelName::new(&self.name)?,
            product_id: self.product_id,
            price: Price::new(self.price)?,
        })
    }
}

/// Update model request; absent fields are left unchanged
#[derive(Deserialize, Default)]
pub struct UpdateModelRequest {
    pub name: Option<String>,
    pub product_id: Option<i32>,
    pub price: Option<Decimal>,
}

impl UpdateModelRequest {
    fn validate(self) -> Result<ModelPatch, ValidationError> {
        Ok(ModelPatch {
            name: self.name.as_deref().map(ModelName::new).transpose()?,
            product_id: self.product_id,
            price: self.price.map(Price::new).transpose()?,
        })
    }
}

/// Model response
#[derive(Debug, Serialize)]
pub struct ModelResponse {
    pub id: i32,
    pub name: String,
    pub product_id: i32,
    pub price: Decimal,
}

impl From<Model> for ModelResponse {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            product_id: m.product_id,
            price: m.price,
        }
    }
}

/// POST /model
async fn create_model(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateModelRequest>,
) -> Result<(StatusCode, Json<ModelResponse>), ApiError> {
    let new = req.validate()?;
    let model = ModelRepo::new(&state.pool).create(new).await?;

    Ok((StatusCode::CREATED, Json(ModelResponse::from(model))))
}

/// GET /model/{id}
async fn get_model(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<ModelResponse>, ApiError> {
    let model = ModelRepo::new(&state.pool).get(id).await?;
    Ok(Json(ModelResponse::from(model)))
}

/// PUT /model/{id}
async fn update_model(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
    Json(req): Json<UpdateModelRequest>,
) -> Result<Json<ModelResponse>, ApiError> {
    let patch = req.validate()?;
    let model = ModelRepo::new(&state.pool).update(id, patch).await?;

    Ok(Json(ModelResponse::from(model)))
}

/// DELETE /model/{id}
async fn delete_model(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<StatusCode, ApiError> {
    ModelRepo::new(&state.pool).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Model routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/model", post(create_model))
        .route(
            "/model/{id}",
            get(get_model).put(update_model).delete(delete_model),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_accepts_number_or_string() {
        let from_number: CreateModelRequest =
            serde_json::from_str(r#"{"name":"X1","product_id":1,"price":199.99}"#).unwrap();
        let from_string: CreateModelRequest =
            serde_json::from_str(r#"{"name":"X1","product_id":1,"price":"199.99"}"#).unwrap();

        assert_eq!(from_number.price, from_string.price);
        assert_eq!(from_string.price, Decimal::new(19999, 2));
    }

    #[test]
    fn update_validates_only_supplied_fields() {
        let req: UpdateModelRequest = serde_json::from_str(r#"{"price":"10.50"}"#).unwrap();
        let patch = req.validate().unwrap();

        assert!(patch.name.is_none());
        assert!(patch.product_id.is_none());
        assert_eq!(patch.price.map(|p| p.value()), Some(Decimal::new(105, 1)));
    }

    #[test]
    fn update_rejects_blank_name() {
        let req: UpdateModelRequest = serde_json::from_str(r#"{"name":"  "}"#).unwrap();
        assert!(matches!(
            req.validate(),
            Err(ValidationError::Empty { field: "name" })
        ));
    }

    #[test]
    fn response_serializes_price_as_string() {
        let response = ModelResponse::from(Model {
            id: 1,
            name: "X1".into(),
            product_id: 2,
            price: Decimal::new(19999, 2),
        });
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["price"], "199.99");
        assert_eq!(json["product_id"], 2);
    }
}
