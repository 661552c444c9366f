//! Product endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::repos::{Product, ProductRepo};
use crate::http::error::ApiError;
use crate::http::extractors::ValidId;
use crate::http::server::AppState;
use crate::models::ProductName;

/// Create or rename request; both carry the full record
#[derive(Deserialize)]
pub struct ProductRequest {
    pub name: String,
}

/// Product response
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
        }
    }
}

/// POST /product
async fn create_product(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>), ApiError> {
    let name = ProductName::new(&req.name)?;
    let product = ProductRepo::new(&state.pool).create(name).await?;

    Ok((StatusCode::CREATED, Json(ProductResponse::from(product))))
}

/// GET /product/{id}
async fn get_product(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<ProductResponse>, ApiError> {
    let product = ProductRepo::new(&state.pool).get(id).await?;
    Ok(Json(ProductResponse::from(product)))
}

/// PUT /product/{id}
async fn update_product(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
    Json(req): Json<ProductRequest>,
) -> Result<Json<ProductResponse>, ApiError> {
    let name = ProductName::new(&req.name)?;
    let product = ProductRepo::new(&state.pool).update(id, name).await?;

    Ok(Json(ProductResponse::from(product)))
}

/// DELETE /product/{id}
async fn delete_product(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<StatusCode, ApiError> {
    ProductRepo::new(&state.pool).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Product routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/product", post(create_product))
        .route(
            "/product/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
}
