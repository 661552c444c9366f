//! Custom Axum extractors

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use crate::models::ValidationError;
use super::error::ApiError;

/// Extract an integer row id from the path
///
/// Rejects non-integers with the JSON validation error instead of axum's
/// plain-text path rejection.
pub struct ValidId(pub i32);

impl<S> FromRequestParts<S> for ValidId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Validation(ValidationError::Empty { field: "id" }))?;

        let id = raw.parse::<i32>().map_err(|_| {
            ApiError::Validation(ValidationError::OutOfRange {
                field: "id",
                reason: "must be a 32-bit integer",
            })
        })?;

        Ok(Self(id))
    }
}
