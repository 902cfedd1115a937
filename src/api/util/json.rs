use anyhow::Result;
use axum::Json;

use crate::api::dto::ApiResponse;
use crate::errors::{internal_error, AppError};

/// Map a service result into the API envelope.
///
/// Typed errors keep their status: an [`AppError`] anywhere in the chain is
/// returned as-is, validation failures become 400, everything else falls
/// back to a 500 that preserves the original error string.
pub fn to_json<T: serde::Serialize>(result: Result<T>) -> Result<Json<ApiResponse<T>>, AppError> {
    match result {
        Ok(value) => Ok(Json(ApiResponse::ok(value))),
        Err(err) => {
            if let Some(app_error) = err.downcast_ref::<AppError>() {
                return Err(app_error.clone());
            }
            if let Some(validation) = err.downcast_ref::<validator::ValidationErrors>() {
                return Err(AppError::ValidationError(validation.to_string()));
            }
            Err(internal_error(err))
        }
    }
}
