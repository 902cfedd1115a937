use axum::extract::State;
use axum::Json;

use crate::api::dto::ApiResponse;
use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::core::model::geography::{Country, ForecastProvider};
use crate::errors::AppError;

pub struct CatalogController;

impl CatalogController {
    pub async fn list_countries(
        State(state): State<AppState>,
    ) -> Result<Json<ApiResponse<Vec<Country>>>, AppError> {
        to_json(state.catalog_service.list_countries().await)
    }

    pub async fn list_providers(
        State(state): State<AppState>,
    ) -> Result<Json<ApiResponse<Vec<ForecastProvider>>>, AppError> {
        to_json(state.catalog_service.list_providers().await)
    }
}
