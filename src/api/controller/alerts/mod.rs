use axum::extract::{Path, Query, State};
use axum::Json;
use serde_json::Value;

use crate::api::dto::alert_dto::{AlertCountryQuery, AlertListQuery};
use crate::api::dto::ApiResponse;
use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::core::model::alert::Alert;
use crate::core::state::alerts::alert_store::StatusGroups;
use crate::domain::alert::dto::alert_save_request::AlertSaveRequest;
use crate::errors::AppError;

pub struct AlertController;

impl AlertController {
    pub async fn list_alerts(
        State(state): State<AppState>,
        Query(query): Query<AlertListQuery>,
    ) -> Result<Json<ApiResponse<Vec<Alert>>>, AppError> {
        to_json(
            state
                .alert_service
                .list_alerts(&query.country_id, query.status)
                .await,
        )
    }

    pub async fn list_alerts_by_status(
        State(state): State<AppState>,
        Query(query): Query<AlertCountryQuery>,
    ) -> Result<Json<ApiResponse<StatusGroups>>, AppError> {
        to_json(
            state
                .alert_service
                .list_alerts_by_status(&query.country_id)
                .await,
        )
    }

    pub async fn get_alert(
        State(state): State<AppState>,
        Path(id): Path<String>,
    ) -> Result<Json<ApiResponse<Alert>>, AppError> {
        to_json(state.alert_service.get_alert(&id).await)
    }

    pub async fn save_alert(
        State(state): State<AppState>,
        Json(payload): Json<AlertSaveRequest>,
    ) -> Result<Json<ApiResponse<Alert>>, AppError> {
        to_json(state.alert_service.save_alert(payload).await)
    }

    pub async fn delete_alert(
        State(state): State<AppState>,
        Path(id): Path<String>,
    ) -> Result<Json<ApiResponse<Value>>, AppError> {
        to_json(state.alert_service.delete_alert(&id).await)
    }
}
