use axum::extract::State;
use axum::Json;

use crate::api::dto::ApiResponse;
use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::domain::ai::dto::alert_edits_request::{AlertEditsRequest, AlertEditsResponse};
use crate::domain::ai::dto::justification_request::{JustificationRequest, JustificationResponse};
use crate::errors::AppError;

pub struct AiController;

impl AiController {
    pub async fn suggest_justification(
        State(state): State<AppState>,
        Json(payload): Json<JustificationRequest>,
    ) -> Result<Json<ApiResponse<JustificationResponse>>, AppError> {
        to_json(state.ai_service.suggest_justification(payload).await)
    }

    pub async fn suggest_alert_edits(
        State(state): State<AppState>,
        Json(payload): Json<AlertEditsRequest>,
    ) -> Result<Json<ApiResponse<AlertEditsResponse>>, AppError> {
        to_json(state.ai_service.suggest_alert_edits(payload).await)
    }
}
