use axum::{routing::post, Router};

use crate::api::controller::ai::AiController;
use crate::app_state::AppState;

pub fn ai_routes() -> Router<AppState> {
    Router::new()
        .route("/justification", post(AiController::suggest_justification))
        .route("/alert-edits", post(AiController::suggest_alert_edits))
}
