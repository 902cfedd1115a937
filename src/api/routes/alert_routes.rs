use axum::{routing::get, Router};

use crate::api::controller::alerts::AlertController;
use crate::app_state::AppState;

pub fn alert_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(AlertController::list_alerts).put(AlertController::save_alert))
        .route("/by-status", get(AlertController::list_alerts_by_status))
        .route(
            "/{id}",
            get(AlertController::get_alert).delete(AlertController::delete_alert),
        )
}
