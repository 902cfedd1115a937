use axum::{routing::get, Router};

use crate::api::controller::stats::StatsController;
use crate::app_state::AppState;

pub fn stats_routes() -> Router<AppState> {
    Router::new()
        .route("/summary", get(StatsController::get_stats_summary))
        .route("/severities", get(StatsController::get_region_severities))
}
