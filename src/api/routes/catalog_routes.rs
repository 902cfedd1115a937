use axum::{routing::get, Router};

use crate::api::controller::catalog::CatalogController;
use crate::app_state::AppState;

pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/countries", get(CatalogController::list_countries))
        .route("/providers", get(CatalogController::list_providers))
}
