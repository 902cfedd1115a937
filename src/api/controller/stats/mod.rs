use std::collections::HashMap;

use axum::extract::{Query, State};
use axum::Json;

use crate::api::dto::stats_dto::{SeverityMapQuery, StatsSummaryQuery};
use crate::api::dto::ApiResponse;
use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::core::model::alert::Severity;
use crate::core::model::stats::Stats;
use crate::errors::AppError;

pub struct StatsController;

impl StatsController {
    /// `data` is null when the country has no stats for that date.
    pub async fn get_stats_summary(
        State(state): State<AppState>,
        Query(query): Query<StatsSummaryQuery>,
    ) -> Result<Json<ApiResponse<Option<Stats>>>, AppError> {
        to_json(
            state
                .stats_service
                .get_stats_summary(&query.country_id, query.date, &query.region_ids)
                .await,
        )
    }

    pub async fn get_region_severities(
        State(state): State<AppState>,
        Query(query): Query<SeverityMapQuery>,
    ) -> Result<Json<ApiResponse<HashMap<String, Severity>>>, AppError> {
        to_json(
            state
                .stats_service
                .get_region_severities(&query.country_id, query.date)
                .await,
        )
    }
}
