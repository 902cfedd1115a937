use std::sync::Arc;

use chrono::Utc;

use crate::core::mock;
use crate::core::mock::stats::MockForecastSource;
use crate::core::state::alerts::alert_store_manager::AlertStoreManager;
use crate::core::state::alerts::alert_store_repository::AlertStoreRepository;
use crate::domain::ai::service::ai_suggestion_service::AiSuggestionService;
use crate::domain::alert::service::alert_service::AlertService;
use crate::domain::catalog::service::catalog_service::CatalogService;
use crate::domain::stats::service::stats_service::StatsService;

#[derive(Clone)]
pub struct AppState {
    pub alert_service: Arc<AlertService>,
    pub catalog_service: Arc<CatalogService>,
    pub stats_service: Arc<StatsService>,
    pub ai_service: Arc<AiSuggestionService>,
    pub alert_store: Arc<AlertStoreManager<AlertStoreRepository>>,
}

pub fn build_app_state() -> AppState {
    // One seeded repository; every service shares the same store handle
    let repo = AlertStoreRepository::with_seed(mock::alerts::seed_alerts(Utc::now())).shared();
    let alert_store = Arc::new(AlertStoreManager::new(repo));
    let forecasts = Arc::new(MockForecastSource::new());

    AppState {
        alert_service: Arc::new(AlertService::new(alert_store.clone())),
        catalog_service: Arc::new(CatalogService::new()),
        stats_service: Arc::new(StatsService::new(forecasts, alert_store.clone())),
        ai_service: Arc::new(AiSuggestionService::default()),
        alert_store,
    }
}
