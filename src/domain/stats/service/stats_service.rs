use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use chrono::NaiveDate;

use crate::core::mock::stats::MockForecastSource;
use crate::core::model::alert::Severity;
use crate::core::model::stats::Stats;
use crate::core::state::alerts::alert_store_manager::AlertStoreManager;
use crate::core::state::alerts::alert_store_repository::AlertStoreRepository;
use crate::domain::stats::service::rollup;

/// Read-side service behind the stats panel and the map coloring.
pub struct StatsService {
    forecasts: Arc<MockForecastSource>,
    alerts: Arc<AlertStoreManager<AlertStoreRepository>>,
}

impl StatsService {
    pub fn new(
        forecasts: Arc<MockForecastSource>,
        alerts: Arc<AlertStoreManager<AlertStoreRepository>>,
    ) -> Self {
        Self { forecasts, alerts }
    }

    /// Stats panel numbers for a country, date, and optional region
    /// selection. `None` means no data exists for that country; the panel
    /// renders an empty state rather than an error.
    pub async fn get_stats_summary(
        &self,
        country_id: &str,
        date: NaiveDate,
        region_ids: &[String],
    ) -> Result<Option<Stats>> {
        let per_region = self.forecasts.stats_by_region(date);
        let national = self.forecasts.national_stats(date);
        Ok(rollup::aggregate_stats(
            region_ids,
            country_id,
            &per_region,
            &national,
        ))
    }

    /// Map coloring for a country and date: region id to the highest
    /// severity among alerts in force that day.
    pub async fn get_region_severities(
        &self,
        country_id: &str,
        date: NaiveDate,
    ) -> Result<HashMap<String, Severity>> {
        let alerts = self.alerts.list_by_country(country_id).await;
        Ok(rollup::resolve_severities(&alerts, date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mock;
    use chrono::Utc;

    fn service_with_seed() -> StatsService {
        let repo = AlertStoreRepository::with_seed(mock::alerts::seed_alerts(Utc::now())).shared();
        StatsService::new(
            Arc::new(MockForecastSource::new()),
            Arc::new(AlertStoreManager::new(repo)),
        )
    }

    #[tokio::test]
    async fn summary_without_selection_matches_the_national_table() {
        let service = service_with_seed();
        let date = NaiveDate::from_ymd_opt(2024, 8, 16).unwrap();

        let summary = service
            .get_stats_summary("colombia", date, &[])
            .await
            .unwrap()
            .unwrap();
        let national = MockForecastSource::new().national_stats(date);

        assert_eq!(summary, national["colombia"]);
    }

    #[tokio::test]
    async fn summary_for_unknown_country_is_none() {
        let service = service_with_seed();
        let date = NaiveDate::from_ymd_opt(2024, 8, 16).unwrap();

        let summary = service
            .get_stats_summary("atlantis", date, &[])
            .await
            .unwrap();

        assert!(summary.is_none());
    }

    #[tokio::test]
    async fn seeded_active_alert_colors_its_regions_today() {
        let service = service_with_seed();
        let today = Utc::now().date_naive();

        let severities = service
            .get_region_severities("colombia", today)
            .await
            .unwrap();

        // alert-1 (orange, active) covers macro-1 and macro-4 today;
        // alert-2 is a draft and must not color macro-2 or macro-10.
        assert_eq!(severities.get("macro-1"), Some(&Severity::Orange));
        assert_eq!(severities.get("macro-4"), Some(&Severity::Orange));
        assert!(!severities.contains_key("macro-2"));
        assert!(!severities.contains_key("macro-10"));
    }
}
