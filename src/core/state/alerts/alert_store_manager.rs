use std::sync::Arc;

use chrono::NaiveDate;

use crate::core::model::alert::Alert;
use crate::core::state::alerts::alert_store::{AlertStore, StatusGroups};
use crate::core::state::alerts::alert_store_repository_trait::AlertStoreRepositoryTrait;

/// Async facade over the alert store. All writes funnel through
/// `repo.update`, which serializes them, so save's version bump and the
/// overdue sweep stay atomic even with concurrent API handlers.
pub struct AlertStoreManager<R: AlertStoreRepositoryTrait> {
    repo: Arc<R>,
}

impl<R: AlertStoreRepositoryTrait> AlertStoreManager<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Insert or replace one alert, returning the record as stored.
    pub async fn save(&self, alert: Alert) -> Alert {
        self.repo.update(move |store| store.save(alert)).await
    }

    /// Remove by id; unknown ids are a no-op. Returns whether a record
    /// was removed.
    pub async fn delete(&self, id: &str) -> bool {
        let id = id.to_string();
        self.repo.update(move |store| store.delete(&id)).await
    }

    pub async fn get(&self, id: &str) -> Option<Alert> {
        self.repo.get().await.get(id).cloned()
    }

    pub async fn list_by_country(&self, country_id: &str) -> Vec<Alert> {
        self.repo.get().await.list_by_country(country_id)
    }

    pub async fn list_by_country_grouped(&self, country_id: &str) -> StatusGroups {
        AlertStore::partition_by_status(self.list_by_country(country_id).await)
    }

    /// Flip active alerts whose window ended before `today` to expired.
    pub async fn expire_overdue(&self, today: NaiveDate) -> Vec<String> {
        self.repo.update(move |store| store.expire_overdue(today)).await
    }
}
