use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use serde_json::Value;
use validator::Validate;

use crate::core::model::alert::{Alert, AlertStatus};
use crate::core::state::alerts::alert_store::StatusGroups;
use crate::core::state::alerts::alert_store_manager::AlertStoreManager;
use crate::core::state::alerts::alert_store_repository::AlertStoreRepository;
use crate::domain::alert::dto::alert_save_request::AlertSaveRequest;
use crate::errors::AppError;

/// CRUD surface over the alert store.
pub struct AlertService {
    store: Arc<AlertStoreManager<AlertStoreRepository>>,
}

impl AlertService {
    pub fn new(store: Arc<AlertStoreManager<AlertStoreRepository>>) -> Self {
        Self { store }
    }

    /// All alerts for one country, optionally narrowed to a single status.
    pub async fn list_alerts(
        &self,
        country_id: &str,
        status: Option<AlertStatus>,
    ) -> Result<Vec<Alert>> {
        let mut alerts = self.store.list_by_country(country_id).await;
        if let Some(status) = status {
            alerts.retain(|alert| alert.status == status);
        }
        Ok(alerts)
    }

    /// A country's alerts grouped into drafts / active / expired.
    pub async fn list_alerts_by_status(&self, country_id: &str) -> Result<StatusGroups> {
        Ok(self.store.list_by_country_grouped(country_id).await)
    }

    pub async fn get_alert(&self, id: &str) -> Result<Alert> {
        self.store
            .get(id)
            .await
            .ok_or_else(|| AppError::NotFound(format!("alert {id} does not exist")).into())
    }

    /// Validate and upsert one alert, returning the record as stored (with
    /// the store-decided version on replacing saves).
    pub async fn save_alert(&self, req: AlertSaveRequest) -> Result<Alert> {
        req.validate()?;

        let existing = match req.id.as_deref() {
            Some(id) => self.store.get(id).await,
            None => None,
        };
        let alert = req.into_alert(existing.as_ref(), Utc::now());

        Ok(self.store.save(alert).await)
    }

    /// Delete by id. Deleting an unknown id succeeds and says so.
    pub async fn delete_alert(&self, id: &str) -> Result<Value> {
        let removed = self.store.delete(id).await;

        Ok(serde_json::json!({
            "message": if removed { "Alert deleted" } else { "Alert did not exist" },
            "removed": removed,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::alert::Severity;
    use chrono::NaiveDate;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn service() -> AlertService {
        let repo = AlertStoreRepository::new().shared();
        AlertService::new(Arc::new(AlertStoreManager::new(repo)))
    }

    fn save_request(id: Option<&str>) -> AlertSaveRequest {
        AlertSaveRequest {
            id: id.map(str::to_string),
            country_id: "colombia".into(),
            region_ids: vec!["macro-1".into(), "macro-4".into()],
            severity: Severity::Orange,
            event_type: "Heavy Rainfall".into(),
            push_date_time: Utc::now(),
            event_date_from: day(2024, 8, 16),
            event_date_to: Some(day(2024, 8, 17)),
            justification: "Models agree on 50-75mm of rain within 24 hours.".into(),
            image_url: None,
            status: Some(AlertStatus::Active),
            author: Some("Juan Valdez".into()),
        }
    }

    #[tokio::test]
    async fn save_new_alert_then_fetch_it_back() {
        let service = service();

        let saved = service.save_alert(save_request(None)).await.unwrap();
        assert_eq!(saved.version, 1);

        let fetched = service.get_alert(&saved.id).await.unwrap();
        assert_eq!(fetched.event_type, "Heavy Rainfall");
        assert_eq!(fetched.status, AlertStatus::Active);
    }

    #[tokio::test]
    async fn resaving_same_id_bumps_the_version() {
        let service = service();
        service.save_alert(save_request(Some("alert-1"))).await.unwrap();

        let saved = service.save_alert(save_request(Some("alert-1"))).await.unwrap();

        assert_eq!(saved.version, 2);
    }

    #[tokio::test]
    async fn save_without_regions_is_rejected() {
        let service = service();
        let mut req = save_request(None);
        req.region_ids.clear();

        let err = service.save_alert(req).await.unwrap_err();

        assert!(err.downcast_ref::<validator::ValidationErrors>().is_some());
    }

    #[tokio::test]
    async fn get_unknown_alert_is_a_typed_not_found() {
        let service = service();

        let err = service.get_alert("alert-999").await.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<AppError>(),
            Some(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn delete_reports_whether_anything_was_removed() {
        let service = service();
        let saved = service.save_alert(save_request(None)).await.unwrap();

        let gone = service.delete_alert(&saved.id).await.unwrap();
        assert_eq!(gone.get("removed").and_then(Value::as_bool), Some(true));

        let missing = service.delete_alert("alert-999").await.unwrap();
        assert_eq!(missing.get("removed").and_then(Value::as_bool), Some(false));
        assert_eq!(
            missing.get("message").and_then(Value::as_str),
            Some("Alert did not exist")
        );
    }

    #[tokio::test]
    async fn listing_filters_by_status_when_asked() {
        let service = service();
        service.save_alert(save_request(Some("alert-1"))).await.unwrap();
        let mut draft = save_request(Some("alert-2"));
        draft.status = Some(AlertStatus::Draft);
        service.save_alert(draft).await.unwrap();

        let all = service.list_alerts("colombia", None).await.unwrap();
        let drafts = service
            .list_alerts("colombia", Some(AlertStatus::Draft))
            .await
            .unwrap();

        assert_eq!(all.len(), 2);
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].id, "alert-2");
    }

    #[tokio::test]
    async fn grouped_listing_partitions_every_alert() {
        let service = service();
        service.save_alert(save_request(Some("alert-1"))).await.unwrap();
        let mut draft = save_request(Some("alert-2"));
        draft.status = Some(AlertStatus::Draft);
        service.save_alert(draft).await.unwrap();
        let mut expired = save_request(Some("alert-3"));
        expired.status = Some(AlertStatus::Expired);
        service.save_alert(expired).await.unwrap();

        let groups = service.list_alerts_by_status("colombia").await.unwrap();

        assert_eq!(groups.active.len(), 1);
        assert_eq!(groups.drafts.len(), 1);
        assert_eq!(groups.expired.len(), 1);
    }
}
