use std::collections::HashMap;

use chrono::{NaiveDate, Utc};
use serde::Serialize;

use crate::core::model::alert::{Alert, AlertStatus};

/// In-memory alert collection keyed by id.
///
/// A save either inserts the record exactly as supplied (the caller owns the
/// initial version) or replaces an existing record wholesale, in which case
/// the store, not the caller, owns `version` and `last_updated`.
#[derive(Debug, Clone, Default)]
pub struct AlertStore {
    alerts: HashMap<String, Alert>,
}

/// Three-way split of a country's alerts by status. Every alert lands in
/// exactly one group.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusGroups {
    pub drafts: Vec<Alert>,
    pub active: Vec<Alert>,
    pub expired: Vec<Alert>,
}

impl AlertStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bootstrap a store with pre-built records, versions and timestamps
    /// untouched.
    pub fn seeded(alerts: Vec<Alert>) -> Self {
        Self {
            alerts: alerts
                .into_iter()
                .map(|alert| (alert.id.clone(), alert))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Alert> {
        self.alerts.get(id)
    }

    /// Insert or replace by id, returning the record as stored.
    ///
    /// When the id already exists the incoming `version` and `last_updated`
    /// are overwritten: the version becomes the stored one plus exactly one,
    /// and the timestamp becomes now.
    pub fn save(&mut self, mut alert: Alert) -> Alert {
        if let Some(existing) = self.alerts.get(&alert.id) {
            alert.version = existing.version + 1;
            alert.last_updated = Utc::now();
        }
        self.alerts.insert(alert.id.clone(), alert.clone());
        alert
    }

    /// Remove by id. Removing an unknown id is a no-op, not an error.
    /// Returns whether a record was actually removed.
    pub fn delete(&mut self, id: &str) -> bool {
        self.alerts.remove(id).is_some()
    }

    /// All alerts for one country, ordered by publication instant so
    /// listings stay deterministic.
    pub fn list_by_country(&self, country_id: &str) -> Vec<Alert> {
        let mut alerts: Vec<Alert> = self
            .alerts
            .values()
            .filter(|alert| alert.country_id == country_id)
            .cloned()
            .collect();
        alerts.sort_by(|a, b| a.push_date_time.cmp(&b.push_date_time).then(a.id.cmp(&b.id)));
        alerts
    }

    /// Split records into draft / active / expired groups.
    pub fn partition_by_status(alerts: Vec<Alert>) -> StatusGroups {
        let mut groups = StatusGroups::default();
        for alert in alerts {
            match alert.status {
                AlertStatus::Draft => groups.drafts.push(alert),
                AlertStatus::Active => groups.active.push(alert),
                AlertStatus::Expired => groups.expired.push(alert),
            }
        }
        groups
    }

    /// Flip active alerts whose window ended before `today` to expired.
    ///
    /// Goes through [`save`](Self::save) so each flip bumps the version and
    /// refreshes `last_updated` like any other replacing write. Returns the
    /// ids that were flipped.
    pub fn expire_overdue(&mut self, today: NaiveDate) -> Vec<String> {
        let overdue: Vec<Alert> = self
            .alerts
            .values()
            .filter(|alert| alert.status == AlertStatus::Active && alert.event_dates.end() < today)
            .cloned()
            .collect();

        let mut flipped = Vec::with_capacity(overdue.len());
        for mut alert in overdue {
            alert.status = AlertStatus::Expired;
            flipped.push(alert.id.clone());
            self.save(alert);
        }
        flipped.sort();
        flipped
    }
}
