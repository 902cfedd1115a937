use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::core::model::alert::{Alert, AlertStatus, EventDates, Severity};

/// Author recorded on saves that do not carry one.
const DEFAULT_AUTHOR: &str = "MeteOps Lead";

/// Upsert payload for one alert. An absent `id` means "create".
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_window"))]
pub struct AlertSaveRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[validate(length(min = 1))]
    pub country_id: String,

    /// Must name at least one region; saves without a selection are
    /// rejected before they reach the store.
    #[validate(length(min = 1))]
    pub region_ids: Vec<String>,

    pub severity: Severity,

    #[validate(length(min = 2, max = 120))]
    pub event_type: String,

    pub push_date_time: DateTime<Utc>,

    pub event_date_from: NaiveDate,

    /// Optional last covered day; absent means the single day
    /// `event_date_from`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_date_to: Option<NaiveDate>,

    #[validate(length(min = 10))]
    pub justification: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// New alerts default to draft; edits keep the stored status when the
    /// caller sends none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AlertStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

/// Cross-field rule: a window end before its start can never match a day,
/// so reject it at the boundary instead of storing a dead alert.
fn validate_window(req: &AlertSaveRequest) -> Result<(), ValidationError> {
    if let Some(to) = req.event_date_to {
        if to < req.event_date_from {
            return Err(ValidationError::new("window_inverted"));
        }
    }
    Ok(())
}

impl AlertSaveRequest {
    /// Build the record handed to the store.
    ///
    /// New alerts get a generated id, version 1, and draft status unless
    /// the payload says otherwise. Edits keep the stored status and author
    /// as fallbacks; `version` is set to 1 here regardless because the
    /// store owns the bump on replacing saves.
    pub fn into_alert(self, existing: Option<&Alert>, now: DateTime<Utc>) -> Alert {
        let status = self
            .status
            .or_else(|| existing.map(|alert| alert.status))
            .unwrap_or(AlertStatus::Draft);
        let author = self
            .author
            .or_else(|| existing.map(|alert| alert.author.clone()))
            .unwrap_or_else(|| DEFAULT_AUTHOR.to_string());

        Alert {
            id: self.id.unwrap_or_else(generate_alert_id),
            country_id: self.country_id,
            region_ids: self.region_ids,
            severity: self.severity,
            event_type: self.event_type,
            push_date_time: self.push_date_time,
            event_dates: EventDates {
                from: self.event_date_from,
                to: self.event_date_to,
            },
            justification: self.justification,
            image_url: self.image_url,
            status,
            author,
            last_updated: now,
            version: 1,
        }
    }
}

fn generate_alert_id() -> String {
    format!("alert-{}", Uuid::new_v4())
}
