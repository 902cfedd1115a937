use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::model::alert::Severity;

/// Input for the justification suggester; mirrors what the alert form
/// sends when a MeteOps Lead asks for a draft.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct JustificationRequest {
    /// Region names the alert covers.
    #[validate(length(min = 1))]
    pub regions: Vec<String>,

    /// ISO-8601 date of the event the alert warns about.
    #[validate(length(min = 1))]
    pub event_date: String,

    /// e.g. "heavy rainfall"
    #[validate(length(min = 1))]
    pub event_type: String,

    pub severity: Severity,

    /// Ensemble forecast excerpt backing the severity choice.
    #[validate(length(min = 1))]
    pub ensemble_forecasts: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JustificationResponse {
    pub justification: String,
}
