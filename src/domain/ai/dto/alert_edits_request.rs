use serde::{Deserialize, Serialize};
use validator::Validate;

/// Input for the edit suggester: an existing alert text plus the forecast
/// data that changed underneath it.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AlertEditsRequest {
    #[validate(length(min = 1))]
    pub original_alert: String,

    #[validate(length(min = 1))]
    pub updated_forecast: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertEditsResponse {
    pub suggested_edits: String,
}
