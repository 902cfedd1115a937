use serde::Deserialize;

use crate::core::model::alert::AlertStatus;

/// Query for alert listings: `?countryId=colombia&status=draft`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertListQuery {
    pub country_id: String,
    /// Optional narrowing to one status.
    pub status: Option<AlertStatus>,
}

/// Query carrying just the owning country.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertCountryQuery {
    pub country_id: String,
}
