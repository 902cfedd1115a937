use chrono::NaiveDate;
use serde::Deserialize;
use serde_with::formats::CommaSeparator;
use serde_with::{serde_as, StringWithSeparator};

/// Query for the stats panel: a country, a calendar date, and an optional
/// comma-separated region selection
/// (`?countryId=colombia&date=2024-08-16&regionIds=macro-1,macro-4`).
#[serde_as]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummaryQuery {
    pub country_id: String,
    pub date: NaiveDate,
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, String>")]
    #[serde(default)]
    pub region_ids: Vec<String>,
}

/// Query for the map coloring: `?countryId=colombia&date=2024-08-16`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeverityMapQuery {
    pub country_id: String,
    pub date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn region_ids_split_on_commas() {
        let query: StatsSummaryQuery = serde_json::from_value(json!({
            "countryId": "colombia",
            "date": "2024-08-16",
            "regionIds": "macro-1,macro-4",
        }))
        .unwrap();

        assert_eq!(query.country_id, "colombia");
        assert_eq!(query.date, NaiveDate::from_ymd_opt(2024, 8, 16).unwrap());
        assert_eq!(query.region_ids, vec!["macro-1", "macro-4"]);
    }

    #[test]
    fn missing_region_ids_mean_whole_country() {
        let query: StatsSummaryQuery = serde_json::from_value(json!({
            "countryId": "kenya",
            "date": "2024-08-16",
        }))
        .unwrap();

        assert!(query.region_ids.is_empty());
    }
}
