use std::collections::HashMap;

use chrono::NaiveDate;

use crate::core::model::alert::{Alert, Severity};
use crate::core::model::stats::{Stats, UserStats};

/// Highest severity per region among alerts in force on `date`.
///
/// Regions covered by no active alert are absent from the result, they are
/// never mapped to some "none" level. Taking the max is commutative, so the
/// input order of alerts cannot change the outcome.
pub fn resolve_severities(alerts: &[Alert], date: NaiveDate) -> HashMap<String, Severity> {
    let mut severities: HashMap<String, Severity> = HashMap::new();

    for alert in alerts.iter().filter(|a| a.is_active_on(date)) {
        for region_id in &alert.region_ids {
            severities
                .entry(region_id.clone())
                .and_modify(|current| {
                    if alert.severity > *current {
                        *current = alert.severity;
                    }
                })
                .or_insert(alert.severity);
        }
    }

    severities
}

/// Combine per-region user statistics for a selection, or fall back to the
/// national table.
///
/// Returns `None` when the national table has no entry for `country_id`.
/// An empty selection means "whole country": the national entry is passed
/// through untouched, never recomputed from regions. Otherwise the provider
/// set comes from the national entry, buckets start at zero, and each
/// selected region contributes field-wise to the providers it has data for.
/// Regions or providers without data simply contribute nothing.
pub fn aggregate_stats(
    selected_region_ids: &[String],
    country_id: &str,
    per_region: &HashMap<String, Stats>,
    national: &HashMap<String, Stats>,
) -> Option<Stats> {
    let country_national = national.get(country_id)?;

    if selected_region_ids.is_empty() {
        return Some(country_national.clone());
    }

    let mut aggregated: Stats = country_national
        .keys()
        .map(|provider_id| (provider_id.clone(), UserStats::default()))
        .collect();

    for region_id in selected_region_ids {
        let Some(region_stats) = per_region.get(region_id) else {
            continue;
        };
        for (provider_id, bucket) in aggregated.iter_mut() {
            if let Some(region_bucket) = region_stats.get(provider_id) {
                bucket.accumulate(region_bucket);
            }
        }
    }

    Some(aggregated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::alert::{AlertStatus, EventDates};
    use chrono::Utc;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn make_alert(id: &str, regions: &[&str], severity: Severity, status: AlertStatus) -> Alert {
        Alert {
            id: id.into(),
            country_id: "colombia".into(),
            region_ids: regions.iter().map(|r| (*r).to_string()).collect(),
            severity,
            event_type: "Heavy Rainfall".into(),
            push_date_time: Utc::now(),
            event_dates: EventDates::range(day(2024, 8, 15), day(2024, 8, 17)),
            justification: "Prolonged rainfall expected over the affected areas.".into(),
            image_url: None,
            status,
            author: "MeteOps Lead".into(),
            last_updated: Utc::now(),
            version: 1,
        }
    }

    fn stats(green: u64, yellow: u64, orange: u64, red: u64) -> UserStats {
        UserStats::from_buckets(green, yellow, orange, red)
    }

    #[test]
    fn overlapping_alerts_keep_the_highest_severity() {
        // Region X covered by red and yellow, region Y by yellow only
        let alerts = vec![
            make_alert("alert-1", &["region-x"], Severity::Red, AlertStatus::Active),
            make_alert(
                "alert-2",
                &["region-x", "region-y"],
                Severity::Yellow,
                AlertStatus::Active,
            ),
        ];

        let severities = resolve_severities(&alerts, day(2024, 8, 16));

        assert_eq!(severities.get("region-x"), Some(&Severity::Red));
        assert_eq!(severities.get("region-y"), Some(&Severity::Yellow));
        assert_eq!(severities.len(), 2);
    }

    #[test]
    fn resolved_severity_tracks_each_window_day_by_day() {
        // Orange runs two days, red only the first, so the color drops
        let mut orange = make_alert("alert-1", &["region-x"], Severity::Orange, AlertStatus::Active);
        orange.event_dates = EventDates::range(day(2024, 8, 16), day(2024, 8, 17));
        let mut red = make_alert("alert-2", &["region-x"], Severity::Red, AlertStatus::Active);
        red.event_dates = EventDates::single_day(day(2024, 8, 16));
        let alerts = [orange, red];

        let first = resolve_severities(&alerts, day(2024, 8, 16));
        let second = resolve_severities(&alerts, day(2024, 8, 17));

        assert_eq!(first.get("region-x"), Some(&Severity::Red));
        assert_eq!(second.get("region-x"), Some(&Severity::Orange));
    }

    #[test]
    fn resolution_is_invariant_under_input_order() {
        let pool = [
            make_alert("alert-1", &["region-x"], Severity::Orange, AlertStatus::Active),
            make_alert("alert-2", &["region-x"], Severity::Red, AlertStatus::Active),
            make_alert(
                "alert-3",
                &["region-x", "region-y"],
                Severity::Yellow,
                AlertStatus::Active,
            ),
        ];

        let expected = resolve_severities(&pool, day(2024, 8, 16));

        let orders: [[usize; 3]; 6] = [
            [0, 1, 2],
            [0, 2, 1],
            [1, 0, 2],
            [1, 2, 0],
            [2, 0, 1],
            [2, 1, 0],
        ];
        for order in orders {
            let shuffled: Vec<Alert> = order.iter().map(|&i| pool[i].clone()).collect();
            assert_eq!(resolve_severities(&shuffled, day(2024, 8, 16)), expected);
        }
    }

    #[test]
    fn drafts_and_out_of_window_alerts_color_nothing() {
        let draft = make_alert("alert-1", &["region-x"], Severity::Red, AlertStatus::Draft);
        let mut past = make_alert("alert-2", &["region-y"], Severity::Orange, AlertStatus::Expired);
        past.event_dates = EventDates::range(day(2024, 8, 1), day(2024, 8, 2));

        let severities = resolve_severities(&[draft, past], day(2024, 8, 16));

        assert!(severities.is_empty());
    }

    #[test]
    fn expired_alert_still_colors_days_inside_its_window() {
        // Viewing a past date shows what was in force back then
        let mut alert = make_alert("alert-1", &["region-x"], Severity::Red, AlertStatus::Expired);
        alert.event_dates = EventDates::range(day(2024, 8, 1), day(2024, 8, 2));

        let severities = resolve_severities(&[alert], day(2024, 8, 2));

        assert_eq!(severities.get("region-x"), Some(&Severity::Red));
    }

    #[test]
    fn selection_sums_field_wise_per_provider() {
        let per_region = HashMap::from([
            (
                "region-a".to_string(),
                Stats::from([
                    ("actual".to_string(), stats(100, 20, 5, 1)),
                    ("google".to_string(), stats(80, 66, 30, 10)),
                ]),
            ),
            (
                "region-b".to_string(),
                Stats::from([
                    ("actual".to_string(), stats(50, 10, 3, 2)),
                    ("google".to_string(), stats(40, 20, 15, 5)),
                ]),
            ),
        ]);
        let national = HashMap::from([(
            "colombia".to_string(),
            Stats::from([
                ("actual".to_string(), stats(1_000, 200, 50, 10)),
                ("google".to_string(), stats(900, 300, 80, 20)),
            ]),
        )]);

        let selection = vec!["region-a".to_string(), "region-b".to_string()];
        let aggregated = aggregate_stats(&selection, "colombia", &per_region, &national).unwrap();

        assert_eq!(aggregated["actual"], stats(150, 30, 8, 3));
        assert_eq!(aggregated["google"].green, 120);
        assert_eq!(aggregated["google"].yellow, 86);
        assert_eq!(aggregated["google"].total, 266);
    }

    #[test]
    fn empty_selection_passes_the_national_entry_through() {
        // Deliberately inconsistent national numbers must survive unchanged
        let national_entry = Stats::from([(
            "actual".to_string(),
            UserStats {
                green: 10,
                yellow: 0,
                orange: 0,
                red: 0,
                total: 999,
            },
        )]);
        let national = HashMap::from([("colombia".to_string(), national_entry.clone())]);

        let aggregated = aggregate_stats(&[], "colombia", &HashMap::new(), &national).unwrap();

        assert_eq!(aggregated, national_entry);
    }

    #[test]
    fn unknown_country_yields_none() {
        let per_region = HashMap::from([(
            "region-a".to_string(),
            Stats::from([("actual".to_string(), stats(1, 1, 1, 1))]),
        )]);

        let aggregated = aggregate_stats(
            &["region-a".to_string()],
            "atlantis",
            &per_region,
            &HashMap::new(),
        );

        assert!(aggregated.is_none());
    }

    #[test]
    fn regions_without_data_contribute_nothing() {
        let per_region = HashMap::from([(
            "region-a".to_string(),
            Stats::from([("actual".to_string(), stats(100, 20, 5, 1))]),
        )]);
        let national = HashMap::from([(
            "colombia".to_string(),
            Stats::from([("actual".to_string(), stats(1_000, 200, 50, 10))]),
        )]);

        let selection = vec!["region-a".to_string(), "region-ghost".to_string()];
        let aggregated = aggregate_stats(&selection, "colombia", &per_region, &national).unwrap();

        assert_eq!(aggregated["actual"], stats(100, 20, 5, 1));
    }

    #[test]
    fn provider_set_comes_from_the_national_entry() {
        // Region data carries an extra provider the national table lacks,
        // and lacks one the national table has.
        let per_region = HashMap::from([(
            "region-a".to_string(),
            Stats::from([
                ("actual".to_string(), stats(100, 20, 5, 1)),
                ("exotic".to_string(), stats(999, 999, 999, 999)),
            ]),
        )]);
        let national = HashMap::from([(
            "colombia".to_string(),
            Stats::from([
                ("actual".to_string(), stats(1_000, 200, 50, 10)),
                ("openweather".to_string(), stats(900, 100, 30, 5)),
            ]),
        )]);

        let selection = vec!["region-a".to_string()];
        let aggregated = aggregate_stats(&selection, "colombia", &per_region, &national).unwrap();

        assert_eq!(aggregated.len(), 2);
        assert_eq!(aggregated["actual"], stats(100, 20, 5, 1));
        // National provider with no region data stays at zero
        assert_eq!(aggregated["openweather"], UserStats::default());
        assert!(!aggregated.contains_key("exotic"));
    }

    #[test]
    fn aggregation_keeps_consistent_inputs_consistent() {
        let per_region = HashMap::from([
            (
                "region-a".to_string(),
                Stats::from([("actual".to_string(), stats(100, 20, 5, 1))]),
            ),
            (
                "region-b".to_string(),
                Stats::from([("actual".to_string(), stats(7, 8, 9, 10))]),
            ),
        ]);
        let national = HashMap::from([(
            "colombia".to_string(),
            Stats::from([("actual".to_string(), stats(1, 1, 1, 1))]),
        )]);

        let selection = vec!["region-a".to_string(), "region-b".to_string()];
        let aggregated = aggregate_stats(&selection, "colombia", &per_region, &national).unwrap();

        assert!(aggregated["actual"].is_consistent());
    }
}
