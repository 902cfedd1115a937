use chrono::{DateTime, Duration, Utc};

use crate::core::model::alert::{Alert, AlertStatus, EventDates, Severity};

/// Seed alerts installed at startup, anchored to `now` so the dashboard
/// always opens with one live alert, one draft, and one expired record.
pub fn seed_alerts(now: DateTime<Utc>) -> Vec<Alert> {
    let today = now.date_naive();

    vec![
        Alert {
            id: "alert-1".into(),
            country_id: "colombia".into(),
            region_ids: vec!["macro-1".into(), "macro-4".into()],
            severity: Severity::Orange,
            event_type: "Heavy Rainfall".into(),
            push_date_time: now - Duration::days(1),
            event_dates: EventDates::range(today, today + Duration::days(1)),
            justification: "An incoming weather system is expected to bring heavy rainfall, \
                            potentially causing localized flooding in urban and low-lying areas. \
                            Models predict 50-75mm of rain over a 24-hour period."
                .into(),
            image_url: None,
            status: AlertStatus::Active,
            author: "Juan Valdez".into(),
            last_updated: now - Duration::days(2),
            version: 2,
        },
        Alert {
            id: "alert-2".into(),
            country_id: "colombia".into(),
            region_ids: vec!["macro-2".into(), "macro-10".into()],
            severity: Severity::Yellow,
            event_type: "Heatwave".into(),
            push_date_time: now,
            event_dates: EventDates::single_day(today + Duration::days(1)),
            justification: "Temperatures are expected to rise above average, reaching 35°C. \
                            Residents should take precautions against heat-related illness."
                .into(),
            image_url: None,
            status: AlertStatus::Draft,
            author: "Sofia Vergara".into(),
            last_updated: now - Duration::days(1),
            version: 1,
        },
        Alert {
            id: "alert-3".into(),
            country_id: "colombia".into(),
            region_ids: vec!["macro-8".into()],
            severity: Severity::Red,
            event_type: "Severe Flooding".into(),
            push_date_time: now - Duration::days(5),
            event_dates: EventDates::range(today - Duration::days(5), today - Duration::days(3)),
            justification: "Major river overflow expected due to extreme upstream rainfall. \
                            Significant risk to life and property. Evacuation orders may be \
                            necessary."
                .into(),
            image_url: None,
            status: AlertStatus::Expired,
            author: "Juan Valdez".into(),
            last_updated: now - Duration::days(6),
            version: 1,
        },
    ]
}
