use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{Datelike, NaiveDate};

use crate::core::model::stats::{Stats, UserStats};

/// Statistics table keyed by region or country id.
pub type StatsTable = HashMap<String, Stats>;

/// Canned per-region and national user statistics, varied per calendar day
/// so the dashboard shows movement when the date changes.
///
/// Tables are memoized per date; asking for the same day twice returns the
/// exact same snapshot.
pub struct MockForecastSource {
    region_cache: Mutex<HashMap<NaiveDate, Arc<StatsTable>>>,
    national_cache: Mutex<HashMap<NaiveDate, Arc<StatsTable>>>,
}

impl MockForecastSource {
    pub fn new() -> Self {
        Self {
            region_cache: Mutex::new(HashMap::new()),
            national_cache: Mutex::new(HashMap::new()),
        }
    }

    /// Per-region stats for `date`, keyed by region id.
    pub fn stats_by_region(&self, date: NaiveDate) -> Arc<StatsTable> {
        let mut cache = self
            .region_cache
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        cache
            .entry(date)
            .or_insert_with(|| Arc::new(date_variant(&base_stats_by_region(), date)))
            .clone()
    }

    /// National stats for `date`, keyed by country id.
    pub fn national_stats(&self, date: NaiveDate) -> Arc<StatsTable> {
        let mut cache = self
            .national_cache
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        cache
            .entry(date)
            .or_insert_with(|| Arc::new(date_variant(&base_national_stats(), date)))
            .clone()
    }
}

impl Default for MockForecastSource {
    fn default() -> Self {
        Self::new()
    }
}

/// Scale a base table by a multiplier derived from the day of month, up to
/// ±25%. Green and orange move with the multiplier, yellow and red against
/// it, and totals are recomputed from the scaled buckets.
fn date_variant(base: &StatsTable, date: NaiveDate) -> StatsTable {
    let day_of_month = date.day();
    let multiplier = 1.0 + ((day_of_month % 10) as f64 - 5.0) * 0.05;

    base.iter()
        .map(|(key, providers)| {
            let scaled = providers
                .iter()
                .map(|(provider_id, stats)| {
                    (
                        provider_id.clone(),
                        UserStats::from_buckets(
                            scale(stats.green, multiplier),
                            scale(stats.yellow, 2.0 - multiplier),
                            scale(stats.orange, multiplier),
                            scale(stats.red, 2.0 - multiplier),
                        ),
                    )
                })
                .collect();
            (key.clone(), scaled)
        })
        .collect()
}

fn scale(value: u64, multiplier: f64) -> u64 {
    (value as f64 * multiplier).round() as u64
}

fn stats(green: u64, yellow: u64, orange: u64, red: u64, total: u64) -> UserStats {
    UserStats {
        green,
        yellow,
        orange,
        red,
        total,
    }
}

fn base_stats_by_region() -> StatsTable {
    let mut table = StatsTable::new();

    // Colombia
    table.insert(
        "macro-1".into(),
        Stats::from([
            ("actual".into(), stats(260_000, 75_000, 15_000, 1_000, 351_000)),
            ("google".into(), stats(250_000, 80_000, 20_000, 1_500, 351_500)),
            ("openweather".into(), stats(280_000, 70_000, 15_000, 1_000, 366_000)),
        ]),
    );
    table.insert(
        "macro-2".into(),
        Stats::from([
            ("actual".into(), stats(190_000, 55_000, 12_000, 800, 257_800)),
            ("google".into(), stats(180_000, 60_000, 15_000, 1_000, 256_000)),
            ("openweather".into(), stats(200_000, 50_000, 12_000, 800, 262_800)),
        ]),
    );
    table.insert(
        "macro-4".into(),
        Stats::from([
            ("actual".into(), stats(125_000, 38_000, 7_500, 350, 170_850)),
            ("google".into(), stats(120_000, 40_000, 8_000, 400, 168_400)),
            ("openweather".into(), stats(130_000, 35_000, 7_000, 300, 172_300)),
        ]),
    );
    table.insert(
        "macro-10".into(),
        Stats::from([
            ("actual".into(), stats(65_000, 22_000, 3_500, 100, 90_600)),
            ("google".into(), stats(60_000, 25_000, 4_000, 150, 89_150)),
            ("openweather".into(), stats(70_000, 20_000, 3_000, 100, 93_100)),
        ]),
    );

    // Kenya
    table.insert(
        "nairobi".into(),
        Stats::from([
            ("actual".into(), stats(16_000, 4_500, 1_000, 80, 21_580)),
            ("google".into(), stats(15_000, 5_000, 1_200, 100, 21_300)),
            ("openweather".into(), stats(18_000, 2_500, 800, 50, 21_350)),
        ]),
    );

    table
}

fn base_national_stats() -> StatsTable {
    StatsTable::from([
        (
            "colombia".into(),
            Stats::from([
                ("actual".into(), stats(295_000, 83_000, 16_500, 980, 395_480)),
                ("google".into(), stats(280_000, 90_000, 20_000, 1_200, 391_200)),
                ("openweather".into(), stats(310_000, 75_000, 16_000, 950, 401_950)),
            ]),
        ),
        (
            "kenya".into(),
            Stats::from([
                ("actual".into(), stats(160_000, 45_000, 10_000, 800, 215_800)),
                ("google".into(), stats(150_000, 50_000, 12_000, 1_000, 213_000)),
                ("openweather".into(), stats(180_000, 25_000, 8_000, 500, 213_500)),
            ]),
        ),
    ])
}
