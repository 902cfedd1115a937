use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Alert intensity, ordered from lowest to highest.
///
/// The derive order matters: region rollups keep the highest severity among
/// active alerts, so `Ord` must follow yellow < orange < red.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Yellow,
    Orange,
    Red,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Yellow => write!(f, "yellow"),
            Severity::Orange => write!(f, "orange"),
            Severity::Red => write!(f, "red"),
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yellow" => Ok(Severity::Yellow),
            "orange" => Ok(Severity::Orange),
            "red" => Ok(Severity::Red),
            _ => Err(format!("unknown severity: {s}")),
        }
    }
}

/// Publication state of an alert. Draft alerts never color the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    Draft,
    Active,
    Expired,
}

impl std::fmt::Display for AlertStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlertStatus::Draft => write!(f, "draft"),
            AlertStatus::Active => write!(f, "active"),
            AlertStatus::Expired => write!(f, "expired"),
        }
    }
}

/// Inclusive calendar-date window an alert applies to.
///
/// `to` is optional on the wire; an absent end means the alert covers the
/// single day `from`. That fallback lives in [`EventDates::end`] and nowhere
/// else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDates {
    pub from: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDate>,
}

impl EventDates {
    pub fn single_day(from: NaiveDate) -> Self {
        Self { from, to: None }
    }

    pub fn range(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to: Some(to) }
    }

    /// Last covered day; equals `from` when no end was given.
    pub fn end(&self) -> NaiveDate {
        self.to.unwrap_or(self.from)
    }

    /// Whether `date` falls inside the window, both ends inclusive.
    /// An inverted window (`to` before `from`) contains nothing.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.end()
    }
}

/// One issued or drafted weather alert.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    /// Unique identifier, immutable after creation.
    pub id: String,
    /// Owning country; an alert belongs to exactly one.
    pub country_id: String,
    /// Regions the alert covers. The save boundary rejects empty selections.
    pub region_ids: Vec<String>,
    pub severity: Severity,
    /// Free-text label, e.g. "Heavy Rainfall".
    pub event_type: String,
    /// Instant the alert was or will be published.
    pub push_date_time: DateTime<Utc>,
    pub event_dates: EventDates,
    /// Rationale shown alongside the alert, AI-assisted or manual.
    pub justification: String,
    /// Optional supporting image reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub status: AlertStatus,
    pub author: String,
    /// Refreshed by the store on every replacing save.
    pub last_updated: DateTime<Utc>,
    /// Starts at 1; the store bumps it by exactly one per replacing save.
    pub version: u32,
}

impl Alert {
    /// Whether this alert is in force on `date`.
    ///
    /// Drafts are never active regardless of their window. Bounds and the
    /// query date are calendar days, so time-of-day cannot leak into the
    /// comparison.
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        if self.status == AlertStatus::Draft {
            return false;
        }
        self.event_dates.contains(date)
    }
}
