use serde::{Deserialize, Serialize};

/// Smallest geographic unit an alert can target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub id: String,
    pub name: String,
    /// Opaque rendering geometry (SVG path data) consumed by the map view.
    pub path: String,
}

/// A country and the regions it exclusively owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub id: String,
    pub name: String,
    pub regions: Vec<Region>,
}

/// A forecast data source, or the observed-status "actual" source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastProvider {
    pub id: String,
    pub name: String,
}
