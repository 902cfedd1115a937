use crate::core::model::geography::{Country, ForecastProvider, Region};

const GRID_COLS: usize = 3;
const CELL_WIDTH: u32 = 120;
const CELL_HEIGHT: u32 = 25;
const PADDING: u32 = 10;
const START_Y: u32 = 10;

/// Lay region cells out in a dense grid and render each as an SVG path.
fn grid_regions(entries: &[(&str, &str)]) -> Vec<Region> {
    entries
        .iter()
        .enumerate()
        .map(|(index, (id, name))| {
            let col = (index % GRID_COLS) as u32;
            let row = (index / GRID_COLS) as u32;
            let x = col * (CELL_WIDTH + PADDING) + PADDING;
            let y = row * (CELL_HEIGHT + PADDING) + START_Y;
            Region {
                id: (*id).to_string(),
                name: (*name).to_string(),
                path: format!("M{x},{y} h{CELL_WIDTH} v{CELL_HEIGHT} h-{CELL_WIDTH} Z"),
            }
        })
        .collect()
}

/// Countries served by the dashboard, each with its region grid.
pub fn countries() -> Vec<Country> {
    vec![
        Country {
            id: "colombia".into(),
            name: "Colombia".into(),
            regions: grid_regions(&[
                ("macro-1", "Caribe"),
                ("macro-2", "Eje Cafetero"),
                ("macro-3", "Pacífico"),
                ("macro-4", "Andina Norte"),
                ("macro-5", "Andina Centro"),
                ("macro-6", "Andina Sur"),
                ("macro-7", "Orinoquía"),
                ("macro-8", "Amazonía"),
                ("macro-9", "Insular"),
                ("macro-10", "Noroccidente"),
                ("macro-11", "Suroccidente"),
                ("macro-12", "Centro Oriente"),
                ("macro-13", "Centro Sur"),
                ("macro-14", "Nororiente"),
                ("macro-15", "Suroeste"),
                ("macro-16", "Magdalena Medio"),
                ("macro-17", "Alto Magdalena"),
                ("macro-18", "Catatumbo"),
                ("macro-19", "Bajo Cauca"),
                ("macro-20", "Urabá"),
                ("macro-21", "Piedemonte"),
            ]),
        },
        Country {
            id: "kenya".into(),
            name: "Kenya".into(),
            regions: grid_regions(&[
                ("nairobi", "Nairobi"),
                ("mombasa", "Mombasa"),
                ("kisumu", "Kisumu"),
                ("nakuru", "Nakuru"),
                ("rift-valley", "Rift Valley"),
            ]),
        },
    ]
}

/// Forecast sources shown in the stats panel. "actual" is the observed
/// status, the rest are model feeds.
pub fn forecast_providers() -> Vec<ForecastProvider> {
    vec![
        ForecastProvider {
            id: "actual".into(),
            name: "Actual".into(),
        },
        ForecastProvider {
            id: "google".into(),
            name: "Google Weather".into(),
        },
        ForecastProvider {
            id: "openweather".into(),
            name: "OpenWeather".into(),
        },
        ForecastProvider {
            id: "other".into(),
            name: "Other Provider".into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn region_ids_are_unique_across_countries() {
        let mut seen = HashSet::new();
        for country in countries() {
            for region in &country.regions {
                assert!(seen.insert(region.id.clone()), "duplicate region {}", region.id);
            }
        }
    }

    #[test]
    fn grid_paths_follow_the_cell_layout() {
        let colombia = &countries()[0];
        assert_eq!(colombia.regions.len(), 21);

        // index 0: col 0, row 0
        assert_eq!(colombia.regions[0].path, "M10,10 h120 v25 h-120 Z");
        // index 1: col 1, row 0
        assert_eq!(colombia.regions[1].path, "M140,10 h120 v25 h-120 Z");
        // index 3 wraps to col 0, row 1
        assert_eq!(colombia.regions[3].path, "M10,45 h120 v25 h-120 Z");
    }

    #[test]
    fn provider_catalog_lists_actual_first() {
        let providers = forecast_providers();
        assert_eq!(providers.len(), 4);
        assert_eq!(providers[0].id, "actual");
        assert!(providers.iter().any(|p| p.id == "openweather"));
    }
}
