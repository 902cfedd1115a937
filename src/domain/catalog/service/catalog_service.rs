use anyhow::Result;

use crate::core::mock;
use crate::core::model::geography::{Country, ForecastProvider};

/// Serves the country/region catalog and the provider list. Both are built
/// once at startup; the data only changes with a deploy.
pub struct CatalogService {
    countries: Vec<Country>,
    providers: Vec<ForecastProvider>,
}

impl CatalogService {
    pub fn new() -> Self {
        Self {
            countries: mock::catalog::countries(),
            providers: mock::catalog::forecast_providers(),
        }
    }

    pub async fn list_countries(&self) -> Result<Vec<Country>> {
        Ok(self.countries.clone())
    }

    pub async fn list_providers(&self) -> Result<Vec<ForecastProvider>> {
        Ok(self.providers.clone())
    }
}

impl Default for CatalogService {
    fn default() -> Self {
        Self::new()
    }
}
