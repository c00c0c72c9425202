use crate::{
    api::traits::FoodSource,
    config::{FdcConfig, DEFAULT_FDC_BASE_URL},
    error::{NutriError, Result},
    models::{CatalogFood, FoodSearchResponse, NamedNutrition, NutrientRecord},
};
use async_trait::async_trait;
use reqwest::Client;

/// Comparison lookups ask for a handful of candidates but always use the
/// first; catalog resolution only ever needs one.
pub const LOOKUP_PAGE_SIZE: u8 = 5;
pub const RESOLVE_PAGE_SIZE: u8 = 1;

const DATA_TYPE_FILTER: &str = "Survey (FNDDS)";

#[derive(Clone)]
pub struct FoodClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl FoodClient {
    pub fn new(config: FdcConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .ok_or_else(|| NutriError::Config("FDC API key is required".into()))?;
        let base_url = config
            .base_url
            .unwrap_or_else(|| DEFAULT_FDC_BASE_URL.to_string());

        Ok(Self {
            client: Client::new(),
            base_url,
            api_key,
        })
    }

    /// One search round-trip against the food database. No retries and no
    /// caching: identical queries re-fetch.
    pub async fn search(&self, query: &str, page_size: u8) -> Result<FoodSearchResponse> {
        log::debug!("Searching foods: query={:?} page_size={}", query, page_size);

        let page_size = page_size.to_string();
        let response = self
            .client
            .get(format!("{}/foods/search", self.base_url))
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("query", query),
                ("pageSize", page_size.as_str()),
                ("dataType", DATA_TYPE_FILTER),
            ])
            .send()
            .await
            .map_err(|e| {
                NutriError::UpstreamUnavailable(format!("Food search request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(NutriError::UpstreamUnavailable(format!(
                "Food search returned status {}",
                status
            )));
        }

        response.json::<FoodSearchResponse>().await.map_err(|e| {
            NutriError::MalformedResponse(format!("Food search body did not parse: {}", e))
        })
    }

    /// Looks up `query`, takes the first candidate and scales its per-100g
    /// nutrient values to `amount_grams`.
    pub async fn lookup(&self, query: &str, amount_grams: f64) -> Result<NamedNutrition> {
        let response = self.search(query, LOOKUP_PAGE_SIZE).await?;
        let food = response
            .foods
            .into_iter()
            .next()
            .ok_or_else(|| NutriError::NoMatch(format!("No food found for {:?}", query)))?;

        let nutrients = NutrientRecord::from_per_100g(&food.food_nutrients, amount_grams);
        log::info!(
            "Resolved {:?} -> {:?} ({} kcal at {} g)",
            query,
            food.description,
            nutrients.calories,
            amount_grams
        );

        Ok(NamedNutrition {
            name: food.description,
            nutrients,
        })
    }

    /// Search-only variant used by the catalog loader: keeps the canonical
    /// id and description of the single best hit.
    pub async fn resolve(&self, name: &str) -> Result<CatalogFood> {
        let response = self.search(name, RESOLVE_PAGE_SIZE).await?;
        let food = response
            .foods
            .into_iter()
            .next()
            .ok_or_else(|| NutriError::NoMatch(format!("No food found for {:?}", name)))?;

        Ok(CatalogFood {
            id: food.fdc_id,
            name: food.description,
        })
    }
}

#[async_trait]
impl FoodSource for FoodClient {
    async fn lookup(&self, query: &str, amount_grams: f64) -> Result<NamedNutrition> {
        FoodClient::lookup(self, query, amount_grams).await
    }

    async fn resolve(&self, name: &str) -> Result<CatalogFood> {
        FoodClient::resolve(self, name).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_api_key_is_a_config_error() {
        let result = FoodClient::new(FdcConfig::new());
        assert!(matches!(result, Err(NutriError::Config(_))));
    }

    #[test]
    fn base_url_defaults_to_fdc() {
        let client = FoodClient::new(FdcConfig::new().with_api_key("k")).unwrap();
        assert_eq!(client.base_url, DEFAULT_FDC_BASE_URL);
    }
}
