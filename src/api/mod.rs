pub mod catalog_loader;
pub mod chat_client;
pub mod food_client;
pub mod traits;

use crate::{config::Config, error::Result, models::NamedNutrition, taxonomy::Taxonomy};
use std::sync::Arc;

pub use catalog_loader::CatalogLoader;
pub use chat_client::ChatClient;
pub use food_client::FoodClient;
pub use traits::FoodSource;

/// Facade over the three request/response adapters. The adapters share no
/// runtime state; this type only wires configuration once.
pub struct NutriClient {
    food: Arc<FoodClient>,
    catalog: CatalogLoader,
    chat: ChatClient,
}

impl NutriClient {
    pub fn new(config: Config) -> Result<Self> {
        Self::with_taxonomy(config, Taxonomy::builtin())
    }

    pub fn with_taxonomy(config: Config, taxonomy: Taxonomy) -> Result<Self> {
        let food = Arc::new(FoodClient::new(config.fdc)?);
        let source: Arc<dyn FoodSource> = food.clone();
        let catalog = CatalogLoader::new(source, taxonomy);
        let chat = ChatClient::new(config.gemini)?;

        Ok(Self {
            food,
            catalog,
            chat,
        })
    }

    pub fn food(&self) -> &FoodClient {
        &self.food
    }

    pub fn catalog(&self) -> &CatalogLoader {
        &self.catalog
    }

    pub fn chat(&self) -> &ChatClient {
        &self.chat
    }

    /// Runs both lookups concurrently with all-or-nothing semantics: if
    /// either side fails, no partial pair is returned and the caller keeps
    /// whatever it was displaying before.
    pub async fn compare(
        &self,
        food_a: &str,
        amount_a: f64,
        food_b: &str,
        amount_b: f64,
    ) -> Result<(NamedNutrition, NamedNutrition)> {
        tokio::try_join!(
            self.food.lookup(food_a, amount_a),
            self.food.lookup(food_b, amount_b)
        )
    }
}
