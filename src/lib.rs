pub mod api;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod taxonomy;

pub use api::{CatalogLoader, ChatClient, FoodClient, FoodSource, NutriClient};
pub use config::{Config, FdcConfig, GeminiConfig};
pub use error::{NutriError, Result};
pub use models::{
    CatalogFood, ChatMessage, ChatTranscript, FoodCategory, NamedNutrition, NutrientRecord,
};
pub use taxonomy::{Taxonomy, TaxonomyCategory};
