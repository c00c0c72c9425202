use crate::{
    error::Result,
    models::{CatalogFood, NamedNutrition},
};
use async_trait::async_trait;

/// Seam between the catalog loader and the concrete food-database client,
/// so a stub or a caching decorator can be slotted in.
#[async_trait]
pub trait FoodSource: Send + Sync {
    /// Full nutrition lookup scaled to the requested amount of grams.
    async fn lookup(&self, query: &str, amount_grams: f64) -> Result<NamedNutrition>;

    /// Cheap search variant keeping only the canonical id and description.
    async fn resolve(&self, name: &str) -> Result<CatalogFood>;
}
