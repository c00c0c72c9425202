use crate::{api::traits::FoodSource, models::FoodCategory, taxonomy::Taxonomy};
use futures::future::join_all;
use std::sync::Arc;

/// Resolves the fixed taxonomy into a browsable catalog. Categories are
/// processed in declared order; the names within one category resolve
/// concurrently.
pub struct CatalogLoader {
    source: Arc<dyn FoodSource>,
    taxonomy: Taxonomy,
}

impl CatalogLoader {
    pub fn new(source: Arc<dyn FoodSource>, taxonomy: Taxonomy) -> Self {
        Self { source, taxonomy }
    }

    /// Never fails as a whole: a name that does not resolve is dropped from
    /// its category, so the worst case is a category with no foods.
    pub async fn load_catalog(&self) -> Vec<FoodCategory> {
        let mut catalog = Vec::with_capacity(self.taxonomy.categories.len());

        for category in &self.taxonomy.categories {
            let resolutions = category
                .foods
                .iter()
                .map(|name| async move { (name.as_str(), self.source.resolve(name).await) });

            let mut foods = Vec::with_capacity(category.foods.len());
            for (name, result) in join_all(resolutions).await {
                match result {
                    Ok(food) => foods.push(food),
                    Err(e) => log::debug!(
                        "Dropping {:?} from category {:?}: {}",
                        name,
                        category.name,
                        e
                    ),
                }
            }

            log::info!(
                "Loaded category {:?} with {}/{} foods",
                category.name,
                foods.len(),
                category.foods.len()
            );
            catalog.push(FoodCategory {
                name: category.name.clone(),
                foods,
            });
        }

        catalog
    }
}
