use async_trait::async_trait;
use color_eyre::Result;
use sqlx::PgPool;

use super::{Ingredient, Location, Recipe};

/// The read-only queries the web server needs.
///
/// Implemented for [`PgPool`]; handlers only see it as a trait object, so
/// tests can hand the router an in-memory catalog instead.
#[async_trait]
pub trait ProduceStore: std::fmt::Debug + Send + Sync {
    async fn list_ingredients(&self) -> Result<Vec<Ingredient>>;

    async fn list_locations(&self) -> Result<Vec<Location>>;

    async fn recipes_for_location(&self, location_id: Option<i32>) -> Result<Vec<Recipe>>;
}

#[async_trait]
impl ProduceStore for PgPool {
    async fn list_ingredients(&self) -> Result<Vec<Ingredient>> {
        Ingredient::list_by_name(self).await
    }

    async fn list_locations(&self) -> Result<Vec<Location>> {
        Location::list(self).await
    }

    async fn recipes_for_location(&self, location_id: Option<i32>) -> Result<Vec<Recipe>> {
        Recipe::list_for_location(self, location_id).await
    }
}
