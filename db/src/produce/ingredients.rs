use color_eyre::{eyre::WrapErr, Result};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Ingredient {
    pub id: i32,
    pub name: String,
    pub is_fruit: bool,
    pub is_vegetable: bool,
}

impl Ingredient {
    /// Fruits and vegetables are the only ingredients the recipe ranking cares about.
    pub fn is_produce(&self) -> bool {
        self.is_fruit || self.is_vegetable
    }

    #[tracing::instrument(skip(pool), err)]
    pub async fn list_by_name(pool: &PgPool) -> Result<Vec<Self>> {
        let ingredients = sqlx::query_as::<_, Ingredient>(
            "
            SELECT
                ingredient_id AS id,
                name,
                is_fruit,
                is_vegetable
            FROM ingredients
            ORDER BY name ASC, ingredient_id ASC
            ",
        )
        .fetch_all(pool)
        .await
        .wrap_err("Failed to list ingredients")?;

        Ok(ingredients)
    }
}
