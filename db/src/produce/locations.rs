use color_eyre::{eyre::WrapErr, Result};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// A place that serves recipes. Every recipe belongs to exactly one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Location {
    pub id: i32,
    pub name: String,
}

impl Location {
    #[tracing::instrument(skip(pool), err)]
    pub async fn list(pool: &PgPool) -> Result<Vec<Self>> {
        let locations = sqlx::query_as::<_, Location>(
            "
            SELECT
                location_id AS id,
                name
            FROM locations
            ORDER BY name ASC, location_id ASC
            ",
        )
        .fetch_all(pool)
        .await
        .wrap_err("Failed to list locations")?;

        Ok(locations)
    }
}
