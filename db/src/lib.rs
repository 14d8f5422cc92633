use color_eyre::{
    eyre::{eyre, WrapErr},
    Result,
};
use sqlx::postgres::PgPoolOptions;

pub mod produce;

pub use produce::{Ingredient, Location, ProduceStore, Recipe, RecipeIngredient};
pub use sqlx;
pub use sqlx::PgPool;

const MIGRATION_LOCK_ID: i64 = 0xDB_DB_DB_DB_DB_DB_DB;

#[tracing::instrument(err, skip(database_url))]
pub async fn setup_db_pool(database_url: &str) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await
        .wrap_err("Failed to connect to the database")?;

    run_migrations(&pool).await?;

    Ok(pool)
}

/// Runs the embedded migrations while holding an advisory lock, so several
/// server processes booting at once don't race each other.
#[tracing::instrument(err, skip(pool))]
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    sqlx::query("SELECT pg_advisory_lock($1)")
        .bind(MIGRATION_LOCK_ID)
        .execute(pool)
        .await
        .wrap_err("Failed to take the migration lock")?;

    sqlx::migrate!()
        .run(pool)
        .await
        .wrap_err("Failed to run migrations")?;

    let unlock_result: Option<bool> = sqlx::query_scalar("SELECT pg_advisory_unlock($1)")
        .bind(MIGRATION_LOCK_ID)
        .fetch_one(pool)
        .await
        .wrap_err("Failed to release the migration lock")?;

    match unlock_result {
        Some(true) => tracing::info!("Migration lock unlocked"),
        Some(false) => tracing::info!("Failed to unlock migration lock"),
        None => return Err(eyre!("Failed to unlock migration lock")),
    }

    Ok(())
}
