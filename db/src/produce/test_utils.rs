use sqlx::PgPool;

pub async fn insert_location(pool: &PgPool, name: &str) -> i32 {
    sqlx::query_scalar("INSERT INTO locations (name) VALUES ($1) RETURNING location_id")
        .bind(name)
        .fetch_one(pool)
        .await
        .expect("Failed to insert location")
}

pub async fn insert_ingredient(pool: &PgPool, name: &str, is_fruit: bool, is_vegetable: bool) -> i32 {
    sqlx::query_scalar(
        "INSERT INTO ingredients (name, is_fruit, is_vegetable) VALUES ($1, $2, $3) RETURNING ingredient_id",
    )
    .bind(name)
    .bind(is_fruit)
    .bind(is_vegetable)
    .fetch_one(pool)
    .await
    .expect("Failed to insert ingredient")
}

pub async fn insert_recipe(pool: &PgPool, item_name: &str, location_id: i32, ingredient_ids: &[i32]) -> i32 {
    let recipe_id: i32 = sqlx::query_scalar(
        "INSERT INTO recipes (item_name, location_id) VALUES ($1, $2) RETURNING recipe_id",
    )
    .bind(item_name)
    .bind(location_id)
    .fetch_one(pool)
    .await
    .expect("Failed to insert recipe");

    for ingredient_id in ingredient_ids {
        sqlx::query("INSERT INTO recipe_ingredients (recipe_id, ingredient_id) VALUES ($1, $2)")
            .bind(recipe_id)
            .bind(ingredient_id)
            .execute(pool)
            .await
            .expect("Failed to insert recipe ingredient");
    }

    recipe_id
}
