use std::collections::HashMap;

use color_eyre::{eyre::WrapErr, Result};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use super::{ingredients::Ingredient, locations::Location};

/// Join row between a recipe and one of its ingredients.
///
/// `ingredient` is `None` when the referenced ingredient row could not be
/// found, which the ranking treats as "not produce".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub id: i32,
    pub recipe_id: i32,
    pub ingredient_id: i32,
    pub ingredient: Option<Ingredient>,
}

/// A recipe with its location and ingredient links fully loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: i32,
    pub item_name: String,
    pub location_id: i32,
    pub location: Location,
    pub recipe_ingredients: Vec<RecipeIngredient>,
}

#[derive(Debug, Clone, sqlx::FromRow)]
struct RecipeRow {
    recipe_id: i32,
    item_name: String,
    location_id: i32,
    location_name: String,
}

#[derive(Debug, Clone, sqlx::FromRow)]
struct RecipeIngredientRow {
    recipe_ingredient_id: i32,
    recipe_id: i32,
    ingredient_id: i32,
    ingredient_name: Option<String>,
    is_fruit: Option<bool>,
    is_vegetable: Option<bool>,
}

impl From<RecipeIngredientRow> for RecipeIngredient {
    fn from(row: RecipeIngredientRow) -> Self {
        // All three columns come from the same LEFT JOIN, so they are either
        // all present or all NULL.
        let ingredient = match (row.ingredient_name, row.is_fruit, row.is_vegetable) {
            (Some(name), Some(is_fruit), Some(is_vegetable)) => Some(Ingredient {
                id: row.ingredient_id,
                name,
                is_fruit,
                is_vegetable,
            }),
            _ => None,
        };

        RecipeIngredient {
            id: row.recipe_ingredient_id,
            recipe_id: row.recipe_id,
            ingredient_id: row.ingredient_id,
            ingredient,
        }
    }
}

impl Recipe {
    /// Loads every recipe at `location_id` (or every recipe when `None`),
    /// ordered by recipe id, with links ordered by link id.
    #[tracing::instrument(skip(pool), err)]
    pub async fn list_for_location(pool: &PgPool, location_id: Option<i32>) -> Result<Vec<Self>> {
        let recipes = sqlx::query_as::<_, RecipeRow>(
            "
            SELECT
                r.recipe_id,
                r.item_name,
                r.location_id,
                l.name AS location_name
            FROM recipes r
            JOIN locations l ON l.location_id = r.location_id
            WHERE ($1::INTEGER IS NULL OR r.location_id = $1)
            ORDER BY r.recipe_id ASC
            ",
        )
        .bind(location_id)
        .fetch_all(pool)
        .await
        .wrap_err("Failed to list recipes")?;

        if recipes.is_empty() {
            return Ok(Vec::new());
        }

        let recipe_ids: Vec<i32> = recipes.iter().map(|r| r.recipe_id).collect();

        let links = sqlx::query_as::<_, RecipeIngredientRow>(
            "
            SELECT
                ri.recipe_ingredient_id,
                ri.recipe_id,
                ri.ingredient_id,
                i.name AS ingredient_name,
                i.is_fruit,
                i.is_vegetable
            FROM recipe_ingredients ri
            LEFT JOIN ingredients i ON i.ingredient_id = ri.ingredient_id
            WHERE ri.recipe_id = ANY($1)
            ORDER BY ri.recipe_ingredient_id ASC
            ",
        )
        .bind(&recipe_ids[..])
        .fetch_all(pool)
        .await
        .wrap_err("Failed to list recipe ingredients")?;

        tracing::debug!(
            recipes = recipes.len(),
            links = links.len(),
            "Loaded recipes for location"
        );

        Ok(assemble(recipes, links))
    }
}

/// Attaches each link to its recipe, keeping the recipe order of `recipes`.
fn assemble(recipes: Vec<RecipeRow>, links: Vec<RecipeIngredientRow>) -> Vec<Recipe> {
    let mut links_by_recipe: HashMap<i32, Vec<RecipeIngredient>> = HashMap::new();
    for link in links {
        links_by_recipe
            .entry(link.recipe_id)
            .or_default()
            .push(link.into());
    }

    recipes
        .into_iter()
        .map(|row| Recipe {
            id: row.recipe_id,
            item_name: row.item_name,
            location_id: row.location_id,
            location: Location {
                id: row.location_id,
                name: row.location_name,
            },
            recipe_ingredients: links_by_recipe.remove(&row.recipe_id).unwrap_or_default(),
        })
        .collect()
}
