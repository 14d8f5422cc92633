use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, Response},
    Router,
};
use color_eyre::eyre::eyre;
use db::{Ingredient, Location, ProduceStore, Recipe, RecipeIngredient};
use debug_ignore::DebugIgnore;
use serde::de::DeserializeOwned;

use crate::{http_server::routes::make_router, AppConfig, AppState};

pub const APPLE: i32 = 1;
pub const CARROT: i32 = 2;
pub const RICE: i32 = 3;
pub const BANANA: i32 = 4;

pub const DOWNTOWN: i32 = 1;
pub const GYM_CAFE: i32 = 2;

/// In-memory catalog standing in for Postgres.
#[derive(Debug, Default)]
pub struct FixtureStore {
    ingredients: Vec<Ingredient>,
    locations: Vec<Location>,
    recipes: Vec<Recipe>,
}

#[async_trait]
impl ProduceStore for FixtureStore {
    async fn list_ingredients(&self) -> color_eyre::Result<Vec<Ingredient>> {
        let mut ingredients = self.ingredients.clone();
        ingredients.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));

        Ok(ingredients)
    }

    async fn list_locations(&self) -> color_eyre::Result<Vec<Location>> {
        let mut locations = self.locations.clone();
        locations.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));

        Ok(locations)
    }

    async fn recipes_for_location(
        &self,
        location_id: Option<i32>,
    ) -> color_eyre::Result<Vec<Recipe>> {
        Ok(self
            .recipes
            .iter()
            .filter(|r| location_id.map_or(true, |id| r.location_id == id))
            .cloned()
            .collect())
    }
}

/// Every query fails, like a database that went away.
#[derive(Debug)]
pub struct BrokenStore;

#[async_trait]
impl ProduceStore for BrokenStore {
    async fn list_ingredients(&self) -> color_eyre::Result<Vec<Ingredient>> {
        Err(eyre!("connection refused"))
    }

    async fn list_locations(&self) -> color_eyre::Result<Vec<Location>> {
        Err(eyre!("connection refused"))
    }

    async fn recipes_for_location(&self, _: Option<i32>) -> color_eyre::Result<Vec<Recipe>> {
        Err(eyre!("connection refused"))
    }
}

fn ingredient(id: i32, name: &str, is_fruit: bool, is_vegetable: bool) -> Ingredient {
    Ingredient {
        id,
        name: name.to_string(),
        is_fruit,
        is_vegetable,
    }
}

/// Recipes, in store order:
///
/// 1. Rice Bowl @ Downtown: apple, carrot, rice
/// 2. Plain Rice @ Downtown: rice
/// 3. Fruit Salad @ Downtown: apple, banana, carrot
/// 4. Banana Shake @ Gym Cafe: banana
/// 5. Veggie Wrap @ Downtown: carrot, plus a link to a missing ingredient
pub fn fixture_store() -> FixtureStore {
    let ingredients = vec![
        ingredient(APPLE, "Apple", true, false),
        ingredient(CARROT, "Carrot", false, true),
        ingredient(RICE, "Rice", false, false),
        ingredient(BANANA, "Banana", true, false),
    ];
    let locations = vec![
        Location {
            id: DOWNTOWN,
            name: "Downtown".to_string(),
        },
        Location {
            id: GYM_CAFE,
            name: "Gym Cafe".to_string(),
        },
    ];

    let mut next_link_id = 0;
    let mut recipe = |id: i32, item_name: &str, location_id: i32, ingredient_ids: &[i32]| {
        let recipe_ingredients = ingredient_ids
            .iter()
            .map(|ingredient_id| {
                next_link_id += 1;

                RecipeIngredient {
                    id: next_link_id,
                    recipe_id: id,
                    ingredient_id: *ingredient_id,
                    ingredient: ingredients.iter().find(|i| i.id == *ingredient_id).cloned(),
                }
            })
            .collect();

        Recipe {
            id,
            item_name: item_name.to_string(),
            location_id,
            location: locations
                .iter()
                .find(|l| l.id == location_id)
                .cloned()
                .expect("fixture location exists"),
            recipe_ingredients,
        }
    };

    let recipes = vec![
        recipe(1, "Rice Bowl", DOWNTOWN, &[APPLE, CARROT, RICE]),
        recipe(2, "Plain Rice", DOWNTOWN, &[RICE]),
        recipe(3, "Fruit Salad", DOWNTOWN, &[APPLE, BANANA, CARROT]),
        recipe(4, "Banana Shake", GYM_CAFE, &[BANANA]),
        recipe(5, "Veggie Wrap", DOWNTOWN, &[CARROT, 99]),
    ];

    FixtureStore {
        ingredients,
        locations,
        recipes,
    }
}

pub fn create_test_app(store: impl ProduceStore + 'static) -> Router {
    let state = AppState {
        app: AppConfig {
            database_url: DebugIgnore("postgres://localhost/unused".to_string()),
            port: 0,
            app_name: "Produce Picker".to_string(),
        },
        store: Arc::new(store),
    };

    make_router().with_state(state)
}

pub fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn form_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub async fn response_body_json<T: DeserializeOwned>(response: Response<Body>) -> T {
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body_bytes).unwrap()
}

pub async fn response_body_text(response: Response<Body>) -> String {
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(body_bytes.to_vec()).unwrap()
}
