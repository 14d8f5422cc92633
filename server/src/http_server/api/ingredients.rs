use std::sync::Arc;

use axum::{extract::State, Json};
use db::{Ingredient, ProduceStore};

use crate::{
    http_server::errors::{ApiError, StoreContext as _},
    AppState,
};

#[axum_macros::debug_handler(state = AppState)]
pub(crate) async fn list_ingredients(
    State(store): State<Arc<dyn ProduceStore>>,
) -> Result<Json<Vec<Ingredient>>, ApiError> {
    let ingredients = store
        .list_ingredients()
        .await
        .store_failure("Failed to fetch ingredients")?;

    Ok(Json(ingredients))
}
