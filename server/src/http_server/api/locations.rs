use std::sync::Arc;

use axum::{extract::State, Json};
use db::{Location, ProduceStore};

use crate::{
    http_server::errors::{ApiError, StoreContext as _},
    AppState,
};

#[axum_macros::debug_handler(state = AppState)]
pub(crate) async fn list_locations(
    State(store): State<Arc<dyn ProduceStore>>,
) -> Result<Json<Vec<Location>>, ApiError> {
    let locations = store
        .list_locations()
        .await
        .store_failure("Failed to fetch locations")?;

    Ok(Json(locations))
}
