use std::sync::Arc;

use axum::{body::Bytes, extract::State, Json};
use db::ProduceStore;
use serde::Deserialize;

use crate::{
    http_server::errors::{ApiError, StoreContext as _},
    ranking::{self, RankedRecipe, Selection},
    AppState,
};

/// Body of `POST /api/recipes`. A missing or null `locationId` ranks every
/// recipe regardless of location.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RankRequest {
    ingredient_ids: Vec<i32>,
    #[serde(default)]
    location_id: Option<i32>,
}

// The body is parsed by hand rather than with the `Json` extractor so every
// malformed shape, content type included, gets the same `Invalid input` reply.
#[axum_macros::debug_handler(state = AppState)]
pub(crate) async fn rank_recipes(
    State(store): State<Arc<dyn ProduceStore>>,
    body: Bytes,
) -> Result<Json<Vec<RankedRecipe>>, ApiError> {
    let request: RankRequest = serde_json::from_slice(&body)?;
    let selection: Selection = request.ingredient_ids.into_iter().collect();

    let recipes = store
        .recipes_for_location(request.location_id)
        .await
        .store_failure("Internal server error")?;

    let ranked = ranking::rank_recipes(recipes, &selection);

    tracing::info!(
        selected = selection.len(),
        location_id = ?request.location_id,
        recipes = ranked.len(),
        "Ranked recipes"
    );

    Ok(Json(ranked))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_is_optional() {
        let request: RankRequest = serde_json::from_str(r#"{"ingredientIds":[1,2]}"#).unwrap();

        assert_eq!(request.ingredient_ids, vec![1, 2]);
        assert_eq!(request.location_id, None);

        let request: RankRequest =
            serde_json::from_str(r#"{"ingredientIds":[],"locationId":null}"#).unwrap();
        assert_eq!(request.location_id, None);
    }

    #[test]
    fn test_malformed_shapes_are_rejected() {
        for body in [
            r#"{"ingredientIds":"1,2"}"#,
            r#"{"ingredientIds":{"0":1}}"#,
            r#"{"ingredientIds":[1,"two"]}"#,
            r#"{"ingredientIds":[1.5]}"#,
            r#"{"locationId":1}"#,
            r#"{"ingredientIds":[1],"locationId":"downtown"}"#,
            r#"{"ingredientIds":[1,3000000000]}"#,
            r#"{"ingredientIds":[-2147483649]}"#,
            r#"{"ingredientIds":[1],"locationId":4294967296}"#,
            "not json",
            "",
        ] {
            assert!(
                serde_json::from_str::<RankRequest>(body).is_err(),
                "{body} should not parse"
            );
        }
    }
}
