use std::sync::Arc;

use axum::{extract::State, http::StatusCode};
use axum_extra::extract::{Form, FormRejection};
use color_eyre::eyre::WrapErr;
use db::{Ingredient, Location, ProduceStore};
use maud::{html, Markup};
use serde::Deserialize;

use crate::{
    http_server::{
        errors::WithStatus as _,
        templates::{base, checklist::Checklist, recipes::RankedRecipeList},
        ResponseResult,
    },
    ranking::{rank_recipes, RankedRecipe, Selection},
    AppConfig, AppState,
};

/// Fields posted by the checklist form. An empty `locationId` means every
/// location.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RankForm {
    #[serde(default)]
    ingredient_ids: Vec<i32>,
    #[serde(default)]
    location_id: Option<String>,
}

#[axum_macros::debug_handler(state = AppState)]
pub(crate) async fn home_page(
    State(config): State<AppConfig>,
    State(store): State<Arc<dyn ProduceStore>>,
) -> ResponseResult<Markup> {
    let (ingredients, locations) = load_checklist(store.as_ref()).await?;

    Ok(render_page(
        &config,
        &ingredients,
        &locations,
        &Selection::default(),
        None,
        None,
    ))
}

#[axum_macros::debug_handler(state = AppState)]
pub(crate) async fn home_results(
    State(config): State<AppConfig>,
    State(store): State<Arc<dyn ProduceStore>>,
    form: Result<Form<RankForm>, FormRejection>,
) -> ResponseResult<Markup> {
    let Form(form) = form
        .wrap_err("Invalid input")
        .with_status(StatusCode::BAD_REQUEST)?;

    let location_id = parse_location(form.location_id.as_deref()).with_status(StatusCode::BAD_REQUEST)?;
    let selection: Selection = form.ingredient_ids.into_iter().collect();

    let (ingredients, locations) = load_checklist(store.as_ref()).await?;

    let recipes = store
        .recipes_for_location(location_id)
        .await
        .wrap_err("Failed to fetch recipes")
        .with_status(StatusCode::INTERNAL_SERVER_ERROR)?;
    let ranked = rank_recipes(recipes, &selection);

    Ok(render_page(
        &config,
        &ingredients,
        &locations,
        &selection,
        location_id,
        Some(ranked.as_slice()),
    ))
}

async fn load_checklist(
    store: &dyn ProduceStore,
) -> ResponseResult<(Vec<Ingredient>, Vec<Location>)> {
    let (ingredients, locations) = tokio::try_join!(store.list_ingredients(), store.list_locations())
        .wrap_err("Failed to fetch ingredients")
        .with_status(StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok((ingredients, locations))
}

fn parse_location(raw: Option<&str>) -> color_eyre::Result<Option<i32>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw.parse().map(Some).wrap_err("Invalid location"),
    }
}

fn render_page(
    config: &AppConfig,
    ingredients: &[Ingredient],
    locations: &[Location],
    selection: &Selection,
    location_id: Option<i32>,
    ranked: Option<&[RankedRecipe]>,
) -> Markup {
    base(
        &config.app_name,
        html! {
            h1 { (config.app_name) ": analyze your fruits and veggies" }

            (Checklist {
                ingredients,
                locations,
                selection,
                location_id,
            })

            (RankedRecipeList(ranked))
        },
    )
}
