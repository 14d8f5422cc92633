use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Router,
};

use super::{api, pages, templates, SITE_STYLES};
use crate::AppState;

pub(crate) fn make_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(pages::home::home_page).post(pages::home::home_results),
        )
        .route("/styles/site.css", get(site_styles))
        .route("/api/ingredients", get(api::ingredients::list_ingredients))
        .route("/api/locations", get(api::locations::list_locations))
        .route("/api/recipes", post(api::recipes::rank_recipes))
        .fallback(fallback)
}

async fn site_styles() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css")], SITE_STYLES)
}

async fn fallback() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        templates::error_page("Page not found"),
    )
}
