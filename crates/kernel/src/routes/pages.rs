//! Home and about pages.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use axum::routing::get;
use axum::Router;

use crate::routes::helpers::{render_template, site_context};
use crate::state::AppState;

/// Create the static pages router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/about", get(about))
}

/// GET /
async fn home(State(state): State<AppState>) -> Response {
    let mut context = site_context(&state, "/", "Home");
    context.insert("categories", state.catalog().categories());
    render_template(&state, "index.html", &context, StatusCode::OK)
}

/// GET /about
async fn about(State(state): State<AppState>) -> Response {
    let context = site_context(&state, "/about", "About Us");
    render_template(&state, "about.html", &context, StatusCode::OK)
}
