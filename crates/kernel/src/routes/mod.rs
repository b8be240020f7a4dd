//! HTTP route handlers.

pub mod admin;
pub mod contact;
pub mod form_page;
pub mod health;
pub mod helpers;
pub mod pages;
pub mod products;
pub mod services;
pub mod static_files;

use axum::Router;
use tower_http::trace::TraceLayer;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::state::AppState;

/// Every site route, without state or layers.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(pages::router())
        .merge(products::router())
        .merge(services::router())
        .merge(contact::router())
        .merge(admin::router())
        .merge(health::router())
        .merge(static_files::router())
}

/// The full application: routes, session layer and request tracing.
///
/// Layer order (last added = first executed): TraceLayer → session → routes
pub fn app(state: AppState, session_layer: SessionManagerLayer<MemoryStore>) -> Router {
    router()
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
