//! Shared route helpers for page rendering.

use anyhow::Context;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde::Serialize;
use tower_sessions::Session;

use crate::error::AppError;
use crate::state::AppState;

/// Session key for the one-time confirmation message.
const FLASH_KEY: &str = "flash";

/// A navigation link in the site header.
#[derive(Debug, Clone, Serialize)]
pub struct NavLink {
    pub path: &'static str,
    pub title: &'static str,
}

/// Header navigation, in display order.
pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        path: "/",
        title: "Home",
    },
    NavLink {
        path: "/products",
        title: "Products",
    },
    NavLink {
        path: "/services",
        title: "Services",
    },
    NavLink {
        path: "/about",
        title: "About",
    },
    NavLink {
        path: "/contact",
        title: "Contact",
    },
];

/// Build a Tera context with site-wide variables.
///
/// Adds: `site_name`, `nav`, `path`, `title`, `flash` (empty)
pub fn site_context(state: &AppState, path: &str, title: &str) -> tera::Context {
    let mut context = tera::Context::new();
    context.insert("site_name", state.site_name());
    context.insert("nav", NAV_LINKS);
    context.insert("path", path);
    context.insert("title", title);
    context.insert("flash", &None::<String>);
    context
}

/// Queue a message to show on the next rendered page.
pub async fn set_flash(session: &Session, message: &str) -> anyhow::Result<()> {
    session
        .insert(FLASH_KEY, message)
        .await
        .context("failed to store flash message")
}

/// Read and clear the pending flash message.
pub async fn take_flash(session: &Session) -> Option<String> {
    session.remove::<String>(FLASH_KEY).await.ok().flatten()
}

/// Render a template with the given status.
///
/// Template failures are logged and answered with a bare error page.
pub fn render_template(
    state: &AppState,
    template: &str,
    context: &tera::Context,
    status: StatusCode,
) -> Response {
    match state.theme().render(template, context) {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), template = %template, "failed to render template");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(format!(
                    r#"<!DOCTYPE html>
<html><head><title>Error</title></head>
<body><h1>Template Error</h1><pre>{}</pre></body></html>"#,
                    html_escape(&e.to_string())
                )),
            )
                .into_response()
        }
    }
}

/// Render an [`AppError`] inside the site layout.
pub fn render_error(state: &AppState, error: AppError) -> Response {
    if !state.theme().has_template("error.html") {
        return error.into_response();
    }

    match &error {
        AppError::Internal(e) => tracing::error!(error = %e, "internal server error"),
        AppError::Storage(e) => tracing::error!(error = %e, "storage error"),
        _ => {}
    }

    let status = error.status();
    let title = status.canonical_reason().unwrap_or("Error");
    let mut context = site_context(state, "", title);
    context.insert("message", error.public_message());
    context.insert("status", &status.as_u16());
    render_template(state, "error.html", &context, status)
}

/// HTML-escape a string for safe output.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
