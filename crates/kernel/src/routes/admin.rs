//! Submission listings for site staff.
//!
//! Both pages list every stored submission, newest first.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use serde::Serialize;

use crate::error::AppError;
use crate::models::ServiceInquiry;
use crate::routes::helpers::{render_error, render_template, site_context};
use crate::state::AppState;

/// An inquiry row with its service label resolved.
#[derive(Serialize)]
struct InquiryRow<'a> {
    #[serde(flatten)]
    inquiry: &'a ServiceInquiry,
    service_label: &'a str,
}

/// Create the admin router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/admin/contacts", get(list_contacts))
        .route("/admin/inquiries", get(list_inquiries))
}

/// GET /admin/contacts
async fn list_contacts(State(state): State<AppState>) -> Response {
    let messages = match state.submissions().list_contacts().await {
        Ok(messages) => messages,
        Err(e) => return render_error(&state, AppError::from(e)),
    };

    let mut context = site_context(&state, "/admin/contacts", "Contact Messages");
    context.insert("messages", &messages);
    render_template(&state, "admin/contacts.html", &context, StatusCode::OK)
}

/// GET /admin/inquiries
async fn list_inquiries(State(state): State<AppState>) -> Response {
    let inquiries = match state.submissions().list_inquiries().await {
        Ok(inquiries) => inquiries,
        Err(e) => return render_error(&state, AppError::from(e)),
    };

    let rows: Vec<InquiryRow<'_>> = inquiries
        .iter()
        .map(|inquiry| InquiryRow {
            inquiry,
            service_label: inquiry.service_label(),
        })
        .collect();

    let mut context = site_context(&state, "/admin/inquiries", "Service Inquiries");
    context.insert("inquiries", &rows);
    render_template(&state, "admin/inquiries.html", &context, StatusCode::OK)
}
