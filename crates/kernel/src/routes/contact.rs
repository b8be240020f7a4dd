//! Contact page and contact form submission.

use std::collections::HashMap;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use axum::routing::get;
use axum::{Form, Router};
use tower_sessions::Session;

use crate::error::AppError;
use crate::form::{CONTACT_CONFIRMATION, CONTACT_FIELDS, ContactSubmission};
use crate::routes::form_page::{FormPage, FormView, check_csrf};
use crate::state::AppState;

const PAGE: FormPage = FormPage {
    path: "/contact",
    template: "contact.html",
    title: "Contact Us",
};

/// Create the contact router.
pub fn router() -> Router<AppState> {
    Router::new().route("/contact", get(contact_form).post(submit_contact))
}

/// GET /contact
async fn contact_form(State(state): State<AppState>, session: Session) -> Response {
    PAGE.render(
        &state,
        &session,
        &FormView::blank(CONTACT_FIELDS),
        StatusCode::OK,
        |_| {},
    )
    .await
}

/// POST /contact
///
/// Redirects with a confirmation on success; otherwise redraws the form.
async fn submit_contact(
    State(state): State<AppState>,
    session: Session,
    Form(raw): Form<HashMap<String, String>>,
) -> Response {
    if let Err(response) = check_csrf(&state, &session, &raw, "contact").await {
        return response;
    }

    let submission = match ContactSubmission::from_fields(&raw) {
        Ok(submission) => submission,
        Err(errors) => {
            tracing::debug!(fields = ?errors.fields().collect::<Vec<_>>(), "contact form rejected");
            let view = FormView::rejected(CONTACT_FIELDS, &raw, &errors);
            return PAGE
                .render(&state, &session, &view, StatusCode::OK, |_| {})
                .await;
        }
    };

    match state.submissions().append_contact(&submission).await {
        Ok(_) => {
            PAGE.confirm(&state, &session, CONTACT_FIELDS, CONTACT_CONFIRMATION, |_| {})
                .await
        }
        Err(e) => {
            let error = AppError::from(e);
            let view = FormView::unsaved(CONTACT_FIELDS, &raw, &error);
            PAGE.render(&state, &session, &view, error.status(), |_| {})
                .await
        }
    }
}
