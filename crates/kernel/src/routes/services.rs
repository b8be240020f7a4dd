//! Services page and service inquiry submission.

use std::collections::HashMap;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use axum::routing::get;
use axum::{Form, Router};
use tower_sessions::Session;

use crate::error::AppError;
use crate::form::{INQUIRY_CONFIRMATION, INQUIRY_FIELDS, InquirySubmission, ServiceType};
use crate::routes::form_page::{FormPage, FormView, check_csrf};
use crate::state::AppState;

const PAGE: FormPage = FormPage {
    path: "/services",
    template: "services.html",
    title: "Services",
};

/// Create the services router.
pub fn router() -> Router<AppState> {
    Router::new().route("/services", get(services_page).post(submit_inquiry))
}

fn insert_service_types(context: &mut tera::Context) {
    context.insert("service_types", &ServiceType::choices());
}

/// GET /services
async fn services_page(State(state): State<AppState>, session: Session) -> Response {
    PAGE.render(
        &state,
        &session,
        &FormView::blank(INQUIRY_FIELDS),
        StatusCode::OK,
        insert_service_types,
    )
    .await
}

/// POST /services
async fn submit_inquiry(
    State(state): State<AppState>,
    session: Session,
    Form(raw): Form<HashMap<String, String>>,
) -> Response {
    if let Err(response) = check_csrf(&state, &session, &raw, "inquiry").await {
        return response;
    }

    let submission = match InquirySubmission::from_fields(&raw) {
        Ok(submission) => submission,
        Err(errors) => {
            tracing::debug!(fields = ?errors.fields().collect::<Vec<_>>(), "inquiry form rejected");
            let view = FormView::rejected(INQUIRY_FIELDS, &raw, &errors);
            return PAGE
                .render(&state, &session, &view, StatusCode::OK, insert_service_types)
                .await;
        }
    };

    match state.submissions().append_inquiry(&submission).await {
        Ok(_) => {
            PAGE.confirm(&state, &session, INQUIRY_FIELDS, INQUIRY_CONFIRMATION, insert_service_types)
                .await
        }
        Err(e) => {
            let error = AppError::from(e);
            let view = FormView::unsaved(INQUIRY_FIELDS, &raw, &error);
            PAGE.render(&state, &session, &view, error.status(), insert_service_types)
                .await
        }
    }
}
