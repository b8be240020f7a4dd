//! Rendering shared by the two submission forms.

use std::collections::{BTreeMap, HashMap};

use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use tower_sessions::Session;

use crate::error::AppError;
use crate::form::validation::echo_values;
use crate::form::{CSRF_FIELD, FieldSpec, ValidationErrors, generate_csrf_token, verify_csrf_token};
use crate::routes::helpers::{render_error, render_template, set_flash, site_context, take_flash};
use crate::state::AppState;

/// The values, errors and notice a form page is drawn with.
#[derive(Debug, Clone)]
pub struct FormView {
    values: BTreeMap<String, String>,
    errors: BTreeMap<String, String>,
    notice: Option<&'static str>,
    /// Confirmation drawn directly instead of read from the session.
    confirmation: Option<&'static str>,
}

impl FormView {
    /// An empty form.
    pub fn blank(specs: &[FieldSpec]) -> Self {
        Self {
            values: echo_values(specs, &HashMap::new()),
            errors: ValidationErrors::new().messages(specs),
            notice: None,
            confirmation: None,
        }
    }

    /// An empty form showing `message` as the confirmation.
    pub fn confirmed(specs: &[FieldSpec], message: &'static str) -> Self {
        Self {
            confirmation: Some(message),
            ..Self::blank(specs)
        }
    }

    /// A rejected submission: values echoed, one message per failing field.
    pub fn rejected(
        specs: &[FieldSpec],
        raw: &HashMap<String, String>,
        errors: &ValidationErrors,
    ) -> Self {
        Self {
            values: echo_values(specs, raw),
            errors: errors.messages(specs),
            notice: None,
            confirmation: None,
        }
    }

    /// A valid submission the store could not take.
    pub fn unsaved(specs: &[FieldSpec], raw: &HashMap<String, String>, error: &AppError) -> Self {
        Self {
            values: echo_values(specs, raw),
            errors: ValidationErrors::new().messages(specs),
            notice: Some(error.public_message()),
            confirmation: None,
        }
    }

    /// Value shown in `field`.
    pub fn value(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    /// Error shown under `field`, empty when there is none.
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }
}

/// A form page: path, template and title.
#[derive(Debug, Clone, Copy)]
pub struct FormPage {
    pub path: &'static str,
    pub template: &'static str,
    pub title: &'static str,
}

impl FormPage {
    /// Render the page with a fresh CSRF token and any pending flash.
    ///
    /// `extend` adds page-specific variables.
    pub async fn render(
        &self,
        state: &AppState,
        session: &Session,
        view: &FormView,
        status: StatusCode,
        extend: impl FnOnce(&mut tera::Context),
    ) -> Response {
        let csrf_token = match generate_csrf_token(session).await {
            Ok(token) => token,
            Err(e) => return render_error(state, AppError::Internal(e)),
        };

        let mut context = site_context(state, self.path, self.title);
        context.insert("csrf_token", &csrf_token);
        context.insert("csrf_field", CSRF_FIELD);
        context.insert("values", &view.values);
        context.insert("errors", &view.errors);
        context.insert("notice", &view.notice);
        let flash = match view.confirmation {
            Some(message) => Some(message.to_string()),
            None => take_flash(session).await,
        };
        context.insert("flash", &flash);
        extend(&mut context);

        render_template(state, self.template, &context, status)
    }

    /// Answer a stored submission: queue `message` and redirect back.
    ///
    /// When the session cannot hold the message it is drawn on a fresh form
    /// instead.
    pub async fn confirm(
        &self,
        state: &AppState,
        session: &Session,
        specs: &[FieldSpec],
        message: &'static str,
        extend: impl FnOnce(&mut tera::Context),
    ) -> Response {
        match set_flash(session, message).await {
            Ok(()) => Redirect::to(self.path).into_response(),
            Err(e) => {
                tracing::error!(error = %format!("{e:#}"), path = self.path, "confirmation not queued, rendering inline");
                let view = FormView::confirmed(specs, message);
                self.render(state, session, &view, StatusCode::OK, extend)
                    .await
            }
        }
    }
}

/// Check the submitted CSRF token, returning the error page on failure.
pub async fn check_csrf(
    state: &AppState,
    session: &Session,
    raw: &HashMap<String, String>,
    form: &'static str,
) -> Result<(), Response> {
    let submitted = raw.get(CSRF_FIELD).map(String::as_str).unwrap_or_default();

    match verify_csrf_token(session, submitted).await {
        Ok(true) => Ok(()),
        Ok(false) => {
            tracing::warn!(form, "rejected submission with invalid CSRF token");
            Err(render_error(state, AppError::InvalidSubmission))
        }
        Err(e) => Err(render_error(state, AppError::Internal(e))),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::form::{CONTACT_CONFIRMATION, CONTACT_FIELDS, ContactSubmission};
    use crate::services::StoreError;

    fn raw(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_blank_view_has_every_field() {
        let view = FormView::blank(CONTACT_FIELDS);
        for spec in CONTACT_FIELDS {
            assert_eq!(view.value(spec.name), Some(""));
            assert_eq!(view.error(spec.name), Some(""));
        }
        assert!(view.notice.is_none());
        assert!(view.confirmation.is_none());
    }

    #[test]
    fn test_confirmed_view_is_blank_with_message() {
        let view = FormView::confirmed(CONTACT_FIELDS, CONTACT_CONFIRMATION);
        assert_eq!(view.confirmation, Some(CONTACT_CONFIRMATION));
        assert_eq!(view.value("email"), Some(""));
        assert!(view.notice.is_none());
    }

    #[test]
    fn test_rejected_view_echoes_values() {
        let input = raw(&[
            ("name", "Jo"),
            ("email", "jo@example.com"),
            ("subject", "Quote"),
            ("message", "short"),
        ]);
        let errors = ContactSubmission::from_fields(&input).unwrap_err();
        let view = FormView::rejected(CONTACT_FIELDS, &input, &errors);

        assert_eq!(view.value("message"), Some("short"));
        assert_eq!(
            view.error("message"),
            Some("Field must be between 10 and 2000 characters long.")
        );
        assert_eq!(view.error("name"), Some(""));
    }

    #[test]
    fn test_unsaved_view_carries_notice() {
        let input = raw(&[("name", "Jo")]);
        let error = AppError::Storage(StoreError::StorageUnavailable(anyhow::anyhow!("locked")));
        let view = FormView::unsaved(CONTACT_FIELDS, &input, &error);

        assert_eq!(view.value("name"), Some("Jo"));
        assert_eq!(view.notice, Some(error.public_message()));
    }
}
