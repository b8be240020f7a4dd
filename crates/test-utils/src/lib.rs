//! Proofline test utilities.
//!
//! Helpers for integration testing: form submission fixtures, HTML
//! scraping for CSRF tokens, and assertion utilities.

use std::collections::BTreeMap;

/// A complete, valid contact form submission.
pub fn contact_form() -> TestForm {
    TestForm::new(&[
        ("name", "Jo Tester"),
        ("email", "jo@example.com"),
        ("subject", "Quote request"),
        ("message", "Please send pricing for the frame."),
    ])
}

/// A complete, valid service inquiry submission.
pub fn inquiry_form() -> TestForm {
    TestForm::new(&[
        ("company", "Acme Materials"),
        ("contact_name", "Sam Rivera"),
        ("email", "sam@acme.test"),
        ("phone", "5551234567"),
        ("service_type", "ndt_inspection"),
        (
            "project_details",
            "Ultrasonic inspection of twelve bridge girders.",
        ),
    ])
}

/// A form submission builder.
#[derive(Debug, Clone, Default)]
pub struct TestForm {
    fields: BTreeMap<String, String>,
}

impl TestForm {
    /// Create a form from `(field, value)` pairs.
    pub fn new(pairs: &[(&str, &str)]) -> Self {
        Self {
            fields: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Set a field.
    pub fn with(mut self, field: &str, value: &str) -> Self {
        self.fields.insert(field.to_string(), value.to_string());
        self
    }

    /// Drop a field entirely.
    pub fn without(mut self, field: &str) -> Self {
        self.fields.remove(field);
        self
    }

    /// Set the CSRF token field.
    pub fn with_token(self, token: &str) -> Self {
        self.with("_token", token)
    }

    /// Value of a field, if set.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// `application/x-www-form-urlencoded` body.
    pub fn encode(&self) -> String {
        self.fields
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Pull the CSRF token out of a rendered form.
///
/// Looks for: name="_token" value="..."
pub fn csrf_token_from_html(html: &str) -> Option<String> {
    let pattern = r#"name="_token" value=""#;
    let start = html.find(pattern)? + pattern.len();
    let end = html[start..].find('"')?;
    let token = &html[start..start + end];
    (!token.is_empty()).then(|| token.to_string())
}

/// Assertion helpers for rendered pages.
pub mod assert {
    /// Assert that a string contains a substring.
    pub fn contains(haystack: &str, needle: &str) {
        assert!(
            haystack.contains(needle),
            "Expected string to contain '{}'\nActual: {}",
            needle,
            haystack
        );
    }

    /// Assert that a string does not contain a substring.
    pub fn not_contains(haystack: &str, needle: &str) {
        assert!(
            !haystack.contains(needle),
            "Expected string to NOT contain '{}'\nActual: {}",
            needle,
            haystack
        );
    }
}
