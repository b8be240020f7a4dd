//! General contact form.

use std::collections::HashMap;

use super::validation::{FieldSpec, Rule, ValidationErrors, validate};

/// Fields of the contact form, in display order.
pub const CONTACT_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("name", &[Rule::Required, Rule::Length { min: 2, max: 100 }]),
    FieldSpec::new("email", &[Rule::Required, Rule::Email]),
    FieldSpec::new("subject", &[Rule::Required, Rule::Length { min: 5, max: 200 }]),
    FieldSpec::new(
        "message",
        &[Rule::Required, Rule::Length { min: 10, max: 2000 }],
    ),
];

/// Confirmation shown after a contact message is stored.
pub const CONTACT_CONFIRMATION: &str = "Thanks — we received your message and will reply soon.";

/// A contact message that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactSubmission {
    /// Validate a raw contact form submission.
    pub fn from_fields(raw: &HashMap<String, String>) -> Result<Self, ValidationErrors> {
        let mut values = validate(CONTACT_FIELDS, raw)?;
        let mut take = |field: &str| values.remove(field).unwrap_or_default();

        Ok(Self {
            name: take("name"),
            email: take("email"),
            subject: take("subject"),
            message: take("message"),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::form::validation::ErrorKind;

    fn fields(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn valid() -> HashMap<String, String> {
        fields(&[
            ("name", "Jo"),
            ("email", "jo@x.com"),
            ("subject", "Hi there"),
            ("message", "This is a test message."),
        ])
    }

    #[test]
    fn test_valid_message_is_accepted() {
        let submission = ContactSubmission::from_fields(&valid()).unwrap();
        assert_eq!(submission.name, "Jo");
        assert_eq!(submission.email, "jo@x.com");
        assert_eq!(submission.subject, "Hi there");
        assert_eq!(submission.message, "This is a test message.");
    }

    #[test]
    fn test_values_are_trimmed() {
        let mut raw = valid();
        raw.insert("subject".to_string(), "   Hi there \n".to_string());
        let submission = ContactSubmission::from_fields(&raw).unwrap();
        assert_eq!(submission.subject, "Hi there");
    }

    #[test]
    fn test_short_message_fails_only_message() {
        let mut raw = valid();
        raw.insert("message".to_string(), "short".to_string());
        let errors = ContactSubmission::from_fields(&raw).unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get("message"),
            Some(ErrorKind::LengthOutOfRange { min: 10, max: 2000 })
        );
    }

    #[test]
    fn test_each_missing_field_is_reported_alone() {
        for spec in CONTACT_FIELDS {
            let mut raw = valid();
            raw.remove(spec.name);
            let errors = ContactSubmission::from_fields(&raw).unwrap_err();
            assert_eq!(errors.fields().collect::<Vec<_>>(), vec![spec.name]);
            assert_eq!(errors.get(spec.name), Some(ErrorKind::Required));
        }
    }

    #[test]
    fn test_empty_submission_reports_all_fields() {
        let errors = ContactSubmission::from_fields(&HashMap::new()).unwrap_err();
        assert_eq!(errors.len(), CONTACT_FIELDS.len());
        assert!(errors.iter().all(|(_, kind)| kind == ErrorKind::Required));
    }

    #[test]
    fn test_length_bounds_are_inclusive() {
        let mut raw = valid();
        raw.insert("name".to_string(), "x".repeat(100));
        raw.insert("message".to_string(), "y".repeat(2000));
        assert!(ContactSubmission::from_fields(&raw).is_ok());

        raw.insert("name".to_string(), "x".repeat(101));
        let errors = ContactSubmission::from_fields(&raw).unwrap_err();
        assert_eq!(
            errors.get("name"),
            Some(ErrorKind::LengthOutOfRange { min: 2, max: 100 })
        );
    }
}
