//! Service inquiry form.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::validation::{ErrorKind, FieldSpec, Rule, ValidationErrors, validate};

/// Category of service an inquiry asks about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    StructuralTesting,
    NdtInspection,
    GeotechnicalTesting,
    CustomSolution,
    EquipmentRental,
    TrainingCertification,
    Consultation,
}

impl ServiceType {
    /// Every service type, in the order the form lists them.
    pub const ALL: [ServiceType; 7] = [
        ServiceType::StructuralTesting,
        ServiceType::NdtInspection,
        ServiceType::GeotechnicalTesting,
        ServiceType::CustomSolution,
        ServiceType::EquipmentRental,
        ServiceType::TrainingCertification,
        ServiceType::Consultation,
    ];

    /// The submitted and stored code.
    pub const fn code(self) -> &'static str {
        match self {
            ServiceType::StructuralTesting => "structural_testing",
            ServiceType::NdtInspection => "ndt_inspection",
            ServiceType::GeotechnicalTesting => "geotechnical_testing",
            ServiceType::CustomSolution => "custom_solution",
            ServiceType::EquipmentRental => "equipment_rental",
            ServiceType::TrainingCertification => "training_certification",
            ServiceType::Consultation => "consultation",
        }
    }

    /// Human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            ServiceType::StructuralTesting => "Structural Load & Response Testing",
            ServiceType::NdtInspection => "Non-Destructive Testing & Inspection",
            ServiceType::GeotechnicalTesting => "Geotechnical & Foundation Testing",
            ServiceType::CustomSolution => "Custom Testing Solution",
            ServiceType::EquipmentRental => "Equipment Rental",
            ServiceType::TrainingCertification => "Training & Certification",
            ServiceType::Consultation => "Engineering Consultation",
        }
    }

    /// Label for a stored code, falling back to the code itself.
    pub fn label_for(code: &str) -> &str {
        code.parse::<ServiceType>()
            .map(ServiceType::label)
            .unwrap_or(code)
    }

    /// `(code, label)` pairs for the `<select>` element.
    pub fn choices() -> Vec<ServiceChoice> {
        Self::ALL
            .iter()
            .map(|t| ServiceChoice {
                code: t.code(),
                label: t.label(),
            })
            .collect()
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error for a code that names no service type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown service type: {0}")]
pub struct UnknownServiceType(pub String);

impl FromStr for ServiceType {
    type Err = UnknownServiceType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.code() == s)
            .ok_or_else(|| UnknownServiceType(s.to_string()))
    }
}

/// One option of the service type `<select>`.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceChoice {
    pub code: &'static str,
    pub label: &'static str,
}

/// Codes accepted by the `service_type` field, taken from [`ServiceType::ALL`].
const SERVICE_TYPE_CODES: [&str; ServiceType::ALL.len()] = {
    let mut codes = [""; ServiceType::ALL.len()];
    let mut i = 0;
    while i < codes.len() {
        codes[i] = ServiceType::ALL[i].code();
        i += 1;
    }
    codes
};

/// Fields of the service inquiry form, in display order.
pub const INQUIRY_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("company", &[Rule::Required, Rule::Length { min: 2, max: 150 }]),
    FieldSpec::new(
        "contact_name",
        &[Rule::Required, Rule::Length { min: 2, max: 100 }],
    ),
    FieldSpec::new("email", &[Rule::Required, Rule::Email]),
    FieldSpec::new("phone", &[Rule::Optional, Rule::Length { min: 10, max: 20 }]),
    FieldSpec::new(
        "service_type",
        &[Rule::Required, Rule::OneOf(&SERVICE_TYPE_CODES)],
    ),
    FieldSpec::new(
        "project_details",
        &[Rule::Required, Rule::Length { min: 20, max: 3000 }],
    ),
];

/// Confirmation shown after a service inquiry is stored.
pub const INQUIRY_CONFIRMATION: &str =
    "Thank you for your inquiry — our team will contact you shortly.";

/// A service inquiry that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InquirySubmission {
    pub company: String,
    pub contact_name: String,
    pub email: String,
    /// `None` when the phone field was left blank.
    pub phone: Option<String>,
    pub service_type: ServiceType,
    pub project_details: String,
}

impl InquirySubmission {
    /// Validate a raw service inquiry submission.
    pub fn from_fields(raw: &HashMap<String, String>) -> Result<Self, ValidationErrors> {
        let mut values = validate(INQUIRY_FIELDS, raw)?;
        let mut take = |field: &str| values.remove(field).unwrap_or_default();

        let company = take("company");
        let contact_name = take("contact_name");
        let email = take("email");
        let phone = Some(take("phone")).filter(|p| !p.is_empty());
        let service_type_code = take("service_type");
        let project_details = take("project_details");

        let service_type = service_type_code.parse().map_err(|_| {
            let mut errors = ValidationErrors::new();
            errors.add("service_type", ErrorKind::NotInEnum);
            errors
        })?;

        Ok(Self {
            company,
            contact_name,
            email,
            phone,
            service_type,
            project_details,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn valid() -> HashMap<String, String> {
        [
            ("company", "Acme Bridges"),
            ("contact_name", "Ada Byron"),
            ("email", "ada@acme.example"),
            ("phone", ""),
            ("service_type", "ndt_inspection"),
            ("project_details", "Ultrasonic inspection of six girders."),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[test]
    fn test_every_service_type_is_accepted() {
        for t in ServiceType::ALL {
            let mut raw = valid();
            raw.insert("service_type".to_string(), t.code().to_string());
            let inquiry = InquirySubmission::from_fields(&raw).unwrap();
            assert_eq!(inquiry.service_type, t);
        }
    }

    #[test]
    fn test_code_round_trips_through_from_str() {
        for t in ServiceType::ALL {
            assert_eq!(t.code().parse::<ServiceType>(), Ok(t));
        }
        assert!("bogus_type".parse::<ServiceType>().is_err());
    }

    #[test]
    fn test_label_for_unknown_code_falls_back() {
        assert_eq!(ServiceType::label_for("consultation"), "Engineering Consultation");
        assert_eq!(ServiceType::label_for("legacy_code"), "legacy_code");
    }

    #[test]
    fn test_valid_inquiry_without_phone() {
        let inquiry = InquirySubmission::from_fields(&valid()).unwrap();
        assert_eq!(inquiry.service_type, ServiceType::NdtInspection);
        assert_eq!(inquiry.phone, None);
        assert_eq!(inquiry.company, "Acme Bridges");
    }

    #[test]
    fn test_phone_rules() {
        let mut raw = valid();
        raw.insert("phone".to_string(), "12345".to_string());
        let errors = InquirySubmission::from_fields(&raw).unwrap_err();
        assert_eq!(
            errors.get("phone"),
            Some(ErrorKind::LengthOutOfRange { min: 10, max: 20 })
        );
        assert_eq!(errors.len(), 1);

        raw.insert("phone".to_string(), "5551234567".to_string());
        let inquiry = InquirySubmission::from_fields(&raw).unwrap();
        assert_eq!(inquiry.phone.as_deref(), Some("5551234567"));

        raw.remove("phone");
        assert_eq!(InquirySubmission::from_fields(&raw).unwrap().phone, None);
    }

    #[test]
    fn test_bogus_service_type_is_not_in_enum() {
        let mut raw = valid();
        raw.insert("service_type".to_string(), "bogus_type".to_string());
        let errors = InquirySubmission::from_fields(&raw).unwrap_err();
        assert_eq!(errors.get("service_type"), Some(ErrorKind::NotInEnum));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_missing_service_type_is_required() {
        let mut raw = valid();
        raw.remove("service_type");
        let errors = InquirySubmission::from_fields(&raw).unwrap_err();
        assert_eq!(errors.get("service_type"), Some(ErrorKind::Required));
    }

    #[test]
    fn test_short_project_details() {
        let mut raw = valid();
        raw.insert("project_details".to_string(), "Need help.".to_string());
        raw.insert("email".to_string(), "ada-at-acme".to_string());
        let errors = InquirySubmission::from_fields(&raw).unwrap_err();
        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            vec!["email", "project_details"]
        );
        assert_eq!(errors.get("email"), Some(ErrorKind::InvalidFormat));
    }

    #[test]
    fn test_choices_list_all_seven() {
        let choices = ServiceType::choices();
        assert_eq!(choices.len(), 7);
        assert_eq!(choices[0].code, "structural_testing");
        assert_eq!(choices[6].label, "Engineering Consultation");
    }
}
