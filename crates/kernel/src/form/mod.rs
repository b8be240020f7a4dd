//! Site forms: declarative field rules, CSRF protection, and the two
//! submission forms (contact and service inquiry).
//!
//! Validation is a pure function of the submitted field map. It never
//! touches the session or the database; the route handlers verify the CSRF
//! token first and hand accepted values to the submission store.

pub mod contact;
pub mod csrf;
pub mod inquiry;
pub mod validation;

pub use contact::{CONTACT_CONFIRMATION, CONTACT_FIELDS, ContactSubmission};
pub use csrf::{CSRF_FIELD, generate_csrf_token, verify_csrf_token};
pub use inquiry::{INQUIRY_CONFIRMATION, INQUIRY_FIELDS, InquirySubmission, ServiceType};
pub use validation::{ErrorKind, FieldSpec, Rule, ValidationErrors, validate};
