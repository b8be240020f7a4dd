//! Field validation rules and error collection.
//!
//! Each form declares an ordered rule list per field. Every field is checked,
//! and the first failing rule of a field becomes that field's single error,
//! so a redisplayed form can show all field errors at once.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Email grammar: non-empty local part, one `@`, and a dotted domain whose
/// labels are all non-empty. Whitespace is never allowed.
///
/// # Panics
///
/// Panics if the hard-coded regex literal is invalid (impossible in practice).
#[allow(clippy::expect_used)]
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@.]+(?:\.[^\s@.]+)+$").expect("valid regex literal")
});

/// Why a single field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ErrorKind {
    /// Missing, or blank after trimming.
    Required,
    /// Trimmed length outside the inclusive bound.
    LengthOutOfRange { min: usize, max: usize },
    /// Not a valid email address.
    InvalidFormat,
    /// Not one of the allowed choices.
    NotInEnum,
}

impl ErrorKind {
    /// Text shown next to the field on redisplay.
    pub fn message(&self) -> String {
        match self {
            ErrorKind::Required => "This field is required.".to_string(),
            ErrorKind::LengthOutOfRange { min, max } => {
                format!("Field must be between {min} and {max} characters long.")
            }
            ErrorKind::InvalidFormat => "Invalid email address.".to_string(),
            ErrorKind::NotInEnum => "Not a valid choice.".to_string(),
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// One step in a field's rule chain.
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// Fail with [`ErrorKind::Required`] when blank.
    Required,
    /// Accept a blank value and skip the remaining rules.
    Optional,
    /// Inclusive character-count bound.
    Length { min: usize, max: usize },
    /// Email grammar.
    Email,
    /// Exact match against a fixed list of codes.
    OneOf(&'static [&'static str]),
}

impl Rule {
    /// Check a trimmed value against this rule.
    fn check(&self, value: &str) -> RuleOutcome {
        match self {
            Rule::Required if value.is_empty() => RuleOutcome::Fail(ErrorKind::Required),
            Rule::Optional if value.is_empty() => RuleOutcome::Stop,
            Rule::Length { min, max } => {
                let len = value.chars().count();
                if len < *min || len > *max {
                    RuleOutcome::Fail(ErrorKind::LengthOutOfRange {
                        min: *min,
                        max: *max,
                    })
                } else {
                    RuleOutcome::Continue
                }
            }
            Rule::Email if !is_valid_email(value) => RuleOutcome::Fail(ErrorKind::InvalidFormat),
            Rule::OneOf(choices) if !choices.iter().any(|choice| *choice == value) => {
                RuleOutcome::Fail(ErrorKind::NotInEnum)
            }
            _ => RuleOutcome::Continue,
        }
    }
}

enum RuleOutcome {
    Continue,
    Stop,
    Fail(ErrorKind),
}

/// A named field and its ordered rules.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub rules: &'static [Rule],
}

impl FieldSpec {
    pub const fn new(name: &'static str, rules: &'static [Rule]) -> Self {
        Self { name, rules }
    }

    /// Run the rule chain over a raw value, returning the trimmed value.
    pub fn check(&self, raw: Option<&str>) -> Result<String, ErrorKind> {
        let value = raw.map(str::trim).unwrap_or_default();
        for rule in self.rules {
            match rule.check(value) {
                RuleOutcome::Continue => {}
                RuleOutcome::Stop => break,
                RuleOutcome::Fail(kind) => return Err(kind),
            }
        }
        Ok(value.to_string())
    }
}

/// Whether `value` is an email address under the site's grammar.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

/// The errors of one rejected submission, at most one per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<&'static str, ErrorKind>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error for a field, replacing any earlier one.
    pub fn add(&mut self, field: &'static str, kind: ErrorKind) {
        self.errors.insert(field, kind);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// The error recorded for `field`, if any.
    pub fn get(&self, field: &str) -> Option<ErrorKind> {
        self.errors.get(field).copied()
    }

    /// Names of the fields that failed, in sorted order.
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.errors.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, ErrorKind)> + '_ {
        self.errors.iter().map(|(field, kind)| (*field, *kind))
    }

    /// Error text keyed by field name for every field in `specs`.
    ///
    /// Fields without an error map to an empty string so templates can test
    /// `errors.<field>` without tripping over undefined keys.
    pub fn messages(&self, specs: &[FieldSpec]) -> BTreeMap<String, String> {
        specs
            .iter()
            .map(|spec| {
                let message = self
                    .get(spec.name)
                    .map(|kind| kind.message())
                    .unwrap_or_default();
                (spec.name.to_string(), message)
            })
            .collect()
    }
}

/// Validate every field in `specs` against the raw submission.
///
/// Returns the trimmed values keyed by field name, or every field error.
pub fn validate(
    specs: &[FieldSpec],
    raw: &HashMap<String, String>,
) -> Result<HashMap<&'static str, String>, ValidationErrors> {
    let mut values = HashMap::with_capacity(specs.len());
    let mut errors = ValidationErrors::new();

    for spec in specs {
        match spec.check(raw.get(spec.name).map(String::as_str)) {
            Ok(value) => {
                values.insert(spec.name, value);
            }
            Err(kind) => errors.add(spec.name, kind),
        }
    }

    if errors.is_empty() {
        Ok(values)
    } else {
        Err(errors)
    }
}

/// The submitted values of every field in `specs`, for redisplay.
///
/// Missing fields become empty strings; values are echoed as submitted.
pub fn echo_values(specs: &[FieldSpec], raw: &HashMap<String, String>) -> BTreeMap<String, String> {
    specs
        .iter()
        .map(|spec| {
            let value = raw.get(spec.name).cloned().unwrap_or_default();
            (spec.name.to_string(), value)
        })
        .collect()
}
