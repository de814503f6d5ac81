//! Field rules for candidate user payloads.
//!
//! Validation runs against untyped JSON so every rule can be reported at once:
//! name checks precede email checks, and each field contributes at most one
//! violation (required, then type, then shape or length).

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

/// Maximum length of a user name, measured untrimmed in UTF-16 code units.
///
/// Characters outside the Basic Multilingual Plane count twice, so 51
/// astral characters exceed the limit.
pub const NAME_MAX_CHARS: usize = 100;

/// A single rule violation with its client-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldViolation {
    /// The payload is null or a scalar rather than structured JSON.
    #[error("Invalid data format")]
    InvalidFormat,
    /// The name is absent or falsy.
    #[error("Name is required")]
    NameRequired,
    /// The name is present but not a string.
    #[error("Name must be a string")]
    NameNotString,
    /// The name contains only whitespace.
    #[error("Name cannot be empty or whitespace only")]
    NameBlank,
    /// The name exceeds [`NAME_MAX_CHARS`].
    #[error("Name must be 100 characters or less")]
    NameTooLong,
    /// The email is absent or falsy.
    #[error("Email is required")]
    EmailRequired,
    /// The email is present but not a string.
    #[error("Email must be a string")]
    EmailNotString,
    /// The email lacks a `local@domain.tld` shape.
    #[error("Email format is invalid")]
    EmailInvalid,
}

/// Ordered outcome of validating a candidate payload.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use user_registry::domain::validate_user_payload;
///
/// let report = validate_user_payload(&json!({ "name": "Ada" }));
/// assert!(!report.is_valid());
/// assert_eq!(report.messages(), vec!["Email is required".to_owned()]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    violations: Vec<FieldViolation>,
}

impl ValidationReport {
    /// Whether the payload satisfied every rule.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Violations in evaluation order.
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Client-facing messages in evaluation order.
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }
}

impl From<FieldViolation> for ValidationReport {
    fn from(value: FieldViolation) -> Self {
        Self {
            violations: vec![value],
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages().join("; "))
    }
}

impl std::error::Error for ValidationReport {}

/// Check a candidate user payload against the name and email rules.
///
/// Null and scalar payloads short-circuit with
/// [`FieldViolation::InvalidFormat`]. Arrays carry no named fields, so both
/// fields report as missing.
pub fn validate_user_payload(payload: &Value) -> ValidationReport {
    let fields = match payload {
        Value::Object(fields) => Some(fields),
        Value::Array(_) => None,
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
            return FieldViolation::InvalidFormat.into();
        }
    };
    let field = |key: &str| fields.and_then(|map| map.get(key));

    let violations = [check_name(field("name")), check_email(field("email"))]
    .into_iter()
    .flatten()
    .collect();

    ValidationReport { violations }
}

/// Whether `candidate`, once trimmed, has a `local@domain.tld` shape.
///
/// # Examples
/// ```
/// use user_registry::domain::is_valid_email;
///
/// assert!(is_valid_email(" john@example.com "));
/// assert!(!is_valid_email("john@example"));
/// ```
pub fn is_valid_email(candidate: &str) -> bool {
    email_regex().is_match(candidate.trim())
}

fn email_regex() -> &'static Regex {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

// Absent, null, false, zero and the empty string all count as missing.
fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::Bool(flag)) => !flag,
        Some(Value::Number(number)) => number.as_f64() == Some(0.0),
        Some(Value::String(text)) => text.is_empty(),
        Some(Value::Array(_) | Value::Object(_)) => false,
    }
}

fn check_name(value: Option<&Value>) -> Option<FieldViolation> {
    if is_missing(value) {
        return Some(FieldViolation::NameRequired);
    }
    let Some(name) = value.and_then(Value::as_str) else {
        return Some(FieldViolation::NameNotString);
    };
    if name.trim().is_empty() {
        return Some(FieldViolation::NameBlank);
    }
    if name.encode_utf16().count() > NAME_MAX_CHARS {
        return Some(FieldViolation::NameTooLong);
    }
    None
}

fn check_email(value: Option<&Value>) -> Option<FieldViolation> {
    if is_missing(value) {
        return Some(FieldViolation::EmailRequired);
    }
    let Some(email) = value.and_then(Value::as_str) else {
        return Some(FieldViolation::EmailNotString);
    };
    if !is_valid_email(email) {
        return Some(FieldViolation::EmailInvalid);
    }
    None
}
