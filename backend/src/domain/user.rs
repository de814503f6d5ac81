//! User data model.

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use uuid::Uuid;

use crate::domain::validation::{FieldViolation, ValidationReport, validate_user_payload};

/// Validation errors returned when rebuilding a [`User`] from raw parts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// The identifier was empty.
    #[error("user id must not be empty")]
    EmptyId,
    /// The identifier was not a canonical UUID.
    #[error("user id must be a valid UUID")]
    InvalidId,
    /// The name or email broke a field rule.
    #[error("user fields are invalid: {0}")]
    InvalidFields(ValidationReport),
    /// The creation time was not RFC 3339.
    #[error("createdAt must be an RFC 3339 timestamp")]
    InvalidTimestamp,
}

/// Stable user identifier stored as a UUID.
///
/// The canonical string form is kept alongside the parsed value so the
/// identifier echoes back exactly as it was issued.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(Uuid, String);

impl UserId {
    /// Validate and construct a [`UserId`] from borrowed input.
    ///
    /// # Examples
    /// ```
    /// use user_registry::domain::UserId;
    ///
    /// assert!(UserId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6").is_ok());
    /// assert!(UserId::new("not-a-uuid").is_err());
    /// ```
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserValidationError> {
        Self::from_owned(id.as_ref().to_owned())
    }

    /// Generate a new random [`UserId`].
    pub fn random() -> Self {
        let uuid = Uuid::new_v4();
        Self(uuid, uuid.to_string())
    }

    fn from_owned(id: String) -> Result<Self, UserValidationError> {
        if id.is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        if id.trim() != id {
            return Err(UserValidationError::InvalidId);
        }

        let parsed = Uuid::parse_str(&id).map_err(|_| UserValidationError::InvalidId)?;
        Ok(Self(parsed, id))
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.1.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        let UserId(_, raw) = value;
        raw
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Validated name and email awaiting an identifier and creation time.
///
/// Values are kept exactly as submitted; trimming only applies to the checks.
///
/// # Examples
/// ```
/// use user_registry::domain::NewUser;
///
/// let draft = NewUser::try_new("John Doe", "john@example.com").expect("valid draft");
/// assert_eq!(draft.email(), "john@example.com");
/// assert!(NewUser::try_new("   ", "john@example.com").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    name: String,
    email: String,
}

impl NewUser {
    /// Validate typed inputs with the same rules applied to request payloads.
    pub fn try_new(
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, ValidationReport> {
        Self::try_from(&json!({ "name": name.into(), "email": email.into() }))
    }

    /// Display name as submitted.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Email address as submitted.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }
}

impl TryFrom<&Value> for NewUser {
    type Error = ValidationReport;

    fn try_from(payload: &Value) -> Result<Self, Self::Error> {
        let report = validate_user_payload(payload);
        if !report.is_valid() {
            return Err(report);
        }

        match (
            payload.get("name").and_then(Value::as_str),
            payload.get("email").and_then(Value::as_str),
        ) {
            (Some(name), Some(email)) => Ok(Self {
                name: name.to_owned(),
                email: email.to_owned(),
            }),
            _ => Err(FieldViolation::InvalidFormat.into()),
        }
    }
}

/// Registered user.
///
/// ## Invariants
/// - `id` is assigned once by the store and never reassigned.
/// - `name` and `email` satisfy the validation rules.
/// - `created_at` is stamped at insertion and never changes.
///
/// Serialises as `{ id, name, email, createdAt }` with a millisecond-precision
/// UTC timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UserDto", into = "UserDto")]
pub struct User {
    id: UserId,
    name: String,
    email: String,
    created_at: DateTime<Utc>,
}

impl User {
    /// Build a [`User`] from a validated draft.
    pub fn new(id: UserId, draft: NewUser, created_at: DateTime<Utc>) -> Self {
        let NewUser { name, email } = draft;
        Self {
            id,
            name,
            email,
            created_at,
        }
    }

    /// Stable user identifier.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Email address.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Creation timestamp.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserDto {
    id: String,
    name: String,
    email: String,
    created_at: String,
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        let User {
            id,
            name,
            email,
            created_at,
        } = value;
        Self {
            id: id.into(),
            name,
            email,
            created_at: created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

impl TryFrom<UserDto> for User {
    type Error = UserValidationError;

    fn try_from(value: UserDto) -> Result<Self, Self::Error> {
        let UserDto {
            id,
            name,
            email,
            created_at,
        } = value;
        let id = UserId::try_from(id)?;
        let draft = NewUser::try_new(name, email).map_err(UserValidationError::InvalidFields)?;
        let created_at = DateTime::parse_from_rfc3339(&created_at)
            .map_err(|_| UserValidationError::InvalidTimestamp)?
            .with_timezone(&Utc);
        Ok(Self::new(id, draft, created_at))
    }
}

#[cfg(test)]
mod tests;
