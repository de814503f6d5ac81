//! Driving port for user registration.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{Error, User};

/// Domain use-case port for creating users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Validate an untyped payload and register the user it describes.
    ///
    /// Fails with an invalid-request error listing every violated rule, or a
    /// conflict error when the email is already registered.
    async fn create_user(&self, payload: &Value) -> Result<User, Error>;
}
