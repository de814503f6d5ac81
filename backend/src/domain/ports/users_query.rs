//! Driving port for user-facing queries.
//!
//! Inbound adapters (HTTP handlers) use this port to read user records
//! without importing outbound storage concerns.

use async_trait::async_trait;

use crate::domain::{Error, User};

/// Domain use-case port for reading users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Return every registered user in insertion order.
    async fn list_users(&self) -> Result<Vec<User>, Error>;

    /// Return the user with the given identifier.
    ///
    /// Unknown or malformed identifiers yield a not-found error.
    async fn find_user(&self, id: &str) -> Result<User, Error>;
}
