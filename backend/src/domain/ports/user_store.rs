//! Driven port for user record storage.
//!
//! The store owns every live [`User`]; it assigns identifiers and creation
//! timestamps on insertion. Adapters must make
//! [`UserStore::insert_if_email_absent`] atomic with respect to concurrent
//! inserts so email uniqueness holds on a multi-threaded runtime.

use async_trait::async_trait;

use crate::domain::{NewUser, User, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by user store adapters.
    pub enum UserStoreError {
        /// A live record already uses the email address.
        DuplicateEmail { email: String } => "email already registered: {email}",
        /// The backing collection cannot be accessed.
        Unavailable { message: String } => "user store unavailable: {message}",
    }
}

/// Port for inserting and reading user records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Store a record without checking email uniqueness.
    async fn insert(&self, draft: NewUser) -> Result<User, UserStoreError>;

    /// Store a record unless a live record has exactly the same email.
    async fn insert_if_email_absent(&self, draft: NewUser) -> Result<User, UserStoreError>;

    /// Every live record in insertion order.
    async fn list(&self) -> Result<Vec<User>, UserStoreError>;

    /// Fetch a record by identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserStoreError>;

    /// Whether any live record has exactly this email.
    async fn email_exists(&self, email: &str) -> Result<bool, UserStoreError>;

    /// Whether a record with this identifier exists.
    async fn id_exists(&self, id: &UserId) -> Result<bool, UserStoreError>;

    /// Number of live records.
    async fn len(&self) -> Result<usize, UserStoreError>;

    /// Remove every record. Intended for test resets only.
    async fn clear(&self) -> Result<(), UserStoreError>;
}
