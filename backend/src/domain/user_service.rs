//! User registration and lookup service.
//!
//! Implements the driving ports on top of any [`UserStore`], translating
//! validation reports and store failures into domain errors.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info};

use crate::domain::ports::{UserStore, UserStoreError, UsersCommand, UsersQuery};
use crate::domain::{Error, NewUser, User, UserId};

/// Envelope message for rejected payloads.
pub const VALIDATION_FAILED: &str = "Validation failed";
/// Envelope message for duplicate email addresses.
pub const EMAIL_ALREADY_EXISTS: &str = "Email already exists";
/// Envelope message for unknown user identifiers.
pub const USER_NOT_FOUND: &str = "User not found";
/// Envelope message for unexpected failures.
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

fn map_store_error(error: UserStoreError) -> Error {
    match error {
        UserStoreError::DuplicateEmail { .. } => Error::conflict(EMAIL_ALREADY_EXISTS),
        UserStoreError::Unavailable { .. } => {
            Error::internal(INTERNAL_SERVER_ERROR).with_details(vec![error.to_string()])
        }
    }
}

/// User service implementing [`UsersQuery`] and [`UsersCommand`].
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use serde_json::json;
/// use user_registry::domain::UserService;
/// use user_registry::domain::ports::{UsersCommand, UsersQuery};
/// use user_registry::outbound::memory::InMemoryUserStore;
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let service = UserService::new(Arc::new(InMemoryUserStore::default()));
/// let user = service
///     .create_user(&json!({ "name": "John Doe", "email": "john@example.com" }))
///     .await
///     .expect("user created");
/// let fetched = service.find_user(user.id().as_ref()).await.expect("user found");
/// assert_eq!(fetched, user);
/// # });
/// ```
pub struct UserService<S: ?Sized> {
    store: Arc<S>,
}

impl<S: ?Sized> Clone for UserService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: ?Sized> UserService<S> {
    /// Create a service over the given store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> UsersQuery for UserService<S>
where
    S: UserStore + ?Sized,
{
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.store.list().await.map_err(map_store_error)
    }

    async fn find_user(&self, id: &str) -> Result<User, Error> {
        let Ok(id) = UserId::new(id) else {
            debug!(user_id = id, "rejecting malformed user id as not found");
            return Err(Error::not_found(USER_NOT_FOUND));
        };

        self.store
            .find_by_id(&id)
            .await
            .map_err(map_store_error)?
            .ok_or_else(|| Error::not_found(USER_NOT_FOUND))
    }
}

#[async_trait]
impl<S> UsersCommand for UserService<S>
where
    S: UserStore + ?Sized,
{
    async fn create_user(&self, payload: &Value) -> Result<User, Error> {
        let draft = NewUser::try_from(payload).map_err(|report| {
            Error::invalid_request(VALIDATION_FAILED).with_details(report.messages())
        })?;

        let user = self
            .store
            .insert_if_email_absent(draft)
            .await
            .map_err(map_store_error)?;

        info!(user_id = %user.id(), "user created");
        Ok(user)
    }
}

#[cfg(test)]
#[path = "user_service_tests.rs"]
mod tests;
