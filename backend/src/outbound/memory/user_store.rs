//! Mutex-guarded user store keeping records in insertion order.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use tracing::error;

use crate::domain::ports::{UserStore, UserStoreError};
use crate::domain::{NewUser, User, UserId};

#[derive(Debug, Default)]
struct Records {
    users: Vec<User>,
    positions: HashMap<UserId, usize>,
}

impl Records {
    fn push(&mut self, user: User) {
        self.positions.insert(user.id().clone(), self.users.len());
        self.users.push(user);
    }

    fn get(&self, id: &UserId) -> Option<&User> {
        self.positions
            .get(id)
            .and_then(|position| self.users.get(*position))
    }

    fn has_email(&self, email: &str) -> bool {
        self.users.iter().any(|user| user.email() == email)
    }

    fn clear(&mut self) {
        self.users.clear();
        self.positions.clear();
    }
}

/// User store backed by process memory.
///
/// A single [`Mutex`] guards the collection, so the email check and insert in
/// [`UserStore::insert_if_email_absent`] happen as one step even when Actix
/// workers run on separate threads.
///
/// # Examples
/// ```
/// use user_registry::domain::NewUser;
/// use user_registry::domain::ports::UserStore;
/// use user_registry::outbound::memory::InMemoryUserStore;
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let store = InMemoryUserStore::default();
/// let draft = NewUser::try_new("Ada", "ada@example.com").expect("valid draft");
/// let user = store.insert(draft).await.expect("inserted");
/// assert!(store.id_exists(user.id()).await.expect("lookup"));
/// # });
/// ```
pub struct InMemoryUserStore {
    clock: Arc<dyn Clock + Send + Sync>,
    records: Mutex<Records>,
}

impl InMemoryUserStore {
    /// Create an empty store stamping records with the given clock.
    pub fn new(clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self {
            clock,
            records: Mutex::new(Records::default()),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Records>, UserStoreError> {
        self.records.lock().map_err(|_| {
            error!("user records mutex poisoned");
            UserStoreError::unavailable("user records lock poisoned")
        })
    }

    fn stamp(&self, records: &Records, draft: NewUser) -> User {
        let mut id = UserId::random();
        while records.positions.contains_key(&id) {
            id = UserId::random();
        }
        User::new(id, draft, self.clock.utc())
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new(Arc::new(DefaultClock))
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn insert(&self, draft: NewUser) -> Result<User, UserStoreError> {
        let mut records = self.lock()?;
        let user = self.stamp(&records, draft);
        records.push(user.clone());
        Ok(user)
    }

    async fn insert_if_email_absent(&self, draft: NewUser) -> Result<User, UserStoreError> {
        let mut records = self.lock()?;
        if records.has_email(draft.email()) {
            return Err(UserStoreError::duplicate_email(draft.email()));
        }
        let user = self.stamp(&records, draft);
        records.push(user.clone());
        Ok(user)
    }

    async fn list(&self) -> Result<Vec<User>, UserStoreError> {
        Ok(self.lock()?.users.clone())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserStoreError> {
        Ok(self.lock()?.get(id).cloned())
    }

    async fn email_exists(&self, email: &str) -> Result<bool, UserStoreError> {
        Ok(self.lock()?.has_email(email))
    }

    async fn id_exists(&self, id: &UserId) -> Result<bool, UserStoreError> {
        Ok(self.lock()?.positions.contains_key(id))
    }

    async fn len(&self) -> Result<usize, UserStoreError> {
        Ok(self.lock()?.users.len())
    }

    async fn clear(&self) -> Result<(), UserStoreError> {
        self.lock()?.clear();
        Ok(())
    }
}
