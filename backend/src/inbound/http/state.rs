//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without a real store.

use std::sync::Arc;

use crate::domain::UserService;
use crate::domain::ports::{UserStore, UsersCommand, UsersQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Read side: listing and lookup.
    pub users: Arc<dyn UsersQuery>,
    /// Write side: registration.
    pub users_command: Arc<dyn UsersCommand>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    pub fn new(users: Arc<dyn UsersQuery>, users_command: Arc<dyn UsersCommand>) -> Self {
        Self {
            users,
            users_command,
        }
    }

    /// Construct state with one [`UserService`] serving both ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use user_registry::inbound::http::state::HttpState;
    /// use user_registry::outbound::memory::InMemoryUserStore;
    ///
    /// let state = HttpState::with_store(Arc::new(InMemoryUserStore::default()));
    /// let _query = state.users.clone();
    /// ```
    pub fn with_store<S>(store: Arc<S>) -> Self
    where
        S: UserStore + ?Sized + 'static,
    {
        let service = Arc::new(UserService::new(store));
        Self::new(service.clone(), service)
    }
}
