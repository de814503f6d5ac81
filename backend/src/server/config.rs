//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::sync::Arc;

use user_registry::domain::ports::UserStore;
use user_registry::outbound::memory::InMemoryUserStore;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) store: Arc<dyn UserStore>,
}

impl ServerConfig {
    /// Construct a configuration backed by a fresh in-memory store.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            store: Arc::new(InMemoryUserStore::default()),
        }
    }

    /// Replace the user store adapter.
    #[cfg_attr(
        not(any(test, doctest)),
        expect(dead_code, reason = "Exercised by server tests with a shared store")
    )]
    #[must_use]
    pub fn with_store(mut self, store: Arc<dyn UserStore>) -> Self {
        self.store = store;
        self
    }

    /// Return the socket address the server will bind to.
    #[cfg_attr(
        not(any(test, doctest)),
        expect(dead_code, reason = "Exercised by server tests")
    )]
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
