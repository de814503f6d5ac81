//! In-memory adapters.
//!
//! State lives for the lifetime of the process; nothing is persisted across
//! restarts.

mod user_store;

pub use user_store::InMemoryUserStore;
