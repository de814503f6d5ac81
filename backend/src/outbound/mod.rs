//! Outbound adapters implementing domain ports.
//!
//! - **memory**: process-local user store guarded by a single mutex.
//!
//! Adapters are thin translators between domain types and their backing
//! representation. They contain no business logic.

pub mod memory;
