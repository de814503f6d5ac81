//! Domain ports for the hexagonal boundary.
//!
//! Driving ports (`UsersQuery`, `UsersCommand`) are called by inbound
//! adapters; the driven port (`UserStore`) is implemented by outbound
//! adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod user_store;
mod users_command;
mod users_query;

#[cfg(test)]
pub use user_store::MockUserStore;
pub use user_store::{UserStore, UserStoreError};
#[cfg(test)]
pub use users_command::MockUsersCommand;
pub use users_command::UsersCommand;
#[cfg(test)]
pub use users_query::MockUsersQuery;
pub use users_query::UsersQuery;
