//! Domain ports: the edges of the hexagon.
//!
//! Driven ports ([`UserStore`]) describe what the domain needs from storage.
//! Driving ports ([`UserBatchCommand`]) describe what inbound adapters may ask
//! of the domain.

mod macros;
pub(crate) use macros::define_port_error;

mod user_batch_command;
mod user_store;

#[cfg(test)]
pub use user_batch_command::MockUserBatchCommand;
pub use user_batch_command::UserBatchCommand;
#[cfg(test)]
pub use user_store::MockUserStore;
pub use user_store::{UserStore, UserStoreError};
