//! Driven port for the user store.
//!
//! The store owns identifier allocation so that "take the next identifier and
//! append the user" happens as one step. Implementations shared between
//! requests must make that step atomic; rejected records never reach the
//! store and therefore never consume an identifier.

use crate::domain::StoredUser;
use crate::domain::validation::ValidRecord;

use super::define_port_error;

define_port_error! {
    /// Errors raised by user store adapters.
    pub enum UserStoreError {
        /// Every identifier has been issued.
        IdentifiersExhausted => "user identifiers exhausted",
        /// The store cannot serve requests.
        Unavailable { message: String } => "user store unavailable: {message}",
    }
}

/// Append-only store of accepted users.
#[cfg_attr(test, mockall::automock)]
pub trait UserStore: Send + Sync {
    /// Assign the next identifier to `record` and append it.
    fn insert(&self, record: ValidRecord) -> Result<StoredUser, UserStoreError>;

    /// Snapshot of all stored users in insertion order.
    fn users(&self) -> Result<Vec<StoredUser>, UserStoreError>;
}
