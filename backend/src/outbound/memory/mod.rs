//! In-memory user store.
//!
//! Users live for the lifetime of the process. The identifier allocator and
//! the user list share one mutex, so allocate-then-append is atomic even when
//! Actix workers handle batches concurrently.

use std::sync::{Mutex, MutexGuard};

use tracing::trace;

use crate::domain::ids::IdentifierAllocator;
use crate::domain::ports::{UserStore, UserStoreError};
use crate::domain::validation::ValidRecord;
use crate::domain::StoredUser;

#[derive(Debug, Default)]
struct Ledger {
    ids: IdentifierAllocator,
    users: Vec<StoredUser>,
}

/// Append-only, process-wide [`UserStore`].
///
/// Each instance is independent; tests build one per case.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    ledger: Mutex<Ledger>,
}

impl InMemoryUserStore {
    /// Create an empty store whose first identifier is 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store that continues from `allocator`.
    #[must_use]
    pub fn with_allocator(allocator: IdentifierAllocator) -> Self {
        Self {
            ledger: Mutex::new(Ledger {
                ids: allocator,
                users: Vec::new(),
            }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Ledger>, UserStoreError> {
        self.ledger
            .lock()
            .map_err(|err| UserStoreError::unavailable(format!("ledger lock poisoned: {err}")))
    }
}

impl UserStore for InMemoryUserStore {
    fn insert(&self, record: ValidRecord) -> Result<StoredUser, UserStoreError> {
        let mut ledger = self.lock()?;
        let id = ledger
            .ids
            .next()
            .ok_or_else(UserStoreError::identifiers_exhausted)?;
        let user = StoredUser::new(id, record);
        ledger.users.push(user.clone());
        trace!(%id, stored = ledger.users.len(), "user appended");
        Ok(user)
    }

    fn users(&self) -> Result<Vec<StoredUser>, UserStoreError> {
        Ok(self.lock()?.users.clone())
    }
}

#[cfg(test)]
mod tests;
