//! Stored user model.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::CandidateRecord;
use super::validation::ValidRecord;

/// Positive integer identifier assigned to an accepted record.
///
/// Identifiers are minted only by
/// [`IdentifierAllocator`](super::ids::IdentifierAllocator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    pub(crate) const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw integer value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated record together with its assigned identifier.
///
/// ## Invariants
/// - Fields passed every validation rule.
/// - Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredUser {
    id: UserId,
    name: String,
    pan: String,
    mobile: String,
    email: String,
}

impl StoredUser {
    /// Attach `id` to a validated record.
    pub fn new(id: UserId, record: ValidRecord) -> Self {
        let CandidateRecord {
            name,
            pan,
            mobile,
            email,
        } = record.into_record();
        Self {
            id,
            name,
            pan,
            mobile,
            email,
        }
    }

    /// Assigned identifier.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Name as submitted.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tax identifier as submitted.
    pub fn pan(&self) -> &str {
        &self.pan
    }

    /// Mobile number as submitted.
    pub fn mobile(&self) -> &str {
        &self.mobile
    }

    /// Email as submitted.
    pub fn email(&self) -> &str {
        &self.email
    }
}
