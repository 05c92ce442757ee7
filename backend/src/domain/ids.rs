//! Monotonic identifier allocation.

use super::UserId;

/// Hands out `1, 2, 3, …` with no reuse and no gaps.
///
/// The allocator is a plain value; callers that share it across requests
/// must serialise access together with the store append (see
/// [`InMemoryUserStore`](crate::outbound::memory::InMemoryUserStore)).
/// Iteration ends once `u64::MAX` has been issued.
///
/// # Examples
/// ```
/// use user_ingest::domain::ids::IdentifierAllocator;
///
/// let mut ids = IdentifierAllocator::new();
/// let issued: Vec<u64> = ids.by_ref().take(3).map(|id| id.get()).collect();
/// assert_eq!(issued, vec![1, 2, 3]);
/// assert_eq!(ids.peek().map(|id| id.get()), Some(4));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierAllocator {
    next: Option<u64>,
}

impl IdentifierAllocator {
    /// Start a fresh sequence at 1.
    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Resume a sequence at `first`. Zero is not a valid identifier and is
    /// bumped to 1.
    #[must_use]
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: Some(first.max(1)),
        }
    }

    /// Identifier the next call to [`Iterator::next`] will return.
    #[must_use]
    pub fn peek(&self) -> Option<UserId> {
        self.next.map(UserId::from_raw)
    }
}

impl Default for IdentifierAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for IdentifierAllocator {
    type Item = UserId;

    fn next(&mut self) -> Option<UserId> {
        let current = self.next?;
        self.next = current.checked_add(1);
        Some(UserId::from_raw(current))
    }
}
