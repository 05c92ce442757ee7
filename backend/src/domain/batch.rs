//! Batch ingestion: partial acceptance over an ordered list of records.
//!
//! Each record is validated on its own. Accepted records are stored and
//! receive identifiers; rejected ones are reported with their reason. One bad
//! record never stops the rest of the batch.

use std::sync::Arc;

use tracing::{debug, error, info};

use super::ports::{UserBatchCommand, UserStore, UserStoreError};
use super::validation::{RejectedRecord, validate};
use super::{CandidateRecord, Error, StoredUser};

/// Result of processing one candidate record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    /// Stored with an identifier.
    Accepted(StoredUser),
    /// Refused; the store was not touched.
    Rejected(RejectedRecord),
}

/// Ordered outcomes for one submitted batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchResult {
    outcomes: Vec<RecordOutcome>,
}

impl BatchResult {
    /// Wrap outcomes already in input order.
    pub fn new(outcomes: Vec<RecordOutcome>) -> Self {
        Self { outcomes }
    }

    /// All outcomes in input order.
    pub fn outcomes(&self) -> &[RecordOutcome] {
        &self.outcomes
    }

    /// Accepted users in input order.
    pub fn accepted(&self) -> impl Iterator<Item = &StoredUser> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            RecordOutcome::Accepted(user) => Some(user),
            RecordOutcome::Rejected(_) => None,
        })
    }

    /// Rejected records in input order.
    pub fn rejected(&self) -> impl Iterator<Item = &RejectedRecord> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            RecordOutcome::Accepted(_) => None,
            RecordOutcome::Rejected(rejected) => Some(rejected),
        })
    }

    /// Number of accepted records.
    pub fn accepted_count(&self) -> usize {
        self.accepted().count()
    }

    /// Number of rejected records.
    pub fn rejected_count(&self) -> usize {
        self.rejected().count()
    }

    /// Split into accepted users and rejected records, preserving order.
    pub fn into_parts(self) -> (Vec<StoredUser>, Vec<RejectedRecord>) {
        let mut accepted = Vec::new();
        let mut rejected = Vec::new();
        for outcome in self.outcomes {
            match outcome {
                RecordOutcome::Accepted(user) => accepted.push(user),
                RecordOutcome::Rejected(record) => rejected.push(record),
            }
        }
        (accepted, rejected)
    }
}

/// [`UserBatchCommand`] backed by a [`UserStore`].
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use user_ingest::domain::ports::UserBatchCommand;
/// use user_ingest::domain::{BatchIngestService, CandidateRecord};
/// use user_ingest::outbound::memory::InMemoryUserStore;
///
/// let service = BatchIngestService::new(Arc::new(InMemoryUserStore::new()));
/// let result = service
///     .submit(vec![CandidateRecord::new(
///         "Aabhash",
///         "ABCDE1234F",
///         "9876543210",
///         "aabhash@example.com",
///     )])
///     .expect("in-memory store is available");
/// assert_eq!(result.accepted_count(), 1);
/// ```
#[derive(Clone)]
pub struct BatchIngestService {
    store: Arc<dyn UserStore>,
}

impl BatchIngestService {
    /// Build the service over an injected store.
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    fn process(&self, index: usize, record: CandidateRecord) -> Result<RecordOutcome, Error> {
        match validate(record) {
            Ok(valid) => self
                .store
                .insert(valid)
                .map(RecordOutcome::Accepted)
                .map_err(|err| map_store_error(index, &err)),
            Err(rejected) => {
                debug!(index, reason = %rejected.rejection, "record rejected");
                Ok(RecordOutcome::Rejected(rejected))
            }
        }
    }
}

impl UserBatchCommand for BatchIngestService {
    fn submit(&self, batch: Vec<CandidateRecord>) -> Result<BatchResult, Error> {
        let submitted = batch.len();
        let outcomes = batch
            .into_iter()
            .enumerate()
            .map(|(index, record)| self.process(index, record))
            .collect::<Result<Vec<_>, _>>()?;

        let result = BatchResult::new(outcomes);
        info!(
            submitted,
            accepted = result.accepted_count(),
            rejected = result.rejected_count(),
            "user batch processed"
        );
        Ok(result)
    }
}

fn map_store_error(index: usize, err: &UserStoreError) -> Error {
    error!(index, error = %err, "user store rejected insert");
    Error::internal("failed to store user")
}
