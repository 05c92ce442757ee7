//! Driving port for batch submission.

use crate::domain::{BatchResult, CandidateRecord, Error};

/// Accept a batch of candidate records.
///
/// Per-record validation failures are part of the successful result; an
/// `Err` means the batch could not be processed at all.
#[cfg_attr(test, mockall::automock)]
pub trait UserBatchCommand: Send + Sync {
    /// Validate and store each record of `batch` in order.
    fn submit(&self, batch: Vec<CandidateRecord>) -> Result<BatchResult, Error>;
}
