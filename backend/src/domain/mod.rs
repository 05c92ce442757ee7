//! Domain primitives and the batch ingestion pipeline.
//!
//! Purpose: keep validation, identifier allocation and batch processing free
//! of transport concerns. Inbound adapters talk to the domain through
//! [`ports::UserBatchCommand`]; storage sits behind [`ports::UserStore`].
//!
//! Public surface:
//! - CandidateRecord: one unvalidated input record.
//! - StoredUser / UserId: an accepted record and its identifier.
//! - BatchIngestService / BatchResult / RecordOutcome: the batch processor.
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - TraceId: request correlation identifier.

pub mod batch;
pub mod candidate;
pub mod error;
pub mod formats;
pub mod ids;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod validation;

pub use self::batch::{BatchIngestService, BatchResult, RecordOutcome};
pub use self::candidate::CandidateRecord;
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::trace_id::TraceId;
pub use self::user::{StoredUser, UserId};
