//! Wire representation of a processed batch.
//!
//! ```text
//! {
//!   "success_count": 1,
//!   "failed_count": 1,
//!   "users_created": [{"id": 1, "name": "Aabhash", ...}],
//!   "validation_errors": [{"user": {...}, "reason": "pan: ...", "violations": [...]}]
//! }
//! ```
//!
//! `validation_errors` is omitted entirely when every record was accepted.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::validation::{RejectedRecord, Violation};
use crate::domain::{BatchResult, CandidateRecord, StoredUser};

/// Response body for `POST /users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BatchResponse {
    /// Number of records stored.
    #[schema(example = 1)]
    pub success_count: usize,
    /// Number of records rejected.
    #[schema(example = 0)]
    pub failed_count: usize,
    /// Stored users in submission order.
    pub users_created: Vec<StoredUserDto>,
    /// Rejected records in submission order; absent when none failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_errors: Option<Vec<ValidationFailure>>,
}

/// A stored user with its assigned identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StoredUserDto {
    #[schema(example = 1)]
    pub id: u64,
    #[schema(example = "Aabhash")]
    pub name: String,
    #[schema(example = "ABCDE1234F")]
    pub pan: String,
    #[schema(example = "9876543210")]
    pub mobile: String,
    #[schema(example = "aabhash@example.com")]
    pub email: String,
}

/// The submitted fields of a rejected record, echoed back verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SubmittedUserDto {
    pub name: String,
    pub pan: String,
    pub mobile: String,
    pub email: String,
}

/// One rejected record and why it was refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ValidationFailure {
    /// The record as submitted.
    pub user: SubmittedUserDto,
    /// Human-readable reason naming every offending field.
    #[schema(example = "pan: must be 5 uppercase letters, 4 digits and 1 uppercase letter")]
    pub reason: String,
    /// Machine-readable form of `reason`.
    pub violations: Vec<ViolationDto>,
}

/// A single failed field check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ViolationDto {
    #[schema(example = "pan")]
    pub field: String,
    #[schema(example = "invalid_pan")]
    pub code: String,
}

impl From<&StoredUser> for StoredUserDto {
    fn from(user: &StoredUser) -> Self {
        Self {
            id: user.id().get(),
            name: user.name().to_owned(),
            pan: user.pan().to_owned(),
            mobile: user.mobile().to_owned(),
            email: user.email().to_owned(),
        }
    }
}

impl From<CandidateRecord> for SubmittedUserDto {
    fn from(record: CandidateRecord) -> Self {
        let CandidateRecord {
            name,
            pan,
            mobile,
            email,
        } = record;
        Self {
            name,
            pan,
            mobile,
            email,
        }
    }
}

impl From<&Violation> for ViolationDto {
    fn from(violation: &Violation) -> Self {
        Self {
            field: violation.field.as_str().to_owned(),
            code: violation.constraint.code().to_owned(),
        }
    }
}

impl From<RejectedRecord> for ValidationFailure {
    fn from(rejected: RejectedRecord) -> Self {
        let RejectedRecord { record, rejection } = rejected;
        Self {
            reason: rejection.reason(),
            violations: rejection.violations().iter().map(ViolationDto::from).collect(),
            user: SubmittedUserDto::from(record),
        }
    }
}

impl From<BatchResult> for BatchResponse {
    fn from(result: BatchResult) -> Self {
        let (accepted, rejected) = result.into_parts();
        let validation_errors = (!rejected.is_empty())
            .then(|| rejected.into_iter().map(ValidationFailure::from).collect::<Vec<_>>());
        Self {
            success_count: accepted.len(),
            failed_count: validation_errors.as_ref().map_or(0, Vec::len),
            users_created: accepted.iter().map(StoredUserDto::from).collect(),
            validation_errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validation::validate;
    use crate::domain::{RecordOutcome, UserId};
    use rstest::rstest;
    use serde_json::{Value, json};

    fn stored(id: u64, name: &str) -> StoredUser {
        let valid = validate(CandidateRecord::new(
            name,
            "ABCDE1234F",
            "9876543210",
            "someone@example.com",
        ))
        .expect("fixture record is valid");
        StoredUser::new(UserId::from_raw(id), valid)
    }

    fn rejected(pan: &str) -> RejectedRecord {
        validate(CandidateRecord::new(
            "Mallory",
            pan,
            "9876543210",
            "someone@example.com",
        ))
        .expect_err("fixture record is invalid")
    }

    #[rstest]
    fn all_accepted_omits_validation_errors() {
        let result = BatchResult::new(vec![RecordOutcome::Accepted(stored(1, "Aabhash"))]);
        let body = serde_json::to_value(BatchResponse::from(result)).expect("serialise");

        assert_eq!(
            body,
            json!({
                "success_count": 1,
                "failed_count": 0,
                "users_created": [{
                    "id": 1,
                    "name": "Aabhash",
                    "pan": "ABCDE1234F",
                    "mobile": "9876543210",
                    "email": "someone@example.com"
                }]
            })
        );
    }

    #[rstest]
    fn empty_batch_has_zero_counts_and_no_errors() {
        let body =
            serde_json::to_value(BatchResponse::from(BatchResult::default())).expect("serialise");
        assert_eq!(
            body,
            json!({"success_count": 0, "failed_count": 0, "users_created": []})
        );
    }

    #[rstest]
    fn rejected_records_are_echoed_with_reason_and_codes() {
        let result = BatchResult::new(vec![
            RecordOutcome::Rejected(rejected("12345ABCDE")),
            RecordOutcome::Accepted(stored(4, "Ada")),
        ]);
        let response = BatchResponse::from(result);

        assert_eq!(response.success_count, 1);
        assert_eq!(response.failed_count, 1);
        let failures = response.validation_errors.expect("one failure");
        let failure = &failures[0];
        assert_eq!(failure.user.pan, "12345ABCDE");
        assert!(failure.reason.starts_with("pan:"));
        assert_eq!(
            failure.violations,
            vec![ViolationDto {
                field: "pan".to_owned(),
                code: "invalid_pan".to_owned()
            }]
        );
    }

    #[rstest]
    fn counts_always_match_list_lengths() {
        let result = BatchResult::new(vec![
            RecordOutcome::Rejected(rejected("")),
            RecordOutcome::Accepted(stored(1, "Ada")),
            RecordOutcome::Rejected(rejected("abcde1234f")),
            RecordOutcome::Accepted(stored(2, "Grace")),
        ]);
        let response = BatchResponse::from(result);
        let failures = response.validation_errors.as_deref().unwrap_or_default();

        assert_eq!(response.success_count, response.users_created.len());
        assert_eq!(response.failed_count, failures.len());
        let ids: Vec<u64> = response.users_created.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[rstest]
    fn echoed_user_carries_no_identifier() {
        let result = BatchResult::new(vec![RecordOutcome::Rejected(rejected("bad"))]);
        let body = serde_json::to_value(BatchResponse::from(result)).expect("serialise");
        let user = &body["validation_errors"][0]["user"];

        assert!(user.get("id").is_none());
        assert_eq!(user["name"], Value::from("Mallory"));
    }
}
