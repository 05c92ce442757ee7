//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation
//! using utoipa's external schema registration.
//!
//! The schema wrappers mirror the structure of their corresponding domain
//! types but live in the inbound adapter layer where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
///
/// Stable machine-readable error codes returned in API error responses.
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request body is malformed.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The request body exceeds the configured size limit.
    #[schema(rename = "payload_too_large")]
    PayloadTooLarge,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
///
/// API error response payload with machine-readable code and human-readable
/// message.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "Invalid JSON format")]
    message: String,
    /// Correlation identifier, also returned in the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details for clients.
    #[schema(example = json!({"reason": "EOF while parsing a list at line 1 column 2"}))]
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::CandidateRecord`].
///
/// One submitted record. Every field is optional on the wire; a missing or
/// `null` field is reported as a `required` violation for that record.
/// Unknown keys, including `id`, are ignored.
#[derive(ToSchema)]
#[schema(as = crate::domain::CandidateRecord)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CandidateRecordSchema {
    /// Person's name.
    #[schema(example = "Aabhash")]
    name: Option<String>,
    /// Tax identifier: five uppercase letters, four digits, one uppercase
    /// letter.
    #[schema(example = "ABCDE1234F")]
    pan: Option<String>,
    /// Ten ASCII digits.
    #[schema(example = "9876543210")]
    mobile: Option<String>,
    /// Email address.
    #[schema(example = "aabhash@example.com")]
    email: Option<String>,
}
