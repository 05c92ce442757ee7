//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers and extractors to turn failures into consistent JSON responses
//! and status codes.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode, web};
use serde_json::json;
use tracing::{debug, error};

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Message returned when a request body cannot be parsed.
pub const MALFORMED_BODY_MESSAGE: &str = "Invalid JSON format";

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(error: &Error) -> Error {
    if matches!(error.code(), ErrorCode::InternalError) {
        let mut redacted = Error::internal("Internal server error");
        if let Some(id) = error.trace_id() {
            redacted = redacted.with_trace_id(id.to_owned());
        }
        redacted
    } else {
        error.clone()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        builder.json(redact_if_internal(self))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        // Do not leak implementation details to clients.
        error!(error = %err, "actix error promoted to domain error");
        Error::internal("Internal server error")
    }
}

/// Translate a JSON extractor failure into the domain error envelope.
///
/// Oversized bodies map to `payload_too_large`; every other parse failure is
/// malformed input and carries the parser detail under `details.reason`.
pub fn map_json_error(err: &JsonPayloadError) -> Error {
    match err {
        JsonPayloadError::OverflowKnownLength { length, limit } => {
            Error::payload_too_large("Request body exceeds the configured limit")
                .with_details(json!({ "length": length, "limit": limit }))
        }
        JsonPayloadError::Overflow { limit } => {
            Error::payload_too_large("Request body exceeds the configured limit")
                .with_details(json!({ "limit": limit }))
        }
        other => Error::invalid_request(MALFORMED_BODY_MESSAGE)
            .with_details(json!({ "reason": other.to_string() })),
    }
}

/// Build the JSON extractor configuration shared by all handlers.
///
/// Any `Content-Type`, or none, is accepted and parsed as JSON. Bodies over
/// `limit` bytes are refused before deserialisation.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use user_ingest::inbound::http::error::json_config;
///
/// let app = App::new().app_data(json_config(1024));
/// ```
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .content_type_required(false)
        .content_type(|_| true)
        .error_handler(|err, req: &HttpRequest| {
            let mapped = map_json_error(&err);
            debug!(path = %req.path(), error = %err, code = ?mapped.code(), "request body refused");
            mapped.into()
        })
}
