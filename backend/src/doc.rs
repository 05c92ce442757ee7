//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: `POST /users`
//! - **Schemas**: the batch response DTOs plus domain type wrappers
//!   ([`ErrorSchema`], [`ErrorCodeSchema`], [`CandidateRecordSchema`]) that
//!   provide OpenAPI definitions without coupling domain types to utoipa
//!
//! The generated specification is exported via
//! `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::batch_response::{
    BatchResponse, StoredUserDto, SubmittedUserDto, ValidationFailure, ViolationDto,
};
use crate::inbound::http::schemas::{CandidateRecordSchema, ErrorCodeSchema, ErrorSchema};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User ingest API",
        description = "Batch submission of user records with per-record validation."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(crate::inbound::http::users::create_users),
    components(schemas(
        BatchResponse,
        StoredUserDto,
        SubmittedUserDto,
        ValidationFailure,
        ViolationDto,
        CandidateRecordSchema,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "users", description = "Operations related to users")
    )
)]
pub struct ApiDoc;
