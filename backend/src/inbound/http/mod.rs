//! HTTP inbound adapter exposing the batch ingestion endpoint.

pub mod batch_response;
pub mod error;
pub mod schemas;
pub mod state;
pub mod users;

pub use error::{ApiResult, json_config};
