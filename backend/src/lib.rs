//! User ingest library: batch validation, identifier allocation and the
//! Actix HTTP adapter that exposes them.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
