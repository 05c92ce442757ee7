//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use std::sync::Arc;
use tracing::info;

use user_ingest::Trace;
use user_ingest::domain::BatchIngestService;
use user_ingest::inbound::http::json_config;
use user_ingest::inbound::http::state::HttpState;
use user_ingest::inbound::http::users::create_users;
use user_ingest::outbound::memory::InMemoryUserStore;

/// Build the HTTP state over a fresh process-wide in-memory store.
///
/// Every Actix worker shares the returned state, so identifiers stay unique
/// across concurrent requests.
fn build_http_state() -> web::Data<HttpState> {
    let store = Arc::new(InMemoryUserStore::new());
    let service = BatchIngestService::new(store);
    web::Data::new(HttpState::new(Arc::new(service)))
}

fn build_app(
    http_state: web::Data<HttpState>,
    max_payload_bytes: usize,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(http_state)
        .app_data(json_config(max_payload_bytes))
        .wrap(Trace)
        .service(create_users)
}

/// Construct an Actix HTTP server using the provided configuration.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let http_state = build_http_state();
    let ServerConfig {
        bind_addr,
        max_payload_bytes,
    } = config;

    let server = HttpServer::new(move || build_app(http_state.clone(), max_payload_bytes))
        .bind(bind_addr)?
        .run();

    info!(%bind_addr, max_payload_bytes, "user ingest server listening");
    Ok(server)
}
