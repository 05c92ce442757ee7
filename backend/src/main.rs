//! Backend entry-point: loads settings and serves the batch ingest endpoint.

mod server;

use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server};
use user_ingest::settings::ServerSettings;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load()
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let config = ServerConfig::from_settings(&settings)
        .map_err(|e| std::io::Error::other(format!("invalid settings: {e}")))?;

    create_server(config)?.await
}
