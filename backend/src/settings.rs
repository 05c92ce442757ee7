//! Server settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `USER_INGEST_*` environment variables and an
//! optional configuration file, with built-in defaults for anything unset.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 8080;
/// Default request body limit: 1 MiB.
pub const DEFAULT_MAX_PAYLOAD_BYTES: usize = 1024 * 1024;

/// Errors raised while interpreting loaded settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// `host` is not an IP address.
    #[error("invalid host {host:?}: expected an IP address")]
    InvalidHost { host: String },
    /// `max_payload_bytes` is zero.
    #[error("max_payload_bytes must be greater than zero")]
    ZeroPayloadLimit,
}

/// Configuration for the HTTP listener.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USER_INGEST")]
pub struct ServerSettings {
    /// Interface address to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    pub port: Option<u16>,
    /// Largest accepted request body in bytes.
    pub max_payload_bytes: Option<usize>,
}

impl ServerSettings {
    /// Return the configured port, falling back to the default.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Resolve the socket address the server binds to.
    ///
    /// # Examples
    /// ```
    /// use user_ingest::settings::ServerSettings;
    ///
    /// let settings = ServerSettings {
    ///     host: Some("127.0.0.1".to_owned()),
    ///     port: Some(9000),
    ///     max_payload_bytes: None,
    /// };
    /// assert_eq!(settings.bind_addr().expect("valid host").to_string(), "127.0.0.1:9000");
    /// ```
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let ip = match self.host.as_deref().map(str::trim) {
            None | Some("") => DEFAULT_HOST,
            Some(raw) => raw.parse().map_err(|_| SettingsError::InvalidHost {
                host: raw.to_owned(),
            })?,
        };
        Ok(SocketAddr::new(ip, self.port()))
    }

    /// Return the request body limit, falling back to the default.
    pub fn max_payload_bytes(&self) -> Result<usize, SettingsError> {
        match self.max_payload_bytes {
            Some(0) => Err(SettingsError::ZeroPayloadLimit),
            Some(limit) => Ok(limit),
            None => Ok(DEFAULT_MAX_PAYLOAD_BYTES),
        }
    }
}
