//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use user_ingest::settings::{ServerSettings, SettingsError};

/// Resolved configuration for creating the HTTP server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) max_payload_bytes: usize,
}

impl ServerConfig {
    /// Construct a server configuration from explicit values.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, max_payload_bytes: usize) -> Self {
        Self {
            bind_addr,
            max_payload_bytes,
        }
    }

    /// Resolve loaded settings, applying defaults.
    ///
    /// # Errors
    /// Returns [`SettingsError`] when the host is not an IP address or the
    /// payload limit is zero.
    pub fn from_settings(settings: &ServerSettings) -> Result<Self, SettingsError> {
        Ok(Self::new(
            settings.bind_addr()?,
            settings.max_payload_bytes()?,
        ))
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
