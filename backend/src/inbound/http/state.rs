//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::UserBatchCommand;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UserBatchCommand>,
}

impl HttpState {
    /// Construct state from the batch submission port.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use user_ingest::domain::BatchIngestService;
    /// use user_ingest::inbound::http::state::HttpState;
    /// use user_ingest::outbound::memory::InMemoryUserStore;
    ///
    /// let service = BatchIngestService::new(Arc::new(InMemoryUserStore::new()));
    /// let state = HttpState::new(Arc::new(service));
    /// let _users = state.users.clone();
    /// ```
    pub fn new(users: Arc<dyn UserBatchCommand>) -> Self {
        Self { users }
    }
}
