//! Outbound adapters implementing domain ports.
//!
//! - **memory**: process-lifetime, append-only user store.
//!
//! Adapters translate between domain types and their backing representation.
//! They contain no business logic.

pub mod memory;
