//! Request middleware.
//!
//! Purpose: cross-cutting request lifecycle concerns. Today that is request
//! correlation and timing via [`Trace`].

pub mod trace;

pub use trace::Trace;
