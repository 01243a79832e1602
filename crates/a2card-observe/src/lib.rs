//! Observability setup for a2card binaries.

pub mod tracing_setup;
