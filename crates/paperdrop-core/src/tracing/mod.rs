//! Observability for paperdrop.
//! `tracing` crate with `EnvFilter`, per-target log levels and span helpers.

pub mod setup;
pub mod spans;

pub use setup::init_tracing;
