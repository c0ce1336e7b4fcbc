//! # paperdrop-core
//!
//! Foundation crate for the paperdrop ingestion service.
//! Defines config, errors, ports, the naming service, models and tracing setup.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod naming;
pub mod traits;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::PaperdropConfig;
pub use errors::{PaperdropErrorCode, PipelineError, PipelineResult};
pub use models::Artifact;
pub use naming::CanonicalName;
pub use traits::{Clock, Converter, Fetcher, RemoteStore};
