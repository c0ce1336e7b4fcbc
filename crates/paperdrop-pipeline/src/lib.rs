//! # paperdrop-pipeline
//!
//! Per-request ingestion: `Fetching → (Converting)? → Publishing →
//! (Retaining)? → Done`, or `Failed` at the first error. No retries and no
//! rollback of side effects already performed.

pub mod orchestrator;
pub mod request;
pub mod response;
pub mod stage;
pub mod staging;

pub use orchestrator::{IngestOutcome, Ingestor};
pub use request::{IngestRequest, WebhookRequest};
pub use response::WebhookResponse;
pub use stage::IngestStage;
