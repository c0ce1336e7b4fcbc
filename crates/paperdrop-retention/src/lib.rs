//! # paperdrop-retention
//!
//! Retention engine for remote documents stored under yearless names.
//! Parses a remote directory listing, infers each entry's date relative to
//! today, and removes entries older than the retention window. Anything it
//! cannot parse is kept.

pub mod decision;
pub mod engine;
pub mod inference;
pub mod listing;

pub use decision::{RetentionDecision, RetentionPlan, RetentionVerdict, SkipReason};
pub use engine::{RetentionEngine, RetentionReport};
pub use listing::{EntryMarker, RemoteEntry};
