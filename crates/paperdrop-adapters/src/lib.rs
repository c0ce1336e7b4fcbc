//! # paperdrop-adapters
//!
//! Production implementations of the paperdrop ports: an HTTP fetcher on
//! `reqwest::blocking`, a Ghostscript converter, an `rmapi` remote store and
//! the system clock. Each call blocks until the collaborator finishes.

pub mod clock;
pub mod ghostscript;
pub mod http_fetcher;
mod process;
pub mod rmapi;

pub use clock::SystemClock;
pub use ghostscript::GhostscriptConverter;
pub use http_fetcher::HttpFetcher;
pub use rmapi::RmapiStore;
