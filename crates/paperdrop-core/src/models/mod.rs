//! Data models shared across crates.

pub mod artifact;

pub use artifact::Artifact;
