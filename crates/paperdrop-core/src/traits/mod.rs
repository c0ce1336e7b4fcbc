//! Ports to the external collaborators.
//!
//! Every external process or network call sits behind one of these traits so
//! the retention engine and the orchestrator can run against fakes.

pub mod clock;
pub mod converter;
pub mod fetcher;
pub mod remote_store;

pub use clock::{Clock, FixedClock};
pub use converter::Converter;
pub use fetcher::Fetcher;
pub use remote_store::RemoteStore;
