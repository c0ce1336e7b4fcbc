//! paperdrop: webhook that fetches a PDF and drops it into the remote store.
//!
//! `main` stays synchronous. The adapters own blocking HTTP clients, which
//! must be created and dropped outside the Tokio runtime, so the runtime is
//! built by hand and the last `Ingestor` handle is released after
//! `block_on` returns.

use std::net::SocketAddr;
use std::process::ExitCode;
use std::sync::Arc;

use paperdrop_adapters::{GhostscriptConverter, HttpFetcher, RmapiStore, SystemClock};
use paperdrop_core::config::{CliOverrides, PaperdropConfig};
use paperdrop_pipeline::Ingestor;
use paperdrop_server::ServerError;

fn main() -> ExitCode {
    paperdrop_core::tracing::init_tracing();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("paperdrop: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), ServerError> {
    let cli = CliOverrides::from_args(std::env::args().skip(1));
    let root = std::env::current_dir().map_err(ServerError::WorkingDir)?;
    let config = PaperdropConfig::load(&root, Some(&cli))?;

    let bind = config.server.effective_bind();
    let addr: SocketAddr = bind
        .parse()
        .map_err(|_| ServerError::InvalidBind { addr: bind.clone() })?;

    tracing::info!(
        pdf_dir = %config.storage.effective_pdf_dir().display(),
        target_dir = %config.remote.effective_target_dir(),
        retention_days = config.retention.effective_window_days(),
        "paperdrop: starting"
    );

    let ingestor = Arc::new(Ingestor::new(
        config.clone(),
        Arc::new(HttpFetcher::new()?),
        Arc::new(GhostscriptConverter::from_config(&config.converter)),
        Arc::new(RmapiStore::from_config(&config.remote)),
        Arc::new(SystemClock),
    ));

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(ServerError::Runtime)?;
    let result = runtime.block_on(paperdrop_server::serve(Arc::clone(&ingestor), addr));
    drop(runtime);
    drop(ingestor);
    result
}
