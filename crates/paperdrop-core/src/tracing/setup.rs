//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the paperdrop tracing/logging system.
///
/// Reads `PAPERDROP_LOG` for per-target log levels.
/// Format: `PAPERDROP_LOG=paperdrop_retention=debug,paperdrop_pipeline=info`
///
/// Falls back to `info` for every paperdrop target when `PAPERDROP_LOG` is
/// unset or invalid.
/// Idempotent.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("PAPERDROP_LOG")
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_thread_ids(true))
            .with(filter)
            .init();
    });
}

/// Every workspace crate logs under a `paperdrop_*` target.
const DEFAULT_FILTER: &str =
    "paperdrop=info,paperdrop_core=info,paperdrop_retention=info,paperdrop_adapters=info,\
paperdrop_pipeline=info,paperdrop_server=info";
