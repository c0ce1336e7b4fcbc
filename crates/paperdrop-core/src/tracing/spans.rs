//! Span definitions per operation: ingestion and retention.

/// Create the span wrapping one ingestion request.
#[macro_export]
macro_rules! ingest_span {
    ($request_id:expr, $url:expr) => {
        tracing::info_span!("paperdrop.ingest", request_id = %$request_id, url = %$url)
    };
}

/// Create the span wrapping one retention pass.
#[macro_export]
macro_rules! retention_span {
    ($dir:expr, $prefix:expr) => {
        tracing::info_span!("paperdrop.retention", dir = %$dir, prefix = %$prefix)
    };
}
