//! # paperdrop-server
//!
//! HTTP front end: one POST route that hands the body to the ingestor on the
//! blocking pool and maps the result to a status code and JSON body.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use paperdrop_core::errors::{ConfigError, FetchError};
use paperdrop_pipeline::{Ingestor, WebhookRequest, WebhookResponse};

/// Errors that stop the server from starting or keep it from serving.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] FetchError),

    #[error("invalid bind address `{addr}`")]
    InvalidBind { addr: String },

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    #[error("cannot resolve working directory: {0}")]
    WorkingDir(#[source] std::io::Error),

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),

    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// Router serving the webhook at the configured path.
pub fn router(ingestor: Arc<Ingestor>) -> Router {
    let path = ingestor.config().server.effective_webhook_path();
    Router::new()
        .route(&path, post(webhook))
        .with_state(ingestor)
}

async fn webhook(
    State(ingestor): State<Arc<Ingestor>>,
    body: Bytes,
) -> (StatusCode, Json<WebhookResponse>) {
    let request = WebhookRequest::from_body(&body);
    // Collaborators block (subprocesses, blocking HTTP), so keep them off the
    // async workers.
    let response = match tokio::task::spawn_blocking(move || ingestor.handle(&request)).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!("webhook: ingest task failed: {e}");
            WebhookResponse::internal(format!("ingest task failed: {e}"))
        }
    };
    let status =
        StatusCode::from_u16(response.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(response))
}

/// Bind `addr` and serve until ctrl-c.
pub async fn serve(ingestor: Arc<Ingestor>, addr: SocketAddr) -> Result<(), ServerError> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    serve_on(listener, ingestor, shutdown_signal()).await
}

/// Serve on an already bound listener until `shutdown` resolves.
pub async fn serve_on<F>(
    listener: tokio::net::TcpListener,
    ingestor: Arc<Ingestor>,
    shutdown: F,
) -> Result<(), ServerError>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let path = ingestor.config().server.effective_webhook_path();
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(addr = %addr, path = %path, "webhook server listening");
    }
    axum::serve(listener, router(ingestor))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(ServerError::Serve)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
