//! Ingestor: sequences fetch, optional compression, publish and retention
//! for one request.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use paperdrop_core::config::PaperdropConfig;
use paperdrop_core::constants::DOCUMENT_EXTENSION;
use paperdrop_core::errors::{PaperdropErrorCode, PipelineResult, StagingError};
use paperdrop_core::traits::remote_store::remote_join;
use paperdrop_core::traits::{Clock, Converter, Fetcher, RemoteStore};
use paperdrop_core::{Artifact, CanonicalName};
use paperdrop_retention::{RetentionEngine, RetentionReport};
use uuid::Uuid;

use crate::request::{IngestRequest, WebhookRequest};
use crate::response::WebhookResponse;
use crate::stage::{IngestStage, StageTracker};
use crate::staging::{local_file_name, Staging};

/// Result of a successful ingestion.
#[derive(Debug)]
pub struct IngestOutcome {
    pub request_id: Uuid,
    /// Remote path of the published document.
    pub uploaded: String,
    /// Local copy left behind, when staging was persistent.
    pub local_copy: Option<PathBuf>,
    /// Present in managed mode only.
    pub retention: Option<RetentionReport>,
    pub trail: Vec<IngestStage>,
}

/// Runs the ingestion pipeline against injected collaborators.
///
/// Holds no per-request state: concurrent calls are independent and are not
/// coordinated with each other.
pub struct Ingestor {
    config: PaperdropConfig,
    fetcher: Arc<dyn Fetcher>,
    converter: Arc<dyn Converter>,
    store: Arc<dyn RemoteStore>,
    clock: Arc<dyn Clock>,
    retention: RetentionEngine,
}

impl Ingestor {
    pub fn new(
        config: PaperdropConfig,
        fetcher: Arc<dyn Fetcher>,
        converter: Arc<dyn Converter>,
        store: Arc<dyn RemoteStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let retention = RetentionEngine::new(config.retention.effective_window_days());
        Self {
            config,
            fetcher,
            converter,
            store,
            clock,
            retention,
        }
    }

    pub fn config(&self) -> &PaperdropConfig {
        &self.config
    }

    /// Handle a raw webhook body end to end, never failing: errors become an
    /// error response.
    pub fn handle(&self, body: &WebhookRequest) -> WebhookResponse {
        let result =
            IngestRequest::from_webhook(body).and_then(|request| self.ingest(&request));
        match result {
            Ok(outcome) => {
                tracing::info!(
                    request_id = %outcome.request_id,
                    uploaded = %outcome.uploaded,
                    "webhook: done"
                );
                WebhookResponse::ok(outcome.uploaded)
            }
            Err(e) => {
                if e.is_input_error() {
                    tracing::info!(code = e.error_code(), "webhook: rejected: {e}");
                }
                WebhookResponse::from_error(&e)
            }
        }
    }

    /// Run one ingestion request to completion or first failure.
    pub fn ingest(&self, request: &IngestRequest) -> PipelineResult<IngestOutcome> {
        let request_id = Uuid::new_v4();
        let span = paperdrop_core::ingest_span!(request_id, request.url);
        let _guard = span.enter();

        let mut stages = StageTracker::new();
        match self.run_stages(request, &mut stages) {
            Ok(done) => {
                stages.advance(IngestStage::Done);
                Ok(IngestOutcome {
                    request_id,
                    uploaded: done.uploaded,
                    local_copy: done.local_copy,
                    retention: done.retention,
                    trail: stages.into_trail(),
                })
            }
            Err(e) => {
                let failed_at = stages.fail();
                tracing::warn!(
                    stage = %failed_at,
                    code = e.error_code(),
                    "ingest: failed: {e}"
                );
                Err(e)
            }
        }
    }

    fn run_stages(
        &self,
        request: &IngestRequest,
        stages: &mut StageTracker,
    ) -> PipelineResult<StagesDone> {
        stages.advance(IngestStage::Fetching);
        let staging = Staging::prepare(
            &self.config.storage.effective_pdf_dir(),
            &request.prefix,
            request.compress || request.archive,
        )?;
        let mut artifact = self.fetch(request, staging.dir())?;

        if request.compress {
            stages.advance(IngestStage::Converting);
            let compressed = self.converter.compress(artifact.path())?;
            artifact = artifact.replaced_by(compressed);
        }

        stages.advance(IngestStage::Publishing);
        let rm_dir = request
            .rm_dir
            .clone()
            .unwrap_or_else(|| self.config.remote.effective_target_dir());

        if !request.manage {
            self.store.put(artifact.path(), &rm_dir)?;
            let uploaded = remote_join(&rm_dir, &artifact.file_name());
            tracing::info!(uploaded = %uploaded, "ingest: published unmanaged");
            return Ok(StagesDone {
                uploaded,
                local_copy: staging
                    .is_persistent()
                    .then(|| artifact.local_path.clone()),
                retention: None,
            });
        }

        let today = self.clock.today();
        let name = CanonicalName::new(today, &request.prefix);

        let published = staging.dir().join(name.yearless_file_name(DOCUMENT_EXTENSION));
        rename(artifact.path(), &published)?;
        self.store.put(&published, &rm_dir)?;
        let uploaded = remote_join(&rm_dir, &name.yearless_file_name(DOCUMENT_EXTENSION));
        tracing::info!(uploaded = %uploaded, "ingest: published");

        let archived = staging
            .dir()
            .join(name.year_stamped_file_name(DOCUMENT_EXTENSION));
        rename(&published, &archived)?;

        stages.advance(IngestStage::Retaining);
        let report = self
            .retention
            .run(self.store.as_ref(), &rm_dir, &request.prefix, today)?;

        Ok(StagesDone {
            uploaded,
            local_copy: staging.is_persistent().then_some(archived),
            retention: Some(report),
        })
    }

    fn fetch(&self, request: &IngestRequest, dir: &Path) -> PipelineResult<Artifact> {
        let user_agent = self.config.fetch.effective_user_agent();
        let bytes = self
            .fetcher
            .get(&request.url, &[("User-Agent", user_agent.as_str())])?;

        let local_path = dir.join(local_file_name(&request.url));
        std::fs::write(&local_path, &bytes)
            .map_err(|e| StagingError::io("write", &local_path, e))?;
        Ok(Artifact::new(request.url.clone(), local_path))
    }
}

impl std::fmt::Debug for Ingestor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ingestor")
            .field("config", &self.config)
            .field("retention", &self.retention)
            .finish_non_exhaustive()
    }
}

#[derive(Debug)]
struct StagesDone {
    uploaded: String,
    local_copy: Option<PathBuf>,
    retention: Option<RetentionReport>,
}

fn rename(from: &Path, to: &Path) -> Result<(), StagingError> {
    std::fs::rename(from, to).map_err(|e| StagingError::io("rename", from, e))
}
