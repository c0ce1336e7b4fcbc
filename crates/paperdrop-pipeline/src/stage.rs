//! Ingestion state machine.

/// Stages of one ingestion request. `Done` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestStage {
    Idle,
    Fetching,
    Converting,
    Publishing,
    Retaining,
    Done,
    Failed,
}

impl IngestStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Fetching => "fetching",
            Self::Converting => "converting",
            Self::Publishing => "publishing",
            Self::Retaining => "retaining",
            Self::Done => "done",
            Self::Failed => "failed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }

    /// Whether `next` is a legal successor of `self`.
    pub fn can_advance_to(&self, next: IngestStage) -> bool {
        use IngestStage::*;
        match (self, next) {
            (from, Failed) => !from.is_terminal(),
            (Idle, Fetching) => true,
            (Fetching, Converting | Publishing) => true,
            (Converting, Publishing) => true,
            (Publishing, Retaining | Done) => true,
            (Retaining, Done) => true,
            _ => false,
        }
    }
}

impl std::fmt::Display for IngestStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current stage plus the path taken to reach it.
#[derive(Debug, Clone)]
pub struct StageTracker {
    current: IngestStage,
    trail: Vec<IngestStage>,
}

impl StageTracker {
    pub fn new() -> Self {
        Self {
            current: IngestStage::Idle,
            trail: vec![IngestStage::Idle],
        }
    }

    pub fn current(&self) -> IngestStage {
        self.current
    }

    pub fn trail(&self) -> &[IngestStage] {
        &self.trail
    }

    pub fn advance(&mut self, next: IngestStage) {
        debug_assert!(
            self.current.can_advance_to(next),
            "illegal ingest transition {} -> {}",
            self.current,
            next
        );
        tracing::info!(from = %self.current, to = %next, "ingest: stage");
        self.current = next;
        self.trail.push(next);
    }

    /// Move to `Failed`, returning the stage that failed.
    pub fn fail(&mut self) -> IngestStage {
        let failed_at = self.current;
        self.current = IngestStage::Failed;
        self.trail.push(IngestStage::Failed);
        failed_at
    }

    pub fn into_trail(self) -> Vec<IngestStage> {
        self.trail
    }
}

impl Default for StageTracker {
    fn default() -> Self {
        Self::new()
    }
}
