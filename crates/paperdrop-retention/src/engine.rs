//! RetentionEngine: plans and applies cleanup of stale remote entries.

use chrono::{Days, NaiveDate};
use paperdrop_core::constants::DEFAULT_RETENTION_DAYS;
use paperdrop_core::errors::RemoteStoreError;
use paperdrop_core::traits::remote_store::remote_join;
use paperdrop_core::traits::RemoteStore;

use crate::decision::{RetentionDecision, RetentionPlan, RetentionVerdict, SkipReason};
use crate::inference;
use crate::listing::RemoteEntry;

/// Outcome of an applied retention pass.
#[derive(Debug, Clone)]
pub struct RetentionReport {
    pub plan: RetentionPlan,
    /// Remote paths removed, in the order the removes were issued.
    pub removed: Vec<String>,
}

/// Retention engine. Stateless apart from the window; every call is a pure
/// function of (listing, prefix, today) plus the remove side effects.
#[derive(Debug, Clone, Copy)]
pub struct RetentionEngine {
    window_days: u32,
}

impl RetentionEngine {
    pub fn new(window_days: u32) -> Self {
        Self { window_days }
    }

    pub fn window_days(&self) -> u32 {
        self.window_days
    }

    /// `today - window`. Entries dated strictly before this are deleted.
    pub fn cutoff(&self, today: NaiveDate) -> NaiveDate {
        today
            .checked_sub_days(Days::new(u64::from(self.window_days)))
            .unwrap_or(NaiveDate::MIN)
    }

    /// Decide a single listing line.
    pub fn decide(&self, line: &str, prefix: &str, today: NaiveDate) -> RetentionDecision {
        let prefix = prefix.trim();
        let entry = RemoteEntry::parse(line);
        let verdict = match &entry {
            Some(entry) if entry.is_file() => self.judge(&entry.name, prefix, today),
            _ => RetentionVerdict::Skip(SkipReason::NotAFile),
        };
        RetentionDecision {
            line: line.to_string(),
            entry,
            verdict,
        }
    }

    fn judge(&self, name: &str, prefix: &str, today: NaiveDate) -> RetentionVerdict {
        let base = inference::strip_document_suffix(name);
        let Some(base) = inference::strip_name_prefix(base, prefix) else {
            return RetentionVerdict::Skip(SkipReason::PrefixMismatch);
        };
        let (month, day) = match inference::parse_month_day(base) {
            Ok(parts) => parts,
            Err(reason) => return RetentionVerdict::Skip(reason),
        };
        let Some(date) = inference::infer_date(month, day, today) else {
            return RetentionVerdict::Skip(SkipReason::InvalidDate);
        };
        if date < self.cutoff(today) {
            RetentionVerdict::Delete { date }
        } else {
            RetentionVerdict::Keep { date }
        }
    }

    /// Decide every line of a listing, preserving order.
    pub fn plan<S: AsRef<str>>(&self, lines: &[S], prefix: &str, today: NaiveDate) -> RetentionPlan {
        let decisions = lines
            .iter()
            .map(|line| self.decide(line.as_ref(), prefix, today))
            .collect::<Vec<_>>();

        for decision in &decisions {
            if let RetentionVerdict::Skip(reason) = decision.verdict {
                tracing::debug!(line = %decision.line, %reason, "retention: skipped");
            }
        }

        RetentionPlan {
            today,
            cutoff: self.cutoff(today),
            decisions,
        }
    }

    /// Issue a remove for every deletion in `plan`, in listing order.
    /// The first failure aborts the remaining removes.
    pub fn apply(
        &self,
        store: &dyn RemoteStore,
        dir: &str,
        plan: RetentionPlan,
    ) -> Result<RetentionReport, RemoteStoreError> {
        let mut removed = Vec::new();
        for decision in plan.deletions() {
            let (Some(entry), Some(date)) = (&decision.entry, decision.inferred_date()) else {
                continue;
            };
            let remote_path = remote_join(dir, &entry.name);
            tracing::info!(path = %remote_path, %date, "retention: removing");
            store.remove(&remote_path)?;
            removed.push(remote_path);
        }
        Ok(RetentionReport { plan, removed })
    }

    /// List `dir`, plan against `today`, and apply.
    pub fn run(
        &self,
        store: &dyn RemoteStore,
        dir: &str,
        prefix: &str,
        today: NaiveDate,
    ) -> Result<RetentionReport, RemoteStoreError> {
        let span = paperdrop_core::retention_span!(dir, prefix);
        let _guard = span.enter();

        let lines = store.list(dir)?;
        let plan = self.plan(&lines, prefix, today);
        tracing::info!(
            window_days = self.window_days(),
            entries = plan.decisions.len(),
            deletions = plan.delete_count(),
            skipped = plan.skip_count(),
            cutoff = %plan.cutoff,
            "retention: planned"
        );
        self.apply(store, dir, plan)
    }
}

impl Default for RetentionEngine {
    fn default() -> Self {
        Self::new(DEFAULT_RETENTION_DAYS)
    }
}
