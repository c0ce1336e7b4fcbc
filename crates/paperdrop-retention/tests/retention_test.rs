use std::path::Path;
use std::sync::Mutex;

use chrono::NaiveDate;
use paperdrop_core::errors::RemoteStoreError;
use paperdrop_core::traits::RemoteStore;
use paperdrop_retention::{RetentionEngine, RetentionVerdict, SkipReason};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// In-memory remote store recording every remove.
#[derive(Default)]
struct FakeStore {
    listing: Vec<String>,
    removed: Mutex<Vec<String>>,
    fail_on: Option<String>,
}

impl FakeStore {
    fn with_listing(lines: &[&str]) -> Self {
        Self {
            listing: lines.iter().map(|l| l.to_string()).collect(),
            ..Default::default()
        }
    }

    fn removed(&self) -> Vec<String> {
        self.removed.lock().unwrap().clone()
    }
}

impl RemoteStore for FakeStore {
    fn list(&self, _dir: &str) -> Result<Vec<String>, RemoteStoreError> {
        Ok(self.listing.clone())
    }

    fn put(&self, _local_path: &Path, _dir: &str) -> Result<(), RemoteStoreError> {
        Ok(())
    }

    fn remove(&self, remote_path: &str) -> Result<(), RemoteStoreError> {
        if self.fail_on.as_deref() == Some(remote_path) {
            return Err(RemoteStoreError::CommandFailed {
                command: format!("rmapi rm {remote_path}"),
                status: "exit status: 1".into(),
                stderr: "entry is locked".into(),
            });
        }
        self.removed.lock().unwrap().push(remote_path.to_string());
        Ok(())
    }
}

// ── Year inference across the year boundary ──────────────────────────────

#[test]
fn december_entry_in_early_january_belongs_to_last_year() {
    let engine = RetentionEngine::default();
    let today = date(2024, 1, 5);

    let december = engine.decide("[f] December 30", "", today);
    assert_eq!(december.inferred_date(), Some(date(2023, 12, 30)));
    assert!(!december.is_delete(), "6 days old is inside the window");

    let january = engine.decide("[f] January 3", "", today);
    assert_eq!(january.inferred_date(), Some(date(2024, 1, 3)));
}

#[test]
fn inferred_dates_are_never_in_the_future() {
    let engine = RetentionEngine::default();
    let today = date(2024, 6, 15);
    let decision = engine.decide("[f] June 16", "", today);
    assert_eq!(decision.inferred_date(), Some(date(2023, 6, 16)));
    assert!(decision.is_delete());
}

#[test]
fn leap_day_outside_a_leap_year_is_skipped_not_deleted() {
    let store = FakeStore::with_listing(&["[f] February 29", "[f] February 28"]);
    let today = date(2025, 3, 10);

    let report = RetentionEngine::default().run(&store, "/", "", today).unwrap();

    assert_eq!(
        report.plan.decisions[0].verdict,
        RetentionVerdict::Skip(SkipReason::InvalidDate)
    );
    assert_eq!(store.removed(), vec!["/February 28".to_string()]);
}

// ── Cutoff boundary ──────────────────────────────────────────────────────

#[test]
fn exactly_window_days_old_is_kept_one_more_is_deleted() {
    let engine = RetentionEngine::new(7);
    let today = date(2024, 3, 20);
    assert_eq!(engine.cutoff(today), date(2024, 3, 13));

    let kept = engine.decide("[f] March 13", "", today);
    assert_eq!(
        kept.verdict,
        RetentionVerdict::Keep {
            date: date(2024, 3, 13)
        }
    );

    let deleted = engine.decide("[f] March 12", "", today);
    assert_eq!(
        deleted.verdict,
        RetentionVerdict::Delete {
            date: date(2024, 3, 12)
        }
    );
}

#[test]
fn zero_day_window_keeps_today_only() {
    let engine = RetentionEngine::new(0);
    let today = date(2024, 3, 20);
    assert!(!engine.decide("[f] March 20", "", today).is_delete());
    assert!(engine.decide("[f] March 19", "", today).is_delete());
}

// ── Prefix isolation ─────────────────────────────────────────────────────

#[test]
fn prefix_filter_never_touches_other_namespaces() {
    let engine = RetentionEngine::default();
    let today = date(2024, 5, 1);

    for line in [
        "[f] January 2",
        "[f] Receipt January 2",
        "[f] InvoiceJanuary 2",
        "[f] Invoices January 2",
    ] {
        let decision = engine.decide(line, "Invoice", today);
        assert_eq!(
            decision.verdict,
            RetentionVerdict::Skip(SkipReason::PrefixMismatch),
            "{line}"
        );
    }

    assert!(engine.decide("[f] Invoice January 2", "Invoice", today).is_delete());
    assert!(engine.decide("[f] Invoice January 2.pdf", " Invoice ", today).is_delete());
}

#[test]
fn unprefixed_pass_ignores_prefixed_names() {
    let engine = RetentionEngine::default();
    let decision = engine.decide("[f] Invoice January 2", "", date(2024, 5, 1));
    assert_eq!(
        decision.verdict,
        RetentionVerdict::Skip(SkipReason::UnrecognizedFormat)
    );
}

// ── Non-file and unparseable entries ─────────────────────────────────────

#[test]
fn non_file_entries_are_never_deleted() {
    let engine = RetentionEngine::default();
    let today = date(2024, 5, 1);
    for line in ["[d] January 2", "[x] January 2", "January 2", "", "   "] {
        let decision = engine.decide(line, "", today);
        assert_eq!(
            decision.verdict,
            RetentionVerdict::Skip(SkipReason::NotAFile),
            "{line:?}"
        );
    }
}

#[test]
fn foreign_formats_are_skipped() {
    let engine = RetentionEngine::default();
    let today = date(2024, 5, 1);
    let cases = [
        ("[f] January 2 2020", SkipReason::UnrecognizedFormat),
        ("[f] Notes", SkipReason::UnrecognizedFormat),
        ("[f] 2024-01-02", SkipReason::UnrecognizedFormat),
        ("[f] january 2", SkipReason::UnknownMonth),
        ("[f] Jan 2", SkipReason::UnknownMonth),
        ("[f] February 30", SkipReason::InvalidDate),
        ("[f] April 0", SkipReason::InvalidDate),
    ];
    for (line, reason) in cases {
        assert_eq!(
            engine.decide(line, "", today).verdict,
            RetentionVerdict::Skip(reason),
            "{line}"
        );
    }
}

// ── Applying a plan ──────────────────────────────────────────────────────

#[test]
fn run_removes_stale_entries_in_listing_order() {
    let store = FakeStore::with_listing(&[
        "[d] Archive",
        "[f] April 1",
        "[f] Notes",
        "[f] March 2.pdf",
        "[f] April 29",
        "[f] April 20",
    ]);
    let engine = RetentionEngine::default();

    let report = engine.run(&store, "/Papers", "", date(2024, 5, 1)).unwrap();

    assert_eq!(
        store.removed(),
        vec!["/Papers/April 1", "/Papers/March 2.pdf", "/Papers/April 20"]
    );
    assert_eq!(report.removed, store.removed());
    assert_eq!(report.plan.decisions.len(), 6);
    assert_eq!(report.plan.delete_count(), 3);
    assert_eq!(report.plan.skip_count(), 2);
}

#[test]
fn first_remove_failure_aborts_the_rest() {
    let mut store = FakeStore::with_listing(&["[f] April 1", "[f] April 2", "[f] April 3"]);
    store.fail_on = Some("/April 2".into());
    let engine = RetentionEngine::default();

    let err = engine.run(&store, "/", "", date(2024, 5, 1)).unwrap_err();

    assert!(err.to_string().contains("entry is locked"));
    assert_eq!(store.removed(), vec!["/April 1"]);
}

#[test]
fn just_published_entry_survives_its_own_cleanup() {
    let today = date(2024, 3, 9);
    let published = paperdrop_core::CanonicalName::new(today, "Invoice").yearless();
    let line = format!("[f] {published}");
    let store = FakeStore::with_listing(&[line.as_str()]);

    for window in [0, 1, 7, 365] {
        let report = RetentionEngine::new(window)
            .run(&store, "/", "Invoice", today)
            .unwrap();
        assert!(report.removed.is_empty(), "window {window}");
    }
    assert!(store.removed().is_empty());
}
