use chrono::{Datelike, NaiveDate};
use paperdrop_core::CanonicalName;
use paperdrop_retention::{RetentionEngine, RetentionVerdict};
use proptest::prelude::*;

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (1971i32..2100, 1u32..=12, 1u32..=31)
        .prop_filter_map("real calendar date", |(y, m, d)| NaiveDate::from_ymd_opt(y, m, d))
}

proptest! {
    #[test]
    fn inferred_date_never_after_today(today in arb_date(), entry in arb_date()) {
        let line = format!("[f] {}", CanonicalName::new(entry, "").yearless());
        let decision = RetentionEngine::default().decide(&line, "", today);
        if let Some(date) = decision.inferred_date() {
            prop_assert!(date <= today);
            prop_assert!(date > today - chrono::Days::new(367));
        }
    }

    #[test]
    fn recent_entries_round_trip_to_their_date(today in arb_date(), age in 0u64..365) {
        let entry = today - chrono::Days::new(age);
        let line = format!("[f] {}", CanonicalName::new(entry, "Brief").yearless());
        let decision = RetentionEngine::new(7).decide(&line, "Brief", today);
        if NaiveDate::from_ymd_opt(today.year(), entry.month(), entry.day()).is_none() {
            // February 29 seen from a non-leap year.
            prop_assert!(matches!(decision.verdict, RetentionVerdict::Skip(_)));
        } else {
            prop_assert_eq!(decision.inferred_date(), Some(entry));
            prop_assert_eq!(decision.is_delete(), age > 7);
        }
    }

    #[test]
    fn non_file_markers_never_delete(marker in "\\[[a-eg-z]\\]", entry in arb_date(), today in arb_date()) {
        let line = format!("{marker} {} {}", entry.format("%B"), entry.day());
        let decision = RetentionEngine::new(0).decide(&line, "", today);
        prop_assert!(!decision.is_delete());
    }

    #[test]
    fn foreign_prefix_never_deletes(entry in arb_date(), today in arb_date(), other in "[A-Z][a-z]{2,8}") {
        prop_assume!(other != "Invoice");
        let line = format!("[f] {}", CanonicalName::new(entry, &other).yearless());
        let decision = RetentionEngine::new(0).decide(&line, "Invoice", today);
        prop_assert!(matches!(decision.verdict, RetentionVerdict::Skip(_)));
    }
}
