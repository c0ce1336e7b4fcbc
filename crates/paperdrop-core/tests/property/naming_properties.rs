use chrono::{Datelike, NaiveDate};
use paperdrop_core::naming::{month_from_name, CanonicalName};
use proptest::prelude::*;

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (1970i32..2100, 1u32..=12, 1u32..=31)
        .prop_filter_map("real calendar date", |(y, m, d)| NaiveDate::from_ymd_opt(y, m, d))
}

proptest! {
    #[test]
    fn year_stamped_extends_yearless(date in arb_date(), prefix in "[A-Za-z ]{0,12}") {
        let name = CanonicalName::new(date, &prefix);
        let expected = format!("{} {}", name.yearless(), date.year());
        prop_assert_eq!(name.year_stamped(), expected);
    }

    #[test]
    fn yearless_never_carries_the_year_or_edge_spaces(date in arb_date(), prefix in "[A-Za-z ]{0,12}") {
        let yearless = CanonicalName::new(date, &prefix).yearless();
        prop_assert!(!yearless.starts_with(' '));
        prop_assert!(!yearless.ends_with(' '));
        prop_assert_eq!(yearless.split(' ').last().map(str::to_string), Some(date.day().to_string()));
    }

    #[test]
    fn month_token_resolves_back(date in arb_date()) {
        let yearless = CanonicalName::new(date, "").yearless();
        let (month, day) = yearless.split_once(' ').unwrap();
        prop_assert_eq!(month_from_name(month), Some(date.month()));
        prop_assert_eq!(day.parse::<u32>().ok(), Some(date.day()));
    }
}
