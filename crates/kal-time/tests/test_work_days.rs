//! Integration tests for day-of-week ranges and work-day arithmetic.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use proptest::prelude::*;

use kal_core::Error;
use kal_time::boundary::start_of_day;
use kal_time::date::ymd;
use kal_time::{
    add_work_days, count_work_days, days_of_week_in_range, danish_holidays, work_days_in_range,
    DayOfWeek, WorkDayOptions,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDateTime {
    ymd(y, m, d).unwrap()
}

fn day_strategy() -> impl Strategy<Value = NaiveDateTime> {
    (1900i32..2100, 1u32..=365).prop_map(|(year, ordinal)| {
        NaiveDate::from_yo_opt(year, ordinal)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    })
}

// ─── Ranges ───────────────────────────────────────────────────────────────────

#[test]
fn weekends_in_october_2010() {
    let weekend = [DayOfWeek::Saturday, DayOfWeek::Sunday];
    let days = days_of_week_in_range(date(2010, 10, 1), date(2010, 10, 31), &weekend).unwrap();
    assert_eq!(days.len(), 10);
    assert_eq!(days.first(), Some(&date(2010, 10, 2)));
    assert_eq!(days.last(), Some(&date(2010, 10, 31)));
    assert!(days.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn range_preconditions() {
    let d = date(2010, 10, 1);
    assert!(matches!(
        days_of_week_in_range(d, d, &DayOfWeek::ALL),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        work_days_in_range(date(2010, 10, 2), d, &[]),
        Err(Error::InvalidArgument(_))
    ));
}

// ─── add_work_days ────────────────────────────────────────────────────────────

#[test]
fn add_work_days_without_holidays() {
    let none = WorkDayOptions::new();
    assert_eq!(add_work_days(date(2010, 10, 4), 3, &none).unwrap(), date(2010, 10, 7));
    assert_eq!(add_work_days(date(2010, 10, 7), 3, &none).unwrap(), date(2010, 10, 12));
    assert_eq!(add_work_days(date(2010, 12, 20), 6, &none).unwrap(), date(2010, 12, 28));
}

#[test]
fn add_work_days_with_danish_holidays() {
    let dk = WorkDayOptions::danish();
    assert_eq!(add_work_days(date(2010, 12, 20), 6, &dk).unwrap(), date(2010, 12, 29));
    // Skærtorsdag, Langfredag and 2. påskedag are skipped
    assert_eq!(add_work_days(date(2011, 4, 20), 1, &dk).unwrap(), date(2011, 4, 26));
}

#[test]
fn explicit_table_matches_danish_option() {
    let table: Vec<_> = danish_holidays(2011).unwrap().into_values().collect();
    let explicit = WorkDayOptions::with_holidays(&table);
    let dk = WorkDayOptions::danish();
    let mut d = date(2011, 1, 1);
    while d < date(2011, 12, 1) {
        assert_eq!(
            add_work_days(d, 5, &explicit).unwrap(),
            add_work_days(d, 5, &dk).unwrap(),
            "{d}"
        );
        d += TimeDelta::days(1);
    }
}

#[test]
fn add_work_days_rejects_non_positive() {
    for n in [0, -1, -5, i32::MIN] {
        assert!(matches!(
            add_work_days(date(2010, 10, 4), n, &WorkDayOptions::danish()),
            Err(Error::InvalidArgument(_))
        ));
    }
}

#[test]
fn large_counts_fit_the_search_window() {
    let dk = WorkDayOptions::danish();
    let start = date(2010, 1, 1);
    let end = add_work_days(start, 1000, &dk).unwrap();
    assert!(end > start + TimeDelta::days(1000));
}

#[test]
fn four_holiday_weeks_exhaust_the_search_window() {
    let start = date(2010, 10, 4);
    let holidays =
        days_of_week_in_range(date(2010, 10, 5), date(2010, 10, 29), &DayOfWeek::WORK_WEEK)
            .unwrap();
    let opts = WorkDayOptions::with_holidays(&holidays);
    match add_work_days(start, 1, &opts) {
        Err(Error::InternalInvariant(msg)) => assert!(msg.contains("2010-10-29"), "{msg}"),
        other => panic!("expected an internal-invariant error, got {other:?}"),
    }
    // with 2010-10-05 freed the answer falls inside the window again
    let opts = WorkDayOptions::with_holidays(&holidays[1..]);
    assert_eq!(add_work_days(start, 1, &opts).unwrap(), date(2010, 10, 5));
}

#[test]
fn count_matches_range_length() {
    let start = date(2011, 4, 18);
    let end = date(2011, 4, 29);
    // Ten weekdays, three of them Easter holidays
    assert_eq!(count_work_days(start, end, &WorkDayOptions::new()).unwrap(), 10);
    assert_eq!(count_work_days(start, end, &WorkDayOptions::danish()).unwrap(), 7);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn work_days_exclude_weekends_and_holidays(
        start in day_strategy(),
        len in 1i64..120,
        offsets in proptest::collection::vec(0i64..120, 0..10),
    ) {
        let end = start + TimeDelta::days(len);
        let holidays: Vec<_> = offsets
            .iter()
            .map(|o| start + TimeDelta::days(*o) + TimeDelta::hours(9))
            .collect();
        let excluded: Vec<_> = holidays.iter().map(|h| start_of_day(*h)).collect();
        for d in work_days_in_range(start, end, &holidays).unwrap() {
            prop_assert!(DayOfWeek::of(d).is_weekday());
            prop_assert!(!excluded.contains(&d));
        }
    }

    #[test]
    fn add_work_days_lands_on_a_work_day(start in day_strategy(), n in 1i32..60) {
        let dk = WorkDayOptions::danish();
        let result = add_work_days(start, n, &dk).unwrap();
        prop_assert!(result > start);
        prop_assert!(DayOfWeek::of(result).is_weekday());
    }
}
