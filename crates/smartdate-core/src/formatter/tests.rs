//! Tests for the formatter module.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use jiff::{tz::TimeZone, Timestamp};

use super::*;
use crate::{
    calendar::Clock,
    models::{DateInput, Granularity, RelativeSpec},
};

/// Helper function to create a formatter pinned to 2016-06-30 UTC
fn create_test_formatter() -> SmartDate {
    let now: Timestamp = "2016-06-30T00:00:00Z".parse().expect("valid timestamp");
    SmartDateBuilder::new()
        .with_time_zone(TimeZone::UTC)
        .with_now(now)
        .build()
}

fn relative(spec: impl Into<RelativeSpec>) -> FormatOverrides {
    FormatOverrides::new().with_relative(spec)
}

#[test]
fn test_default_window_boundaries() {
    let formatter = create_test_formatter();
    let overrides = relative(true);

    let cases = [
        ("2016-06-23", "June 23rd"),
        ("2016-06-24", "6 days ago"),
        ("2016-06-29", "yesterday"),
        ("2016-07-01", "tomorrow"),
        ("2016-07-05", "in 5 days"),
        ("2016-07-07", "July 7th"),
    ];
    for (date, expected) in cases {
        assert_eq!(
            formatter.format_single_date(date, &overrides).unwrap(),
            expected,
            "{date}"
        );
    }
}

#[test]
fn test_same_instant_reads_a_few_seconds_ago() {
    let formatter = create_test_formatter();
    assert_eq!(
        formatter
            .format_single_date("2016-06-30T00:00", &relative(true))
            .unwrap(),
        "a few seconds ago"
    );
}

#[test]
fn test_named_granularity_windows() {
    let formatter = create_test_formatter();

    assert_eq!(
        formatter
            .format_single_date("2016-07-05", &relative(Granularity::Day))
            .unwrap(),
        "July 5th"
    );
    assert_eq!(
        formatter
            .format_single_date("2016-06-29 12:00", &relative(Granularity::Day))
            .unwrap(),
        "12 hours ago"
    );
    assert_eq!(
        formatter
            .format_single_date("2016-07-20", &relative(Granularity::Month))
            .unwrap(),
        "in 20 days"
    );
    assert_eq!(
        formatter
            .format_single_date("2016-09-01", &relative(Granularity::Month))
            .unwrap(),
        "September 1st"
    );
    assert_eq!(
        formatter
            .format_single_date("2016-02-15", &relative(Granularity::Year))
            .unwrap(),
        "4 months ago"
    );
    assert_eq!(
        formatter
            .format_single_date("2015-06-30", &relative(Granularity::Year))
            .unwrap(),
        "June 30th, 2015"
    );
}

#[test]
fn test_predicate_decides_directly() {
    let formatter = create_test_formatter();

    let always = relative(RelativeSpec::predicate(|_| true));
    assert_eq!(
        formatter.format_single_date("2018-06-30", &always).unwrap(),
        "in 2 years"
    );

    let never = relative(RelativeSpec::predicate(|_| false));
    assert_eq!(
        formatter.format_single_date("2016-06-29", &never).unwrap(),
        "June 29th"
    );
}

#[test]
fn test_predicate_receives_parsed_date() {
    let formatter = create_test_formatter();
    let weekend_only = relative(RelativeSpec::predicate(|date| {
        matches!(date.weekday(), jiff::civil::Weekday::Saturday | jiff::civil::Weekday::Sunday)
    }));

    // 2016-07-02 is a Saturday, 2016-07-04 a Monday
    assert_eq!(
        formatter.format_single_date("2016-07-02", &weekend_only).unwrap(),
        "in 2 days"
    );
    assert_eq!(
        formatter.format_single_date("2016-07-04", &weekend_only).unwrap(),
        "July 4th"
    );
}

#[test]
fn test_relative_off_is_absolute() {
    let formatter = create_test_formatter();
    assert_eq!(
        formatter
            .format_single_date("2016-06-29", &relative(false))
            .unwrap(),
        "June 29th"
    );
}

#[test]
fn test_range_endpoints_ignore_relative() {
    let formatter = create_test_formatter();
    assert_eq!(
        formatter
            .format_date_range("2016-06-29", "2016-07-01 10:00", &relative(true))
            .unwrap(),
        "June 29th - July 1st, 10:00 am"
    );
}

#[test]
fn test_same_instant_range_keeps_relative() {
    let formatter = create_test_formatter();
    assert_eq!(
        formatter
            .format_date_range("2016-07-01", "2016-07-01", &relative(true))
            .unwrap(),
        "tomorrow"
    );
}

#[test]
fn test_explicit_year_override_beats_range_default() {
    let formatter = create_test_formatter();
    assert_eq!(
        formatter
            .format_date_range(
                "2016-07-04",
                "2017-07-04",
                &FormatOverrides::new().with_year(false)
            )
            .unwrap(),
        "July 4th - July 4th"
    );
}

#[test]
fn test_smart_date_rejects_bad_shapes() {
    let formatter = create_test_formatter();
    let none = FormatOverrides::new();

    let empty: Vec<DateInput> = Vec::new();
    assert!(matches!(
        formatter.smart_date(empty, &none),
        Err(SmartDateError::InvalidInputShape { count: 0 })
    ));
    assert!(matches!(
        formatter.smart_date(["2016-07-04", "2016-07-05", "2016-07-06"], &none),
        Err(SmartDateError::InvalidInputShape { count: 3 })
    ));
}

#[test]
fn test_smart_date_surfaces_parse_errors() {
    let formatter = create_test_formatter();
    assert!(matches!(
        formatter.smart_date("the fourth of july", &FormatOverrides::new()),
        Err(SmartDateError::Parse { .. })
    ));
}

/// Clock that counts how often it is read.
#[derive(Debug)]
struct CountingClock {
    now: Timestamp,
    reads: Arc<AtomicUsize>,
}

impl Clock for CountingClock {
    fn now(&self) -> Timestamp {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.now
    }
}

#[test]
fn test_now_sampled_once_per_call() {
    let reads = Arc::new(AtomicUsize::new(0));
    let formatter = SmartDateBuilder::new()
        .with_time_zone(TimeZone::UTC)
        .with_clock(CountingClock {
            now: "2016-06-30T00:00:00Z".parse().unwrap(),
            reads: Arc::clone(&reads),
        })
        .build();

    formatter
        .smart_date(["2016-07-04 09:30", "2016-08-05"], &relative(true))
        .unwrap();
    assert_eq!(reads.load(Ordering::SeqCst), 1);

    formatter
        .format_single_date("2016-07-01", &relative(true))
        .unwrap();
    assert_eq!(reads.load(Ordering::SeqCst), 2);
}

#[test]
fn test_formatter_is_shareable_across_threads() {
    let formatter = Arc::new(create_test_formatter());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let formatter = Arc::clone(&formatter);
            std::thread::spawn(move || {
                formatter
                    .smart_date(["2016-07-04", "2016-07-05"], &FormatOverrides::new())
                    .unwrap()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), "July 4-5");
    }
}
