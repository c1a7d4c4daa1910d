use jiff::{tz::TimeZone, Timestamp};
use smartdate_core::{SmartDate, SmartDateBuilder};

/// Fixed "today" shared by the formatter tests.
pub const TODAY: &str = "2016-06-30T00:00:00Z";

/// Helper function to create a formatter pinned to [`TODAY`] in UTC
pub fn create_test_formatter() -> SmartDate {
    let now: Timestamp = TODAY.parse().expect("Failed to parse fixed now");
    SmartDateBuilder::new()
        .with_time_zone(TimeZone::UTC)
        .with_now(now)
        .build()
}
