//! Builder for creating and configuring SmartDate instances.

use std::sync::Arc;

use jiff::{tz::TimeZone, Timestamp};

use super::SmartDate;
use crate::calendar::{Calendar, Clock, FixedClock, SystemClock};

/// Builder for creating and configuring SmartDate instances.
#[derive(Debug, Clone, Default)]
pub struct SmartDateBuilder {
    time_zone: Option<TimeZone>,
    clock: Option<Arc<dyn Clock>>,
}

impl SmartDateBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the time zone every date is rendered in.
    ///
    /// If not specified, uses the system time zone (UTC when it cannot be
    /// determined).
    pub fn with_time_zone(mut self, time_zone: TimeZone) -> Self {
        self.time_zone = Some(time_zone);
        self
    }

    /// Sets the clock consulted for "now".
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Arc::new(clock));
        self
    }

    /// Pins "now" to a fixed instant.
    pub fn with_now(self, now: Timestamp) -> Self {
        self.with_clock(FixedClock(now))
    }

    /// Builds the configured formatter.
    pub fn build(self) -> SmartDate {
        let time_zone = self.time_zone.unwrap_or_else(TimeZone::system);
        let clock = self
            .clock
            .unwrap_or_else(|| Arc::new(SystemClock) as Arc<dyn Clock>);

        SmartDate::new(Calendar::new(time_zone, clock))
    }
}
