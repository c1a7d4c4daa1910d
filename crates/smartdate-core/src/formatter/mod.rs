//! High-level formatter API for dates and date ranges.
//!
//! This module provides the main [`SmartDate`] interface. The formatter owns
//! a [`Calendar`] (time zone plus clock) and implements the decision logic
//! that picks which parts of a date to show.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Entry Point   │    │ Range / Single  │    │     Option      │
//! │  (smart_date)   │───▶│   Formatters    │───▶│   Resolution    │
//! │                 │    │                 │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`SmartDate`] instances with configuration
//! - `resolve`: computed defaults layered under caller overrides
//! - `single`: one date, absolute or relative
//! - `range`: two dates, collapsed or rendered independently
//!
//! "Now" is sampled once at the start of every public call and threaded
//! through; nothing is cached between calls, so a formatter can be shared
//! freely across threads.
//!
//! # Usage Examples
//!
//! ```rust
//! use jiff::{tz::TimeZone, Timestamp};
//! use smartdate_core::{FormatOverrides, SmartDateBuilder};
//!
//! let now: Timestamp = "2016-06-30T00:00:00Z".parse().unwrap();
//! let formatter = SmartDateBuilder::new()
//!     .with_time_zone(TimeZone::UTC)
//!     .with_now(now)
//!     .build();
//!
//! let none = FormatOverrides::new();
//! assert_eq!(formatter.smart_date("2016-07-04", &none).unwrap(), "July 4th");
//! assert_eq!(
//!     formatter.smart_date(["2016-07-04", "2016-07-05"], &none).unwrap(),
//!     "July 4-5"
//! );
//! assert_eq!(
//!     formatter
//!         .format_single_date("2016-06-29", &FormatOverrides::new().with_relative(true))
//!         .unwrap(),
//!     "yesterday"
//! );
//! ```

use log::debug;

use crate::{
    calendar::Calendar,
    error::{Result, SmartDateError},
    models::{Dates, FormatOverrides},
};

// Module declarations
pub mod builder;
mod range;
mod resolve;
mod single;

#[cfg(test)]
mod tests;

// Re-export the main types
pub use builder::SmartDateBuilder;

/// Main formatter interface for dates and date ranges.
#[derive(Debug, Clone)]
pub struct SmartDate {
    pub(crate) calendar: Calendar,
}

impl SmartDate {
    /// Creates a new formatter over the given calendar.
    pub fn new(calendar: Calendar) -> Self {
        Self { calendar }
    }

    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    /// Render one date or a two-date range.
    ///
    /// A bare date or a one-element sequence is formatted as a single date;
    /// a two-element sequence as a range.
    ///
    /// # Errors
    ///
    /// Returns `SmartDateError::InvalidInputShape` for an empty sequence or
    /// one with more than two dates, and `SmartDateError::Parse` for text
    /// the calendar cannot read.
    pub fn smart_date(&self, dates: impl Into<Dates>, overrides: &FormatOverrides) -> Result<String> {
        let dates = dates.into();
        let now = self.calendar.now();

        match dates.as_slice() {
            [date] => self.single_at(date, overrides, &now),
            [start, end] => self.range_at(start, end, overrides, &now),
            other => {
                debug!("rejecting {} dates", other.len());
                Err(SmartDateError::InvalidInputShape { count: other.len() })
            }
        }
    }
}

impl Default for SmartDate {
    fn default() -> Self {
        SmartDateBuilder::new().build()
    }
}
