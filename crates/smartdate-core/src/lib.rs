//! Core library for rendering dates and date ranges as concise text.
//!
//! Given one date, or a pair of dates, the formatter decides whether to show
//! a time of day, a year, or a relative phrase, and composes the parts into
//! one string:
//!
//! | input                                  | output                             |
//! |----------------------------------------|------------------------------------|
//! | `2016-07-04`                           | `July 4th`                         |
//! | `2016-07-04 09:30`                     | `July 4th, 9:30 am`                |
//! | `2016-07-04`, `2016-07-05`             | `July 4-5`                         |
//! | `2016-07-04`, `2017-07-04`             | `July 4th, 2016 - July 4th, 2017`  |
//! | `2016-06-29` with `relative: true`     | `yesterday`                        |
//!
//! (with "now" at 2016-06-30)
//!
//! # Display Architecture
//!
//! - **Decision logic** ([`formatter`]): option resolution plus the single
//!   and range formatters
//! - **Display Wrappers** ([`display`]): turn a parsed date and the chosen
//!   parts into text
//! - **Calendar** ([`calendar`]): parsing, clock, arithmetic and relative
//!   phrases, backed by `jiff`
//!
//! # Quick Start
//!
//! ```rust
//! use smartdate_core::{FormatOverrides, SmartDateBuilder};
//!
//! let formatter = SmartDateBuilder::new().build();
//!
//! // Force the year so the output does not depend on today's date
//! let overrides = FormatOverrides::new().with_year(true);
//! let text = formatter.smart_date(["2016-07-04", "2016-07-05"], &overrides)?;
//! assert_eq!(text, "July 4-5, 2016");
//! # Ok::<(), smartdate_core::SmartDateError>(())
//! ```

pub mod calendar;
pub mod display;
pub mod error;
pub mod formatter;
pub mod models;

// Re-export commonly used types
pub use calendar::{Calendar, Clock, FixedClock, SystemClock};
pub use error::{Result, SmartDateError};
pub use formatter::{SmartDate, SmartDateBuilder};
pub use models::{
    DateInput, Dates, FormatOptions, FormatOverrides, Granularity, RelativePredicate, RelativeSpec,
};

/// Render one date or a two-date range with the system clock and time zone.
///
/// # Errors
///
/// See [`SmartDate::smart_date`].
pub fn smart_date(dates: impl Into<Dates>, overrides: &FormatOverrides) -> Result<String> {
    SmartDate::default().smart_date(dates, overrides)
}

/// Render one date with the system clock and time zone.
///
/// # Errors
///
/// See [`SmartDate::format_single_date`].
pub fn format_single_date(date: impl Into<DateInput>, overrides: &FormatOverrides) -> Result<String> {
    SmartDate::default().format_single_date(date, overrides)
}

/// Render a date range with the system clock and time zone.
///
/// # Errors
///
/// See [`SmartDate::format_date_range`].
pub fn format_date_range(
    start: impl Into<DateInput>,
    end: impl Into<DateInput>,
    overrides: &FormatOverrides,
) -> Result<String> {
    SmartDate::default().format_date_range(start, end, overrides)
}
