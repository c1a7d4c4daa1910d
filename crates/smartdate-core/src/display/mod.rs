//! Display wrapper types for rendering dates.
//!
//! Rendering is kept out of the decision logic: the formatter decides
//! which parts to show, then hands a [`Zoned`](jiff::Zoned) and those
//! choices to one of the wrappers below, each of which implements
//! [`std::fmt::Display`].
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Formatter    │    │ Display Wrapper │    │    Rendered     │
//! │ (options, range │───▶│ (AbsoluteDate,  │───▶│     String      │
//! │   decisions)    │    │ CollapsedRange) │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Wrapper Types
//!
//! - [`OrdinalDay`]: a day of month with its English suffix ("4th")
//! - [`TwelveHourTime`]: lowercase 12-hour clock time ("9:30 am")
//! - [`AbsoluteDate`]: "July 4th", optionally followed by time and year
//! - [`CollapsedRange`]: "July 4-5", optionally followed by the year

pub mod datetime;
pub mod range;

pub use datetime::{AbsoluteDate, OrdinalDay, TwelveHourTime};
pub use range::CollapsedRange;
