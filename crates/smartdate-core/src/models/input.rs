//! Date inputs accepted by the formatter.

use jiff::{civil, Timestamp, Zoned};

/// A value identifying a point in time.
///
/// Textual inputs are handed to the calendar parser untouched. Structured
/// inputs always carry a time of day, even when it is midnight.
#[derive(Debug, Clone, PartialEq)]
pub enum DateInput {
    /// Opaque text such as `2016-07-04` or `2016-07-04 09:30`
    Text(String),
    /// A date and time in a specific time zone
    Zoned(Zoned),
    /// A civil date and time, interpreted in the formatter's time zone
    DateTime(civil::DateTime),
    /// An absolute instant, shown in the formatter's time zone
    Timestamp(Timestamp),
}

impl DateInput {
    /// Whether this input carries a time-of-day component.
    ///
    /// Text is sniffed for a space or a literal `T` separator; no real
    /// parsing happens here.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use smartdate_core::DateInput;
    ///
    /// assert!(!DateInput::from("2016-07-04").has_time());
    /// assert!(DateInput::from("2016-07-04 09:30").has_time());
    /// assert!(DateInput::from("2016-07-04T09:30").has_time());
    /// ```
    pub fn has_time(&self) -> bool {
        match self {
            DateInput::Text(text) => text.contains(' ') || text.contains('T'),
            DateInput::Zoned(_) | DateInput::DateTime(_) | DateInput::Timestamp(_) => true,
        }
    }
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        DateInput::Text(text.to_string())
    }
}

impl From<String> for DateInput {
    fn from(text: String) -> Self {
        DateInput::Text(text)
    }
}

impl From<Zoned> for DateInput {
    fn from(zoned: Zoned) -> Self {
        DateInput::Zoned(zoned)
    }
}

impl From<civil::DateTime> for DateInput {
    fn from(datetime: civil::DateTime) -> Self {
        DateInput::DateTime(datetime)
    }
}

impl From<Timestamp> for DateInput {
    fn from(timestamp: Timestamp) -> Self {
        DateInput::Timestamp(timestamp)
    }
}

/// One date, or a sequence of dates, handed to the entry point.
#[derive(Debug, Clone, PartialEq)]
pub enum Dates {
    /// A bare date
    One(DateInput),
    /// A sequence; only lengths one and two are accepted when formatting
    Many(Vec<DateInput>),
}

impl Dates {
    /// View the dates as a slice regardless of how they were supplied.
    pub fn as_slice(&self) -> &[DateInput] {
        match self {
            Dates::One(date) => std::slice::from_ref(date),
            Dates::Many(dates) => dates,
        }
    }
}

impl From<DateInput> for Dates {
    fn from(date: DateInput) -> Self {
        Dates::One(date)
    }
}

impl From<&str> for Dates {
    fn from(text: &str) -> Self {
        Dates::One(text.into())
    }
}

impl From<String> for Dates {
    fn from(text: String) -> Self {
        Dates::One(text.into())
    }
}

impl<T: Into<DateInput>> From<Vec<T>> for Dates {
    fn from(dates: Vec<T>) -> Self {
        Dates::Many(dates.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<DateInput>, const N: usize> From<[T; N]> for Dates {
    fn from(dates: [T; N]) -> Self {
        Dates::Many(dates.into_iter().map(Into::into).collect())
    }
}
