//! Single-date display wrappers.

use std::fmt;

use jiff::Zoned;

use crate::models::FormatOptions;

/// A day of the month with its English ordinal suffix.
///
/// # Examples
///
/// ```rust
/// use smartdate_core::display::OrdinalDay;
///
/// assert_eq!(OrdinalDay(1).to_string(), "1st");
/// assert_eq!(OrdinalDay(12).to_string(), "12th");
/// assert_eq!(OrdinalDay(23).to_string(), "23rd");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrdinalDay(pub i8);

impl fmt::Display for OrdinalDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = match (self.0 % 10, self.0 % 100) {
            (_, 11..=13) => "th",
            (1, _) => "st",
            (2, _) => "nd",
            (3, _) => "rd",
            _ => "th",
        };
        write!(f, "{}{suffix}", self.0)
    }
}

/// Lowercase 12-hour time with minutes, e.g. `9:30 am` or `12:00 pm`.
pub struct TwelveHourTime<'a>(pub &'a Zoned);

impl<'a> fmt::Display for TwelveHourTime<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hour = self.0.hour();
        let meridiem = if hour < 12 { "am" } else { "pm" };
        let hour = match hour % 12 {
            0 => 12,
            h => h,
        };
        write!(f, "{hour}:{:02} {meridiem}", self.0.minute())
    }
}

/// An absolute calendar rendering of one date.
///
/// Parts are joined with `", "`:
/// - month name and ordinal day, always
/// - 12-hour time, when `include_time`
/// - 4-digit year, when `include_year`
pub struct AbsoluteDate<'a> {
    date: &'a Zoned,
    include_time: bool,
    include_year: bool,
}

impl<'a> AbsoluteDate<'a> {
    /// Create a new AbsoluteDate wrapper.
    pub fn new(date: &'a Zoned, include_time: bool, include_year: bool) -> Self {
        Self {
            date,
            include_time,
            include_year,
        }
    }

    /// Create an AbsoluteDate showing the parts selected by resolved options.
    pub fn with_options(date: &'a Zoned, options: &FormatOptions) -> Self {
        Self::new(date, options.include_time, options.include_year)
    }
}

impl<'a> fmt::Display for AbsoluteDate<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}",
            self.date.strftime("%B"),
            OrdinalDay(self.date.day())
        )?;

        if self.include_time {
            write!(f, ", {}", TwelveHourTime(self.date))?;
        }
        if self.include_year {
            write!(f, ", {:04}", self.date.year())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::{civil::date, tz::TimeZone};

    fn zoned(hour: i8, minute: i8) -> Zoned {
        date(2016, 7, 4)
            .at(hour, minute, 0, 0)
            .to_zoned(TimeZone::UTC)
            .unwrap()
    }

    #[test]
    fn test_ordinal_suffixes() {
        let rendered: Vec<String> = [1, 2, 3, 4, 11, 12, 13, 21, 22, 23, 30, 31]
            .into_iter()
            .map(|d| OrdinalDay(d).to_string())
            .collect();
        assert_eq!(
            rendered,
            ["1st", "2nd", "3rd", "4th", "11th", "12th", "13th", "21st", "22nd", "23rd", "30th", "31st"]
        );
    }

    #[test]
    fn test_twelve_hour_time() {
        assert_eq!(TwelveHourTime(&zoned(0, 0)).to_string(), "12:00 am");
        assert_eq!(TwelveHourTime(&zoned(9, 30)).to_string(), "9:30 am");
        assert_eq!(TwelveHourTime(&zoned(12, 5)).to_string(), "12:05 pm");
        assert_eq!(TwelveHourTime(&zoned(23, 59)).to_string(), "11:59 pm");
    }

    #[test]
    fn test_absolute_date_parts() {
        let date = zoned(9, 30);
        assert_eq!(AbsoluteDate::new(&date, false, false).to_string(), "July 4th");
        assert_eq!(AbsoluteDate::new(&date, true, false).to_string(), "July 4th, 9:30 am");
        assert_eq!(AbsoluteDate::new(&date, false, true).to_string(), "July 4th, 2016");
        assert_eq!(
            AbsoluteDate::new(&date, true, true).to_string(),
            "July 4th, 9:30 am, 2016"
        );
    }
}
