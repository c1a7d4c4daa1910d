//! Range display wrappers.

use std::fmt;

use jiff::Zoned;

/// A same-month range rendered as `"{Month} {start}-{end}"` with plain day
/// numbers, followed by `", {year}"` when requested.
///
/// Both endpoints must fall in the same calendar month; only the start's
/// month name is printed.
pub struct CollapsedRange<'a> {
    start: &'a Zoned,
    end: &'a Zoned,
    include_year: bool,
}

impl<'a> CollapsedRange<'a> {
    /// Create a new CollapsedRange wrapper.
    pub fn new(start: &'a Zoned, end: &'a Zoned, include_year: bool) -> Self {
        Self {
            start,
            end,
            include_year,
        }
    }
}

impl<'a> fmt::Display for CollapsedRange<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}-{}",
            self.start.strftime("%B"),
            self.start.day(),
            self.end.day()
        )?;

        if self.include_year {
            write!(f, ", {:04}", self.end.year())?;
        }

        Ok(())
    }
}
