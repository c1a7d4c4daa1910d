//! Single-date formatting.

use jiff::Zoned;
use log::trace;

use super::{resolve::resolve, SmartDate};
use crate::{
    calendar::{Direction, RelativePhrase},
    display::AbsoluteDate,
    error::Result,
    models::{DateInput, FormatOptions, FormatOverrides, Granularity, RelativeSpec},
};

impl SmartDate {
    /// Render one date, absolute or relative depending on the options.
    ///
    /// # Errors
    ///
    /// Returns `SmartDateError::Parse` for text the calendar cannot read.
    pub fn format_single_date(
        &self,
        date: impl Into<DateInput>,
        overrides: &FormatOverrides,
    ) -> Result<String> {
        let now = self.calendar.now();
        self.single_at(&date.into(), overrides, &now)
    }

    pub(crate) fn single_at(
        &self,
        input: &DateInput,
        overrides: &FormatOverrides,
        now: &Zoned,
    ) -> Result<String> {
        let date = self.calendar.parse(input)?;
        let options = resolve(input, &date, now, overrides);
        self.render(&date, &options, now)
    }

    /// Render an already parsed date with fully resolved options.
    pub(crate) fn render(&self, date: &Zoned, options: &FormatOptions, now: &Zoned) -> Result<String> {
        if self.shows_relative(date, &options.relative, now)? {
            let phrase = self.calendar.relative_phrase(date, now);
            return Ok(colloquial(&phrase));
        }

        Ok(AbsoluteDate::with_options(date, options).to_string())
    }

    fn shows_relative(&self, date: &Zoned, relative: &RelativeSpec, now: &Zoned) -> Result<bool> {
        let relative = match relative {
            RelativeSpec::Off => false,
            RelativeSpec::Predicate(predicate) => predicate(date),
            RelativeSpec::DefaultWindow => self.calendar.is_within(date, now, Granularity::Week)?,
            RelativeSpec::Granularity(granularity) => {
                self.calendar.is_within(date, now, *granularity)?
            }
        };
        trace!("{date} relative={relative}");
        Ok(relative)
    }
}

/// "a day ago" and "in a day" read better as "yesterday" and "tomorrow".
fn colloquial(phrase: &RelativePhrase) -> String {
    match (phrase.is_single_day(), phrase.direction()) {
        (true, Direction::Past) => "yesterday".to_string(),
        (true, Direction::Future) => "tomorrow".to_string(),
        (false, _) => phrase.to_string(),
    }
}
