//! Calendar collaborator backed by `jiff`.
//!
//! The formatter never does date arithmetic itself. Everything calendar
//! related goes through [`Calendar`]:
//!
//! - reading the current instant from a [`Clock`]
//! - turning a [`DateInput`] into a [`Zoned`] value in one time zone
//! - building the ±1 unit window used by relative mode
//! - describing the distance between two instants as a [`RelativePhrase`]
//!
//! All values handed back are expressed in the calendar's time zone so
//! that year and month comparisons agree with what gets rendered.

use std::sync::Arc;

use jiff::{
    civil::{self, Time},
    tz::TimeZone,
    Timestamp, Zoned,
};
use log::trace;

use crate::{
    error::{ParseResultExt, Result, SmartDateError},
    models::{DateInput, Granularity},
};

pub mod clock;
pub mod phrase;

pub use clock::{Clock, FixedClock, SystemClock};
pub use phrase::{Direction, PhraseUnit, RelativePhrase};

/// Time zone plus clock; the formatter's view of the calendar.
#[derive(Debug, Clone)]
pub struct Calendar {
    time_zone: TimeZone,
    clock: Arc<dyn Clock>,
}

impl Calendar {
    pub fn new(time_zone: TimeZone, clock: Arc<dyn Clock>) -> Self {
        Self { time_zone, clock }
    }

    pub fn time_zone(&self) -> &TimeZone {
        &self.time_zone
    }

    /// The current instant in the calendar's time zone.
    pub fn now(&self) -> Zoned {
        self.clock.now().to_zoned(self.time_zone.clone())
    }

    /// Interpret an input as a zoned date-time.
    ///
    /// Text is tried as a zoned datetime (`2016-07-04T09:30[Europe/Paris]`),
    /// then as an instant with an offset (`2016-07-04T09:30Z`), then as a
    /// civil datetime or a bare date taken at midnight.
    ///
    /// # Errors
    ///
    /// Returns `SmartDateError::Parse` when the text matches none of those
    /// shapes, and `SmartDateError::Calendar` when a civil datetime does not
    /// exist in the time zone.
    pub fn parse(&self, input: &DateInput) -> Result<Zoned> {
        match input {
            DateInput::Text(text) => self.parse_text(text),
            DateInput::Zoned(zoned) => Ok(zoned.with_time_zone(self.time_zone.clone())),
            DateInput::DateTime(datetime) => Ok(datetime.to_zoned(self.time_zone.clone())?),
            DateInput::Timestamp(timestamp) => Ok(timestamp.to_zoned(self.time_zone.clone())),
        }
    }

    fn parse_text(&self, text: &str) -> Result<Zoned> {
        let trimmed = text.trim();

        if let Ok(zoned) = trimmed.parse::<Zoned>() {
            return Ok(zoned.with_time_zone(self.time_zone.clone()));
        }
        if let Ok(timestamp) = trimmed.parse::<Timestamp>() {
            return Ok(timestamp.to_zoned(self.time_zone.clone()));
        }

        let datetime = match trimmed.parse::<civil::DateTime>() {
            Ok(datetime) => datetime,
            Err(err) => match trimmed.parse::<civil::Date>() {
                Ok(date) => date.to_datetime(Time::midnight()),
                Err(_) => return Err(SmartDateError::parse(text).with_source(err)),
            },
        };

        datetime.to_zoned(self.time_zone.clone()).parse_context(text)
    }

    /// The open window `(now - 1 unit, now + 1 unit)`.
    pub fn window(&self, now: &Zoned, granularity: Granularity) -> Result<(Zoned, Zoned)> {
        let span = granularity.span();
        let lower = now.checked_sub(span)?;
        let upper = now.checked_add(span)?;
        trace!("{granularity} window: {lower} .. {upper}");
        Ok((lower, upper))
    }

    /// Whether `date` lies strictly inside the window around `now`.
    pub fn is_within(&self, date: &Zoned, now: &Zoned, granularity: Granularity) -> Result<bool> {
        let (lower, upper) = self.window(now, granularity)?;
        let instant = date.timestamp();
        Ok(lower.timestamp() < instant && instant < upper.timestamp())
    }

    /// Humanized distance from `now` to `date`.
    pub fn relative_phrase(&self, date: &Zoned, now: &Zoned) -> RelativePhrase {
        let delta = date.timestamp().as_millisecond() - now.timestamp().as_millisecond();
        RelativePhrase::from_millis(delta)
    }

    /// Same calendar year and month.
    pub fn same_month(a: &Zoned, b: &Zoned) -> bool {
        a.year() == b.year() && a.month() == b.month()
    }

    /// Same instant, regardless of time zone.
    pub fn same_instant(a: &Zoned, b: &Zoned) -> bool {
        a.timestamp() == b.timestamp()
    }
}
