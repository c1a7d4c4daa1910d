//! Date range formatting.

use jiff::Zoned;
use log::debug;

use super::{resolve::resolve, SmartDate};
use crate::{
    calendar::Calendar,
    display::{AbsoluteDate, CollapsedRange},
    error::Result,
    models::{DateInput, FormatOverrides},
};

impl SmartDate {
    /// Render a pair of dates as one range string.
    ///
    /// The start only shows its year when the two years differ (unless the
    /// caller forces it), so `2016-07-04 .. 2017-07-04` becomes
    /// `"July 4th, 2016 - July 4th, 2017"` while a same-year pair keeps the
    /// year on the end only. Same-month pairs without times collapse to
    /// `"July 4-5"`.
    ///
    /// Endpoints are always rendered absolute; relative phrasing only
    /// applies when both ends are the same instant.
    ///
    /// # Errors
    ///
    /// Returns `SmartDateError::Parse` for text the calendar cannot read.
    pub fn format_date_range(
        &self,
        start: impl Into<DateInput>,
        end: impl Into<DateInput>,
        overrides: &FormatOverrides,
    ) -> Result<String> {
        let now = self.calendar.now();
        self.range_at(&start.into(), &end.into(), overrides, &now)
    }

    pub(crate) fn range_at(
        &self,
        start: &DateInput,
        end: &DateInput,
        overrides: &FormatOverrides,
        now: &Zoned,
    ) -> Result<String> {
        let first = self.calendar.parse(start)?;
        let last = self.calendar.parse(end)?;

        let start_overrides = FormatOverrides::new()
            .with_year(first.year() != last.year())
            .layer(overrides);
        let start_opts = resolve(start, &first, now, &start_overrides);
        let end_opts = resolve(end, &last, now, overrides);
        let any_times = start_opts.include_time || end_opts.include_time;

        if Calendar::same_instant(&first, &last) {
            debug!("range endpoints are the same instant");
            let options = resolve(start, &first, now, overrides);
            return self.render(&first, &options, now);
        }

        if Calendar::same_month(&first, &last) && !any_times {
            debug!("collapsing same-month range");
            return Ok(CollapsedRange::new(&first, &last, end_opts.include_year).to_string());
        }

        debug!("rendering range endpoints independently");
        Ok(format!(
            "{} - {}",
            AbsoluteDate::with_options(&first, &start_opts),
            AbsoluteDate::with_options(&last, &end_opts)
        ))
    }
}
