//! Option resolution: computed defaults layered under caller overrides.

use jiff::Zoned;
use log::debug;

use crate::models::{DateInput, FormatOptions, FormatOverrides, RelativeSpec};

/// Compute the effective options for one date.
///
/// Defaults are computed first, then every field the caller set wins:
/// - `include_time`: whether the input carries a time of day
/// - `include_year`: whether the date's year differs from now's
/// - `relative`: off
pub(crate) fn resolve(
    input: &DateInput,
    date: &Zoned,
    now: &Zoned,
    overrides: &FormatOverrides,
) -> FormatOptions {
    let defaults = FormatOptions {
        include_time: input.has_time(),
        include_year: date.year() != now.year(),
        relative: RelativeSpec::Off,
    };

    let options = defaults.apply(overrides);
    debug!(
        "resolved {date}: include_time={}, include_year={}, relative={:?}",
        options.include_time, options.include_year, options.relative
    );
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::{civil::date, tz::TimeZone};

    fn at(year: i16, month: i8, day: i8) -> Zoned {
        date(year, month, day).at(0, 0, 0, 0).to_zoned(TimeZone::UTC).unwrap()
    }

    #[test]
    fn test_defaults_for_text_without_time() {
        let options = resolve(
            &DateInput::from("2016-07-04"),
            &at(2016, 7, 4),
            &at(2016, 6, 30),
            &FormatOverrides::new(),
        );
        assert!(!options.include_time);
        assert!(!options.include_year);
        assert!(options.relative.is_off());
    }

    #[test]
    fn test_defaults_for_other_year_with_time() {
        let options = resolve(
            &DateInput::from("2017-07-04T09:30"),
            &at(2017, 7, 4),
            &at(2016, 6, 30),
            &FormatOverrides::new(),
        );
        assert!(options.include_time);
        assert!(options.include_year);
    }

    #[test]
    fn test_overrides_win_both_directions() {
        let now = at(2016, 6, 30);

        let forced_on = resolve(
            &DateInput::from("2016-07-04"),
            &at(2016, 7, 4),
            &now,
            &FormatOverrides::new().with_time(true).with_year(true),
        );
        assert!(forced_on.include_time);
        assert!(forced_on.include_year);

        let forced_off = resolve(
            &DateInput::from("2017-07-04 09:30"),
            &at(2017, 7, 4),
            &now,
            &FormatOverrides::new().with_time(false).with_year(false),
        );
        assert!(!forced_off.include_time);
        assert!(!forced_off.include_year);
    }
}
