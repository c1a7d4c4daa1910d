use clap::{ArgAction, Parser};
use smartdate_core::{FormatOverrides, RelativeSpec, SmartDateError};

/// Render dates and date ranges as concise human-readable text
///
/// Pass one date for a single rendering ("July 4th, 9:30 am") or two dates
/// for a range ("July 4-5"). The time of day and the year are shown only
/// when they carry information, unless forced on or off with the flags
/// below.
#[derive(Parser, Debug)]
#[command(version, about, name = "smartdate")]
pub struct Args {
    /// One date, or two dates forming a range (e.g. 2016-07-04 or
    /// "2016-07-04 09:30")
    #[arg(value_name = "DATE")]
    pub dates: Vec<String>,

    /// Always show the time of day
    #[arg(long, action = ArgAction::SetTrue, conflicts_with = "no_time")]
    pub time: bool,

    /// Never show the time of day
    #[arg(long, action = ArgAction::SetTrue)]
    pub no_time: bool,

    /// Always show the year
    #[arg(long, action = ArgAction::SetTrue, conflicts_with = "no_year")]
    pub year: bool,

    /// Never show the year
    #[arg(long, action = ArgAction::SetTrue)]
    pub no_year: bool,

    /// Prefer a relative phrase near now: true, false, day, week, month or
    /// year
    #[arg(long, value_name = "SPEC", value_parser = parse_relative)]
    pub relative: Option<RelativeSpec>,

    /// Overrides as a JSON object, e.g. '{"includeYear": true}'. Flags win
    /// over fields set here.
    #[arg(long, value_name = "JSON")]
    pub options: Option<String>,

    /// Time zone to render in. Defaults to the system time zone
    #[arg(long, env = "SMARTDATE_TZ", value_name = "ZONE")]
    pub tz: Option<String>,

    /// Pretend the current time is this instant instead of reading the
    /// system clock
    #[arg(long, env = "SMARTDATE_NOW", value_name = "DATETIME")]
    pub now: Option<String>,
}

fn parse_relative(value: &str) -> Result<RelativeSpec, SmartDateError> {
    value.parse()
}

/// Overrides expressed by the individual flags.
impl From<&Args> for FormatOverrides {
    fn from(args: &Args) -> Self {
        let flag = |on: bool, off: bool| match (on, off) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };

        FormatOverrides {
            include_time: flag(args.time, args.no_time),
            include_year: flag(args.year, args.no_year),
            relative: args.relative.clone(),
        }
    }
}
