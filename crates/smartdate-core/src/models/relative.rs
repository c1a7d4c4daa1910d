//! Relative-phrasing modes.

use std::{fmt, str::FromStr, sync::Arc};

use jiff::{Span, ToSpan, Zoned};
use serde_json::Value;

use crate::error::SmartDateError;

/// Caller-supplied test deciding whether a date should be phrased relatively.
pub type RelativePredicate = Arc<dyn Fn(&Zoned) -> bool + Send + Sync>;

/// Type-safe enumeration of relative window sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Granularity {
    Day,
    Week,
    Month,
    Year,
}

impl Granularity {
    /// One unit of this granularity as a calendar span.
    pub fn span(self) -> Span {
        match self {
            Granularity::Day => 1.day(),
            Granularity::Week => 1.week(),
            Granularity::Month => 1.month(),
            Granularity::Year => 1.year(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Day => "day",
            Granularity::Week => "week",
            Granularity::Month => "month",
            Granularity::Year => "year",
        }
    }
}

impl FromStr for Granularity {
    type Err = SmartDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(Granularity::Day),
            "week" => Ok(Granularity::Week),
            "month" => Ok(Granularity::Month),
            "year" => Ok(Granularity::Year),
            _ => Err(SmartDateError::invalid_relative(s)),
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// When a single date should be rendered as a relative phrase.
///
/// # Examples
///
/// ```rust
/// use smartdate_core::{Granularity, RelativeSpec};
///
/// let spec: RelativeSpec = "month".parse().unwrap();
/// assert!(matches!(spec, RelativeSpec::Granularity(Granularity::Month)));
///
/// let spec: RelativeSpec = "true".parse().unwrap();
/// assert!(matches!(spec, RelativeSpec::DefaultWindow));
///
/// assert!("fortnight".parse::<RelativeSpec>().is_err());
/// ```
#[derive(Clone, Default)]
pub enum RelativeSpec {
    /// Always render absolute dates
    #[default]
    Off,
    /// Relative within one week either side of now
    DefaultWindow,
    /// Relative within one unit either side of now
    Granularity(Granularity),
    /// Relative whenever the predicate holds for the parsed date
    Predicate(RelativePredicate),
}

impl RelativeSpec {
    /// Wrap a closure as a predicate mode.
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&Zoned) -> bool + Send + Sync + 'static,
    {
        RelativeSpec::Predicate(Arc::new(f))
    }

    pub fn is_off(&self) -> bool {
        matches!(self, RelativeSpec::Off)
    }
}

impl fmt::Debug for RelativeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelativeSpec::Off => f.write_str("Off"),
            RelativeSpec::DefaultWindow => f.write_str("DefaultWindow"),
            RelativeSpec::Granularity(g) => f.debug_tuple("Granularity").field(g).finish(),
            RelativeSpec::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

impl From<bool> for RelativeSpec {
    fn from(enabled: bool) -> Self {
        if enabled {
            RelativeSpec::DefaultWindow
        } else {
            RelativeSpec::Off
        }
    }
}

impl From<Granularity> for RelativeSpec {
    fn from(granularity: Granularity) -> Self {
        RelativeSpec::Granularity(granularity)
    }
}

impl FromStr for RelativeSpec {
    type Err = SmartDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "true" => Ok(RelativeSpec::DefaultWindow),
            "false" => Ok(RelativeSpec::Off),
            _ => s.parse::<Granularity>().map(RelativeSpec::Granularity),
        }
    }
}

impl TryFrom<Value> for RelativeSpec {
    type Error = SmartDateError;

    /// Interpret a loosely-typed JSON value. Only `null`, booleans and the
    /// granularity tokens are meaningful.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(RelativeSpec::Off),
            Value::Bool(enabled) => Ok(enabled.into()),
            Value::String(token) => token.parse::<Granularity>().map(RelativeSpec::Granularity),
            other => Err(SmartDateError::invalid_relative(other)),
        }
    }
}
