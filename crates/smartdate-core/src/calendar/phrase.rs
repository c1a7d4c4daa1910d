//! Natural-language descriptions of the distance between two instants.

use std::fmt;

const MS_PER_SECOND: f64 = 1_000.0;
const MS_PER_MINUTE: f64 = 60_000.0;
const MS_PER_HOUR: f64 = 3_600_000.0;
const MS_PER_DAY: f64 = 86_400_000.0;

/// Months per day over a 400 year Gregorian cycle.
const MONTHS_PER_DAY: f64 = 4_800.0 / 146_097.0;

/// Whether the described instant lies before or after now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Past,
    Future,
}

/// The coarse unit a phrase is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhraseUnit {
    /// "a few seconds", never counted
    Seconds,
    Minutes,
    Hours,
    Days,
    Months,
    Years,
}

impl PhraseUnit {
    fn singular(&self) -> &'static str {
        match self {
            PhraseUnit::Seconds => "a few seconds",
            PhraseUnit::Minutes => "a minute",
            PhraseUnit::Hours => "an hour",
            PhraseUnit::Days => "a day",
            PhraseUnit::Months => "a month",
            PhraseUnit::Years => "a year",
        }
    }

    fn plural(&self) -> &'static str {
        match self {
            PhraseUnit::Seconds => "seconds",
            PhraseUnit::Minutes => "minutes",
            PhraseUnit::Hours => "hours",
            PhraseUnit::Days => "days",
            PhraseUnit::Months => "months",
            PhraseUnit::Years => "years",
        }
    }
}

/// A humanized distance such as "in 5 days" or "3 months ago".
///
/// # Examples
///
/// ```rust
/// use smartdate_core::calendar::RelativePhrase;
///
/// let day = 86_400_000;
/// assert_eq!(RelativePhrase::from_millis(-6 * day).to_string(), "6 days ago");
/// assert_eq!(RelativePhrase::from_millis(5 * day).to_string(), "in 5 days");
/// assert_eq!(RelativePhrase::from_millis(0).to_string(), "a few seconds ago");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelativePhrase {
    amount: u64,
    unit: PhraseUnit,
    direction: Direction,
}

impl RelativePhrase {
    /// Describe a signed distance in milliseconds; positive means the
    /// described instant is in the future. Zero reads as past.
    pub fn from_millis(delta: i64) -> Self {
        let direction = if delta > 0 {
            Direction::Future
        } else {
            Direction::Past
        };
        let abs = delta.unsigned_abs() as f64;

        let seconds = (abs / MS_PER_SECOND).round();
        let minutes = (abs / MS_PER_MINUTE).round();
        let hours = (abs / MS_PER_HOUR).round();
        let days = (abs / MS_PER_DAY).round();
        let months = (abs / MS_PER_DAY * MONTHS_PER_DAY).round();
        let years = (abs / MS_PER_DAY * MONTHS_PER_DAY / 12.0).round();

        let (amount, unit) = if seconds < 45.0 {
            (0.0, PhraseUnit::Seconds)
        } else if minutes <= 1.0 {
            (1.0, PhraseUnit::Minutes)
        } else if minutes < 45.0 {
            (minutes, PhraseUnit::Minutes)
        } else if hours <= 1.0 {
            (1.0, PhraseUnit::Hours)
        } else if hours < 22.0 {
            (hours, PhraseUnit::Hours)
        } else if days <= 1.0 {
            (1.0, PhraseUnit::Days)
        } else if days < 26.0 {
            (days, PhraseUnit::Days)
        } else if months <= 1.0 {
            (1.0, PhraseUnit::Months)
        } else if months < 11.0 {
            (months, PhraseUnit::Months)
        } else if years <= 1.0 {
            (1.0, PhraseUnit::Years)
        } else {
            (years, PhraseUnit::Years)
        };

        Self {
            amount: amount as u64,
            unit,
            direction,
        }
    }

    pub fn amount(&self) -> u64 {
        self.amount
    }

    pub fn unit(&self) -> PhraseUnit {
        self.unit
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// True when the phrase reads "a day ago" or "in a day".
    pub fn is_single_day(&self) -> bool {
        self.unit == PhraseUnit::Days && self.amount == 1
    }
}

impl fmt::Display for RelativePhrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quantity = if self.amount <= 1 {
            self.unit.singular().to_string()
        } else {
            format!("{} {}", self.amount, self.unit.plural())
        };

        match self.direction {
            Direction::Future => write!(f, "in {quantity}"),
            Direction::Past => write!(f, "{quantity} ago"),
        }
    }
}
