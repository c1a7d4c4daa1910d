//! Caller overrides and fully resolved formatting options.

use serde::Deserialize;
use serde_json::Value;

use super::RelativeSpec;
use crate::error::Result;

/// Partial formatting options supplied by the caller.
///
/// Every field left as `None` falls back to the default computed for the
/// date being formatted.
#[derive(Debug, Clone, Default)]
pub struct FormatOverrides {
    pub include_time: Option<bool>,
    pub include_year: Option<bool>,
    pub relative: Option<RelativeSpec>,
}

impl FormatOverrides {
    /// Creates an empty override set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Force the time of day on or off.
    pub fn with_time(mut self, include_time: bool) -> Self {
        self.include_time = Some(include_time);
        self
    }

    /// Force the year on or off.
    pub fn with_year(mut self, include_year: bool) -> Self {
        self.include_year = Some(include_year);
        self
    }

    /// Select a relative-phrasing mode.
    pub fn with_relative(mut self, relative: impl Into<RelativeSpec>) -> Self {
        self.relative = Some(relative.into());
        self
    }

    /// Layer `over` on top of `self`; fields set in `over` win.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use smartdate_core::FormatOverrides;
    ///
    /// let base = FormatOverrides::new().with_year(false).with_time(true);
    /// let merged = base.layer(&FormatOverrides::new().with_year(true));
    /// assert_eq!(merged.include_year, Some(true));
    /// assert_eq!(merged.include_time, Some(true));
    /// ```
    pub fn layer(self, over: &FormatOverrides) -> FormatOverrides {
        FormatOverrides {
            include_time: over.include_time.or(self.include_time),
            include_year: over.include_year.or(self.include_year),
            relative: over.relative.clone().or(self.relative),
        }
    }

    /// Parse overrides from a JSON object such as
    /// `{"includeTime": true, "includeYear": false, "relative": "week"}`.
    ///
    /// # Errors
    ///
    /// Returns `SmartDateError::Serialization` for malformed JSON or an
    /// unknown key, and
    /// `SmartDateError::InvalidRelativeSpec` for an unusable `relative`
    /// value.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawOverrides = serde_json::from_str(json)?;
        let relative = raw.relative.map(RelativeSpec::try_from).transpose()?;

        Ok(FormatOverrides {
            include_time: raw.include_time,
            include_year: raw.include_year,
            relative,
        })
    }
}

/// Wire shape of JSON overrides before the relative value is interpreted.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawOverrides {
    include_time: Option<bool>,
    include_year: Option<bool>,
    relative: Option<Value>,
}

/// Fully populated options for rendering one date.
#[derive(Debug, Clone)]
pub struct FormatOptions {
    pub include_time: bool,
    pub include_year: bool,
    pub relative: RelativeSpec,
}

impl FormatOptions {
    /// Apply caller overrides on top of these options.
    pub fn apply(mut self, overrides: &FormatOverrides) -> Self {
        if let Some(include_time) = overrides.include_time {
            self.include_time = include_time;
        }
        if let Some(include_year) = overrides.include_year {
            self.include_year = include_year;
        }
        if let Some(relative) = &overrides.relative {
            self.relative = relative.clone();
        }
        self
    }
}
