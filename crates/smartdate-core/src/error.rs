//! Error types for the smartdate library.

use thiserror::Error;

/// Comprehensive error type for all formatting operations.
#[derive(Error, Debug)]
pub enum SmartDateError {
    /// `smart_date` was handed something other than one or two dates
    #[error("smart_date accepts one or two dates, got {count}")]
    InvalidInputShape { count: usize },
    /// Relative option outside the supported tokens or value types
    #[error("Invalid relative option '{value}': expected true, false, day, week, month or year")]
    InvalidRelativeSpec { value: String },
    /// Textual input the calendar could not interpret
    #[error("Could not parse date '{input}': {source}")]
    Parse {
        input: String,
        #[source]
        source: jiff::Error,
    },
    /// Calendar arithmetic or time zone conversion errors
    #[error("Calendar error: {source}")]
    Calendar {
        #[from]
        source: jiff::Error,
    },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Builder for creating parse errors with the offending input attached.
pub struct ParseErrorBuilder {
    input: String,
}

impl ParseErrorBuilder {
    /// Create a new parse error builder for an input.
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: jiff::Error) -> SmartDateError {
        SmartDateError::Parse {
            input: self.input,
            source,
        }
    }
}

impl SmartDateError {
    /// Creates a builder for parse errors.
    pub fn parse(input: impl Into<String>) -> ParseErrorBuilder {
        ParseErrorBuilder::new(input)
    }

    /// Creates an invalid relative option error for the given value.
    pub fn invalid_relative(value: impl ToString) -> Self {
        SmartDateError::InvalidRelativeSpec {
            value: value.to_string(),
        }
    }
}

/// Extension trait mapping calendar parse failures onto [`SmartDateError`].
pub trait ParseResultExt<T> {
    /// Map a parse failure, recording the input that caused it.
    fn parse_context(self, input: &str) -> Result<T>;
}

impl<T> ParseResultExt<T> for std::result::Result<T, jiff::Error> {
    fn parse_context(self, input: &str) -> Result<T> {
        self.map_err(|e| SmartDateError::parse(input).with_source(e))
    }
}

/// Result type alias for formatting operations
pub type Result<T> = std::result::Result<T, SmartDateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_shape_message() {
        let err = SmartDateError::InvalidInputShape { count: 3 };
        assert_eq!(err.to_string(), "smart_date accepts one or two dates, got 3");
    }

    #[test]
    fn test_parse_context_keeps_input() {
        let result: std::result::Result<jiff::civil::Date, jiff::Error> = "not a date".parse();
        let err = result.parse_context("not a date").unwrap_err();
        match err {
            SmartDateError::Parse { input, .. } => assert_eq!(input, "not a date"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_relative_message() {
        let err = SmartDateError::invalid_relative("fortnight");
        assert!(err.to_string().contains("'fortnight'"));
    }
}
