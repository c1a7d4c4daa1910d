//! Data models for dates and formatting options.
//!
//! This module contains the values a caller hands to the formatter:
//!
//! - [`DateInput`] and [`Dates`]: what to render
//! - [`FormatOverrides`]: partial options, merged over computed defaults
//! - [`FormatOptions`]: the fully resolved options for one date
//! - [`RelativeSpec`] and [`Granularity`]: when to prefer a relative phrase
//!
//! All of them are immutable, call-scoped values.
//!
//! # Example
//!
//! ```rust
//! use smartdate_core::models::{FormatOverrides, Granularity};
//!
//! let overrides = FormatOverrides::new()
//!     .with_year(true)
//!     .with_relative(Granularity::Day);
//! assert_eq!(overrides.include_year, Some(true));
//! assert!(overrides.include_time.is_none());
//! ```

pub mod input;
pub mod options;
pub mod relative;


pub use input::{DateInput, Dates};
pub use options::{FormatOptions, FormatOverrides};
pub use relative::{Granularity, RelativePredicate, RelativeSpec};
