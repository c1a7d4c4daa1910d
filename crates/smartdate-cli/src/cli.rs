//! Command handling for the smartdate binary.
//!
//! Turns parsed [`Args`] into a configured [`SmartDate`] formatter and a set
//! of [`FormatOverrides`], then renders the requested dates.
//!
//! ```text
//! User Input → CLI Args (clap) → FormatOverrides + SmartDate → Rendered text
//! ```

use std::sync::Arc;

use anyhow::{Context, Result};
use jiff::tz::TimeZone;
use log::debug;
use smartdate_core::{
    Calendar, DateInput, FormatOverrides, SmartDate, SmartDateBuilder, SystemClock,
};

use crate::args::Args;

/// CLI handler holding the configured formatter.
pub struct Cli {
    formatter: SmartDate,
}

impl Cli {
    pub fn new(formatter: SmartDate) -> Self {
        Self { formatter }
    }

    /// Build the formatter described by `--tz` and `--now`.
    pub fn from_args(args: &Args) -> Result<Self> {
        let time_zone = match &args.tz {
            Some(name) => {
                TimeZone::get(name).with_context(|| format!("Unknown time zone '{name}'"))?
            }
            None => TimeZone::system(),
        };

        let mut builder = SmartDateBuilder::new().with_time_zone(time_zone.clone());

        if let Some(now) = &args.now {
            let calendar = Calendar::new(time_zone, Arc::new(SystemClock));
            let now = calendar
                .parse(&DateInput::from(now.as_str()))
                .with_context(|| format!("Invalid --now value '{now}'"))?;
            debug!("pinning now to {now}");
            builder = builder.with_now(now.timestamp());
        }

        Ok(Self::new(builder.build()))
    }

    /// Render the dates named on the command line.
    pub fn render(&self, args: &Args) -> Result<String> {
        let base = match &args.options {
            Some(json) => FormatOverrides::from_json(json).context("Invalid --options value")?,
            None => FormatOverrides::new(),
        };
        let overrides = base.layer(&FormatOverrides::from(args));

        self.formatter
            .smart_date(args.dates.clone(), &overrides)
            .context("Failed to format dates")
    }
}
