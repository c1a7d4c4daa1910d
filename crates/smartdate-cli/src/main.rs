//! Smartdate CLI Application
//!
//! Command-line interface for rendering dates and date ranges.

mod args;
mod cli;

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use cli::Cli;
use log::info;

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    info!("Smartdate started");

    let cli = Cli::from_args(&args).context("Failed to initialize formatter")?;
    let text = cli.render(&args)?;
    println!("{text}");

    Ok(())
}
