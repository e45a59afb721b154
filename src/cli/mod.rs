//! Command-line interface definitions.

pub mod output;
pub mod refresh;
pub mod report;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Quotidian - daily quote widget.
#[derive(Parser, Debug)]
#[command(name = "quotidian")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Refresh the widget with today's quote
    Refresh(RefreshArgs),

    /// Show usage statistics and offer a cycle reset
    Report(ReportArgs),
}

/// Arguments for the `refresh` subcommand.
#[derive(Parser, Debug)]
pub struct RefreshArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Bypass caches and pick a new quote immediately
    #[arg(long)]
    pub force: bool,

    /// Host widget parameter; "refresh" (any case) forces a new quote
    #[arg(long)]
    pub parameter: Option<String>,

    /// Emit the widget model as JSON instead of a terminal preview
    #[arg(long)]
    pub json: bool,
}

impl RefreshArgs {
    /// Whether this invocation bypasses the same-day cache.
    #[must_use]
    pub fn is_forced(&self) -> bool {
        self.force
            || self
                .parameter
                .as_deref()
                .is_some_and(|p| p.eq_ignore_ascii_case("refresh"))
    }
}

/// Arguments for the `report` subcommand.
#[derive(Parser, Debug)]
pub struct ReportArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,
}
