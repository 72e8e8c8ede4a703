//! CLI argument definitions for tickstat.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `summary` | Every aggregate for a dataset |
//! | `change` | Only the biggest adjacent price change |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `json` | Output format (json, table) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--strict` | `false` | Treat warnings as failures |
//! | `--skip-mismatched` | `false` | Skip observations for other instruments |
//! | `--log-level` | `warn` | Log filter, also read from `TICKSTAT_LOG` |
//!
//! # Examples
//!
//! ```bash
//! tickstat summary prices.json --pretty
//! cat prices.json | tickstat change - --format table
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Price statistics over dated observations of one instrument.
#[derive(Debug, Parser)]
#[command(
    name = "tickstat",
    author,
    version,
    about = "Price statistics over dated observations of one instrument"
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Treat warnings as failures (exit code 5).
    #[arg(long, global = true, default_value_t = false)]
    pub strict: bool,

    /// Leave out observations that name another instrument instead of failing.
    #[arg(long, global = true, default_value_t = false)]
    pub skip_mismatched: bool,

    /// Log filter directives (e.g. `info`, `tickstat_core=debug`).
    #[arg(long, global = true, env = "TICKSTAT_LOG", default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print count, min, max, average, biggest change and date span.
    Summary(InputArgs),
    /// Print the biggest price change between adjacent dates.
    Change(InputArgs),
}

#[derive(Debug, Clone, Args)]
pub struct InputArgs {
    /// Dataset file, or `-` to read standard input.
    pub input: PathBuf,
}

impl InputArgs {
    pub fn reads_stdin(&self) -> bool {
        self.input.as_os_str() == "-"
    }
}
