//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "address-form",
    version,
    about = "Address form core - pincode, state and city auto-fill",
    long_about = "Drive the address form core from the command line.\n\n\
                  Lists the reference locations, resolves pincodes, and fills\n\
                  and submits a form the way an interactive front end would."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow names to appear in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// List all states.
    States,

    /// List cities, optionally for a single state.
    Cities(CitiesArgs),

    /// Resolve a pincode to its state and city.
    Lookup(LookupArgs),

    /// Fill the form with the given values and submit it.
    Fill(FillArgs),
}

#[derive(Parser)]
pub struct CitiesArgs {
    /// State id (e.g. MH).
    #[arg(long = "state", value_name = "ID")]
    pub state: Option<String>,
}

#[derive(Parser)]
pub struct LookupArgs {
    /// Six-digit pincode.
    #[arg(value_name = "PINCODE")]
    pub pincode: String,
}

#[derive(Parser)]
pub struct FillArgs {
    #[arg(long = "first-name")]
    pub first_name: Option<String>,

    #[arg(long = "last-name")]
    pub last_name: Option<String>,

    #[arg(long = "pincode")]
    pub pincode: Option<String>,

    /// State id (e.g. KA).
    #[arg(long = "state")]
    pub state: Option<String>,

    /// City id (e.g. bangalore).
    #[arg(long = "city")]
    pub city: Option<String>,

    /// Print the report as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
