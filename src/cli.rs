use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Kislev: when Hanukkah meets Christmas and Thanksgiving.
#[derive(Parser)]
#[command(
    name = "kislev",
    version,
    about = "Hanukkah, Christmas and Thanksgiving coincidence reports"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Aggregate coincidences over a range of years and print the report.
    Report(ReportArgs),
    /// Print the Hanukkah onset date(s) of each year.
    Onsets(YearsArgs),
    /// Print the Thanksgiving date of each year.
    Thanksgiving(YearsArgs),
}

/// Arguments for the `report` subcommand.
#[derive(clap::Args)]
pub struct ReportArgs {
    /// Path to TOML configuration file (defaults to kislev.toml if present).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Year the range is centered on (defaults to the current year).
    #[arg(long, allow_negative_numbers = true)]
    pub center_year: Option<i32>,

    /// Width of the range in years.
    #[arg(long)]
    pub span: Option<u32>,

    /// Do not read or write the on-disk caches.
    #[arg(long)]
    pub no_cache: bool,

    /// Override the cache directory from config.
    #[arg(long)]
    pub cache_dir: Option<PathBuf>,

    /// Also write the full report as JSON to this path.
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Override the chart output directory from config.
    #[arg(long)]
    pub charts_dir: Option<PathBuf>,
}

/// Arguments for the per-year lookup subcommands.
#[derive(clap::Args)]
pub struct YearsArgs {
    /// Gregorian years to look up.
    #[arg(required = true, allow_negative_numbers = true)]
    pub years: Vec<i32>,
}
