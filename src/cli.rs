use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand};

/// Aviv lunar and liturgical calendar.
#[derive(Parser)]
#[command(
    name = "aviv",
    version,
    about = "Conjunction-anchored liturgical calendar (local time UTC-6)"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file [default: aviv.toml, if present].
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print JSON instead of plain text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Feast dates of a year.
    Feasts(YearArgs),
    /// Celebrations, conjunctions and moon phases of one month.
    Month(MonthArgs),
    /// Every celebration of a year, month by month.
    Year(YearArgs),
    /// March equinox of a year.
    Equinox(YearArgs),
    /// Moon-phase transitions between two dates.
    Phases(PhasesArgs),
    /// Next conjunction after an instant.
    Next(NextArgs),
}

/// A year, defaulting to the current local year.
#[derive(clap::Args)]
pub struct YearArgs {
    /// Civil year [default: current year].
    #[arg(short, long)]
    pub year: Option<i32>,
}

/// Arguments for the `month` subcommand.
#[derive(clap::Args)]
pub struct MonthArgs {
    /// Civil year [default: current year].
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Civil month (1-12).
    #[arg(short, long)]
    pub month: u32,
}

/// Arguments for the `phases` subcommand.
#[derive(clap::Args)]
pub struct PhasesArgs {
    /// First local date searched (YYYY-MM-DD).
    #[arg(long)]
    pub from: NaiveDate,

    /// Local date at whose midnight the search stops (YYYY-MM-DD).
    #[arg(long)]
    pub to: NaiveDate,
}

/// Arguments for the `next` subcommand.
#[derive(clap::Args)]
pub struct NextArgs {
    /// Local instant (YYYY-MM-DDTHH:MM:SS) [default: now].
    #[arg(short, long)]
    pub after: Option<NaiveDateTime>,
}
