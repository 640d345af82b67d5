mod cli;
mod config;
mod convert;
mod events_cmd;
mod feasts_cmd;
mod logging;
mod month_cmd;
mod render;

use std::process;

use anyhow::Result;
use aviv_calendar::Calculator;
use aviv_ephemeris::Ephemeris;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::AvivConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = AvivConfig::load(cli.config.as_deref())?;
    let calc = Calculator::new(Ephemeris::new(), convert::build_calculator_config(&config)?)?;
    let json = cli.json;

    match cli.command {
        Command::Feasts(args) => feasts_cmd::run(args, &calc, json),
        Command::Month(args) => month_cmd::run_month(args, &calc, json),
        Command::Year(args) => month_cmd::run_year(args, &calc, json),
        Command::Equinox(args) => events_cmd::run_equinox(args, &calc, json),
        Command::Phases(args) => events_cmd::run_phases(args, &calc, json),
        Command::Next(args) => events_cmd::run_next(args, &calc, json),
    }
}
