//! Feasts command: every feast date of one year.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use aviv_calendar::{Calculator, FeastSet};
use aviv_ephemeris::EphemerisSearch;
use tracing::{info, info_span};

use crate::cli::YearArgs;
use crate::render;

/// Run the feasts command.
pub fn run<E: EphemerisSearch>(args: YearArgs, calc: &Calculator<E>, json: bool) -> Result<()> {
    let _cmd = info_span!("feasts").entered();
    let year = render::year_or_current(args.year);

    let feasts = calc
        .feast_dates(year)
        .with_context(|| format!("failed to compute feasts for {year}"))?;
    info!(year, aviv = %feasts.aviv, month7 = %feasts.month7, "feasts computed");

    render::emit(json, &feasts, || feasts_text(&feasts))
}

fn feasts_text(feasts: &FeastSet) -> String {
    let mut out = format!("Feasts {}\n", feasts.year);
    for (feast, date) in feasts.entries() {
        let _ = writeln!(out, "  {date}  {} {feast}", date.format("%a"));
    }
    out
}
