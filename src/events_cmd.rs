//! Raw astronomical event commands: equinox, moon phases, next conjunction.

use std::fmt::Write as _;

use anyhow::{Context, Result, bail};
use aviv_calendar::Calculator;
use aviv_ephemeris::{EphemerisSearch, Instant, MoonPhaseEvent, local_midnight, local_offset};
use serde_json::json;
use tracing::{info, info_span};

use crate::cli::{NextArgs, PhasesArgs, YearArgs};
use crate::render;

/// Run the equinox command.
pub fn run_equinox<E: EphemerisSearch>(
    args: YearArgs,
    calc: &Calculator<E>,
    json: bool,
) -> Result<()> {
    let _cmd = info_span!("equinox").entered();
    let year = render::year_or_current(args.year);

    let equinox = calc
        .find_equinox(year)
        .with_context(|| format!("failed to find the March equinox of {year}"))?;
    info!(year, %equinox, "equinox found");

    let value = json!({ "year": year, "equinox": equinox });
    render::emit(json, &value, || {
        format!("March equinox {year}: {}\n", render::instant(&equinox))
    })
}

/// Run the phases command.
pub fn run_phases<E: EphemerisSearch>(
    args: PhasesArgs,
    calc: &Calculator<E>,
    json: bool,
) -> Result<()> {
    let _cmd = info_span!("phases").entered();
    if args.to <= args.from {
        bail!("--to ({}) must be after --from ({})", args.to, args.from);
    }

    let events = calc
        .find_moon_phases(local_midnight(args.from), local_midnight(args.to))
        .with_context(|| format!("failed to search {} to {}", args.from, args.to))?;
    info!(n_events = events.len(), "phases found");

    render::emit(json, &events, || phases_text(&events))
}

fn phases_text(events: &[MoonPhaseEvent]) -> String {
    let mut out = String::new();
    for e in events {
        let _ = writeln!(out, "{}  {}", render::instant(&e.instant), e.phase);
    }
    out
}

/// Run the next command.
pub fn run_next<E: EphemerisSearch>(
    args: NextArgs,
    calc: &Calculator<E>,
    json: bool,
) -> Result<()> {
    let _cmd = info_span!("next").entered();
    let after: Instant = match args.after {
        Some(t) => t
            .and_local_timezone(local_offset())
            .single()
            .with_context(|| format!("ambiguous local time: {t}"))?,
        None => render::now(),
    };

    let conjunction = calc
        .next_conjunction(after)
        .with_context(|| format!("failed to search for a conjunction after {after}"))?
        .with_context(|| format!("no conjunction found after {after}"))?;
    let observed = calc.observance_day(&conjunction)?;
    info!(%conjunction, %observed, "next conjunction");

    let value = json!({ "conjunction": conjunction, "observed": observed });
    render::emit(json, &value, || {
        format!(
            "Next conjunction: {}\nObserved:         {observed}\n",
            render::instant(&conjunction)
        )
    })
}
