//! Month and year commands: new-month celebrations with their conjunctions.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use anyhow::{Context, Result};
use aviv_calendar::{Calculator, DayMark, HebrewMonth, MonthData};
use aviv_ephemeris::{EphemerisSearch, Instant, MoonPhase};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::{info, info_span};

use crate::cli::{MonthArgs, YearArgs};
use crate::render;

/// A celebration with its approximate Hebrew month.
#[derive(Debug, Serialize)]
struct NamedCelebration {
    date: NaiveDate,
    conjunction: Instant,
    hebrew_month: HebrewMonth,
}

#[derive(Debug, Serialize)]
struct MonthReport {
    year: i32,
    month: u32,
    celebrations: Vec<NamedCelebration>,
    conjunctions: Vec<Instant>,
    phases: BTreeMap<u32, MoonPhase>,
    day_marks: BTreeMap<u32, DayMark>,
}

impl MonthReport {
    fn new(data: MonthData, aviv: NaiveDate) -> Self {
        let day_marks = data.day_marks();
        let celebrations = data
            .named_celebrations(aviv)
            .into_iter()
            .map(|(c, hebrew_month)| NamedCelebration {
                date: c.date,
                conjunction: c.conjunction,
                hebrew_month,
            })
            .collect();
        Self {
            year: data.year,
            month: data.month,
            celebrations,
            conjunctions: data.conjunctions,
            phases: data.phases,
            day_marks,
        }
    }
}

/// Run the month command.
pub fn run_month<E: EphemerisSearch>(
    args: MonthArgs,
    calc: &Calculator<E>,
    json: bool,
) -> Result<()> {
    let _cmd = info_span!("month").entered();
    let year = render::year_or_current(args.year);

    let data = calc
        .celebrations_in_month(year, args.month)
        .with_context(|| format!("failed to compute {year}-{:02}", args.month))?;
    let aviv = calc
        .find_aviv_anchor(year)
        .with_context(|| format!("failed to find the Aviv anchor of {year}"))?;
    info!(
        year,
        month = args.month,
        n_celebrations = data.celebrations.len(),
        "month computed"
    );

    let report = MonthReport::new(data, aviv);
    render::emit(json, &report, || month_text(&report))
}

/// Run the year command.
pub fn run_year<E: EphemerisSearch>(
    args: YearArgs,
    calc: &Calculator<E>,
    json: bool,
) -> Result<()> {
    let _cmd = info_span!("year").entered();
    let year = render::year_or_current(args.year);

    let months = calc
        .celebrations_in_year(year)
        .with_context(|| format!("failed to compute celebrations for {year}"))?;
    let aviv = calc
        .find_aviv_anchor(year)
        .with_context(|| format!("failed to find the Aviv anchor of {year}"))?;
    let reports: Vec<MonthReport> = months
        .into_iter()
        .map(|m| MonthReport::new(m, aviv))
        .collect();
    info!(year, %aviv, "year computed");

    render::emit(json, &reports, || year_text(year, &reports))
}

fn celebration_line(out: &mut String, c: &NamedCelebration) {
    let _ = writeln!(
        out,
        "  {}  {:<14} conjunction {}",
        c.date,
        c.hebrew_month.to_string(),
        render::instant(&c.conjunction)
    );
}

fn month_text(report: &MonthReport) -> String {
    let mut out = format!("{} {}\n", render::month_name(report.month), report.year);
    if report.celebrations.is_empty() {
        out.push_str("  no new-month celebration\n");
    }
    for c in &report.celebrations {
        celebration_line(&mut out, c);
    }
    for (day, phase) in &report.phases {
        let _ = writeln!(out, "  {day:>2}  {phase}");
    }
    out
}

fn year_text(year: i32, reports: &[MonthReport]) -> String {
    let mut out = format!("Celebrations {year}\n");
    for c in reports.iter().flat_map(|r| &r.celebrations) {
        celebration_line(&mut out, c);
    }
    out
}
