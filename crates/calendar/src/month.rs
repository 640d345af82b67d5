//! Per-month calendar data: celebrations, conjunctions and day marks.

use std::collections::BTreeMap;

use aviv_ephemeris::{Instant, MoonPhase};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::hebrew::{HebrewMonth, approximate_hebrew_month};

/// What a calendar cell shows for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DayMark {
    /// A conjunction happens on this day.
    NewMoon,
    /// First quarter begins on this day.
    FirstQuarter,
    /// Full moon on this day.
    FullMoon,
    /// Last quarter begins on this day.
    LastQuarter,
    /// A new month is observed on this day.
    Celebration,
}

impl From<MoonPhase> for DayMark {
    fn from(phase: MoonPhase) -> Self {
        match phase {
            MoonPhase::NewMoon => Self::NewMoon,
            MoonPhase::FirstQuarter => Self::FirstQuarter,
            MoonPhase::FullMoon => Self::FullMoon,
            MoonPhase::LastQuarter => Self::LastQuarter,
        }
    }
}

/// A new-month celebration and the conjunction it derives from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Celebration {
    /// The observance day.
    pub date: NaiveDate,
    /// The conjunction that produced it.
    pub conjunction: Instant,
}

/// Everything needed to annotate one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthData {
    /// Civil year.
    pub year: i32,
    /// Civil month (1..=12).
    pub month: u32,
    /// Celebrations observed inside this month (0, 1 or rarely 2).
    pub celebrations: Vec<Celebration>,
    /// Every conjunction found in the padded search window, in order.
    pub conjunctions: Vec<Instant>,
    /// Day of month -> phase entered that day, for days of this month only.
    pub phases: BTreeMap<u32, MoonPhase>,
}

impl MonthData {
    pub(crate) fn new(year: i32, month: u32) -> Self {
        Self {
            year,
            month,
            celebrations: Vec::new(),
            conjunctions: Vec::new(),
            phases: BTreeMap::new(),
        }
    }

    /// Returns the celebration dates.
    pub fn celebration_dates(&self) -> Vec<NaiveDate> {
        self.celebrations.iter().map(|c| c.date).collect()
    }

    /// Pairs each celebration with its approximate Hebrew month, counted
    /// from the Aviv anchor `aviv`.
    pub fn named_celebrations(&self, aviv: NaiveDate) -> Vec<(Celebration, HebrewMonth)> {
        self.celebrations
            .iter()
            .map(|&c| (c, approximate_hebrew_month(c.date, aviv)))
            .collect()
    }

    /// Returns the mark to paint on each marked day of the month.
    ///
    /// A celebration takes precedence over a phase on the same day.
    pub fn day_marks(&self) -> BTreeMap<u32, DayMark> {
        let mut marks: BTreeMap<u32, DayMark> = self
            .phases
            .iter()
            .map(|(&day, &phase)| (day, DayMark::from(phase)))
            .collect();
        for c in &self.celebrations {
            marks.insert(c.date.day(), DayMark::Celebration);
        }
        marks
    }

    /// Returns the first conjunction strictly after `instant`, if the
    /// search window holds one.
    pub fn next_conjunction_after(&self, instant: &Instant) -> Option<Instant> {
        self.conjunctions.iter().copied().find(|c| c > instant)
    }
}
