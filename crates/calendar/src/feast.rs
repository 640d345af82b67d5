//! Feast dates as fixed day offsets from the month-1 and month-7 anchors.

use std::fmt;

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::error::CalendarError;
use crate::sequence::date_sequence;

/// Days from the Aviv anchor to the 13th of the month.
pub const NISAN13_OFFSET: u64 = 12;
/// Days from the Aviv anchor to the first Day of Unleavened Bread.
pub const UNLEAVENED_START_OFFSET: u64 = 14;
/// Days from the Aviv anchor to the last Day of Unleavened Bread.
pub const UNLEAVENED_END_OFFSET: u64 = 20;
/// Days from the Aviv anchor to day 1 of the Omer.
pub const OMER_START_OFFSET: u64 = 15;
/// Length of the Omer count.
pub const OMER_DAYS: u32 = 50;
/// Days from the month-7 anchor to the Day of Atonement.
pub const YOM_KIPPUR_OFFSET: u64 = 9;
/// Days from the month-7 anchor to the first day of Sukkot.
pub const SUKKOT_START_OFFSET: u64 = 14;
/// Days from the month-7 anchor to the last day of Sukkot.
pub const SUKKOT_END_OFFSET: u64 = 21;

/// A named observance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Feast {
    /// Day 1 of month 1.
    Aviv,
    /// The 13th of month 1.
    Nisan13,
    /// First Day of Unleavened Bread.
    UnleavenedStart,
    /// Last Day of Unleavened Bread.
    UnleavenedEnd,
    /// Day 1 of the Omer count.
    OmerStart,
    /// Day 50 of the Omer count.
    Shavuot,
    /// Day 1 of month 7.
    YomTeruah,
    /// The 10th of month 7.
    YomKippur,
    /// First day of Sukkot.
    SukkotStart,
    /// Last day of Sukkot.
    SukkotEnd,
}

impl fmt::Display for Feast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Aviv => "Aviv 1",
            Self::Nisan13 => "13 Nisan",
            Self::UnleavenedStart => "Unleavened Bread (first day)",
            Self::UnleavenedEnd => "Unleavened Bread (last day)",
            Self::OmerStart => "Omer day 1",
            Self::Shavuot => "Shavuot (Omer day 50)",
            Self::YomTeruah => "Yom Teruah",
            Self::YomKippur => "Yom Kippur",
            Self::SukkotStart => "Sukkot (first day)",
            Self::SukkotEnd => "Sukkot (last day)",
        };
        f.write_str(name)
    }
}

/// Every feast date of one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeastSet {
    /// Civil year the set belongs to.
    pub year: i32,
    /// Aviv anchor (day 1 of month 1).
    pub aviv: NaiveDate,
    /// Anchor + 12 days.
    pub nisan13: NaiveDate,
    /// Anchor + 14 days.
    pub unleavened_start: NaiveDate,
    /// Anchor + 20 days.
    pub unleavened_end: NaiveDate,
    /// Anchor + 15 days.
    pub omer_start: NaiveDate,
    /// Omer day 50.
    pub shavuot: NaiveDate,
    /// Month-7 anchor (day 1 of month 7).
    pub month7: NaiveDate,
    /// Month-7 anchor + 9 days.
    pub yom_kippur: NaiveDate,
    /// Month-7 anchor + 14 days.
    pub sukkot_start: NaiveDate,
    /// Month-7 anchor + 21 days.
    pub sukkot_end: NaiveDate,
}

impl FeastSet {
    /// Derives every feast date from the two anchors.
    pub fn from_anchors(year: i32, aviv: NaiveDate, month7: NaiveDate) -> Self {
        let omer_start = aviv + Days::new(OMER_START_OFFSET);
        Self {
            year,
            aviv,
            nisan13: aviv + Days::new(NISAN13_OFFSET),
            unleavened_start: aviv + Days::new(UNLEAVENED_START_OFFSET),
            unleavened_end: aviv + Days::new(UNLEAVENED_END_OFFSET),
            omer_start,
            shavuot: omer_start + Days::new(u64::from(OMER_DAYS - 1)),
            month7,
            yom_kippur: month7 + Days::new(YOM_KIPPUR_OFFSET),
            sukkot_start: month7 + Days::new(SUKKOT_START_OFFSET),
            sukkot_end: month7 + Days::new(SUKKOT_END_OFFSET),
        }
    }

    /// Returns the date of Omer day `day` (1..=50).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidOmerDay`] for days outside 1..=50.
    pub fn omer_day(&self, day: u32) -> Result<NaiveDate, CalendarError> {
        if !(1..=OMER_DAYS).contains(&day) {
            return Err(CalendarError::InvalidOmerDay { day });
        }
        Ok(self.omer_start + Days::new(u64::from(day - 1)))
    }

    /// Returns all 50 dates of the Omer count.
    pub fn omer_days(&self) -> Vec<NaiveDate> {
        date_sequence(self.omer_start, OMER_DAYS as usize)
    }

    /// Returns every named feast in chronological order.
    pub fn entries(&self) -> Vec<(Feast, NaiveDate)> {
        vec![
            (Feast::Aviv, self.aviv),
            (Feast::Nisan13, self.nisan13),
            (Feast::UnleavenedStart, self.unleavened_start),
            (Feast::OmerStart, self.omer_start),
            (Feast::UnleavenedEnd, self.unleavened_end),
            (Feast::Shavuot, self.shavuot),
            (Feast::YomTeruah, self.month7),
            (Feast::YomKippur, self.yom_kippur),
            (Feast::SukkotStart, self.sukkot_start),
            (Feast::SukkotEnd, self.sukkot_end),
        ]
    }

    /// Returns the feasts that fall on `date`.
    pub fn on(&self, date: NaiveDate) -> Vec<Feast> {
        self.entries()
            .into_iter()
            .filter(|&(_, d)| d == date)
            .map(|(f, _)| f)
            .collect()
    }
}
