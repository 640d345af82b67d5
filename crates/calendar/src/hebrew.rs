//! Approximate Hebrew month names.
//!
//! The month index is estimated by dividing the days since the Aviv anchor
//! by a 29.5-day mean month and rounding. This is a best-effort label for
//! display, not a lunar-calendar month count: months 12 and 13 and the
//! months before Aviv are only roughly placed.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

const MEAN_MONTH_DAYS: f64 = 29.5;

/// A Hebrew month label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HebrewMonth {
    /// Month 1, beginning at the Aviv anchor.
    Nisan,
    /// Month 2.
    Iyar,
    /// Month 3.
    Sivan,
    /// Month 4.
    Tammuz,
    /// Month 5.
    Av,
    /// Month 6.
    Elul,
    /// Month 7, beginning at Yom Teruah.
    Tishrei,
    /// Month 8.
    Cheshvan,
    /// Month 9.
    Kislev,
    /// Month 10.
    Tevet,
    /// Month 11.
    Shevat,
    /// Month 12.
    Adar,
    /// The embolismic thirteenth month.
    AdarII,
    /// A month belonging to the previous ecclesiastical year.
    PriorYear,
}

const MONTHS: [HebrewMonth; 12] = [
    HebrewMonth::Nisan,
    HebrewMonth::Iyar,
    HebrewMonth::Sivan,
    HebrewMonth::Tammuz,
    HebrewMonth::Av,
    HebrewMonth::Elul,
    HebrewMonth::Tishrei,
    HebrewMonth::Cheshvan,
    HebrewMonth::Kislev,
    HebrewMonth::Tevet,
    HebrewMonth::Shevat,
    HebrewMonth::Adar,
];

impl fmt::Display for HebrewMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Nisan => "Nisan (Aviv)",
            Self::Iyar => "Iyar",
            Self::Sivan => "Sivan",
            Self::Tammuz => "Tammuz",
            Self::Av => "Av",
            Self::Elul => "Elul",
            Self::Tishrei => "Tishrei",
            Self::Cheshvan => "Cheshvan",
            Self::Kislev => "Kislev",
            Self::Tevet => "Tevet",
            Self::Shevat => "Shevat",
            Self::Adar => "Adar",
            Self::AdarII => "Adar II",
            Self::PriorYear => "previous year",
        };
        f.write_str(name)
    }
}

/// Labels the month that starts on `celebration`, relative to the Aviv
/// anchor of the same civil year.
///
/// Index -1 and indices of 12 or more map to [`HebrewMonth::AdarII`];
/// earlier negative indices map to [`HebrewMonth::PriorYear`].
pub fn approximate_hebrew_month(celebration: NaiveDate, aviv: NaiveDate) -> HebrewMonth {
    let days = (celebration - aviv).num_days();
    let index = (days as f64 / MEAN_MONTH_DAYS).round() as i64;
    match index {
        -1 => HebrewMonth::AdarII,
        i if i < 0 => HebrewMonth::PriorYear,
        i if i >= 12 => HebrewMonth::AdarII,
        i => MONTHS[i as usize],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn anchor_is_nisan() {
        let aviv = ymd(2025, 3, 30);
        assert_eq!(approximate_hebrew_month(aviv, aviv), HebrewMonth::Nisan);
    }

    #[test]
    fn seventh_month_is_tishrei() {
        let aviv = ymd(2025, 3, 30);
        assert_eq!(
            approximate_hebrew_month(ymd(2025, 9, 23), aviv),
            HebrewMonth::Tishrei
        );
    }

    #[test]
    fn month_before_aviv_is_adar_ii() {
        let aviv = ymd(2025, 3, 30);
        assert_eq!(
            approximate_hebrew_month(ymd(2025, 3, 1), aviv),
            HebrewMonth::AdarII
        );
    }

    #[test]
    fn early_months_are_prior_year() {
        let aviv = ymd(2025, 3, 30);
        assert_eq!(
            approximate_hebrew_month(ymd(2025, 1, 30), aviv),
            HebrewMonth::PriorYear
        );
    }

    #[test]
    fn thirteenth_month_is_adar_ii() {
        let aviv = ymd(2024, 3, 11);
        // About 354 days later: index 12.
        assert_eq!(
            approximate_hebrew_month(ymd(2025, 2, 28), aviv),
            HebrewMonth::AdarII
        );
    }

    #[test]
    fn every_index_in_range() {
        let aviv = ymd(2025, 3, 30);
        for i in 0..12_u64 {
            let d = aviv + chrono::Days::new((i as f64 * MEAN_MONTH_DAYS) as u64);
            assert_eq!(approximate_hebrew_month(d, aviv), MONTHS[i as usize]);
        }
    }
}
