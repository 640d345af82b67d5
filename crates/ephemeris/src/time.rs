//! Local clock, Julian days and the TT−UT correction.
//!
//! Every instant handed out by this crate carries the fixed El Salvador
//! offset (UTC−6, no daylight saving). Internally the models work on Julian
//! days: UT for the civil clock and TT (`jde`) for the orbital series.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveTime};

use crate::error::EphemerisError;

/// A timezone-aware point in time, always expressed in the local offset.
pub type Instant = DateTime<FixedOffset>;

/// First calendar year covered by the built-in model.
pub const FIRST_COVERED_YEAR: i32 = 1900;

/// Last calendar year covered by the built-in model.
pub const LAST_COVERED_YEAR: i32 = 2050;

/// America/El_Salvador: six hours west of Greenwich all year round.
const UTC_OFFSET_SECONDS: i32 = -6 * 3600;

const UNIX_EPOCH_JD: f64 = 2_440_587.5;
const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian day of J2000.0.
pub(crate) const J2000: f64 = 2_451_545.0;

/// Returns the fixed local offset (UTC−6).
pub fn local_offset() -> FixedOffset {
    FixedOffset::east_opt(UTC_OFFSET_SECONDS).expect("UTC-6 is a valid offset")
}

/// Returns local midnight at the start of `date`.
pub fn local_midnight(date: NaiveDate) -> Instant {
    date.and_time(NaiveTime::MIN)
        .and_local_timezone(local_offset())
        .single()
        .expect("a fixed offset maps every local time exactly once")
}

/// Builds a local instant from calendar fields.
///
/// Returns `None` when the fields do not form a valid date and time.
pub fn local_datetime(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Option<Instant> {
    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let time = NaiveTime::from_hms_opt(hour, minute, 0)?;
    date.and_time(time)
        .and_local_timezone(local_offset())
        .single()
}

/// Returns the local calendar date of `instant`.
pub fn local_date(instant: &Instant) -> NaiveDate {
    instant.with_timezone(&local_offset()).date_naive()
}

/// Checks that the local year of `instant` lies within the modelled span.
pub fn ensure_covered(instant: &Instant) -> Result<(), EphemerisError> {
    let year = local_date(instant).year();
    if (FIRST_COVERED_YEAR..=LAST_COVERED_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(EphemerisError::OutOfRange { year })
    }
}

/// Converts an instant to a Julian day on the UT scale.
pub(crate) fn julian_day(instant: &Instant) -> f64 {
    instant.timestamp_millis() as f64 / 1000.0 / SECONDS_PER_DAY + UNIX_EPOCH_JD
}

/// Converts a UT Julian day back to a local instant, rounded to the second.
pub(crate) fn from_julian_day(jd: f64) -> Result<Instant, EphemerisError> {
    let seconds = ((jd - UNIX_EPOCH_JD) * SECONDS_PER_DAY).round();
    if !seconds.is_finite() {
        return Err(EphemerisError::InvalidJulianDay { jd });
    }
    DateTime::from_timestamp(seconds as i64, 0)
        .map(|utc| utc.with_timezone(&local_offset()))
        .ok_or(EphemerisError::InvalidJulianDay { jd })
}

/// Converts a UT Julian day to the TT scale used by the orbital series.
pub(crate) fn jde(jd_ut: f64) -> f64 {
    jd_ut + delta_t(jd_ut) / SECONDS_PER_DAY
}

/// TT − UT in seconds (Espenak & Meeus polynomial fits).
pub(crate) fn delta_t(jd_ut: f64) -> f64 {
    let y = 2000.0 + (jd_ut - J2000) / 365.25;
    if y < 1920.0 {
        let t = y - 1900.0;
        -2.79 + 1.494_119 * t - 0.059_893_9 * t.powi(2) + 0.006_196_6 * t.powi(3)
            - 0.000_197 * t.powi(4)
    } else if y < 1941.0 {
        let t = y - 1920.0;
        21.20 + 0.844_93 * t - 0.076_100 * t.powi(2) + 0.002_093_6 * t.powi(3)
    } else if y < 1961.0 {
        let t = y - 1950.0;
        29.07 + 0.407 * t - t.powi(2) / 233.0 + t.powi(3) / 2547.0
    } else if y < 1986.0 {
        let t = y - 1975.0;
        45.45 + 1.067 * t - t.powi(2) / 260.0 - t.powi(3) / 718.0
    } else if y < 2005.0 {
        let t = y - 2000.0;
        63.86 + 0.3345 * t - 0.060_374 * t.powi(2)
            + 0.001_727_5 * t.powi(3)
            + 0.000_651_814 * t.powi(4)
            + 0.000_023_735_99 * t.powi(5)
    } else {
        let t = y - 2000.0;
        62.92 + 0.322_17 * t + 0.005_589 * t.powi(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use chrono::Timelike;

    #[test]
    fn offset_is_six_hours_west() {
        assert_eq!(local_offset().local_minus_utc(), -21_600);
    }

    #[test]
    fn midnight_is_six_utc() {
        let m = local_midnight(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
        assert_eq!(m.naive_utc().hour(), 6);
        assert_eq!(m.hour(), 0);
    }

    #[test]
    fn local_datetime_rejects_bad_fields() {
        assert!(local_datetime(2025, 2, 30, 0, 0).is_none());
        assert!(local_datetime(2025, 3, 1, 24, 0).is_none());
        assert!(local_datetime(2025, 3, 1, 23, 59).is_some());
    }

    #[test]
    fn j2000_round_trip() {
        // J2000.0 is 2000-01-01 12:00 UTC, i.e. 06:00 local.
        let t = local_datetime(2000, 1, 1, 6, 0).unwrap();
        assert_abs_diff_eq!(julian_day(&t), J2000, epsilon = 1e-9);
        assert_eq!(from_julian_day(J2000).unwrap(), t);
    }

    #[test]
    fn local_date_uses_local_clock() {
        // 03:00 UTC on the 2nd is still the 1st in El Salvador.
        let t = from_julian_day(J2000 + 0.625).unwrap();
        assert_eq!(local_date(&t), NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
    }

    #[test]
    fn delta_t_plausible() {
        assert_abs_diff_eq!(delta_t(J2000), 63.86, epsilon = 0.1);
        // Roughly 69 s around 2020.
        let jd_2020 = J2000 + 20.0 * 365.25;
        assert_abs_diff_eq!(delta_t(jd_2020), 71.6, epsilon = 3.0);
    }

    #[test]
    fn coverage_bounds() {
        let inside = local_datetime(2050, 12, 31, 23, 0).unwrap();
        let outside = local_datetime(2051, 1, 1, 0, 0).unwrap();
        assert!(ensure_covered(&inside).is_ok());
        assert_eq!(
            ensure_covered(&outside).unwrap_err(),
            EphemerisError::OutOfRange { year: 2051 }
        );
    }
}
