//! Observance-day rule: from a conjunction instant to the civil day on which
//! the new month is observed.

use aviv_ephemeris::{EphemerisSearch, Instant, Site, local_offset};
use chrono::{Days, NaiveDate, Timelike};
use serde::Serialize;
use tracing::warn;

use crate::error::CalendarError;

/// The local clock hour used by the fixed-cutoff rule.
pub const DEFAULT_CUTOFF_HOUR: u32 = 18;

/// How late in the local day a conjunction may fall and still be observed
/// the following day.
///
/// A conjunction before the cutoff is observed one day after its local date;
/// a conjunction at or after the cutoff slips to two days after.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum ObservanceRule {
    /// Fixed local clock hour. `18` means 17:59 is early and 18:00 is late.
    FixedCutoff {
        /// Cutoff hour (0..=23).
        hour: u32,
    },
    /// Computed local sunset at an observation site.
    ///
    /// If the Sun does not set on the conjunction's date the fixed
    /// [`DEFAULT_CUTOFF_HOUR`] is used instead.
    Sunset {
        /// Where the sunset is observed.
        site: Site,
    },
}

impl Default for ObservanceRule {
    fn default() -> Self {
        Self::FixedCutoff {
            hour: DEFAULT_CUTOFF_HOUR,
        }
    }
}

/// Returns the observance day for `conjunction` under `rule`.
///
/// # Errors
///
/// Propagates ephemeris errors from the sunset lookup.
pub fn observance_day<E: EphemerisSearch>(
    conjunction: &Instant,
    rule: &ObservanceRule,
    ephemeris: &E,
) -> Result<NaiveDate, CalendarError> {
    let local = conjunction.with_timezone(&local_offset());
    let date = local.date_naive();

    let before_cutoff = match rule {
        ObservanceRule::FixedCutoff { hour } => local.hour() < *hour,
        ObservanceRule::Sunset { site } => match ephemeris.sunset(date, site)? {
            Some(sunset) => local < sunset,
            None => {
                warn!(%date, "no sunset on conjunction date; using fixed cutoff");
                local.hour() < DEFAULT_CUTOFF_HOUR
            }
        },
    };

    let offset = if before_cutoff { 1 } else { 2 };
    Ok(date + Days::new(offset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use aviv_ephemeris::{EventTable, local_datetime};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn fixed(conjunction: Instant) -> NaiveDate {
        observance_day(&conjunction, &ObservanceRule::default(), &EventTable::new()).unwrap()
    }

    #[test]
    fn before_cutoff_is_next_day() {
        let t = local_datetime(2025, 3, 29, 14, 0).unwrap();
        assert_eq!(fixed(t), ymd(2025, 3, 30));
    }

    #[test]
    fn after_cutoff_is_two_days() {
        let t = local_datetime(2025, 3, 29, 20, 0).unwrap();
        assert_eq!(fixed(t), ymd(2025, 3, 31));
    }

    #[test]
    fn boundary_is_inclusive_of_cutoff() {
        let early = local_datetime(2025, 3, 29, 17, 59).unwrap();
        let exact = local_datetime(2025, 3, 29, 18, 0).unwrap();
        assert_eq!(fixed(early), ymd(2025, 3, 30));
        assert_eq!(fixed(exact), ymd(2025, 3, 31));
    }

    #[test]
    fn uses_local_clock_not_utc() {
        // 01:00 UTC on the 30th is 19:00 local on the 29th.
        let utc = chrono::DateTime::parse_from_rfc3339("2025-03-30T01:00:00Z").unwrap();
        assert_eq!(fixed(utc), ymd(2025, 3, 31));
    }

    #[test]
    fn month_and_year_rollover() {
        let t = local_datetime(2025, 12, 31, 19, 0).unwrap();
        assert_eq!(fixed(t), ymd(2026, 1, 2));
    }

    #[test]
    fn custom_cutoff_hour() {
        let t = local_datetime(2025, 3, 29, 17, 0).unwrap();
        let rule = ObservanceRule::FixedCutoff { hour: 17 };
        assert_eq!(
            observance_day(&t, &rule, &EventTable::new()).unwrap(),
            ymd(2025, 3, 31)
        );
    }

    #[test]
    fn sunset_rule_uses_sunset() {
        let sunset = local_datetime(2025, 3, 29, 17, 45).unwrap();
        let eph = EventTable::new().with_sunset(sunset);
        let rule = ObservanceRule::Sunset {
            site: Site::SAN_SALVADOR,
        };

        // 17:50 is before the fixed cutoff but after this sunset.
        let t = local_datetime(2025, 3, 29, 17, 50).unwrap();
        assert_eq!(observance_day(&t, &rule, &eph).unwrap(), ymd(2025, 3, 31));

        let t = local_datetime(2025, 3, 29, 17, 40).unwrap();
        assert_eq!(observance_day(&t, &rule, &eph).unwrap(), ymd(2025, 3, 30));
    }

    #[test]
    fn sunset_rule_falls_back_without_sunset() {
        let rule = ObservanceRule::Sunset {
            site: Site::SAN_SALVADOR,
        };
        let t = local_datetime(2025, 3, 29, 17, 50).unwrap();
        assert_eq!(
            observance_day(&t, &rule, &EventTable::new()).unwrap(),
            ymd(2025, 3, 30)
        );
    }
}
