//! The event-search seam and the built-in analytic ephemeris.

use chrono::NaiveDate;
use tracing::trace;

use crate::error::EphemerisError;
use crate::events::{MoonPhase, MoonPhaseEvent, Season, SeasonEvent};
use crate::model::{elongation, sun_longitude};
use crate::search::find_discrete;
use crate::sun::{Site, sunset};
use crate::time::{Instant, ensure_covered, from_julian_day, jde, julian_day, local_midnight};

/// Phase quadrants last about 7.4 days; one sample a day never skips one.
const MOON_STEP_DAYS: f64 = 1.0;

/// Seasons last about 90 days.
const SEASON_STEP_DAYS: f64 = 5.0;

/// Discrete astronomical event search over a time interval.
///
/// Implementations return the instants between `start` and `end` at which
/// the predicate changes value, tagged with the value entered, in chronological
/// order and expressed in local time. An empty or inverted interval yields
/// an empty list.
pub trait EphemerisSearch {
    /// Moon-phase quadrant transitions.
    fn moon_phases(
        &self,
        start: Instant,
        end: Instant,
    ) -> Result<Vec<MoonPhaseEvent>, EphemerisError>;

    /// Solar season boundaries.
    fn seasons(&self, start: Instant, end: Instant) -> Result<Vec<SeasonEvent>, EphemerisError>;

    /// Local sunset at `site` on `date`, or `None` if the Sun does not set.
    fn sunset(&self, date: NaiveDate, site: &Site) -> Result<Option<Instant>, EphemerisError>;
}

impl<E: EphemerisSearch + ?Sized> EphemerisSearch for &E {
    fn moon_phases(
        &self,
        start: Instant,
        end: Instant,
    ) -> Result<Vec<MoonPhaseEvent>, EphemerisError> {
        (**self).moon_phases(start, end)
    }

    fn seasons(&self, start: Instant, end: Instant) -> Result<Vec<SeasonEvent>, EphemerisError> {
        (**self).seasons(start, end)
    }

    fn sunset(&self, date: NaiveDate, site: &Site) -> Result<Option<Instant>, EphemerisError> {
        (**self).sunset(date, site)
    }
}

/// Analytic Sun/Moon model covering 1900..=2050.
///
/// Stateless; construct once and share freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ephemeris;

impl Ephemeris {
    /// Creates the analytic ephemeris.
    pub fn new() -> Self {
        Self
    }
}

fn moon_quadrant(jd_ut: f64) -> u8 {
    (elongation(jde(jd_ut)) / 90.0) as u8 % 4
}

fn season_quadrant(jd_ut: f64) -> u8 {
    (sun_longitude(jde(jd_ut)) / 90.0) as u8 % 4
}

fn covered_interval(start: &Instant, end: &Instant) -> Result<(f64, f64), EphemerisError> {
    ensure_covered(start)?;
    ensure_covered(end)?;
    Ok((julian_day(start), julian_day(end)))
}

impl EphemerisSearch for Ephemeris {
    fn moon_phases(
        &self,
        start: Instant,
        end: Instant,
    ) -> Result<Vec<MoonPhaseEvent>, EphemerisError> {
        if end <= start {
            return Ok(Vec::new());
        }
        let (t0, t1) = covered_interval(&start, &end)?;
        let events = find_discrete(t0, t1, MOON_STEP_DAYS, moon_quadrant)?;
        trace!(%start, %end, n_events = events.len(), "moon phase search");
        events
            .into_iter()
            .map(|(jd, q)| {
                Ok(MoonPhaseEvent {
                    instant: from_julian_day(jd)?,
                    phase: MoonPhase::from_quadrant(q),
                })
            })
            .collect()
    }

    fn seasons(&self, start: Instant, end: Instant) -> Result<Vec<SeasonEvent>, EphemerisError> {
        if end <= start {
            return Ok(Vec::new());
        }
        let (t0, t1) = covered_interval(&start, &end)?;
        let events = find_discrete(t0, t1, SEASON_STEP_DAYS, season_quadrant)?;
        trace!(%start, %end, n_events = events.len(), "season search");
        events
            .into_iter()
            .map(|(jd, q)| {
                Ok(SeasonEvent {
                    instant: from_julian_day(jd)?,
                    season: Season::from_quadrant(q),
                })
            })
            .collect()
    }

    fn sunset(&self, date: NaiveDate, site: &Site) -> Result<Option<Instant>, EphemerisError> {
        ensure_covered(&local_midnight(date))?;
        sunset(date, site)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::local_datetime;

    #[test]
    fn four_phases_per_month() {
        let start = local_datetime(2025, 1, 1, 0, 0).unwrap();
        let end = local_datetime(2025, 1, 31, 0, 0).unwrap();
        let events = Ephemeris::new().moon_phases(start, end).unwrap();
        assert!((4..=5).contains(&events.len()));
        assert!(events.windows(2).all(|w| w[0].instant < w[1].instant));
        // Phases advance one quadrant at a time.
        for w in events.windows(2) {
            assert_eq!((w[0].phase.quadrant() + 1) % 4, w[1].phase.quadrant());
        }
    }

    #[test]
    fn four_seasons_per_year() {
        let start = local_datetime(2030, 1, 1, 0, 0).unwrap();
        let end = local_datetime(2031, 1, 1, 0, 0).unwrap();
        let seasons: Vec<Season> = Ephemeris::new()
            .seasons(start, end)
            .unwrap()
            .into_iter()
            .map(|e| e.season)
            .collect();
        assert_eq!(
            seasons,
            vec![
                Season::MarchEquinox,
                Season::JuneSolstice,
                Season::SeptemberEquinox,
                Season::DecemberSolstice,
            ]
        );
    }

    #[test]
    fn inverted_interval_is_empty() {
        let a = local_datetime(2025, 3, 1, 0, 0).unwrap();
        let b = local_datetime(2025, 2, 1, 0, 0).unwrap();
        assert!(Ephemeris::new().moon_phases(a, b).unwrap().is_empty());
        assert!(Ephemeris::new().seasons(a, a).unwrap().is_empty());
    }

    #[test]
    fn out_of_range_names_year() {
        let start = local_datetime(2051, 3, 1, 0, 0).unwrap();
        let end = local_datetime(2051, 4, 1, 0, 0).unwrap();
        assert_eq!(
            Ephemeris::new().moon_phases(start, end).unwrap_err(),
            EphemerisError::OutOfRange { year: 2051 }
        );
        let date = NaiveDate::from_ymd_opt(1899, 6, 1).unwrap();
        assert_eq!(
            Ephemeris::new().sunset(date, &Site::SAN_SALVADOR).unwrap_err(),
            EphemerisError::OutOfRange { year: 1899 }
        );
    }

    #[test]
    fn reference_through_borrow() {
        fn count<E: EphemerisSearch>(eph: E) -> usize {
            let start = local_datetime(2025, 1, 1, 0, 0).unwrap();
            let end = local_datetime(2025, 1, 15, 0, 0).unwrap();
            eph.moon_phases(start, end).unwrap().len()
        }
        let eph = Ephemeris::new();
        assert_eq!(count(&eph), count(eph));
    }
}
