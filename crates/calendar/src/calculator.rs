//! The liturgical calendar calculator.

use aviv_ephemeris::{
    EphemerisSearch, Instant, MoonPhase, MoonPhaseEvent, Season, local_date, local_midnight,
};
use chrono::{Datelike, Days, Duration, NaiveDate};
use tracing::{debug, warn};

use crate::config::CalculatorConfig;
use crate::error::CalendarError;
use crate::feast::{FeastSet, NISAN13_OFFSET};
use crate::hebrew::HebrewMonth;
use crate::month::{Celebration, MonthData};
use crate::observance::observance_day;

/// Day of March used when the equinox search comes back empty.
const EQUINOX_FALLBACK_DAY: u32 = 20;

/// A conjunction is always found within this many days of any instant.
const NEXT_CONJUNCTION_SEARCH_DAYS: i64 = 32;

/// Computes conjunction-anchored dates for calendar annotation.
///
/// Every operation is a pure function of its arguments, the configuration
/// and the ephemeris; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct Calculator<E> {
    ephemeris: E,
    config: CalculatorConfig,
}

fn ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate, CalendarError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(CalendarError::InvalidYear { year })
}

fn add_days(date: NaiveDate, days: u32, year: i32) -> Result<NaiveDate, CalendarError> {
    date.checked_add_days(Days::new(u64::from(days)))
        .ok_or(CalendarError::InvalidYear { year })
}

fn sub_days(date: NaiveDate, days: u32, year: i32) -> Result<NaiveDate, CalendarError> {
    date.checked_sub_days(Days::new(u64::from(days)))
        .ok_or(CalendarError::InvalidYear { year })
}

impl<E: EphemerisSearch> Calculator<E> {
    /// Creates a calculator after validating `config`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidConfig`] if the configuration does
    /// not validate.
    pub fn new(ephemeris: E, config: CalculatorConfig) -> Result<Self, CalendarError> {
        config.validate()?;
        Ok(Self { ephemeris, config })
    }

    /// Creates a calculator with the default configuration.
    pub fn with_defaults(ephemeris: E) -> Self {
        Self {
            ephemeris,
            config: CalculatorConfig::default(),
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Returns the moon-phase transitions between `start` and `end`, in
    /// chronological order and local time.
    ///
    /// An empty or inverted interval yields an empty list.
    pub fn find_moon_phases(
        &self,
        start: Instant,
        end: Instant,
    ) -> Result<Vec<MoonPhaseEvent>, CalendarError> {
        if end <= start {
            debug!(%start, %end, "empty interval");
            return Ok(Vec::new());
        }
        let mut events = self.ephemeris.moon_phases(start, end)?;
        events.sort_by_key(|e| e.instant);
        Ok(events)
    }

    fn new_moons(&self, start: Instant, end: Instant) -> Result<Vec<Instant>, CalendarError> {
        Ok(self
            .find_moon_phases(start, end)?
            .into_iter()
            .filter(|e| e.phase == MoonPhase::NewMoon)
            .map(|e| e.instant)
            .collect())
    }

    /// Applies the configured observance-day rule to a conjunction.
    pub fn observance_day(&self, conjunction: &Instant) -> Result<NaiveDate, CalendarError> {
        observance_day(conjunction, self.config.rule(), &self.ephemeris)
    }

    /// Returns the March equinox of `year`.
    ///
    /// Searches March in local time. If the ephemeris reports no equinox
    /// there, falls back to March 20 00:00 local and logs a warning; the
    /// fallback is an approximation.
    ///
    /// The built-in ephemeris places equinoxes within a few minutes, so an
    /// equinox that close to local midnight may land on the neighbouring date.
    #[tracing::instrument(skip(self))]
    pub fn find_equinox(&self, year: i32) -> Result<Instant, CalendarError> {
        let start = local_midnight(ymd(year, 3, 1)?);
        let end = local_midnight(ymd(year, 4, 1)?);
        let equinox = self
            .ephemeris
            .seasons(start, end)?
            .into_iter()
            .find(|e| e.season == Season::MarchEquinox);

        match equinox {
            Some(event) => Ok(event.instant),
            None => {
                let fallback = local_midnight(ymd(year, 3, EQUINOX_FALLBACK_DAY)?);
                warn!(year, %fallback, "no March equinox in search window; using fallback");
                Ok(fallback)
            }
        }
    }

    /// Returns day 1 of Aviv (month 1) for `year`.
    ///
    /// The first new moon after March 1 whose derived 13th falls on or after
    /// the equinox date wins; earlier candidates are skipped (embolismic
    /// correction).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::NoNewMoon`] if no candidate in the search
    /// window qualifies.
    #[tracing::instrument(skip(self))]
    pub fn find_aviv_anchor(&self, year: i32) -> Result<NaiveDate, CalendarError> {
        let equinox = local_date(&self.find_equinox(year)?);
        let (end_month, end_day) = self.config.aviv_window_end();
        let start = local_midnight(ymd(year, 3, 1)?);
        let end = local_midnight(ymd(year, end_month, end_day)?);

        for conjunction in self.new_moons(start, end)? {
            let anchor = self.observance_day(&conjunction)?;
            let nisan13 = anchor + Days::new(NISAN13_OFFSET);
            if nisan13 >= equinox {
                debug!(%conjunction, %anchor, %equinox, "aviv anchor");
                return Ok(anchor);
            }
            debug!(
                %conjunction,
                %nisan13,
                %equinox,
                "13th precedes equinox; trying next new moon"
            );
        }
        Err(CalendarError::NoNewMoon {
            year,
            window: "Aviv",
        })
    }

    fn month7_anchor_from(&self, year: i32, aviv: NaiveDate) -> Result<NaiveDate, CalendarError> {
        let (from, to) = self.config.month7_window_days();
        let start = local_midnight(add_days(aviv, from, year)?);
        let end = local_midnight(add_days(aviv, to, year)?);
        let conjunction = self
            .new_moons(start, end)?
            .into_iter()
            .next()
            .ok_or(CalendarError::NoNewMoon {
                year,
                window: "month 7",
            })?;
        let anchor = self.observance_day(&conjunction)?;
        debug!(%conjunction, %anchor, "month 7 anchor");
        Ok(anchor)
    }

    /// Returns day 1 of month 7 for `year`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::NoNewMoon`] if the window after the Aviv
    /// anchor holds no conjunction.
    #[tracing::instrument(skip(self))]
    pub fn find_month7_anchor(&self, year: i32) -> Result<NaiveDate, CalendarError> {
        let aviv = self.find_aviv_anchor(year)?;
        self.month7_anchor_from(year, aviv)
    }

    /// Returns every feast date of `year`.
    #[tracing::instrument(skip(self))]
    pub fn feast_dates(&self, year: i32) -> Result<FeastSet, CalendarError> {
        let aviv = self.find_aviv_anchor(year)?;
        let month7 = self.month7_anchor_from(year, aviv)?;
        Ok(FeastSet::from_anchors(year, aviv, month7))
    }

    /// Returns the celebrations, conjunctions and phase days of one month.
    ///
    /// The search window is padded on both sides so conjunctions near the
    /// month boundaries are seen; only celebrations and phases falling in
    /// the queried month are kept.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is outside 1..=12.
    #[tracing::instrument(skip(self))]
    pub fn celebrations_in_month(&self, year: i32, month: u32) -> Result<MonthData, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        let first = ymd(year, month, 1)?;
        let (before, after) = self.config.month_padding_days();
        let start = local_midnight(sub_days(first, before, year)?);
        let end = local_midnight(add_days(first, after, year)?);

        let in_month = |d: NaiveDate| d.year() == year && d.month() == month;
        let mut data = MonthData::new(year, month);
        for event in self.find_moon_phases(start, end)? {
            if event.phase == MoonPhase::NewMoon {
                data.conjunctions.push(event.instant);
                let date = self.observance_day(&event.instant)?;
                if in_month(date) {
                    data.celebrations.push(Celebration {
                        date,
                        conjunction: event.instant,
                    });
                }
            }
            let day = local_date(&event.instant);
            if in_month(day) {
                data.phases.insert(day.day(), event.phase);
            }
        }
        debug!(
            n_celebrations = data.celebrations.len(),
            n_conjunctions = data.conjunctions.len(),
            "month computed"
        );
        Ok(data)
    }

    /// Returns the month data of every month of `year`.
    pub fn celebrations_in_year(&self, year: i32) -> Result<Vec<MonthData>, CalendarError> {
        (1..=12)
            .map(|month| self.celebrations_in_month(year, month))
            .collect()
    }

    /// Labels each celebration of a month with its approximate Hebrew month,
    /// relative to the Aviv anchor of `year`.
    pub fn named_celebrations(
        &self,
        year: i32,
        month: u32,
    ) -> Result<Vec<(Celebration, HebrewMonth)>, CalendarError> {
        let data = self.celebrations_in_month(year, month)?;
        let aviv = self.find_aviv_anchor(year)?;
        Ok(data.named_celebrations(aviv))
    }

    /// Returns the first conjunction strictly after `after`.
    pub fn next_conjunction(&self, after: Instant) -> Result<Option<Instant>, CalendarError> {
        let end = after + Duration::days(NEXT_CONJUNCTION_SEARCH_DAYS);
        Ok(self
            .new_moons(after, end)?
            .into_iter()
            .find(|c| *c > after))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aviv_ephemeris::{EventTable, local_datetime};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn calculator_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Calculator<aviv_ephemeris::Ephemeris>>();
        assert_send_sync::<Calculator<EventTable>>();
    }

    #[test]
    fn new_rejects_invalid_config() {
        let config = CalculatorConfig::new().with_month7_window_days(10, 10);
        assert!(Calculator::new(EventTable::new(), config).is_err());
    }

    #[test]
    fn new_rejects_oversized_windows() {
        let padding = CalculatorConfig::new().with_month_padding_days(u32::MAX, 32);
        assert!(matches!(
            Calculator::new(EventTable::new(), padding),
            Err(CalendarError::InvalidConfig { .. })
        ));
        let month7 = CalculatorConfig::new().with_month7_window_days(160, u32::MAX);
        assert!(matches!(
            Calculator::new(EventTable::new(), month7),
            Err(CalendarError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn window_past_last_date_is_an_error() {
        let year = NaiveDate::MAX.year();
        let calc = Calculator::with_defaults(EventTable::new());
        assert_eq!(
            calc.celebrations_in_month(year, 12).unwrap_err(),
            CalendarError::InvalidYear { year }
        );
    }

    #[test]
    fn equinox_fallback() {
        let calc = Calculator::with_defaults(EventTable::new());
        let eq = calc.find_equinox(2025).unwrap();
        assert_eq!(eq, local_datetime(2025, 3, 20, 0, 0).unwrap());
    }

    #[test]
    fn equinox_ignores_other_seasons() {
        let table = EventTable::new().with_season(
            local_datetime(2025, 3, 10, 0, 0).unwrap(),
            Season::JuneSolstice,
        );
        let calc = Calculator::with_defaults(table);
        assert_eq!(
            calc.find_equinox(2025).unwrap(),
            local_datetime(2025, 3, 20, 0, 0).unwrap()
        );
    }

    #[test]
    fn phases_sorted_even_if_source_is_not() {
        struct Reversed(EventTable);
        impl EphemerisSearch for Reversed {
            fn moon_phases(
                &self,
                start: Instant,
                end: Instant,
            ) -> Result<Vec<MoonPhaseEvent>, aviv_ephemeris::EphemerisError> {
                let mut v = self.0.moon_phases(start, end)?;
                v.reverse();
                Ok(v)
            }
            fn seasons(
                &self,
                start: Instant,
                end: Instant,
            ) -> Result<Vec<aviv_ephemeris::SeasonEvent>, aviv_ephemeris::EphemerisError>
            {
                self.0.seasons(start, end)
            }
            fn sunset(
                &self,
                date: NaiveDate,
                site: &aviv_ephemeris::Site,
            ) -> Result<Option<Instant>, aviv_ephemeris::EphemerisError> {
                self.0.sunset(date, site)
            }
        }

        let table = EventTable::new()
            .with_new_moon(local_datetime(2025, 3, 29, 4, 0).unwrap())
            .with_phase(
                local_datetime(2025, 3, 6, 10, 0).unwrap(),
                MoonPhase::FirstQuarter,
            );
        let calc = Calculator::with_defaults(Reversed(table));
        let events = calc
            .find_moon_phases(
                local_datetime(2025, 3, 1, 0, 0).unwrap(),
                local_datetime(2025, 4, 1, 0, 0).unwrap(),
            )
            .unwrap();
        assert_eq!(events[0].phase, MoonPhase::FirstQuarter);
        assert_eq!(events[1].phase, MoonPhase::NewMoon);
    }

    #[test]
    fn month7_needs_a_conjunction() {
        let table = EventTable::new()
            .with_new_moon(local_datetime(2025, 3, 29, 14, 0).unwrap())
            .with_march_equinox(local_datetime(2025, 3, 20, 3, 0).unwrap());
        let calc = Calculator::with_defaults(table);
        assert_eq!(calc.find_aviv_anchor(2025).unwrap(), date(2025, 3, 30));
        assert_eq!(
            calc.find_month7_anchor(2025).unwrap_err(),
            CalendarError::NoNewMoon {
                year: 2025,
                window: "month 7"
            }
        );
    }

    #[test]
    fn next_conjunction_is_strictly_after() {
        let conj = local_datetime(2025, 3, 29, 4, 58).unwrap();
        let later = local_datetime(2025, 4, 27, 13, 31).unwrap();
        let table = EventTable::new().with_new_moon(conj).with_new_moon(later);
        let calc = Calculator::with_defaults(table);
        assert_eq!(calc.next_conjunction(conj).unwrap(), Some(later));
        let before = local_datetime(2025, 3, 20, 0, 0).unwrap();
        assert_eq!(calc.next_conjunction(before).unwrap(), Some(conj));
    }
}
