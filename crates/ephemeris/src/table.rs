//! Table-driven event source for synthetic scenarios.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::error::EphemerisError;
use crate::events::{MoonPhase, MoonPhaseEvent, Season, SeasonEvent};
use crate::oracle::EphemerisSearch;
use crate::sun::Site;
use crate::time::{Instant, local_date};

/// An [`EphemerisSearch`] that replays pre-recorded events.
///
/// Queries return the recorded events inside the half-open interval
/// `[start, end)`, sorted by instant. Sunsets are looked up by local date
/// and ignore the site.
///
/// # Example
///
/// ```
/// use aviv_ephemeris::{EphemerisSearch, EventTable, local_datetime};
///
/// let table = EventTable::new()
///     .with_new_moon(local_datetime(2025, 3, 29, 14, 0).unwrap())
///     .with_march_equinox(local_datetime(2025, 3, 20, 3, 0).unwrap());
///
/// let start = local_datetime(2025, 3, 1, 0, 0).unwrap();
/// let end = local_datetime(2025, 5, 1, 0, 0).unwrap();
/// assert_eq!(table.moon_phases(start, end).unwrap().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EventTable {
    phases: Vec<MoonPhaseEvent>,
    seasons: Vec<SeasonEvent>,
    sunsets: BTreeMap<NaiveDate, Instant>,
}

impl EventTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a moon-phase transition.
    pub fn with_phase(mut self, instant: Instant, phase: MoonPhase) -> Self {
        self.phases.push(MoonPhaseEvent { instant, phase });
        self.phases.sort_by_key(|e| e.instant);
        self
    }

    /// Records a conjunction.
    pub fn with_new_moon(self, instant: Instant) -> Self {
        self.with_phase(instant, MoonPhase::NewMoon)
    }

    /// Records a season boundary.
    pub fn with_season(mut self, instant: Instant, season: Season) -> Self {
        self.seasons.push(SeasonEvent { instant, season });
        self.seasons.sort_by_key(|e| e.instant);
        self
    }

    /// Records a March equinox.
    pub fn with_march_equinox(self, instant: Instant) -> Self {
        self.with_season(instant, Season::MarchEquinox)
    }

    /// Records the sunset of the local date of `instant`.
    pub fn with_sunset(mut self, instant: Instant) -> Self {
        self.sunsets.insert(local_date(&instant), instant);
        self
    }
}

impl EphemerisSearch for EventTable {
    fn moon_phases(
        &self,
        start: Instant,
        end: Instant,
    ) -> Result<Vec<MoonPhaseEvent>, EphemerisError> {
        Ok(self
            .phases
            .iter()
            .filter(|e| e.instant >= start && e.instant < end)
            .copied()
            .collect())
    }

    fn seasons(&self, start: Instant, end: Instant) -> Result<Vec<SeasonEvent>, EphemerisError> {
        Ok(self
            .seasons
            .iter()
            .filter(|e| e.instant >= start && e.instant < end)
            .copied()
            .collect())
    }

    fn sunset(&self, date: NaiveDate, _site: &Site) -> Result<Option<Instant>, EphemerisError> {
        Ok(self.sunsets.get(&date).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::local_datetime;

    #[test]
    fn events_sorted_and_filtered() {
        let late = local_datetime(2025, 4, 27, 13, 0).unwrap();
        let early = local_datetime(2025, 3, 29, 4, 0).unwrap();
        let table = EventTable::new()
            .with_new_moon(late)
            .with_phase(early, MoonPhase::FullMoon);

        let all = table
            .moon_phases(
                local_datetime(2025, 1, 1, 0, 0).unwrap(),
                local_datetime(2026, 1, 1, 0, 0).unwrap(),
            )
            .unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].instant, early);

        // End bound is exclusive.
        let none = table.moon_phases(early - chrono::Duration::days(1), early).unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn sunset_lookup_by_date() {
        let s = local_datetime(2025, 3, 29, 17, 58).unwrap();
        let table = EventTable::new().with_sunset(s);
        let date = NaiveDate::from_ymd_opt(2025, 3, 29).unwrap();
        assert_eq!(table.sunset(date, &Site::SAN_SALVADOR).unwrap(), Some(s));
        assert_eq!(
            table
                .sunset(date.succ_opt().unwrap(), &Site::SAN_SALVADOR)
                .unwrap(),
            None
        );
    }

    #[test]
    fn empty_table() {
        let t = local_datetime(2025, 3, 1, 0, 0).unwrap();
        let table = EventTable::new();
        assert!(table.seasons(t, t + chrono::Duration::days(31)).unwrap().is_empty());
    }
}
