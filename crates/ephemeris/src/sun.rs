//! Observation site and local sunset.

use chrono::{Duration, NaiveDate, NaiveTime};
use serde::Serialize;

use crate::error::EphemerisError;
use crate::model::{sidereal_time, sun_equatorial};
use crate::search::find_discrete;
use crate::time::{Instant, from_julian_day, jde, julian_day, local_offset};

/// Altitude of the Sun's centre at apparent sunset: refraction plus
/// semi-diameter.
const SUNSET_ALTITUDE_DEG: f64 = -0.833;

/// Altitude samples are taken every 20 minutes.
const SUNSET_STEP_DAYS: f64 = 1.0 / 72.0;

/// A geographic observation site.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Site {
    latitude: f64,
    longitude: f64,
}

impl Site {
    /// San Salvador, El Salvador.
    pub const SAN_SALVADOR: Site = Site {
        latitude: 13.6929,
        longitude: -89.2182,
    };

    /// Creates a site from latitude and longitude in degrees (north and
    /// east positive).
    ///
    /// # Errors
    ///
    /// Returns [`EphemerisError::InvalidSite`] if either coordinate is
    /// non-finite or out of range.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, EphemerisError> {
        let valid = latitude.is_finite()
            && longitude.is_finite()
            && (-90.0..=90.0).contains(&latitude)
            && (-180.0..=180.0).contains(&longitude);
        if !valid {
            return Err(EphemerisError::InvalidSite {
                latitude,
                longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Returns the latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns the longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Altitude of the Sun's centre above the horizon at a UT Julian day,
    /// in degrees (no refraction).
    fn sun_altitude(&self, jd_ut: f64) -> f64 {
        let (ra, dec) = sun_equatorial(jde(jd_ut));
        let hour_angle = (sidereal_time(jd_ut) + self.longitude - ra).to_radians();
        let lat = self.latitude.to_radians();
        let dec = dec.to_radians();
        (lat.sin() * dec.sin() + lat.cos() * dec.cos() * hour_angle.cos())
            .asin()
            .to_degrees()
    }
}

/// Computes the local sunset at `site` on the local calendar `date`.
///
/// Searches the afternoon and evening following local noon for the moment
/// the Sun sinks below the horizon. Returns `None` when the Sun does not set
/// that evening (polar day or night).
pub(crate) fn sunset(date: NaiveDate, site: &Site) -> Result<Option<Instant>, EphemerisError> {
    let noon = date
        .and_time(NaiveTime::from_hms_opt(12, 0, 0).expect("12:00:00 is a valid time"))
        .and_local_timezone(local_offset())
        .single()
        .expect("a fixed offset maps every local time exactly once");
    let start = julian_day(&noon);
    let end = julian_day(&(noon + Duration::hours(12)));

    let above = |jd: f64| u8::from(site.sun_altitude(jd) > SUNSET_ALTITUDE_DEG);
    let crossings = find_discrete(start, end, SUNSET_STEP_DAYS, above)?;
    crossings
        .into_iter()
        .find(|&(_, up)| up == 0)
        .map(|(jd, _)| from_julian_day(jd))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn site_validation() {
        assert!(Site::new(13.7, -89.2).is_ok());
        assert!(Site::new(90.5, 0.0).is_err());
        assert!(Site::new(0.0, -181.0).is_err());
        assert!(Site::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn san_salvador_sunset_is_early_evening() {
        // Close to the equator: sunset stays between 17:15 and 18:45 all year.
        for (m, d) in [(1, 15), (3, 20), (6, 21), (9, 22), (12, 21)] {
            let date = NaiveDate::from_ymd_opt(2025, m, d).unwrap();
            let t = sunset(date, &Site::SAN_SALVADOR).unwrap().unwrap();
            assert_eq!(t.date_naive(), date);
            let minutes = t.hour() * 60 + t.minute();
            assert!(
                (17 * 60 + 15..=18 * 60 + 45).contains(&minutes),
                "sunset on {date} at {t}"
            );
        }
    }

    #[test]
    fn polar_night_has_no_sunset() {
        let svalbard = Site::new(78.2, 15.6).unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 12, 21).unwrap();
        assert_eq!(sunset(date, &svalbard).unwrap(), None);
    }
}
