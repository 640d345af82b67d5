//! Error types for the aviv-ephemeris crate.

use crate::time::{FIRST_COVERED_YEAR, LAST_COVERED_YEAR};

/// Error type for all fallible operations in the aviv-ephemeris crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EphemerisError {
    /// Returned when a query touches a year outside the modelled span.
    #[error(
        "year {year} is outside the ephemeris span {}..={}",
        FIRST_COVERED_YEAR,
        LAST_COVERED_YEAR
    )]
    OutOfRange {
        /// The unsupported (local) calendar year.
        year: i32,
    },

    /// Returned when a discrete search is asked to sample with a
    /// non-positive or non-finite step.
    #[error("invalid search step: {step} days (must be finite and > 0)")]
    InvalidStep {
        /// The rejected step, in days.
        step: f64,
    },

    /// Returned when an observation site has impossible coordinates.
    #[error("invalid site: latitude {latitude}, longitude {longitude}")]
    InvalidSite {
        /// Geographic latitude in degrees (north positive).
        latitude: f64,
        /// Geographic longitude in degrees (east positive).
        longitude: f64,
    },

    /// Returned when a Julian day cannot be represented as a timestamp.
    #[error("julian day {jd} cannot be represented as a timestamp")]
    InvalidJulianDay {
        /// The offending Julian day.
        jd: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_out_of_range() {
        let err = EphemerisError::OutOfRange { year: 2100 };
        assert_eq!(
            err.to_string(),
            "year 2100 is outside the ephemeris span 1900..=2050"
        );
    }

    #[test]
    fn error_invalid_step() {
        let err = EphemerisError::InvalidStep { step: 0.0 };
        assert_eq!(
            err.to_string(),
            "invalid search step: 0 days (must be finite and > 0)"
        );
    }

    #[test]
    fn error_invalid_site() {
        let err = EphemerisError::InvalidSite {
            latitude: 91.0,
            longitude: 0.0,
        };
        assert_eq!(err.to_string(), "invalid site: latitude 91, longitude 0");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<EphemerisError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<EphemerisError>();
    }
}
