//! Error types for the aviv-calendar crate.

use aviv_ephemeris::EphemerisError;

/// Error type for all fallible operations in the aviv-calendar crate.
///
/// Covers argument validation (months, years, Omer days), configuration
/// problems, search windows that contain no usable new moon, and failures
/// of the underlying ephemeris.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u32,
    },

    /// Returned when a year cannot be represented as a calendar date.
    #[error("invalid year: {year}")]
    InvalidYear {
        /// The invalid year that was provided.
        year: i32,
    },

    /// Returned when an Omer day is outside the valid range 1..=50.
    #[error("invalid omer day: {day} (must be 1..=50)")]
    InvalidOmerDay {
        /// The invalid day number that was provided.
        day: u32,
    },

    /// Returned when a search window holds no qualifying new moon.
    #[error("no qualifying new moon in the {window} window of {year}")]
    NoNewMoon {
        /// The year being computed.
        year: i32,
        /// Which anchor was being searched for.
        window: &'static str,
    },

    /// Returned when the calculator configuration is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Ephemeris error.
    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),
}
