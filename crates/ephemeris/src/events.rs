//! Discrete astronomical events: moon-phase quadrants and season boundaries.

use std::fmt;

use serde::Serialize;

use crate::time::Instant;

/// Quadrant of the Moon−Sun ecliptic elongation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum MoonPhase {
    /// Elongation 0°: the conjunction.
    NewMoon,
    /// Elongation 90°.
    FirstQuarter,
    /// Elongation 180°.
    FullMoon,
    /// Elongation 270°.
    LastQuarter,
}

impl MoonPhase {
    /// Maps a quadrant index (taken modulo 4) to its phase.
    pub fn from_quadrant(quadrant: u8) -> Self {
        match quadrant % 4 {
            0 => Self::NewMoon,
            1 => Self::FirstQuarter,
            2 => Self::FullMoon,
            _ => Self::LastQuarter,
        }
    }

    /// Returns the quadrant index (0..=3).
    pub fn quadrant(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NewMoon => "new moon",
            Self::FirstQuarter => "first quarter",
            Self::FullMoon => "full moon",
            Self::LastQuarter => "last quarter",
        };
        f.write_str(name)
    }
}

/// Quadrant of the apparent solar longitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Season {
    /// Solar longitude 0°.
    MarchEquinox,
    /// Solar longitude 90°.
    JuneSolstice,
    /// Solar longitude 180°.
    SeptemberEquinox,
    /// Solar longitude 270°.
    DecemberSolstice,
}

impl Season {
    /// Maps a quadrant index (taken modulo 4) to the season it starts.
    pub fn from_quadrant(quadrant: u8) -> Self {
        match quadrant % 4 {
            0 => Self::MarchEquinox,
            1 => Self::JuneSolstice,
            2 => Self::SeptemberEquinox,
            _ => Self::DecemberSolstice,
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::MarchEquinox => "March equinox",
            Self::JuneSolstice => "June solstice",
            Self::SeptemberEquinox => "September equinox",
            Self::DecemberSolstice => "December solstice",
        };
        f.write_str(name)
    }
}

/// The instant at which the Moon enters a new phase quadrant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoonPhaseEvent {
    /// When the transition happens, in local time.
    pub instant: Instant,
    /// The phase entered at `instant`.
    pub phase: MoonPhase,
}

/// The instant at which the Sun crosses a season boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeasonEvent {
    /// When the crossing happens, in local time.
    pub instant: Instant,
    /// The season that begins at `instant`.
    pub season: Season,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quadrants_round_trip() {
        for q in 0..4 {
            assert_eq!(MoonPhase::from_quadrant(q).quadrant(), q);
        }
    }

    #[test]
    fn quadrant_wraps() {
        assert_eq!(MoonPhase::from_quadrant(4), MoonPhase::NewMoon);
        assert_eq!(Season::from_quadrant(7), Season::DecemberSolstice);
    }

    #[test]
    fn display_names() {
        assert_eq!(MoonPhase::FullMoon.to_string(), "full moon");
        assert_eq!(Season::MarchEquinox.to_string(), "March equinox");
    }
}
