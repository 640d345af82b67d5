//! # aviv-ephemeris
//!
//! Discrete astronomical event search in El Salvador local time (UTC−6).
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["model (Sun/Moon longitude)"] -->|"quadrant predicate"| B["find_discrete()"]
//!     B -->|"(jd, value)"| C["Ephemeris"]
//!     D["EventTable"] --> E["EphemerisSearch"]
//!     C --> E
//!     E -->|"moon_phases / seasons / sunset"| F["callers"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use aviv_ephemeris::{Ephemeris, EphemerisSearch, MoonPhase, local_datetime};
//!
//! let eph = Ephemeris::new();
//! let start = local_datetime(2025, 3, 1, 0, 0).unwrap();
//! let end = local_datetime(2025, 4, 30, 0, 0).unwrap();
//! let new_moons: Vec<_> = eph
//!     .moon_phases(start, end)?
//!     .into_iter()
//!     .filter(|e| e.phase == MoonPhase::NewMoon)
//!     .collect();
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `time` | Local offset, Julian days, ΔT, coverage span |
//! | `events` | Moon-phase and season event types |
//! | `search` | Discrete-event root finding |
//! | `model` | Low-precision Sun and Moon positions |
//! | `sun` | Observation site and sunset |
//! | `oracle` | `EphemerisSearch` trait and the analytic `Ephemeris` |
//! | `table` | Table-driven `EventTable` for synthetic scenarios |
//! | `error` | Error types |

mod error;
mod events;
mod model;
mod oracle;
mod search;
mod sun;
mod table;
mod time;

pub use error::EphemerisError;
pub use events::{MoonPhase, MoonPhaseEvent, Season, SeasonEvent};
pub use oracle::{Ephemeris, EphemerisSearch};
pub use search::find_discrete;
pub use sun::Site;
pub use table::EventTable;
pub use time::{
    FIRST_COVERED_YEAR, Instant, LAST_COVERED_YEAR, ensure_covered, local_date, local_datetime,
    local_midnight, local_offset,
};
