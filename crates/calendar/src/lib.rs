//! # aviv-calendar
//!
//! Conjunction-anchored liturgical dates: new-month celebrations, the Aviv
//! anchor with its embolismic correction, and the feast days derived from it.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["EphemerisSearch"] -->|"new moons"| B["observance_day()"]
//!     A -->|"March equinox"| C["find_aviv_anchor()"]
//!     B --> C
//!     C -->|"+160..200 days"| D["find_month7_anchor()"]
//!     C --> E["FeastSet"]
//!     D --> E
//!     B --> F["celebrations_in_month()"]
//!     F --> G["MonthData"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use aviv_calendar::Calculator;
//! use aviv_ephemeris::{EventTable, local_datetime};
//! use chrono::NaiveDate;
//!
//! let table = EventTable::new()
//!     .with_new_moon(local_datetime(2025, 3, 29, 14, 0).unwrap())
//!     .with_march_equinox(local_datetime(2025, 3, 20, 3, 0).unwrap());
//! let calc = Calculator::with_defaults(table);
//!
//! let aviv = calc.find_aviv_anchor(2025).unwrap();
//! assert_eq!(aviv, NaiveDate::from_ymd_opt(2025, 3, 30).unwrap());
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `calculator` | Anchors, feasts and month data |
//! | `config` | Search windows and observance policy |
//! | `observance` | Conjunction to observance-day rule |
//! | `feast` | Feast offsets and the per-year feast set |
//! | `month` | Per-month celebrations and day marks |
//! | `hebrew` | Approximate Hebrew month labels |
//! | `sequence` | Consecutive date sequences |
//! | `error` | Error types |

mod calculator;
mod config;
mod error;
mod feast;
mod hebrew;
mod month;
mod observance;
mod sequence;

pub use calculator::Calculator;
pub use config::CalculatorConfig;
pub use error::CalendarError;
pub use feast::{
    Feast, FeastSet, NISAN13_OFFSET, OMER_DAYS, OMER_START_OFFSET, SUKKOT_END_OFFSET,
    SUKKOT_START_OFFSET, UNLEAVENED_END_OFFSET, UNLEAVENED_START_OFFSET, YOM_KIPPUR_OFFSET,
};
pub use hebrew::{HebrewMonth, approximate_hebrew_month};
pub use month::{Celebration, DayMark, MonthData};
pub use observance::{DEFAULT_CUTOFF_HOUR, ObservanceRule, observance_day};
pub use sequence::date_sequence;
