//! Consecutive civil date sequences.

use chrono::NaiveDate;

/// Generates `n_days` consecutive dates starting at `start`.
///
/// Month, year and leap-day boundaries follow the proleptic Gregorian
/// calendar. The sequence stops early only at the end of chrono's
/// representable range.
pub fn date_sequence(start: NaiveDate, n_days: usize) -> Vec<NaiveDate> {
    start.iter_days().take(n_days).collect()
}
