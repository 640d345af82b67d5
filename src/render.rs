//! Plain-text and JSON output.

use anyhow::{Context, Result};
use aviv_ephemeris::{Instant, local_offset};
use chrono::{Datelike, Month, Utc};
use serde::Serialize;

/// Writes `value` as pretty JSON if `json` is set, the text from `text`
/// otherwise.
pub fn emit<T: Serialize>(json: bool, value: &T, text: impl FnOnce() -> String) -> Result<()> {
    if json {
        let s = serde_json::to_string_pretty(value).context("failed to serialize output")?;
        println!("{s}");
    } else {
        print!("{}", text());
    }
    Ok(())
}

/// Formats an instant as local `YYYY-MM-DD HH:MM`.
pub fn instant(t: &Instant) -> String {
    t.with_timezone(&local_offset())
        .format("%Y-%m-%d %H:%M")
        .to_string()
}

/// English name of a civil month (1..=12).
pub fn month_name(month: u32) -> &'static str {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map_or("?", |m| m.name())
}

/// Returns `year`, or the current local year.
pub fn year_or_current(year: Option<i32>) -> i32 {
    year.unwrap_or_else(|| now().year())
}

/// The current instant in local time.
pub fn now() -> Instant {
    Utc::now().with_timezone(&local_offset())
}
