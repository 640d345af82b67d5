//! Configuration for the calendar calculator.

use chrono::NaiveDate;

use crate::error::CalendarError;
use crate::observance::ObservanceRule;

/// Upper bound on the month-7 window, in days after the Aviv anchor.
const MAX_MONTH7_WINDOW_DAYS: u32 = 400;
/// Upper bounds on the month padding.
const MAX_PADDING_BEFORE_DAYS: u32 = 31;
const MAX_PADDING_AFTER_DAYS: u32 = 62;

/// Search windows and observance policy for a [`Calculator`](crate::Calculator).
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use aviv_calendar::{CalculatorConfig, ObservanceRule};
///
/// let config = CalculatorConfig::new()
///     .with_rule(ObservanceRule::FixedCutoff { hour: 18 })
///     .with_aviv_window_end(5, 1);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorConfig {
    /// Observance-day rule applied to every conjunction.
    rule: ObservanceRule,
    /// `(month, day)` at whose local midnight the Aviv search stops.
    aviv_window_end: (u32, u32),
    /// Days after the Aviv anchor bracketing the month-7 conjunction.
    month7_window_days: (u32, u32),
    /// Days searched before and after the first of a month.
    month_padding_days: (u32, u32),
}

impl CalculatorConfig {
    /// Creates a configuration with the defaults.
    ///
    /// Defaults: fixed 18:00 cutoff, Aviv window ending April 30, month-7
    /// window 160..200 days after Aviv, month padding 5 days before and
    /// 32 days after the first.
    pub fn new() -> Self {
        Self {
            rule: ObservanceRule::default(),
            aviv_window_end: (4, 30),
            month7_window_days: (160, 200),
            month_padding_days: (5, 32),
        }
    }

    /// Sets the observance-day rule.
    pub fn with_rule(mut self, rule: ObservanceRule) -> Self {
        self.rule = rule;
        self
    }

    /// Sets the month and day at which the Aviv new-moon search stops.
    pub fn with_aviv_window_end(mut self, month: u32, day: u32) -> Self {
        self.aviv_window_end = (month, day);
        self
    }

    /// Sets the month-7 search window, in days after the Aviv anchor.
    pub fn with_month7_window_days(mut self, start: u32, end: u32) -> Self {
        self.month7_window_days = (start, end);
        self
    }

    /// Sets the padding searched around a calendar month.
    pub fn with_month_padding_days(mut self, before: u32, after: u32) -> Self {
        self.month_padding_days = (before, after);
        self
    }

    /// Returns the observance-day rule.
    pub fn rule(&self) -> &ObservanceRule {
        &self.rule
    }

    /// Returns the `(month, day)` ending the Aviv search.
    pub fn aviv_window_end(&self) -> (u32, u32) {
        self.aviv_window_end
    }

    /// Returns the month-7 window in days after the Aviv anchor.
    pub fn month7_window_days(&self) -> (u32, u32) {
        self.month7_window_days
    }

    /// Returns the `(before, after)` month padding in days.
    pub fn month_padding_days(&self) -> (u32, u32) {
        self.month_padding_days
    }

    /// Validates this configuration.
    ///
    /// The Aviv window must end on a real date (checked against a leap year)
    /// after March 1, the month-7 window must be non-empty and end within
    /// 400 days, and the month padding must reach past the end of any month
    /// without exceeding 31 days before or 62 after.
    pub fn validate(&self) -> Result<(), CalendarError> {
        if let ObservanceRule::FixedCutoff { hour } = self.rule {
            if hour > 23 {
                return Err(CalendarError::InvalidConfig {
                    reason: format!("cutoff hour {hour} must be 0..=23"),
                });
            }
        }

        let (month, day) = self.aviv_window_end;
        if NaiveDate::from_ymd_opt(2000, month, day).is_none() || (month, day) <= (3, 1) {
            return Err(CalendarError::InvalidConfig {
                reason: format!("aviv window end {month}-{day} must be a date after March 1"),
            });
        }

        let (start, end) = self.month7_window_days;
        if start >= end {
            return Err(CalendarError::InvalidConfig {
                reason: format!("month 7 window {start}..{end} is empty"),
            });
        }
        if end > MAX_MONTH7_WINDOW_DAYS {
            return Err(CalendarError::InvalidConfig {
                reason: format!(
                    "month 7 window end ({end} days) must be <= {MAX_MONTH7_WINDOW_DAYS}"
                ),
            });
        }

        let (before, after) = self.month_padding_days;
        if before > MAX_PADDING_BEFORE_DAYS {
            return Err(CalendarError::InvalidConfig {
                reason: format!(
                    "month padding before the first ({before} days) must be <= {MAX_PADDING_BEFORE_DAYS}"
                ),
            });
        }
        if !(31..=MAX_PADDING_AFTER_DAYS).contains(&after) {
            return Err(CalendarError::InvalidConfig {
                reason: format!(
                    "month padding after the first ({after} days) must be 31..={MAX_PADDING_AFTER_DAYS}"
                ),
            });
        }
        Ok(())
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self::new()
    }
}
