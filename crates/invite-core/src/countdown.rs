//! Countdown calculator.
//!
//! Breaks the time remaining until the event into days, hours, minutes and
//! seconds. The value freezes at zero once the target has passed; there is
//! no separate "event passed" state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const SECONDS_PER_MINUTE: i64 = 60;
pub const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
pub const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

/// Remaining time, decomposed for display.
///
/// `hours`, `minutes` and `seconds` always respect their modulus. `days` is
/// unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CountdownValue {
    pub days: u64,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl CountdownValue {
    /// All-zero value, shown once the target is reached.
    pub const ZERO: CountdownValue = CountdownValue {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Decompose a whole number of seconds. Non-positive input yields zero.
    pub fn from_seconds(total: i64) -> Self {
        if total <= 0 {
            return Self::ZERO;
        }
        Self {
            days: (total / SECONDS_PER_DAY) as u64,
            hours: ((total / SECONDS_PER_HOUR) % 24) as u32,
            minutes: ((total / SECONDS_PER_MINUTE) % 60) as u32,
            seconds: (total % 60) as u32,
        }
    }

    /// Seconds represented by this value.
    pub fn total_seconds(&self) -> u64 {
        self.days * SECONDS_PER_DAY as u64
            + self.hours as u64 * SECONDS_PER_HOUR as u64
            + self.minutes as u64 * SECONDS_PER_MINUTE as u64
            + self.seconds as u64
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Labelled units in display order.
    pub fn units(&self) -> [(&'static str, u64); 4] {
        [
            ("Days", self.days),
            ("Hours", self.hours as u64),
            ("Minutes", self.minutes as u64),
            ("Seconds", self.seconds as u64),
        ]
    }
}

impl std::fmt::Display for CountdownValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}d {:02}h {:02}m {:02}s",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// Two-digit, zero-padded unit as shown on the card (`7` -> `"07"`).
pub fn pad_unit(value: u64) -> String {
    format!("{:02}", value)
}

/// Time remaining from `now` until `target`.
///
/// Sub-second remainders are truncated, so the result never rounds up.
/// Once `now` reaches or passes `target` the result is [`CountdownValue::ZERO`].
pub fn tick(now: DateTime<Utc>, target: DateTime<Utc>) -> CountdownValue {
    let remaining = target.signed_duration_since(now);
    CountdownValue::from_seconds(remaining.num_seconds())
}
