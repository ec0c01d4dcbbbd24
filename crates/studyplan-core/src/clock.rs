//! Wall-clock arithmetic and 12-hour formatting for session slots.
//!
//! A [`ClockTime`] is a position within a single day, stored as minutes from
//! midnight. All arithmetic wraps at 24 hours.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// A time of day with minute precision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ClockTime {
    minutes: u32,
}

impl ClockTime {
    /// Create a clock time, wrapping out-of-range input into a 24h day.
    ///
    /// Minute overflow carries into the hour, and the hour wraps mod 24, so
    /// `ClockTime::new(23, 90)` is `0:30`.
    pub fn new(hour: u32, minute: u32) -> Self {
        let total = (hour % 24) * 60 + minute % MINUTES_PER_DAY;
        Self {
            minutes: total % MINUTES_PER_DAY,
        }
    }

    pub fn from_minutes(minutes: u32) -> Self {
        Self {
            minutes: minutes % MINUTES_PER_DAY,
        }
    }

    pub fn hour(&self) -> u32 {
        self.minutes / 60
    }

    pub fn minute(&self) -> u32 {
        self.minutes % 60
    }

    /// Minutes since midnight.
    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    /// Move the clock forward, rolling over the hour and the day.
    pub fn advance(self, minutes: u32) -> Self {
        Self::from_minutes(self.minutes + minutes % MINUTES_PER_DAY)
    }

    /// Forward distance from `self` to `later`, mod 24h.
    pub fn minutes_until(&self, later: ClockTime) -> u32 {
        (later.minutes + MINUTES_PER_DAY - self.minutes) % MINUTES_PER_DAY
    }

    /// Shortest distance around the clock face, in minutes.
    pub fn circular_distance(&self, other: ClockTime) -> u32 {
        let forward = self.minutes_until(other);
        forward.min(MINUTES_PER_DAY - forward)
    }

    /// Render as `h:mm AM` / `h:mm PM`. Hours 0 and 12 both render as 12.
    pub fn format_12h(&self) -> String {
        let hour = self.hour();
        let suffix = if hour >= 12 { "PM" } else { "AM" };
        let display_hour = match hour % 12 {
            0 => 12,
            h => h,
        };
        format!("{}:{:02} {}", display_hour, self.minute(), suffix)
    }

    /// Parse the `h:mm AM|PM` form produced by [`ClockTime::format_12h`].
    pub fn parse_12h(input: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidClockTime(input.to_string());

        let (time, suffix) = input.trim().split_once(' ').ok_or_else(invalid)?;
        let (hour, minute) = time.split_once(':').ok_or_else(invalid)?;
        let hour: u32 = hour.parse().map_err(|_| invalid())?;
        let minute: u32 = minute.parse().map_err(|_| invalid())?;

        if !(1..=12).contains(&hour) || minute > 59 || minute_digits(time) != 2 {
            return Err(invalid());
        }

        let hour = match suffix.to_ascii_uppercase().as_str() {
            "AM" => hour % 12,
            "PM" => hour % 12 + 12,
            _ => return Err(invalid()),
        };

        Ok(Self::new(hour, minute))
    }
}

fn minute_digits(time: &str) -> usize {
    time.split_once(':').map(|(_, m)| m.len()).unwrap_or(0)
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_12h())
    }
}

/// Format a 24-hour `hour`/`minute` pair as a 12-hour display string.
pub fn format_time(hour: u32, minute: u32) -> String {
    ClockTime::new(hour, minute).format_12h()
}
