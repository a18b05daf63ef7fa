//! Minute-precision time-of-day value used throughout attendance records.
//!
//! Attendance rows store clock-in and clock-out times as `"HH:MM"` strings
//! (empty string = unset). `TrainingTime` is the typed form of such a value:
//! it parses both `H:MM` and `HH:MM`, renders back zero-padded, and orders
//! by minute-of-day only, independent of any date.

use crate::libs::error::AttendanceError;
use chrono::{NaiveDateTime, Timelike};
use std::fmt;
use std::str::FromStr;

/// A time-of-day with minute precision.
///
/// Two instances with the same minute-of-day are equal; seconds never enter
/// the picture. Ordering compares total minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TrainingTime {
    hour: u32,
    minute: u32,
}

impl TrainingTime {
    /// Builds a time from components, rejecting out-of-range values.
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(TrainingTime { hour, minute })
    }

    /// Truncates a wall-clock instant to its minute-of-day.
    pub fn from_datetime(at: NaiveDateTime) -> Self {
        TrainingTime {
            hour: at.hour(),
            minute: at.minute(),
        }
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn minutes_since_midnight(&self) -> u32 {
        self.hour * 60 + self.minute
    }
}

impl FromStr for TrainingTime {
    type Err = AttendanceError;

    /// Parses `H:MM` or `HH:MM`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || AttendanceError::TimeParse(value.to_string());
        let (hour_str, minute_str) = value.split_once(':').ok_or_else(invalid)?;
        let hour: u32 = hour_str.trim().parse().map_err(|_| invalid())?;
        let minute: u32 = minute_str.trim().parse().map_err(|_| invalid())?;
        TrainingTime::new(hour, minute).ok_or_else(invalid)
    }
}

impl fmt::Display for TrainingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}
