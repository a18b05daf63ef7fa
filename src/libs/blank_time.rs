//! Break ("blank time") code expansion for display.
//!
//! Attendance rows store breaks as a small integer code rather than a
//! duration; the code indexes a configurable step table (0 = no break,
//! 1 = 30 minutes, 2 = 60 minutes, ... by default). Expansion is display
//! only and never feeds status derivation. Unknown or missing codes degrade
//! to a zero duration rather than failing.

use crate::libs::formatter::format_duration;
use chrono::Duration;

/// Code-to-minutes step table for break durations.
#[derive(Debug, Clone)]
pub struct BlankTimes {
    steps: Vec<i64>,
}

impl Default for BlankTimes {
    fn default() -> Self {
        BlankTimes {
            steps: vec![0, 30, 60, 90, 120, 150, 180],
        }
    }
}

impl BlankTimes {
    /// Builds a table from configured steps, falling back to the default
    /// table when the configuration is empty.
    pub fn from_steps(steps: &[i64]) -> Self {
        if steps.is_empty() {
            return BlankTimes::default();
        }
        BlankTimes {
            steps: steps.to_vec(),
        }
    }

    /// Expands a stored code into a duration; `None` and out-of-table codes
    /// expand to zero.
    pub fn expand(&self, code: Option<i64>) -> Duration {
        let minutes = code
            .and_then(|c| usize::try_from(c).ok())
            .and_then(|index| self.steps.get(index))
            .copied()
            .unwrap_or(0);
        Duration::minutes(minutes)
    }

    /// Display string for a stored code: empty when no code is set, else the
    /// expanded duration as `"HH:MM"`.
    pub fn display(&self, code: Option<i64>) -> String {
        match code {
            Some(_) => format_duration(&self.expand(code)),
            None => String::new(),
        }
    }

    /// All `(code, display)` pairs, for edit-form assistance.
    pub fn options(&self) -> Vec<(i64, String)> {
        self.steps
            .iter()
            .enumerate()
            .map(|(index, minutes)| (index as i64, format_duration(&Duration::minutes(*minutes))))
            .collect()
    }
}
