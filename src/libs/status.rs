//! Attendance status codes and the lateness/early-leave derivation.
//!
//! The status stored on an attendance row is always derived from the entered
//! times against the official schedule boundaries, with two exceptions:
//! `Absent` is set explicitly from the submitted display label, and `None`
//! means no time has been entered at all. Display labels for the codes live
//! in the message catalog, not here.

use crate::libs::schedule::ScheduleBounds;
use crate::libs::training_time::TrainingTime;

/// Closed set of attendance status codes persisted on ledger rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceStatus {
    /// No times entered yet.
    None,
    /// On time on both ends.
    Normal,
    /// Clocked in after the official start.
    Late,
    /// Clocked out before the official end.
    LeaveEarly,
    /// Both violations at once.
    LateAndLeaveEarly,
    /// Explicitly marked absent; never derived from times.
    Absent,
}

impl AttendanceStatus {
    /// The stable integer code stored in the ledger.
    pub fn code(self) -> i64 {
        match self {
            AttendanceStatus::None => 0,
            AttendanceStatus::Normal => 1,
            AttendanceStatus::Late => 2,
            AttendanceStatus::LeaveEarly => 3,
            AttendanceStatus::LateAndLeaveEarly => 4,
            AttendanceStatus::Absent => 5,
        }
    }

    /// Looks up a stored code; unknown codes map to `None` (the Option, not
    /// the status) so display layers can leave the label unset.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(AttendanceStatus::None),
            1 => Some(AttendanceStatus::Normal),
            2 => Some(AttendanceStatus::Late),
            3 => Some(AttendanceStatus::LeaveEarly),
            4 => Some(AttendanceStatus::LateAndLeaveEarly),
            5 => Some(AttendanceStatus::Absent),
            _ => None,
        }
    }
}

/// Derives the status for a pair of optional punch times.
///
/// Lateness and early leave are judged independently per side: a start
/// strictly after the official start is late, an end strictly before the
/// official end is an early leave, and a missing side never counts as a
/// violation on its own. With neither time present the status is
/// [`AttendanceStatus::None`]. Pure and total.
pub fn derive_status(
    start: Option<&TrainingTime>,
    end: Option<&TrainingTime>,
    bounds: &ScheduleBounds,
) -> AttendanceStatus {
    if start.is_none() && end.is_none() {
        return AttendanceStatus::None;
    }
    let late = start.is_some_and(|s| *s > bounds.official_start);
    let leave_early = end.is_some_and(|e| *e < bounds.official_end);
    match (late, leave_early) {
        (true, true) => AttendanceStatus::LateAndLeaveEarly,
        (true, false) => AttendanceStatus::Late,
        (false, true) => AttendanceStatus::LeaveEarly,
        (false, false) => AttendanceStatus::Normal,
    }
}
