//! Display labels for stored attendance status codes.
//!
//! Kept apart from the status enum so the enum stays a closed set of codes
//! and the wording can change without touching derivation logic. The absence
//! label doubles as the marker an edit row uses to force `Absent` status.

use crate::libs::status::AttendanceStatus;

pub const STATUS_LABEL_NORMAL: &str = "Present";
pub const STATUS_LABEL_LATE: &str = "Late";
pub const STATUS_LABEL_LEAVE_EARLY: &str = "Left early";
pub const STATUS_LABEL_LATE_AND_LEAVE_EARLY: &str = "Late and left early";
pub const STATUS_LABEL_ABSENT: &str = "Absent";

/// The display label for a status; empty for `None` (no input yet).
pub fn status_label(status: AttendanceStatus) -> &'static str {
    match status {
        AttendanceStatus::None => "",
        AttendanceStatus::Normal => STATUS_LABEL_NORMAL,
        AttendanceStatus::Late => STATUS_LABEL_LATE,
        AttendanceStatus::LeaveEarly => STATUS_LABEL_LEAVE_EARLY,
        AttendanceStatus::LateAndLeaveEarly => STATUS_LABEL_LATE_AND_LEAVE_EARLY,
        AttendanceStatus::Absent => STATUS_LABEL_ABSENT,
    }
}
