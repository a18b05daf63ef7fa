//! Typed failures for attendance operations.
//!
//! Validation failures are values carried back to the caller for display;
//! none of them leave partial state behind, because every check runs before
//! any mutation. Unexpected store failures (including the unique-index
//! violation two racing clock-ins can produce) pass through transparently
//! and are never swallowed.

use crate::libs::messages::Message;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AttendanceError {
    /// The acting user does not hold the trainee role.
    #[error("only trainees may punch attendance")]
    Authorization,

    /// Today is not a configured work day for the course.
    #[error("today is not a scheduled training day")]
    NotWorkDay,

    /// Duplicate clock-in, or clock-out on a finished day.
    #[error("attendance for today has already been entered")]
    AlreadyPunched,

    /// Clock-out attempted with no prior clock-in.
    #[error("no clock-in has been recorded for today")]
    MissingClockIn,

    /// The computed clock-out instant precedes the stored clock-in.
    #[error("clock-out time must not be earlier than clock-in time")]
    InvalidTimeRange,

    /// A date string in an edit row failed to parse.
    #[error("invalid date: {0}")]
    DateParse(String),

    /// A time-of-day string failed to parse.
    #[error("invalid time: {0}")]
    TimeParse(String),

    /// Unexpected ledger failure; propagated, never handled locally.
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

impl AttendanceError {
    /// The catalog message for a validation failure; `None` for store
    /// failures, which are displayed through their own error chain.
    pub fn message(&self) -> Option<Message> {
        match self {
            AttendanceError::Authorization => Some(Message::PunchNotPermitted),
            AttendanceError::NotWorkDay => Some(Message::PunchNotWorkDay),
            AttendanceError::AlreadyPunched => Some(Message::PunchAlreadyExists),
            AttendanceError::MissingClockIn => Some(Message::PunchInEmpty),
            AttendanceError::InvalidTimeRange => Some(Message::PunchTimeRange),
            AttendanceError::DateParse(value) => Some(Message::InvalidDateInput(value.clone())),
            AttendanceError::TimeParse(value) => Some(Message::InvalidTimeInput(value.clone())),
            AttendanceError::Store(_) => None,
        }
    }
}
