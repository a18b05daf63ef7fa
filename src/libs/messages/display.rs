//! Display implementation for the application message catalog.
//!
//! All user-facing text lives in this one match so wording stays consistent
//! and a future localization pass has a single place to hook into. Status
//! display labels are the exception; they live in [`super::labels`] because
//! they are looked up by stored code, not emitted as messages.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === ATTENDANCE MESSAGES ===
            Message::AttendanceSaved => "Attendance record saved".to_string(),
            Message::AttendanceTitle(user) => format!("📋 Attendance sheet for {}", user),
            Message::AttendanceEmpty => "No attendance records yet".to_string(),
            Message::MissingToday(count) => {
                format!("Days still missing a clock-in: {}", count)
            }

            // === VALIDATION MESSAGES ===
            Message::PunchNotPermitted => "Only trainees may punch attendance".to_string(),
            Message::PunchNotWorkDay => "Today is not a scheduled training day".to_string(),
            Message::PunchAlreadyExists => {
                "Attendance for today has already been entered. Edit it directly instead".to_string()
            }
            Message::PunchInEmpty => {
                "Cannot clock out because no clock-in has been recorded".to_string()
            }
            Message::PunchTimeRange => {
                "Clock-out time must not be earlier than clock-in time".to_string()
            }
            Message::InvalidDateInput(value) => format!("Invalid date: '{}'", value),
            Message::InvalidTimeInput(value) => format!("Invalid time: '{}'", value),

            // === EDIT FORM MESSAGES ===
            Message::EditTemplateWritten(path) => format!("Edit form written to {}", path),
            Message::EditNothingToDo => {
                "Nothing to do: pass --template to write a form or --file to apply one".to_string()
            }

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigUserMissing => {
                "User is not configured. Run 'kintai init' first".to_string()
            }
            Message::ConfigModuleUser => "User settings".to_string(),
            Message::ConfigModuleSchedule => "Schedule settings".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptUserId => "User id".to_string(),
            Message::PromptUserName => "User name".to_string(),
            Message::PromptCourseId => "Course id".to_string(),
            Message::PromptRole => "Role".to_string(),
            Message::PromptOfficialStart => "Official start time (HH:MM)".to_string(),
            Message::PromptOfficialEnd => "Official end time (HH:MM)".to_string(),
            Message::PromptWorkWeekdays => "Work days of the week".to_string(),
            Message::PromptClosedDates => {
                "Closed dates (YYYY-MM-DD, comma separated, empty for none)".to_string()
            }
            Message::PromptBlankTimeSteps => {
                "Break steps in minutes (comma separated)".to_string()
            }

            // === EXPORT MESSAGES ===
            Message::ExportSuccess(path) => format!("Data exported successfully to: {}", path),
            Message::ExportNothing => "Nothing to export".to_string(),
        };
        write!(f, "{}", text)
    }
}
