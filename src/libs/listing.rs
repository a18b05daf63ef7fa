//! Display projection of the attendance ledger.
//!
//! Turns persisted rows into pre-formatted strings for the table view and
//! the exporters, and projects the same rows into the JSON edit form the
//! `edit` command round-trips. Both directions are read-only and tolerant:
//! a missing blank-time code shows as empty, an unknown status code leaves
//! the label unset.

use crate::libs::blank_time::BlankTimes;
use crate::libs::messages::labels::status_label;
use crate::libs::record::{AttendanceRecord, DailyAttendanceEdit, EditForm};
use crate::libs::status::AttendanceStatus;
use crate::libs::training_time::TrainingTime;
use chrono::NaiveDate;
use serde::Serialize;

/// One display-ready attendance row.
#[derive(Debug, Clone, Serialize)]
pub struct AttendanceRow {
    pub record_id: Option<i64>,
    /// Training date as "YYYY-MM-DD".
    pub training_date: String,
    /// Training date with weekday, e.g. "2025-04-01 (Tue)".
    pub display_date: String,
    pub start_time: String,
    pub end_time: String,
    pub blank_time_code: Option<i64>,
    /// Expanded break duration as "HH:MM", empty when no code is stored.
    pub blank_time: String,
    pub status_code: i64,
    /// Catalog label for the status; empty for unknown codes.
    pub status_label: String,
    pub note: String,
    /// Marks the row for the current date.
    pub is_today: bool,
}

/// Builds the display projection for a date-ordered record set.
pub fn build_listing(records: &[AttendanceRecord], blank_times: &BlankTimes, today: NaiveDate) -> Vec<AttendanceRow> {
    records
        .iter()
        .map(|record| AttendanceRow {
            record_id: record.id,
            training_date: record.training_date.format("%Y-%m-%d").to_string(),
            display_date: record.training_date.format("%Y-%m-%d (%a)").to_string(),
            start_time: record.start_time.clone(),
            end_time: record.end_time.clone(),
            blank_time_code: record.blank_time,
            blank_time: blank_times.display(record.blank_time),
            status_code: record.status,
            status_label: AttendanceStatus::from_code(record.status)
                .map(status_label)
                .unwrap_or_default()
                .to_string(),
            note: record.note.clone(),
            is_today: record.training_date == today,
        })
        .collect()
}

/// Projects the record set into an editable form, splitting each stored
/// time into its hour and minute halves. The valid break codes ride along
/// for the editor's reference.
pub fn build_edit_form(
    records: &[AttendanceRecord],
    blank_times: &BlankTimes,
    user_id: i64,
    user_name: &str,
) -> EditForm {
    let rows = records
        .iter()
        .map(|record| {
            let start = split(&record.start_time);
            let end = split(&record.end_time);
            DailyAttendanceEdit {
                record_id: record.id,
                training_date: record.training_date.format("%Y-%m-%d").to_string(),
                start_hour: start.map(|t| t.hour()),
                start_minute: start.map(|t| t.minute()),
                end_hour: end.map(|t| t.hour()),
                end_minute: end.map(|t| t.minute()),
                blank_time_code: record.blank_time,
                note: record.note.clone(),
                status_label: AttendanceStatus::from_code(record.status)
                    .map(status_label)
                    .unwrap_or_default()
                    .to_string(),
            }
        })
        .collect();
    EditForm {
        user_id,
        user_name: user_name.to_string(),
        blank_time_options: blank_times.options(),
        rows,
    }
}

fn split(value: &str) -> Option<TrainingTime> {
    if value.is_empty() {
        return None;
    }
    value.parse().ok()
}
