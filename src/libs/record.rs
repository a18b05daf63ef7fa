//! Attendance ledger rows, bulk-edit input rows, and the ledger seam.
//!
//! An [`AttendanceRecord`] is the persisted row: one per user per training
//! date unless soft-deleted, with punch times stored as `"HH:MM"` strings
//! (empty = unset) and the status as an integer code. [`DailyAttendanceEdit`]
//! is the transient row a bulk-edit submission carries; the hour and minute
//! of each time arrive separately and may each be absent. The
//! [`AttendanceLedger`] trait is the seam to the store: the SQLite
//! implementation lives in `db::attendance`, tests substitute fakes.

use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A persisted attendance ledger row.
#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceRecord {
    /// Row id; `None` until the row has been inserted.
    pub id: Option<i64>,
    pub user_id: i64,
    pub training_date: NaiveDate,
    /// Clock-in time as "HH:MM", empty when not yet entered.
    pub start_time: String,
    /// Clock-out time as "HH:MM", empty when not yet entered.
    pub end_time: String,
    /// Stored status code, see `libs::status`.
    pub status: i64,
    /// Break duration code, expanded for display only.
    pub blank_time: Option<i64>,
    pub note: String,
    /// Soft-delete flag; rows are never hard-deleted.
    pub deleted: bool,
    pub created_by: i64,
    pub created_at: NaiveDateTime,
    pub modified_by: i64,
    pub modified_at: NaiveDateTime,
}

impl AttendanceRecord {
    /// A fresh, empty row for a user and date, stamped with its creator.
    pub fn blank(user_id: i64, training_date: NaiveDate, actor: i64, at: NaiveDateTime) -> Self {
        AttendanceRecord {
            id: None,
            user_id,
            training_date,
            start_time: String::new(),
            end_time: String::new(),
            status: 0,
            blank_time: None,
            note: String::new(),
            deleted: false,
            created_by: actor,
            created_at: at,
            modified_by: actor,
            modified_at: at,
        }
    }
}

/// Day-indexed attendance store operations consumed by the core.
///
/// Implementations must provide atomic single-row insert/update; the
/// non-deleted `(user_id, training_date)` uniqueness constraint is the
/// store's responsibility and the backstop for racing clock-ins.
pub trait AttendanceLedger {
    fn find_by_user_and_date(
        &mut self,
        user_id: i64,
        date: NaiveDate,
        include_deleted: bool,
    ) -> Result<Option<AttendanceRecord>>;

    /// All non-deleted rows for a user, ordered by training date.
    fn find_all_by_user(&mut self, user_id: i64) -> Result<Vec<AttendanceRecord>>;

    fn insert(&mut self, record: &AttendanceRecord) -> Result<i64>;

    fn update(&mut self, record: &AttendanceRecord) -> Result<()>;

    /// Non-deleted rows on or before `date` whose start time is still empty.
    fn count_missing_today(&mut self, user_id: i64, date: NaiveDate) -> Result<i64>;
}

/// One submitted row of a bulk attendance edit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyAttendanceEdit {
    /// Links to an existing record; absent or unmatched ids become inserts.
    #[serde(default)]
    pub record_id: Option<i64>,
    /// Training date as "YYYY-MM-DD".
    pub training_date: String,
    #[serde(default)]
    pub start_hour: Option<u32>,
    #[serde(default)]
    pub start_minute: Option<u32>,
    #[serde(default)]
    pub end_hour: Option<u32>,
    #[serde(default)]
    pub end_minute: Option<u32>,
    #[serde(default)]
    pub blank_time_code: Option<i64>,
    #[serde(default)]
    pub note: String,
    /// Free-form display label; equal to the absence label when the row is
    /// marked absent.
    #[serde(default)]
    pub status_label: String,
}

/// The bulk-edit submission: target user plus the edited rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditForm {
    pub user_id: i64,
    #[serde(default)]
    pub user_name: String,
    /// Valid break codes with their display durations, written into
    /// templates for the editor's reference; ignored on the way back in.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub blank_time_options: Vec<(i64, String)>,
    pub rows: Vec<DailyAttendanceEdit>,
}
