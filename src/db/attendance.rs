//! SQLite implementation of the attendance ledger.
//!
//! One row per user per training date; rows are soft-deleted only. The
//! partial unique index over non-deleted `(user_id, training_date)` pairs
//! is the store-level backstop for two concurrent clock-ins: the second
//! insert fails with a constraint violation rather than producing a
//! duplicate day.

use crate::db::db::Db;
use crate::libs::record::{AttendanceLedger, AttendanceRecord};
use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Row};

const SCHEMA_ATTENDANCE: &str = "CREATE TABLE IF NOT EXISTS attendance (
    id INTEGER PRIMARY KEY,
    user_id INTEGER NOT NULL,
    training_date DATE NOT NULL,
    start_time TEXT NOT NULL DEFAULT '',
    end_time TEXT NOT NULL DEFAULT '',
    status INTEGER NOT NULL DEFAULT 0,
    blank_time INTEGER,
    note TEXT NOT NULL DEFAULT '',
    deleted INTEGER NOT NULL DEFAULT 0,
    created_by INTEGER NOT NULL,
    created_at TIMESTAMP NOT NULL,
    modified_by INTEGER NOT NULL,
    modified_at TIMESTAMP NOT NULL
)";

/// At most one live row per user and date; soft-deleted rows stay behind.
const SCHEMA_ATTENDANCE_INDEX: &str =
    "CREATE UNIQUE INDEX IF NOT EXISTS idx_attendance_user_date ON attendance (user_id, training_date) WHERE deleted = 0";

const SELECT_COLUMNS: &str = "id, user_id, training_date, start_time, end_time, status, blank_time, note, deleted, created_by, created_at, modified_by, modified_at";

const INSERT_ATTENDANCE: &str = "INSERT INTO attendance (user_id, training_date, start_time, end_time, status, blank_time, note, deleted, created_by, created_at, modified_by, modified_at)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)";

const UPDATE_ATTENDANCE: &str = "UPDATE attendance SET user_id = ?1, training_date = ?2, start_time = ?3, end_time = ?4, status = ?5, blank_time = ?6, note = ?7, deleted = ?8, modified_by = ?9, modified_at = ?10 WHERE id = ?11";

const COUNT_MISSING: &str =
    "SELECT COUNT(*) FROM attendance WHERE user_id = ?1 AND training_date <= ?2 AND start_time = '' AND deleted = 0";

pub struct AttendanceStore {
    conn: Connection,
}

impl AttendanceStore {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_ATTENDANCE, [])?;
        db.conn.execute(SCHEMA_ATTENDANCE_INDEX, [])?;
        Ok(AttendanceStore { conn: db.conn })
    }

    fn map_row(row: &Row) -> rusqlite::Result<AttendanceRecord> {
        Ok(AttendanceRecord {
            id: Some(row.get(0)?),
            user_id: row.get(1)?,
            training_date: row.get(2)?,
            start_time: row.get(3)?,
            end_time: row.get(4)?,
            status: row.get(5)?,
            blank_time: row.get(6)?,
            note: row.get(7)?,
            deleted: row.get(8)?,
            created_by: row.get(9)?,
            created_at: row.get(10)?,
            modified_by: row.get(11)?,
            modified_at: row.get(12)?,
        })
    }
}

impl AttendanceLedger for AttendanceStore {
    fn find_by_user_and_date(
        &mut self,
        user_id: i64,
        date: NaiveDate,
        include_deleted: bool,
    ) -> Result<Option<AttendanceRecord>> {
        let sql = if include_deleted {
            format!("SELECT {SELECT_COLUMNS} FROM attendance WHERE user_id = ?1 AND training_date = ?2")
        } else {
            format!(
                "SELECT {SELECT_COLUMNS} FROM attendance WHERE user_id = ?1 AND training_date = ?2 AND deleted = 0"
            )
        };
        let record = self
            .conn
            .query_row(&sql, params![user_id, date], Self::map_row)
            .optional()?;
        Ok(record)
    }

    fn find_all_by_user(&mut self, user_id: i64) -> Result<Vec<AttendanceRecord>> {
        let sql = format!(
            "SELECT {SELECT_COLUMNS} FROM attendance WHERE user_id = ?1 AND deleted = 0 ORDER BY training_date"
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let record_iter = stmt.query_map(params![user_id], Self::map_row)?;
        let mut records = Vec::new();
        for record in record_iter {
            records.push(record?);
        }
        Ok(records)
    }

    fn insert(&mut self, record: &AttendanceRecord) -> Result<i64> {
        self.conn.execute(
            INSERT_ATTENDANCE,
            params![
                record.user_id,
                record.training_date,
                record.start_time,
                record.end_time,
                record.status,
                record.blank_time,
                record.note,
                record.deleted,
                record.created_by,
                record.created_at,
                record.modified_by,
                record.modified_at,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn update(&mut self, record: &AttendanceRecord) -> Result<()> {
        self.conn.execute(
            UPDATE_ATTENDANCE,
            params![
                record.user_id,
                record.training_date,
                record.start_time,
                record.end_time,
                record.status,
                record.blank_time,
                record.note,
                record.deleted,
                record.modified_by,
                record.modified_at,
                record.id,
            ],
        )?;
        Ok(())
    }

    fn count_missing_today(&mut self, user_id: i64, date: NaiveDate) -> Result<i64> {
        let count = self
            .conn
            .query_row(COUNT_MISSING, params![user_id, date], |row| row.get(0))?;
        Ok(count)
    }
}
