//! Bulk merge of edited attendance rows into the ledger.
//!
//! A submitted edit form carries one row per training day. Each row either
//! updates the existing record it names by id or becomes a new record; an
//! id that matches nothing degrades to an insert rather than failing, so a
//! stale form cannot lose rows. Rows are independent and processed in
//! submission order; batch atomicity, if needed, belongs to the store.
//!
//! Times arrive as separate hour and minute fields and only form a time
//! when both halves are present. Status is never copied from the form: it
//! is forced to absent when the row's label says so, derived from whichever
//! times are present otherwise, and cleared to none when the row has
//! neither time nor the absence label.

use crate::libs::clock::Clock;
use crate::libs::context::ActorContext;
use crate::libs::error::AttendanceError;
use crate::libs::messages::labels::STATUS_LABEL_ABSENT;
use crate::libs::messages::Message;
use crate::libs::record::{AttendanceLedger, AttendanceRecord, DailyAttendanceEdit, EditForm};
use crate::libs::schedule::Schedule;
use crate::libs::status::{derive_status, AttendanceStatus};
use crate::libs::training_time::TrainingTime;
use chrono::NaiveDate;
use std::collections::HashMap;

pub struct AttendanceReconciler<'a, L, S, C> {
    ledger: &'a mut L,
    schedule: &'a S,
    clock: &'a C,
}

impl<'a, L: AttendanceLedger, S: Schedule, C: Clock> AttendanceReconciler<'a, L, S, C> {
    pub fn new(ledger: &'a mut L, schedule: &'a S, clock: &'a C) -> Self {
        AttendanceReconciler { ledger, schedule, clock }
    }

    /// Applies every row of the form; each submitted row ends up as exactly
    /// one inserted or updated record.
    ///
    /// A trainee always edits their own rows; any other role acts on the
    /// user the form names.
    pub fn apply(&mut self, ctx: &ActorContext, form: &EditForm) -> Result<Message, AttendanceError> {
        let user_id = if ctx.is_trainee() { ctx.user_id } else { form.user_id };

        // Index the existing rows by id once instead of rescanning per row.
        let existing = self.ledger.find_all_by_user(user_id)?;
        let by_id: HashMap<i64, AttendanceRecord> =
            existing.into_iter().filter_map(|record| record.id.map(|id| (id, record))).collect();

        let now = self.clock.now();
        for edit in &form.rows {
            let training_date = NaiveDate::parse_from_str(&edit.training_date, "%Y-%m-%d")
                .map_err(|_| AttendanceError::DateParse(edit.training_date.clone()))?;

            let matched = edit.record_id.and_then(|id| by_id.get(&id)).cloned();
            let is_new = matched.is_none();
            let mut record =
                matched.unwrap_or_else(|| AttendanceRecord::blank(user_id, training_date, ctx.user_id, now));

            record.user_id = user_id;
            record.start_time = combine(edit.start_hour, edit.start_minute);
            record.end_time = combine(edit.end_hour, edit.end_minute);
            record.blank_time = edit.blank_time_code;
            record.note = edit.note.clone();
            record.deleted = false;
            record.status = self.derive(ctx, edit, &record, training_date)?.code();
            record.modified_by = ctx.user_id;
            record.modified_at = now;

            if is_new {
                record.training_date = training_date;
                record.created_by = ctx.user_id;
                record.created_at = now;
                self.ledger.insert(&record)?;
            } else {
                self.ledger.update(&record)?;
            }
        }

        Ok(Message::AttendanceSaved)
    }

    fn derive(
        &self,
        ctx: &ActorContext,
        edit: &DailyAttendanceEdit,
        record: &AttendanceRecord,
        training_date: NaiveDate,
    ) -> Result<AttendanceStatus, AttendanceError> {
        if edit.status_label == STATUS_LABEL_ABSENT {
            return Ok(AttendanceStatus::Absent);
        }
        let start = parse_optional(&record.start_time)?;
        let end = parse_optional(&record.end_time)?;
        if start.is_none() && end.is_none() {
            return Ok(AttendanceStatus::None);
        }
        let bounds = self.schedule.bounds(ctx.course_id, training_date);
        Ok(derive_status(start.as_ref(), end.as_ref(), &bounds))
    }
}

/// Joins split hour/minute fields into "HH:MM", or empty when either half
/// is missing.
fn combine(hour: Option<u32>, minute: Option<u32>) -> String {
    match (hour, minute) {
        (Some(hour), Some(minute)) => format!("{:02}:{:02}", hour, minute),
        _ => String::new(),
    }
}

fn parse_optional(value: &str) -> Result<Option<TrainingTime>, AttendanceError> {
    if value.is_empty() {
        return Ok(None);
    }
    value.parse().map(Some)
}
