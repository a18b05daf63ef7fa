//! Single-punch operations against today's ledger row.
//!
//! A day moves through three states for a user: not started (no row, or a
//! row with an empty start), clocked in (start set, end empty), and clocked
//! out (both set, terminal). [`PunchService`] owns the transitions and runs
//! every pre-condition before touching the store, so a validation failure
//! never leaves a partial write behind.
//!
//! The `(user, date)` uniqueness constraint in the store remains the
//! backstop for two clock-ins racing each other; a constraint violation
//! surfaces as a store error distinct from the business failures here.

use crate::libs::clock::Clock;
use crate::libs::context::ActorContext;
use crate::libs::error::AttendanceError;
use crate::libs::messages::Message;
use crate::libs::record::{AttendanceLedger, AttendanceRecord};
use crate::libs::schedule::Schedule;
use crate::libs::status::derive_status;
use crate::libs::training_time::TrainingTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PunchKind {
    In,
    Out,
}

pub struct PunchService<'a, L, S, C> {
    ledger: &'a mut L,
    schedule: &'a S,
    clock: &'a C,
}

impl<'a, L: AttendanceLedger, S: Schedule, C: Clock> PunchService<'a, L, S, C> {
    pub fn new(ledger: &'a mut L, schedule: &'a S, clock: &'a C) -> Self {
        PunchService { ledger, schedule, clock }
    }

    /// Runs the pre-punch checks without mutating anything.
    ///
    /// Checked in order: trainee role, work day, then the state the punch
    /// kind requires. Clock-out additionally rejects an end instant earlier
    /// than the stored start.
    pub fn validate(&mut self, ctx: &ActorContext, kind: PunchKind) -> Result<(), AttendanceError> {
        if !ctx.is_trainee() {
            return Err(AttendanceError::Authorization);
        }
        let now = self.clock.now();
        if !self.schedule.is_work_day(ctx.course_id, now.date()) {
            return Err(AttendanceError::NotWorkDay);
        }
        let record = self.ledger.find_by_user_and_date(ctx.user_id, now.date(), false)?;
        match kind {
            PunchKind::In => {
                if record.is_some_and(|r| !r.start_time.is_empty()) {
                    return Err(AttendanceError::AlreadyPunched);
                }
            }
            PunchKind::Out => {
                let Some(record) = record else {
                    return Err(AttendanceError::MissingClockIn);
                };
                if record.start_time.is_empty() {
                    return Err(AttendanceError::MissingClockIn);
                }
                if !record.end_time.is_empty() {
                    return Err(AttendanceError::AlreadyPunched);
                }
                let start: TrainingTime = record.start_time.parse()?;
                let end = TrainingTime::from_datetime(now);
                if start > end {
                    return Err(AttendanceError::InvalidTimeRange);
                }
            }
        }
        Ok(())
    }

    /// Clocks in for today, creating the row or filling an empty one.
    pub fn punch_in(&mut self, ctx: &ActorContext) -> Result<Message, AttendanceError> {
        self.validate(ctx, PunchKind::In)?;

        let now = self.clock.now();
        let today = now.date();
        let start = TrainingTime::from_datetime(now);
        let bounds = self.schedule.bounds(ctx.course_id, today);
        let status = derive_status(Some(&start), None, &bounds);

        match self.ledger.find_by_user_and_date(ctx.user_id, today, false)? {
            None => {
                let mut record = AttendanceRecord::blank(ctx.user_id, today, ctx.user_id, now);
                record.start_time = start.to_string();
                record.status = status.code();
                self.ledger.insert(&record)?;
            }
            Some(mut record) => {
                // A row without a start can exist after a reconciled edit;
                // fill it in place, preserving its other fields.
                record.start_time = start.to_string();
                record.status = status.code();
                record.deleted = false;
                record.modified_by = ctx.user_id;
                record.modified_at = now;
                self.ledger.update(&record)?;
            }
        }

        Ok(Message::AttendanceSaved)
    }

    /// Clocks out for today, recomputing the status from the stored start
    /// and the captured end.
    pub fn punch_out(&mut self, ctx: &ActorContext) -> Result<Message, AttendanceError> {
        self.validate(ctx, PunchKind::Out)?;

        let now = self.clock.now();
        let today = now.date();
        let end = TrainingTime::from_datetime(now);

        // Validation guarantees the row exists and holds a start time.
        let Some(mut record) = self.ledger.find_by_user_and_date(ctx.user_id, today, false)? else {
            return Err(AttendanceError::MissingClockIn);
        };
        let start: TrainingTime = record.start_time.parse()?;
        let bounds = self.schedule.bounds(ctx.course_id, today);
        let status = derive_status(Some(&start), Some(&end), &bounds);

        record.end_time = end.to_string();
        record.status = status.code();
        record.deleted = false;
        record.modified_by = ctx.user_id;
        record.modified_at = now;
        self.ledger.update(&record)?;

        Ok(Message::AttendanceSaved)
    }

    /// Count of days on or before today still missing a clock-in.
    ///
    /// Store failures propagate; there is no silent zero fallback.
    pub fn count_missing_today(&mut self, ctx: &ActorContext) -> Result<i64, AttendanceError> {
        let today = self.clock.now().date();
        Ok(self.ledger.count_missing_today(ctx.user_id, today)?)
    }
}
