//! Clock-in and clock-out commands.
//!
//! Both punches share one path: build the context and collaborators, run
//! the service operation, and display either the confirmation or the
//! validation failure from the message catalog. Store failures propagate
//! with their own error chain.

use crate::db::attendance::AttendanceStore;
use crate::libs::clock::SystemClock;
use crate::libs::config::Config;
use crate::libs::context::ActorContext;
use crate::libs::error::AttendanceError;
use crate::libs::punch::{PunchKind, PunchService};
use crate::libs::schedule::ConfigSchedule;
use crate::{msg_error_anyhow, msg_success};
use anyhow::Result;

pub fn cmd(kind: PunchKind) -> Result<()> {
    let config = Config::read()?;
    let ctx = ActorContext::from_config(&config)?;
    let schedule = ConfigSchedule::from_config(&config.schedule.clone().unwrap_or_default())?;
    let mut store = AttendanceStore::new()?;
    let clock = SystemClock;

    let mut service = PunchService::new(&mut store, &schedule, &clock);
    let result = match kind {
        PunchKind::In => service.punch_in(&ctx),
        PunchKind::Out => service.punch_out(&ctx),
    };

    match result {
        Ok(message) => {
            msg_success!(message);
            Ok(())
        }
        Err(err) => Err(fail(err)),
    }
}

/// Validation failures display their catalog message; store failures keep
/// their own chain.
pub fn fail(err: AttendanceError) -> anyhow::Error {
    match err.message() {
        Some(message) => msg_error_anyhow!(message),
        None => err.into(),
    }
}
