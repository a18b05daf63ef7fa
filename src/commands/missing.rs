//! Count of days still missing a clock-in.
//!
//! Surfaces the ledger count directly; a store failure propagates instead
//! of degrading to zero.

use crate::commands::punch::fail;
use crate::db::attendance::AttendanceStore;
use crate::libs::clock::SystemClock;
use crate::libs::config::Config;
use crate::libs::context::ActorContext;
use crate::libs::messages::Message;
use crate::libs::punch::PunchService;
use crate::libs::schedule::ConfigSchedule;
use crate::msg_info;
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let config = Config::read()?;
    let ctx = ActorContext::from_config(&config)?;
    let schedule = ConfigSchedule::from_config(&config.schedule.clone().unwrap_or_default())?;
    let mut store = AttendanceStore::new()?;
    let clock = SystemClock;

    let mut service = PunchService::new(&mut store, &schedule, &clock);
    match service.count_missing_today(&ctx) {
        Ok(count) => {
            msg_info!(Message::MissingToday(count));
            Ok(())
        }
        Err(err) => Err(fail(err)),
    }
}
