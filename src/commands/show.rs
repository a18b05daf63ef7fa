//! Display the attendance sheet as a terminal table.

use crate::db::attendance::AttendanceStore;
use crate::libs::blank_time::BlankTimes;
use crate::libs::clock::{Clock, SystemClock};
use crate::libs::config::Config;
use crate::libs::context::ActorContext;
use crate::libs::listing::build_listing;
use crate::libs::messages::Message;
use crate::libs::record::AttendanceLedger;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// User whose sheet to display (defaults to the configured user)
    #[arg(long, short)]
    user: Option<i64>,
}

pub fn cmd(args: ShowArgs) -> Result<()> {
    let config = Config::read()?;
    let ctx = ActorContext::from_config(&config)?;
    let user_id = args.user.unwrap_or(ctx.user_id);

    let mut store = AttendanceStore::new()?;
    let records = store.find_all_by_user(user_id)?;
    if records.is_empty() {
        msg_info!(Message::AttendanceEmpty);
        return Ok(());
    }

    let blank_times = BlankTimes::from_steps(&config.schedule.unwrap_or_default().blank_time_steps);
    let rows = build_listing(&records, &blank_times, SystemClock.now().date());

    let title = if user_id == ctx.user_id {
        ctx.user_name.clone()
    } else {
        format!("user {}", user_id)
    };
    msg_print!(Message::AttendanceTitle(title), true);
    View::attendance(&rows)?;

    Ok(())
}
