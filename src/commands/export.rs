//! Export the attendance sheet to CSV, JSON, or Excel.

use crate::db::attendance::AttendanceStore;
use crate::libs::blank_time::BlankTimes;
use crate::libs::clock::{Clock, SystemClock};
use crate::libs::config::Config;
use crate::libs::context::ActorContext;
use crate::libs::export::{ExportFormat, Exporter};
use crate::libs::listing::build_listing;
use crate::libs::messages::Message;
use crate::libs::record::AttendanceLedger;
use crate::{msg_success, msg_warning};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output format
    #[arg(long, short, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Output file (defaults to attendance_<date>.<ext> in the working directory)
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// User whose sheet to export (defaults to the configured user)
    #[arg(long, short)]
    user: Option<i64>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let config = Config::read()?;
    let ctx = ActorContext::from_config(&config)?;
    let user_id = args.user.unwrap_or(ctx.user_id);

    let mut store = AttendanceStore::new()?;
    let records = store.find_all_by_user(user_id)?;
    if records.is_empty() {
        msg_warning!(Message::ExportNothing);
        return Ok(());
    }

    let today = SystemClock.now().date();
    let blank_times = BlankTimes::from_steps(&config.schedule.unwrap_or_default().blank_time_steps);
    let rows = build_listing(&records, &blank_times, today);

    let path = Exporter::new(args.format, args.output).export(&rows, today)?;
    msg_success!(Message::ExportSuccess(path.display().to_string()));

    Ok(())
}
