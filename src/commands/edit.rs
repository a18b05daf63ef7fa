//! Attendance sheet editing through a JSON form.
//!
//! `--template FILE` writes the current rows as an editable form: one entry
//! per training day with the time split into hour and minute fields, the
//! stored break code, note, and status label. After editing the file,
//! `--file FILE` reconciles it back into the ledger: rows keeping their
//! `record_id` update in place, rows without one (or with a stale id)
//! insert. A mentor passes `--user` to act on a trainee's sheet.

use crate::commands::punch::fail;
use crate::db::attendance::AttendanceStore;
use crate::libs::blank_time::BlankTimes;
use crate::libs::clock::SystemClock;
use crate::libs::config::Config;
use crate::libs::context::ActorContext;
use crate::libs::listing::build_edit_form;
use crate::libs::messages::Message;
use crate::libs::reconcile::AttendanceReconciler;
use crate::libs::record::{AttendanceLedger, EditForm};
use crate::libs::schedule::ConfigSchedule;
use crate::{msg_bail_anyhow, msg_success};
use anyhow::Result;
use clap::Args;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Write the current sheet as an editable JSON form
    #[arg(long, short, value_name = "FILE", conflicts_with = "file")]
    template: Option<PathBuf>,

    /// Apply an edited JSON form
    #[arg(long, short, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Target user (privileged editors only; trainees edit their own sheet)
    #[arg(long, short)]
    user: Option<i64>,
}

pub fn cmd(args: EditArgs) -> Result<()> {
    let config = Config::read()?;
    let ctx = ActorContext::from_config(&config)?;
    let target_user = args.user.unwrap_or(ctx.user_id);
    let mut store = AttendanceStore::new()?;

    if let Some(path) = args.template {
        let records = store.find_all_by_user(target_user)?;
        let name = if target_user == ctx.user_id { ctx.user_name.as_str() } else { "" };
        let blank_times = BlankTimes::from_steps(&config.schedule.clone().unwrap_or_default().blank_time_steps);
        let form = build_edit_form(&records, &blank_times, target_user, name);
        fs::write(&path, serde_json::to_string_pretty(&form)?)?;
        msg_success!(Message::EditTemplateWritten(path.display().to_string()));
        return Ok(());
    }

    let Some(path) = args.file else {
        msg_bail_anyhow!(Message::EditNothingToDo);
    };
    let form: EditForm = serde_json::from_str(&fs::read_to_string(&path)?)?;

    let schedule = ConfigSchedule::from_config(&config.schedule.clone().unwrap_or_default())?;
    let clock = SystemClock;
    let mut reconciler = AttendanceReconciler::new(&mut store, &schedule, &clock);
    match reconciler.apply(&ctx, &form) {
        Ok(message) => {
            msg_success!(message);
            Ok(())
        }
        Err(err) => Err(fail(err)),
    }
}
