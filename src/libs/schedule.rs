//! Workday and official-hours oracle.
//!
//! Whether a date is a training day and where the official start/end
//! boundaries sit is external to attendance itself; the core consumes it
//! through the [`Schedule`] trait. The production implementation is built
//! from the schedule section of the configuration file: work weekdays,
//! explicit closed dates, and one official start/end pair.

use crate::libs::config::ScheduleConfig;
use crate::libs::error::AttendanceError;
use crate::libs::training_time::TrainingTime;
use chrono::{Datelike, NaiveDate};
use std::collections::HashSet;

/// Official boundaries a punch pair is judged against.
#[derive(Debug, Clone, Copy)]
pub struct ScheduleBounds {
    pub official_start: TrainingTime,
    pub official_end: TrainingTime,
}

pub trait Schedule {
    fn is_work_day(&self, course_id: i64, date: NaiveDate) -> bool;

    /// Official start/end for a course and date.
    fn bounds(&self, course_id: i64, date: NaiveDate) -> ScheduleBounds;
}

/// Schedule backed by the configuration file.
///
/// A date is a work day when its weekday is configured as working and the
/// date is not listed as closed. Bounds are the same for every date; the
/// course id is accepted for the seam but does not vary the answer here.
#[derive(Debug, Clone)]
pub struct ConfigSchedule {
    bounds: ScheduleBounds,
    work_weekdays: HashSet<u32>,
    closed_dates: HashSet<NaiveDate>,
}

impl ConfigSchedule {
    /// Builds the oracle from its config section; malformed times or dates
    /// in the section surface as typed parse failures.
    pub fn from_config(config: &ScheduleConfig) -> Result<Self, AttendanceError> {
        let official_start: TrainingTime = config.official_start.parse()?;
        let official_end: TrainingTime = config.official_end.parse()?;
        let mut closed_dates = HashSet::new();
        for value in &config.closed_dates {
            let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .map_err(|_| AttendanceError::DateParse(value.clone()))?;
            closed_dates.insert(date);
        }
        Ok(ConfigSchedule {
            bounds: ScheduleBounds {
                official_start,
                official_end,
            },
            work_weekdays: config.work_weekdays.iter().copied().collect(),
            closed_dates,
        })
    }
}

impl Schedule for ConfigSchedule {
    fn is_work_day(&self, _course_id: i64, date: NaiveDate) -> bool {
        self.work_weekdays.contains(&date.weekday().number_from_monday()) && !self.closed_dates.contains(&date)
    }

    fn bounds(&self, _course_id: i64, _date: NaiveDate) -> ScheduleBounds {
        self.bounds
    }
}
