//! Wall-clock access behind a seam.
//!
//! Punch and reconciliation operations capture "now" exactly once per use
//! through this trait, so tests can pin the instant instead of racing the
//! real clock.

use chrono::{Local, NaiveDateTime};

pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// The production clock: local wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
