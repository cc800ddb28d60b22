//! Wall-clock adapter.
//!
//! Readings are stamped with host local time, the same clock the operator
//! sees, at second resolution once formatted.

use chrono::{Local, NaiveDateTime};

use crate::app::ports::Clock;

/// Local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
