//! The one record this program produces.

use chrono::NaiveDateTime;

use crate::sensors::IrStatus;

/// `YYYY-MM-DD HH:MM:SS`, local wall-clock time.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// CSV header, written once before any reading.
pub const CSV_HEADER: [&str; 2] = ["Timestamp", "IR Sensor Status"];

/// A single classified line, stamped with the time it was received.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reading {
    pub timestamp: NaiveDateTime,
    pub status: IrStatus,
}

impl Reading {
    pub const fn new(timestamp: NaiveDateTime, status: IrStatus) -> Self {
        Self { timestamp, status }
    }

    /// Timestamp rendered for the CSV and console.
    pub fn timestamp_str(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }

    /// The two CSV fields in header order.
    pub fn to_record(&self) -> [String; 2] {
        [self.timestamp_str(), self.status.as_str().to_owned()]
    }
}
