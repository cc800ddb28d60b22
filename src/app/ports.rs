//! Port traits: the hexagonal boundary between the logger loop and the
//! outside world.
//!
//! ```text
//!   LineSource ──▶ LoggerService ──▶ RecordSink
//!        Clock ──▶               ──▶ EventSink
//! ```
//!
//! The serial port, the CSV file, the wall clock and the console are all
//! adapters behind these traits, so the loop runs unchanged against
//! scripted mocks in tests.

use std::io;

use chrono::NaiveDateTime;

use crate::reading::Reading;

// ───────────────────────────────────────────────────────────────
// Line source (driven adapter: device → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: one newline-terminated line of raw bytes per call.
pub trait LineSource {
    /// Block for at most the configured read timeout.
    ///
    /// A timeout is not an error: return whatever arrived (possibly
    /// nothing).  Any `Err` ends the run.
    fn read_line(&mut self) -> io::Result<Vec<u8>>;

    /// Release the underlying connection.  Called exactly once by the
    /// service on every exit path; further reads are not attempted.
    fn close(&mut self) {}
}

// ───────────────────────────────────────────────────────────────
// Record sink (driven adapter: domain → output file)
// ───────────────────────────────────────────────────────────────

/// Write-side port for the reading log.
pub trait RecordSink {
    /// Write the fixed header row.  Called once, before any reading.
    fn write_header(&mut self) -> io::Result<()>;

    /// Append one reading row.
    fn append(&mut self, reading: &Reading) -> io::Result<()>;

    /// Push everything written so far through to durable storage.
    fn flush(&mut self) -> io::Result<()>;
}

// ───────────────────────────────────────────────────────────────
// Clock
// ───────────────────────────────────────────────────────────────

/// Wall-clock source for reading timestamps.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

// ───────────────────────────────────────────────────────────────
// Event sink (driven adapter: domain → console / log)
// ───────────────────────────────────────────────────────────────

pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
