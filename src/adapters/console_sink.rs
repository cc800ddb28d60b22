//! Console event sink adapter.
//!
//! Implements [`EventSink`] by printing the operator-facing progress lines
//! to stdout.  These are for a human watching the terminal and are printed
//! regardless of the `RUST_LOG` level; diagnostics go through `log`.

use std::io::{self, Stdout, Write};

use log::warn;

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

pub struct ConsoleEventSink<W: Write = Stdout> {
    out: W,
}

impl ConsoleEventSink {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for ConsoleEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> ConsoleEventSink<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_event(&mut self, event: &AppEvent) -> io::Result<()> {
        match event {
            AppEvent::Listening => {
                writeln!(self.out, "Listening for ESP32 IR sensor data...")?;
            }
            AppEvent::Logged(reading) => {
                writeln!(
                    self.out,
                    "Logged: {}, IR Status: {}",
                    reading.timestamp_str(),
                    reading.status
                )?;
            }
            AppEvent::Stopped { .. } => {
                writeln!(self.out, "\nStopped by user.")?;
            }
        }
        self.out.flush()
    }
}

impl<W: Write> EventSink for ConsoleEventSink<W> {
    fn emit(&mut self, event: &AppEvent) {
        // A closed stdout must not take the logger down with it.
        if let Err(e) = self.write_event(event) {
            warn!("Console write failed: {}", e);
        }
    }
}
