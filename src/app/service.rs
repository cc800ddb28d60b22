//! Logger service: the hexagonal core.
//!
//! [`LoggerService`] owns the RUNNING/STOPPED state machine and its
//! context.  All I/O flows through port traits passed in at call sites,
//! so the whole read-classify-write cycle runs against mocks in tests.
//!
//! ```text
//!  LineSource ──▶ ┌───────────────────────────┐ ──▶ RecordSink
//!       Clock ──▶ │       LoggerService        │ ──▶ EventSink
//!                 │ decode · classify · FSM    │
//!                 └───────────────────────────┘
//! ```

use std::io;

use chrono::NaiveDateTime;
use log::{debug, warn};

use crate::error::{Error, Result};
use crate::fsm::context::LoggerContext;
use crate::fsm::states::build_state_table;
use crate::fsm::{Fsm, StateId};
use crate::reading::Reading;
use crate::sensors::{classify, decode_line};
use crate::shutdown::ShutdownToken;

use super::events::AppEvent;
use super::ports::{Clock, EventSink, LineSource, RecordSink};

/// What a single loop iteration did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// A row was written and flushed.
    Logged(Reading),
    /// Nothing usable was read; no row, no timestamp.
    Skipped,
    /// The loop has stopped.
    Stopped,
}

/// Totals reported when [`LoggerService::run`] returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub rows_written: u64,
    pub lines_skipped: u64,
    pub final_state: StateId,
}

// ───────────────────────────────────────────────────────────────
// LoggerService
// ───────────────────────────────────────────────────────────────

pub struct LoggerService {
    fsm: Fsm,
    ctx: LoggerContext,
    started: bool,
    last_timestamp: Option<NaiveDateTime>,
}

impl Default for LoggerService {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerService {
    pub fn new() -> Self {
        Self {
            fsm: Fsm::new(build_state_table(), StateId::Running),
            ctx: LoggerContext::new(),
            started: false,
            last_timestamp: None,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Write the header row and enter RUNNING.
    pub fn start(&mut self, sink: &mut impl RecordSink, events: &mut impl EventSink) -> Result<()> {
        sink.write_header().map_err(Error::OutputWrite)?;
        sink.flush().map_err(Error::OutputWrite)?;
        self.fsm.start(&mut self.ctx);
        self.started = true;
        events.emit(&AppEvent::Listening);
        Ok(())
    }

    /// Run until the shutdown token fires or an I/O error occurs.
    ///
    /// The line source is closed on every exit path before this returns.
    pub fn run(
        &mut self,
        source: &mut impl LineSource,
        sink: &mut impl RecordSink,
        clock: &impl Clock,
        events: &mut impl EventSink,
        shutdown: &ShutdownToken,
    ) -> Result<RunSummary> {
        let outcome = self.run_until_stopped(source, sink, clock, events, shutdown);
        source.close();
        outcome?;
        Ok(self.summary())
    }

    fn run_until_stopped(
        &mut self,
        source: &mut impl LineSource,
        sink: &mut impl RecordSink,
        clock: &impl Clock,
        events: &mut impl EventSink,
        shutdown: &ShutdownToken,
    ) -> Result<()> {
        if !self.started {
            self.start(sink, events)?;
        }
        while self.step(source, sink, clock, events, shutdown)? != StepOutcome::Stopped {}
        Ok(())
    }

    // ── Per-line cycle ────────────────────────────────────────

    /// One iteration: check for stop, read, decode, classify, write, flush.
    pub fn step(
        &mut self,
        source: &mut impl LineSource,
        sink: &mut impl RecordSink,
        clock: &impl Clock,
        events: &mut impl EventSink,
        shutdown: &ShutdownToken,
    ) -> Result<StepOutcome> {
        if self.fsm.is_stopped() {
            return Ok(StepOutcome::Stopped);
        }

        if shutdown.is_triggered() {
            self.ctx.request_stop();
        }
        self.fsm.tick(&mut self.ctx);
        if self.fsm.is_stopped() {
            events.emit(&AppEvent::Stopped {
                rows_written: self.ctx.rows_written,
            });
            return Ok(StepOutcome::Stopped);
        }

        let raw = read_raw(source)?;
        let Some(line) = decode_line(&raw) else {
            self.ctx.lines_skipped += 1;
            return Ok(StepOutcome::Skipped);
        };
        debug!("line: {:?}", line);

        let timestamp = clock.now();
        if self.last_timestamp.is_some_and(|last| timestamp < last) {
            warn!("Wall clock went backwards; rows will be out of order");
        }
        self.last_timestamp = Some(timestamp);

        let reading = Reading::new(timestamp, classify(&line));
        sink.append(&reading).map_err(Error::OutputWrite)?;
        sink.flush().map_err(Error::OutputWrite)?;
        self.ctx.rows_written += 1;

        events.emit(&AppEvent::Logged(reading));
        Ok(StepOutcome::Logged(reading))
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn state(&self) -> StateId {
        self.fsm.current_state()
    }

    pub fn rows_written(&self) -> u64 {
        self.ctx.rows_written
    }

    pub fn lines_skipped(&self) -> u64 {
        self.ctx.lines_skipped
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            rows_written: self.ctx.rows_written,
            lines_skipped: self.ctx.lines_skipped,
            final_state: self.fsm.current_state(),
        }
    }
}

/// Read one raw line, folding timeouts and signal-interrupted reads into an
/// empty line.
fn read_raw(source: &mut impl LineSource) -> Result<Vec<u8>> {
    match source.read_line() {
        Ok(bytes) => Ok(bytes),
        Err(e) if matches!(e.kind(), io::ErrorKind::TimedOut | io::ErrorKind::Interrupted) => {
            Ok(Vec::new())
        }
        Err(e) => {
            warn!("Serial read failed: {}", e);
            Err(Error::SerialRead(e))
        }
    }
}
