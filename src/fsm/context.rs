//! Shared mutable context threaded through every FSM handler.
//!
//! The logger service writes the stop request and per-line counters here;
//! state handlers read the request and record when the loop stopped.

/// The shared context passed to every state handler function.
#[derive(Debug, Default)]
pub struct LoggerContext {
    // -- Timing --
    /// Ticks elapsed since the current state was entered.
    pub ticks_in_state: u64,
    /// Monotonic total tick count.
    pub total_ticks: u64,

    // -- Control --
    /// Set once the shutdown token has fired.
    pub stop_requested: bool,
    /// Tick at which STOPPED was entered, `None` while running.
    pub stopped_at_tick: Option<u64>,

    // -- Counters --
    /// Rows appended to the output (header excluded).
    pub rows_written: u64,
    /// Reads that produced no row (timeout, blank, undecodable).
    pub lines_skipped: u64,
}

impl LoggerContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_stop(&mut self) {
        self.stop_requested = true;
    }
}
