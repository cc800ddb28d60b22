//! Outbound application events.
//!
//! The [`LoggerService`](super::service::LoggerService) emits these through
//! the [`EventSink`](super::ports::EventSink) port.  The console adapter
//! turns them into the operator's progress lines.

use crate::reading::Reading;

/// Structured events emitted by the logger core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Header written; the loop is about to start reading.
    Listening,

    /// A row was appended and flushed.
    Logged(Reading),

    /// The loop stopped on operator request.
    Stopped { rows_written: u64 },
}
