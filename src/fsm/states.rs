//! Concrete state handler functions and table builder.
//!
//! ```text
//!  RUNNING ──[stop requested]──▶ STOPPED (terminal)
//! ```

use super::context::LoggerContext;
use super::{StateDescriptor, StateId};
use log::{debug, info};

/// Build the static state table.  Called once at startup.
pub fn build_state_table() -> [StateDescriptor; StateId::COUNT] {
    [
        // Index 0: Running
        StateDescriptor {
            id: StateId::Running,
            name: "Running",
            on_enter: Some(running_enter),
            on_exit: None,
            on_update: running_update,
        },
        // Index 1: Stopped
        StateDescriptor {
            id: StateId::Stopped,
            name: "Stopped",
            on_enter: Some(stopped_enter),
            on_exit: None,
            on_update: stopped_update,
        },
    ]
}

// ═══════════════════════════════════════════════════════════════════════════
//  RUNNING state
// ═══════════════════════════════════════════════════════════════════════════

fn running_enter(ctx: &mut LoggerContext) {
    ctx.stopped_at_tick = None;
    debug!("Running: read-classify-write loop active");
}

fn running_update(ctx: &mut LoggerContext) -> Option<StateId> {
    if ctx.stop_requested {
        return Some(StateId::Stopped);
    }
    None
}

// ═══════════════════════════════════════════════════════════════════════════
//  STOPPED state
// ═══════════════════════════════════════════════════════════════════════════

fn stopped_enter(ctx: &mut LoggerContext) {
    ctx.stopped_at_tick = Some(ctx.total_ticks);
    info!(
        "Stopped after {} rows ({} empty reads)",
        ctx.rows_written, ctx.lines_skipped
    );
}

fn stopped_update(_ctx: &mut LoggerContext) -> Option<StateId> {
    None
}
