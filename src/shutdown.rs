//! Operator-requested shutdown.
//!
//! The signal handler does nothing but set an atomic flag; the logger loop
//! polls it between reads.  Tests trigger the same token directly, so the
//! stop path never needs a real process-level interrupt.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::debug;
use signal_hook::consts::TERM_SIGNALS;
use signal_hook::flag;

use crate::error::{Error, Result};

/// Cloneable cancellation token shared between the signal handler and the
/// logger loop.
#[derive(Debug, Clone, Default)]
pub struct ShutdownToken {
    flag: Arc<AtomicBool>,
}

impl ShutdownToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a stop.  Idempotent.
    pub fn trigger(&self) {
        self.flag.store(true, Ordering::Release);
    }

    pub fn is_triggered(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }

    /// Route SIGINT / SIGTERM (Ctrl-C / Ctrl-Break on Windows) to this token.
    ///
    /// A second signal while a stop is already pending exits the process
    /// immediately with status 1, so a wedged read cannot trap the operator.
    pub fn install_interrupt_handler(&self) -> Result<()> {
        for &sig in TERM_SIGNALS {
            flag::register_conditional_shutdown(sig, 1, Arc::clone(&self.flag))
                .map_err(Error::SignalInstall)?;
            flag::register(sig, Arc::clone(&self.flag)).map_err(Error::SignalInstall)?;
        }
        debug!("Interrupt handler installed for signals {:?}", TERM_SIGNALS);
        Ok(())
    }
}
