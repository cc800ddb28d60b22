//! Unified error type for the logger.
//!
//! Every fallible operation funnels into [`Error`]. An interrupt is not an
//! error: it is a normal way for the loop to end. Anything that lands here
//! terminates the run.

use std::fmt;
use std::io;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub enum Error {
    /// The serial port could not be opened or configured.
    SerialOpen { port: String, source: io::Error },
    /// A read from the open serial port failed (device unplugged, etc.).
    SerialRead(io::Error),
    /// The output file could not be created.
    OutputOpen { path: PathBuf, source: io::Error },
    /// Writing or flushing a row failed.
    OutputWrite(io::Error),
    /// The interrupt handler could not be registered.
    SignalInstall(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SerialOpen { port, .. } => write!(f, "cannot open serial port {port}"),
            Self::SerialRead(_) => write!(f, "serial read failed"),
            Self::OutputOpen { path, .. } => {
                write!(f, "cannot create output file {}", path.display())
            }
            Self::OutputWrite(_) => write!(f, "writing output row failed"),
            Self::SignalInstall(_) => write!(f, "cannot install interrupt handler"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::SerialOpen { source, .. } | Self::OutputOpen { source, .. } => Some(source),
            Self::SerialRead(e) | Self::OutputWrite(e) | Self::SignalInstall(e) => Some(e),
        }
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Self {
        Self::OutputWrite(e.into())
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
