//! Logger configuration parameters
//!
//! The logger takes no flags, environment variables, or config file: these
//! are the fixed values it runs with. The struct exists so the values have
//! names and so tests can point the adapters somewhere else.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Serial port the ESP32 dev board enumerates as.
#[cfg(windows)]
pub const DEFAULT_PORT: &str = "COM4";
/// Serial port the ESP32 dev board enumerates as.
#[cfg(not(windows))]
pub const DEFAULT_PORT: &str = "/dev/ttyUSB0";

/// Baud rate the firmware's `Serial.begin()` uses.
pub const DEFAULT_BAUD_RATE: u32 = 115_200;

/// Output file, created in the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "esp32_ir_data.csv";

/// Core logger configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    // --- Serial ---
    /// Serial device identifier
    pub port: String,
    /// Line speed in baud
    pub baud_rate: u32,
    /// Per-read timeout (milliseconds); a timed-out read yields no line
    pub read_timeout_ms: u64,
    /// Delay after opening the port before the first read (milliseconds)
    pub settle_delay_ms: u64,

    // --- Output ---
    /// CSV file, truncated at startup
    pub output_path: PathBuf,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT.to_owned(),
            baud_rate: DEFAULT_BAUD_RATE,
            read_timeout_ms: 1000,
            // Opening the port resets the board; give it time to boot.
            settle_delay_ms: 2000,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

impl LoggerConfig {
    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}
