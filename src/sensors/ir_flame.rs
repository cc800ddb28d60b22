//! IR flame sensor status classifier.
//!
//! The ESP32 sketch prints `Fire Detected` on its own line whenever the
//! IR flame module pulls its digital output low. Anything else it prints
//! (the idle message, boot chatter, garbage after a reset) is treated as
//! "no fire". There is no third state.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Exact line the firmware sends when the flame sensor trips.
pub const FIRE_DETECTED_LINE: &str = "Fire Detected";

/// Binary status recorded for every non-empty line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IrStatus {
    #[serde(rename = "Fire Detected")]
    FireDetected,
    #[serde(rename = "No Fire Detected")]
    NoFireDetected,
}

impl IrStatus {
    /// Text written to the CSV status column.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FireDetected => "Fire Detected",
            Self::NoFireDetected => "No Fire Detected",
        }
    }

    pub const fn is_fire(self) -> bool {
        matches!(self, Self::FireDetected)
    }
}

impl fmt::Display for IrStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify one already-trimmed, non-empty line.
///
/// Only an exact, case-sensitive match counts as a fire. Unexpected
/// payloads are not rejected; they map to [`IrStatus::NoFireDetected`].
pub fn classify(line: &str) -> IrStatus {
    if line == FIRE_DETECTED_LINE {
        IrStatus::FireDetected
    } else {
        IrStatus::NoFireDetected
    }
}
