//! Sensor-side domain logic for the ESP32 IR flame sensor.
//!
//! The board does no framing of its own: each report is one line of text.
//! [`line_decoder`] turns raw bytes into a trimmed line (or nothing), and
//! [`ir_flame`] maps that line onto the binary [`IrStatus`].

pub mod ir_flame;
pub mod line_decoder;

pub use ir_flame::{FIRE_DETECTED_LINE, IrStatus, classify};
pub use line_decoder::{decode_best_effort, decode_line};
