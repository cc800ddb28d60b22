//! firelog: host-side logger for the ESP32 IR fire sensor.
//!
//! Reads newline-delimited status lines from the board's serial port,
//! classifies each one as fire / no fire, and appends a timestamped row to
//! a CSV file, flushing after every row.  Exposes the pure-logic modules
//! for integration testing; the binary in `main.rs` wires the adapters.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod error;
pub mod fsm;
pub mod reading;
pub mod sensors;
pub mod shutdown;

pub use error::{Error, Result};
