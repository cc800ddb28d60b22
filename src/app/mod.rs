//! Application core: pure logger logic, zero direct I/O.
//!
//! The read-classify-write cycle and its stop handling live here.  All
//! interaction with the serial port, the CSV file, the clock and the
//! console happens through **port traits** defined in [`ports`].

pub mod events;
pub mod ports;
pub mod service;
