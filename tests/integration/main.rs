//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises the logger against mock
//! or in-memory adapters.  No serial hardware is required.

mod logger_service_tests;
