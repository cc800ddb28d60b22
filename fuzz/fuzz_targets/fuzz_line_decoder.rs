//! Fuzz target: `decode_line` + `classify`
//!
//! Drives arbitrary byte sequences through the serial line decoder and
//! classifier, asserting that decoding never panics, never grows the input,
//! and only ever yields trimmed non-empty text.
//!
//! cargo fuzz run fuzz_line_decoder

#![no_main]

use firelog::sensors::{IrStatus, classify, decode_best_effort, decode_line};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    assert!(decode_best_effort(data).len() <= data.len());

    if let Some(line) = decode_line(data) {
        assert!(!line.is_empty(), "decoder must not yield an empty line");
        assert_eq!(line.trim(), line, "decoder must trim");

        let status = classify(&line);
        assert_eq!(status == IrStatus::FireDetected, line == "Fire Detected");
    }
});
