//! Best-effort decoding of raw serial lines.
//!
//! The USB-UART bridge occasionally delivers half a UTF-8 sequence after a
//! board reset, or line noise while the cable is being seated. None of that
//! may fail an iteration: invalid sequences are dropped and whatever valid
//! text remains is used.

/// Decode `bytes` as UTF-8, silently dropping invalid sequences.
///
/// Unlike [`String::from_utf8_lossy`] no replacement characters are
/// inserted, so a line made entirely of garbage decodes to an empty string.
pub fn decode_best_effort(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    out
}

/// Decode and trim one raw line.
///
/// Returns `None` when nothing but whitespace (or undecodable bytes) was
/// received, which is also what a read timeout produces.
pub fn decode_line(bytes: &[u8]) -> Option<String> {
    let text = decode_best_effort(bytes);
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}
