//! Word boundary scanning.
//!
//! A word boundary is found by first skipping a run of whitespace and then
//! the run of non-whitespace next to it. Whitespace is the Unicode
//! `White_Space` set, so tabs, no-break spaces and every space separator
//! count, not just ASCII blanks.

use crate::buffer::TextBuffer;

fn is_space_at(buffer: &TextBuffer, idx: usize) -> bool {
    buffer.char_at(idx).is_some_and(char::is_whitespace)
}

/// Scans left from `start` and returns the index where the preceding word
/// begins. Returns 0 when no boundary exists before `start`.
pub fn word_boundary_backward(buffer: &TextBuffer, start: usize) -> usize {
    let mut pos = start.min(buffer.len_chars());
    while pos > 0 && is_space_at(buffer, pos - 1) {
        pos -= 1;
    }
    while pos > 0 && !is_space_at(buffer, pos - 1) {
        pos -= 1;
    }
    pos
}

/// Scans right from `start` and returns the index just past the following
/// word, capped at the buffer length.
pub fn word_boundary_forward(buffer: &TextBuffer, start: usize) -> usize {
    let len = buffer.len_chars();
    let mut pos = start.min(len);
    while pos < len && is_space_at(buffer, pos) {
        pos += 1;
    }
    while pos < len && !is_space_at(buffer, pos) {
        pos += 1;
    }
    pos
}
