//! Text buffer implementation using ropey.
//!
//! All indices are character (Unicode code point) indices, never bytes.

use crate::word;
use ropey::Rope;

/// The text of a single input field, backed by a rope.
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    rope: Rope,
}

impl TextBuffer {
    /// Creates a new empty text buffer.
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Creates a text buffer from a string.
    pub fn from_str(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Returns the total number of characters in the buffer.
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Returns true if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Inserts a string at the given character index.
    pub fn insert(&mut self, char_idx: usize, text: &str) {
        let idx = char_idx.min(self.len_chars());
        self.rope.insert(idx, text);
    }

    /// Removes text in the given character range.
    pub fn remove(&mut self, start: usize, end: usize) {
        let start = start.min(self.len_chars());
        let end = end.min(self.len_chars());
        if start < end {
            self.rope.remove(start..end);
        }
    }

    /// Drops everything from `char_idx` to the end of the buffer.
    pub fn truncate(&mut self, char_idx: usize) {
        let len = self.len_chars();
        self.remove(char_idx, len);
    }

    /// Empties the buffer.
    pub fn clear(&mut self) {
        self.rope = Rope::new();
    }

    /// Returns the character at the given index, if it exists.
    pub fn char_at(&self, char_idx: usize) -> Option<char> {
        if char_idx < self.len_chars() {
            Some(self.rope.char(char_idx))
        } else {
            None
        }
    }

    /// Returns the text in `[start, end)` as a string.
    /// Out-of-range bounds are clamped.
    pub fn slice(&self, start: usize, end: usize) -> String {
        let end = end.min(self.len_chars());
        let start = start.min(end);
        self.rope.slice(start..end).to_string()
    }

    /// Start of the word before `char_idx`. See [`word::word_boundary_backward`].
    pub fn find_word_boundary_left(&self, char_idx: usize) -> usize {
        word::word_boundary_backward(self, char_idx)
    }

    /// End of the word after `char_idx`. See [`word::word_boundary_forward`].
    pub fn find_word_boundary_right(&self, char_idx: usize) -> usize {
        word::word_boundary_forward(self, char_idx)
    }

    /// Returns the entire buffer as a string.
    pub fn to_string(&self) -> String {
        self.rope.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer() {
        let buf = TextBuffer::new();
        assert!(buf.is_empty());
        assert_eq!(buf.len_chars(), 0);
    }

    #[test]
    fn test_len_counts_code_points() {
        let buf = TextBuffer::from_str("a€b😀");
        assert_eq!(buf.len_chars(), 4);
        assert_eq!(buf.char_at(1), Some('€'));
        assert_eq!(buf.char_at(3), Some('😀'));
        assert_eq!(buf.char_at(4), None);
    }

    #[test]
    fn test_insert_string() {
        let mut buf = TextBuffer::new();
        buf.insert(0, "hello");
        buf.insert(5, " world");
        assert_eq!(buf.to_string(), "hello world");
    }

    #[test]
    fn test_insert_past_end_appends() {
        let mut buf = TextBuffer::from_str("ab");
        buf.insert(10, "c");
        assert_eq!(buf.to_string(), "abc");
    }

    #[test]
    fn test_remove() {
        let mut buf = TextBuffer::from_str("hello world");
        buf.remove(5, 11);
        assert_eq!(buf.to_string(), "hello");

        // Empty and inverted ranges are ignored
        buf.remove(3, 3);
        buf.remove(4, 2);
        assert_eq!(buf.to_string(), "hello");
    }

    #[test]
    fn test_truncate_and_clear() {
        let mut buf = TextBuffer::from_str("hello world");
        buf.truncate(5);
        assert_eq!(buf.to_string(), "hello");
        buf.truncate(99);
        assert_eq!(buf.to_string(), "hello");
        buf.clear();
        assert!(buf.is_empty());
    }

    #[test]
    fn test_slice() {
        let buf = TextBuffer::from_str("héllo wörld");
        assert_eq!(buf.slice(0, 5), "héllo");
        assert_eq!(buf.slice(6, 100), "wörld");
        assert_eq!(buf.slice(8, 3), "");
    }
}
