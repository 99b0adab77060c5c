//! The editing state machine for one focused input field.

use crate::action::InputAction;
use crate::buffer::TextBuffer;
use crate::config::FieldConfig;
use crate::selection::Selection;
use crate::sink::{ClientId, PresentationSink};
use crate::state::EditingState;

/// A single-field editor synchronized with a presentation sink.
///
/// Created when a field gains focus and dropped when it loses it. Every
/// operation is total: positions that would leave the buffer are clamped and
/// deletions at a boundary do nothing. After an operation changes the buffer
/// or selection, exactly one editing-state event is sent to the sink.
///
/// Cursor-relative operations work from `base`, the anchor of the selection.
#[derive(Debug)]
pub struct TextField<S: PresentationSink> {
    /// The text buffer.
    buffer: TextBuffer,
    /// Base/extent selection.
    selection: Selection,
    /// Host-supplied settings.
    config: FieldConfig,
    /// Where events go.
    sink: S,
    /// Number of editing-state events emitted so far.
    revision: u64,
}

impl<S: PresentationSink> TextField<S> {
    /// Creates an empty field with a collapsed selection at 0.
    pub fn new(config: FieldConfig, sink: S) -> Self {
        Self {
            buffer: TextBuffer::new(),
            selection: Selection::default(),
            config,
            sink,
            revision: 0,
        }
    }

    /// Returns the client id events are tagged with.
    pub fn client_id(&self) -> ClientId {
        self.config.client_id
    }

    /// Returns the buffer contents as a string.
    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    /// Length of the buffer in code points.
    pub fn len(&self) -> usize {
        self.buffer.len_chars()
    }

    /// Returns true if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns the current base/extent pair.
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Returns true if there is an active ranged selection.
    pub fn has_selection(&self) -> bool {
        self.selection.has_selection()
    }

    /// Number of editing-state events emitted so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns a reference to the sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Snapshot of the current state as reported to the sink.
    pub fn editing_state(&self) -> EditingState {
        EditingState::new(
            self.buffer.to_string(),
            self.selection.base,
            self.selection.extent,
        )
    }

    /// Clamps the selection and reports the new state.
    fn sync(&mut self) {
        self.selection.clamp(self.buffer.len_chars());
        let state = self.editing_state();
        self.sink.update_editing_state(self.config.client_id, &state);
        self.revision += 1;
    }

    // ==================== Host Synchronization ====================

    /// Replaces the buffer and selection with the host's view of the field.
    ///
    /// The host already knows this state, so nothing is emitted.
    pub fn set_editing_state(&mut self, text: &str, base: usize, extent: usize) {
        self.buffer = TextBuffer::from_str(text);
        self.selection = Selection::with_range(base, extent);
        self.selection.clamp(self.buffer.len_chars());
    }

    /// Reports `action` to the host. The field itself is unchanged.
    pub fn perform_action(&mut self, action: InputAction) {
        self.sink.perform_action(self.config.client_id, action);
    }

    /// Reports the configured input action, e.g. when enter is pressed.
    pub fn submit(&mut self) {
        let action = self.config.input_action;
        self.perform_action(action);
    }

    // ==================== Text Editing ====================

    /// Inserts text at the base, replacing any selected text first.
    pub fn insert_text(&mut self, text: &str) {
        self.delete_selection_internal();

        let pos = self.selection.base.min(self.buffer.len_chars());
        self.buffer.insert(pos, text);
        self.selection.collapse_to(pos + text.chars().count());
        self.sync();
    }

    /// Deletes the selected range without reporting it.
    /// Returns true if there was a selection to delete.
    fn delete_selection_internal(&mut self) -> bool {
        if let Some((start, end)) = self.selection.selected_range() {
            self.buffer.remove(start, end);
            self.selection.collapse_to(start);
            true
        } else {
            false
        }
    }

    /// Deletes the selected range and collapses to where it started.
    ///
    /// Returns false, without emitting anything, if the selection is collapsed.
    pub fn remove_selected_text(&mut self) -> bool {
        if self.delete_selection_internal() {
            self.sync();
            true
        } else {
            false
        }
    }

    /// Returns the ordered selection bounds and the text between them.
    pub fn selected_text(&self) -> (usize, usize, String) {
        let (start, end) = self.selection.range();
        (start, end, self.buffer.slice(start, end))
    }

    // ==================== Deletion ====================

    /// Deletes the character at the base (delete key).
    pub fn delete_forward_char(&mut self) {
        let pos = self.selection.base;
        if pos < self.buffer.len_chars() {
            self.buffer.remove(pos, pos + 1);
            self.sync();
        }
    }

    /// Deletes from the base to the end of the next word.
    pub fn delete_forward_word(&mut self) {
        let pos = self.selection.base;
        let end = self.buffer.find_word_boundary_right(pos);
        self.buffer.remove(pos, end);
        self.sync();
    }

    /// Deletes everything after the base.
    pub fn delete_to_line_end(&mut self) {
        self.buffer.truncate(self.selection.base);
        self.sync();
    }

    /// Deletes the character before the base (backspace).
    pub fn backspace_char(&mut self) {
        let pos = self.selection.base.min(self.buffer.len_chars());
        if !self.buffer.is_empty() && pos > 0 {
            self.buffer.remove(pos - 1, pos);
            self.selection.collapse_to(pos - 1);
            self.sync();
        }
    }

    /// Deletes from the start of the previous word up to the base.
    pub fn backspace_word(&mut self) {
        let pos = self.selection.base.min(self.buffer.len_chars());
        if !self.buffer.is_empty() && pos > 0 {
            let start = self.buffer.find_word_boundary_left(pos);
            self.buffer.remove(start, pos);
            self.selection.collapse_to(start);
            self.sync();
        }
    }

    /// Clears the whole field.
    ///
    /// A field has a single line, so "to line start" drops all of it
    /// regardless of where the cursor is.
    pub fn backspace_to_line_start(&mut self) {
        self.buffer.clear();
        self.selection.collapse_to(0);
        self.sync();
    }

    // ==================== Cursor Movement ====================

    /// Collapses to the start of the field.
    pub fn move_home(&mut self) {
        self.selection.collapse_to(0);
        self.sync();
    }

    /// Collapses to the end of the field.
    pub fn move_end(&mut self) {
        self.selection.collapse_to(self.buffer.len_chars());
        self.sync();
    }

    /// Extends the selection from the base to the start of the field.
    pub fn move_home_select(&mut self) {
        self.selection.extend_to(0);
        self.sync();
    }

    /// Extends the selection from the base to the end of the field.
    pub fn move_end_select(&mut self) {
        self.selection.extend_to(self.buffer.len_chars());
        self.sync();
    }

    /// Moves the extent one character left.
    pub fn move_left(&mut self) {
        let pos = self.selection.extent.saturating_sub(1);
        self.selection.extend_to(pos);
        self.sync();
    }

    /// Moves the extent one character right.
    pub fn move_right(&mut self) {
        let pos = (self.selection.extent + 1).min(self.buffer.len_chars());
        self.selection.extend_to(pos);
        self.sync();
    }

    /// Collapses to the start of the word before the base.
    pub fn move_left_word(&mut self) {
        let pos = self.buffer.find_word_boundary_left(self.selection.base);
        self.selection.collapse_to(pos);
        self.sync();
    }

    /// Collapses to the end of the word after the base.
    pub fn move_right_word(&mut self) {
        let pos = self.buffer.find_word_boundary_right(self.selection.base);
        self.selection.collapse_to(pos);
        self.sync();
    }

    /// Extends the selection leftward by one word.
    ///
    /// Scans from the extent when a selection exists, otherwise from the
    /// base. The base never moves.
    pub fn move_left_line(&mut self) {
        let from = self.scan_origin();
        let pos = self.buffer.find_word_boundary_left(from);
        self.selection.extend_to(pos);
        self.sync();
    }

    /// Extends the selection rightward by one word. See [`Self::move_left_line`].
    pub fn move_right_line(&mut self) {
        let from = self.scan_origin();
        let pos = self.buffer.find_word_boundary_right(from);
        self.selection.extend_to(pos);
        self.sync();
    }

    fn scan_origin(&self) -> usize {
        if self.selection.has_selection() {
            self.selection.extent
        } else {
            self.selection.base
        }
    }

    /// Left arrow: collapses an active selection onto its base, otherwise
    /// moves the caret one character left.
    pub fn move_left_reset(&mut self) {
        if self.selection.has_selection() {
            self.selection.collapse_to(self.selection.base);
        } else {
            let pos = self.selection.base.saturating_sub(1);
            self.selection.collapse_to(pos);
        }
        self.sync();
    }

    /// Right arrow: collapses an active selection onto its base, otherwise
    /// moves the caret one character right.
    pub fn move_right_reset(&mut self) {
        if self.selection.has_selection() {
            self.selection.collapse_to(self.selection.base);
        } else {
            let pos = (self.selection.base + 1).min(self.buffer.len_chars());
            self.selection.collapse_to(pos);
        }
        self.sync();
    }

    // ==================== Selection ====================

    /// Selects the whole field.
    pub fn select_all(&mut self) {
        self.selection = Selection::with_range(0, self.buffer.len_chars());
        self.sync();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{RecordingSink, SinkEvent};

    fn field(text: &str, base: usize, extent: usize) -> TextField<RecordingSink> {
        let mut field = TextField::new(FieldConfig::new(1), RecordingSink::new());
        field.set_editing_state(text, base, extent);
        field
    }

    fn assert_state(field: &TextField<RecordingSink>, text: &str, base: usize, extent: usize) {
        assert_eq!(field.text(), text);
        assert_eq!(field.selection(), Selection::with_range(base, extent));
        let last = field.sink().last_state().expect("an event was emitted");
        assert_eq!(last.text, text);
        assert_eq!(last.selection_base, base);
        assert_eq!(last.selection_extent, extent);
    }

    #[test]
    fn test_new_field_is_empty() {
        let field = TextField::new(FieldConfig::new(3), RecordingSink::new());
        assert!(field.is_empty());
        assert_eq!(field.selection(), Selection::new(0));
        assert_eq!(field.client_id(), 3);
        assert!(field.sink().is_empty());
    }

    #[test]
    fn test_set_editing_state_is_silent_and_clamped() {
        let field = field("abc", 10, 2);
        assert_eq!(field.selection(), Selection::with_range(3, 2));
        assert!(field.sink().is_empty());
        assert_eq!(field.revision(), 0);
    }

    #[test]
    fn test_insert_text() {
        let mut f = field("", 0, 0);
        f.insert_text("hello");
        assert_state(&f, "hello", 5, 5);

        f.set_editing_state("hello", 2, 2);
        f.insert_text("XY");
        assert_state(&f, "heXYllo", 4, 4);
    }

    #[test]
    fn test_insert_replaces_selection() {
        let mut f = field("hello world", 0, 11);
        f.insert_text("hi");
        assert_state(&f, "hi", 2, 2);
        assert_eq!(f.sink().len(), 1);
    }

    #[test]
    fn test_insert_replaces_backward_selection() {
        let mut f = field("hello world", 11, 6);
        f.insert_text("there");
        assert_state(&f, "hello there", 11, 11);
    }

    #[test]
    fn test_insert_counts_code_points() {
        let mut f = field("ab", 1, 1);
        f.insert_text("é😀");
        assert_state(&f, "aé😀b", 3, 3);
    }

    #[test]
    fn test_move_home_and_end() {
        let mut f = field("hello", 2, 4);
        f.move_home();
        assert_state(&f, "hello", 0, 0);
        f.move_end();
        assert_state(&f, "hello", 5, 5);
    }

    #[test]
    fn test_home_end_select_keep_base() {
        let mut f = field("hello", 2, 2);
        f.move_home_select();
        assert_state(&f, "hello", 2, 0);
        f.move_end_select();
        assert_state(&f, "hello", 2, 5);
    }

    #[test]
    fn test_move_left_right_simple_clamp() {
        let mut f = field("ab", 1, 1);
        f.move_left();
        assert_state(&f, "ab", 1, 0);
        f.move_left();
        assert_state(&f, "ab", 1, 0);
        f.move_right();
        f.move_right();
        f.move_right();
        assert_state(&f, "ab", 1, 2);
    }

    #[test]
    fn test_move_word() {
        let mut f = field("ab cd", 0, 0);
        f.move_right_word();
        assert_state(&f, "ab cd", 2, 2);
        f.move_right_word();
        assert_state(&f, "ab cd", 5, 5);
        f.move_left_word();
        assert_state(&f, "ab cd", 3, 3);
        f.move_left_word();
        assert_state(&f, "ab cd", 0, 0);
    }

    #[test]
    fn test_move_word_collapses_from_base() {
        let mut f = field("foo bar baz", 5, 9);
        f.move_right_word();
        assert_state(&f, "foo bar baz", 7, 7);
    }

    #[test]
    fn test_move_line_without_selection_extends_from_base() {
        let mut f = field("foo bar baz", 11, 11);
        f.move_left_line();
        assert_state(&f, "foo bar baz", 11, 8);
    }

    #[test]
    fn test_move_line_with_selection_extends_from_extent() {
        let mut f = field("foo bar baz", 11, 11);
        f.move_left_line();
        f.move_left_line();
        assert_state(&f, "foo bar baz", 11, 4);

        let mut f = field("foo bar baz", 0, 0);
        f.move_right_line();
        assert_state(&f, "foo bar baz", 0, 3);
        f.move_right_line();
        assert_state(&f, "foo bar baz", 0, 7);
    }

    #[test]
    fn test_move_left_reset() {
        let mut f = field("abc", 2, 2);
        f.move_left_reset();
        assert_state(&f, "abc", 1, 1);
        f.move_left_reset();
        f.move_left_reset();
        assert_state(&f, "abc", 0, 0);
    }

    #[test]
    fn test_move_reset_collapses_to_base() {
        let mut f = field("abcdef", 4, 1);
        f.move_left_reset();
        assert_state(&f, "abcdef", 4, 4);

        let mut f = field("abcdef", 1, 4);
        f.move_right_reset();
        assert_state(&f, "abcdef", 1, 1);
    }

    #[test]
    fn test_move_right_reset_at_end() {
        let mut f = field("abc", 3, 3);
        f.move_right_reset();
        assert_state(&f, "abc", 3, 3);

        f.set_editing_state("abc", 1, 1);
        f.move_right_reset();
        assert_state(&f, "abc", 2, 2);
    }

    #[test]
    fn test_select_all() {
        let mut f = field("hello", 3, 3);
        f.select_all();
        assert_state(&f, "hello", 0, 5);

        let mut f = field("", 0, 0);
        f.select_all();
        assert_state(&f, "", 0, 0);
    }

    #[test]
    fn test_selected_text_is_ordered() {
        let f = field("hello world", 8, 2);
        assert_eq!(f.selected_text(), (2, 8, "llo wo".to_string()));
        let f = field("hello world", 2, 8);
        assert_eq!(f.selected_text(), (2, 8, "llo wo".to_string()));
        let f = field("hello", 3, 3);
        assert_eq!(f.selected_text(), (3, 3, String::new()));
        assert!(f.sink().is_empty());
    }

    #[test]
    fn test_remove_selected_text() {
        let mut f = field("hello world", 11, 5);
        assert!(f.remove_selected_text());
        assert_state(&f, "hello", 5, 5);
        assert_eq!(f.sink().len(), 1);
    }

    #[test]
    fn test_remove_selected_text_twice_emits_once() {
        let mut f = field("hello world", 0, 6);
        assert!(f.remove_selected_text());
        assert!(!f.remove_selected_text());
        assert_eq!(f.text(), "world");
        assert_eq!(f.sink().len(), 1);
        assert_eq!(f.revision(), 1);
    }

    #[test]
    fn test_delete_forward_char() {
        let mut f = field("abc", 1, 1);
        f.delete_forward_char();
        assert_state(&f, "ac", 1, 1);

        let mut f = field("abc", 3, 3);
        f.delete_forward_char();
        assert_eq!(f.text(), "abc");
        assert!(f.sink().is_empty());
    }

    #[test]
    fn test_delete_forward_char_clamps_extent() {
        let mut f = field("abc", 2, 3);
        f.delete_forward_char();
        assert_state(&f, "ab", 2, 2);
    }

    #[test]
    fn test_delete_forward_word() {
        let mut f = field("foo bar baz", 3, 3);
        f.delete_forward_word();
        assert_state(&f, "foo baz", 3, 3);

        f.set_editing_state("foo", 3, 3);
        f.delete_forward_word();
        assert_state(&f, "foo", 3, 3);
    }

    #[test]
    fn test_delete_to_line_end() {
        let mut f = field("hello world", 5, 5);
        f.delete_to_line_end();
        assert_state(&f, "hello", 5, 5);

        let mut f = field("hello world", 2, 9);
        f.delete_to_line_end();
        assert_state(&f, "he", 2, 2);
    }

    #[test]
    fn test_backspace_char() {
        let mut f = field("hello", 5, 5);
        f.backspace_char();
        assert_state(&f, "hell", 4, 4);
    }

    #[test]
    fn test_backspace_char_at_start_is_noop() {
        let mut f = field("hello", 0, 0);
        f.backspace_char();
        assert_eq!(f.text(), "hello");
        assert!(f.sink().is_empty());

        let mut f = field("", 0, 0);
        f.backspace_char();
        assert!(f.sink().is_empty());
    }

    #[test]
    fn test_backspace_word() {
        let mut f = field("foo bar baz", 11, 11);
        f.backspace_word();
        assert_state(&f, "foo bar ", 8, 8);
        f.backspace_word();
        assert_state(&f, "foo ", 4, 4);

        let mut f = field("foo bar", 0, 0);
        f.backspace_word();
        assert!(f.sink().is_empty());
    }

    #[test]
    fn test_backspace_to_line_start_clears_field() {
        let mut f = field("hello world", 3, 3);
        f.backspace_to_line_start();
        assert_state(&f, "", 0, 0);
    }

    #[test]
    fn test_every_change_emits_one_event() {
        let mut f = field("ab cd", 0, 0);
        f.insert_text("x");
        f.move_end();
        f.move_left_word();
        f.select_all();
        f.backspace_to_line_start();
        assert_eq!(f.sink().len(), 5);
        assert_eq!(f.revision(), 5);
    }

    #[test]
    fn test_events_carry_client_id() {
        let mut f = TextField::new(FieldConfig::new(42), RecordingSink::new());
        f.insert_text("a");
        match &f.sink().events()[0] {
            SinkEvent::EditingState { client_id, state } => {
                assert_eq!(*client_id, 42);
                assert!(!state.selection_is_directional);
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn test_submit_reports_configured_action() {
        let config = FieldConfig::new(9).with_input_action(InputAction::Search);
        let mut f = TextField::new(config, RecordingSink::new());
        f.insert_text("query");
        f.submit();
        f.perform_action(InputAction::Next);

        let events = f.sink().events();
        assert_eq!(
            events[1],
            SinkEvent::Action {
                client_id: 9,
                action: InputAction::Search
            }
        );
        assert_eq!(
            events[2],
            SinkEvent::Action {
                client_id: 9,
                action: InputAction::Next
            }
        );
        assert_eq!(f.text(), "query");
        assert_eq!(f.revision(), 1);
    }
}
