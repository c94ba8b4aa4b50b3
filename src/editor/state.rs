use super::*;
use std::ops::Range;

/// The text buffer and caret of one editor.
///
/// The cursor is a byte offset that always sits on a character boundary in
/// `0..=buffer.len()`. Every mutator keeps that invariant by clamping instead
/// of rejecting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorState {
    buffer: String,
    cursor: usize,
}

impl EditorState {
    pub fn new(buffer: impl Into<String>) -> Self {
        let buffer = buffer.into();
        let cursor = buffer.len();
        Self { buffer, cursor }
    }

    pub fn with_cursor(mut self, cursor: usize) -> Self {
        self.set_cursor(cursor);
        self
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = clamp_offset(&self.buffer, cursor);
    }

    /// Replace the whole buffer, keeping the cursor where it was if possible.
    pub fn set_buffer(&mut self, buffer: impl Into<String>) {
        self.buffer = buffer.into();
        self.set_cursor(self.cursor);
    }

    /// Insert at the cursor and move the cursor past the inserted text.
    pub fn insert(&mut self, text: &str) {
        self.buffer.insert_str(self.cursor, text);
        self.cursor += text.len();
    }

    /// Replace `range` with `text` and put the cursor right after it.
    pub fn replace(&mut self, range: Range<usize>, text: &str) {
        let start = clamp_offset(&self.buffer, range.start);
        let end = clamp_offset(&self.buffer, range.end).max(start);
        self.buffer.replace_range(start..end, text);
        self.cursor = start + text.len();
    }

    /// Remove the character before the cursor. Returns false at the start.
    pub fn delete_backward(&mut self) -> bool {
        let Some(c) = self.buffer[..self.cursor].chars().next_back() else {
            return false;
        };
        let start = self.cursor - c.len_utf8();
        self.buffer.replace_range(start..self.cursor, "");
        self.cursor = start;
        true
    }

    /// Remove the character after the cursor. Returns false at the end.
    pub fn delete_forward(&mut self) -> bool {
        let Some(c) = self.buffer[self.cursor..].chars().next() else {
            return false;
        };
        self.buffer
            .replace_range(self.cursor..self.cursor + c.len_utf8(), "");
        true
    }

    pub fn move_left(&mut self) {
        if let Some(c) = self.buffer[..self.cursor].chars().next_back() {
            self.cursor -= c.len_utf8();
        }
    }

    pub fn move_right(&mut self) {
        if let Some(c) = self.buffer[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    pub fn move_line_start(&mut self) {
        self.cursor = self.line_start(self.cursor);
    }

    pub fn move_line_end(&mut self) {
        self.cursor = self.line_end(self.cursor);
    }

    /// Move to the previous line, keeping the column in characters where the
    /// line is long enough. Returns false on the first line.
    pub fn move_up(&mut self) -> bool {
        let start = self.line_start(self.cursor);
        if start == 0 {
            return false;
        }
        let column = self.buffer[start..self.cursor].chars().count();
        let previous = self.line_start(start - 1);
        self.cursor = self.offset_in_line(previous, column);
        true
    }

    /// Move to the next line, keeping the column where possible. Returns false
    /// on the last line.
    pub fn move_down(&mut self) -> bool {
        let end = self.line_end(self.cursor);
        if end == self.buffer.len() {
            return false;
        }
        let column = self.buffer[self.line_start(self.cursor)..self.cursor]
            .chars()
            .count();
        self.cursor = self.offset_in_line(end + 1, column);
        true
    }

    /// Zero-based (line, column in characters) of the cursor.
    pub fn line_column(&self) -> (usize, usize) {
        let before = &self.buffer[..self.cursor];
        let line = before.matches('\n').count();
        let column = before[self.line_start(self.cursor)..].chars().count();
        (line, column)
    }

    fn line_start(&self, offset: usize) -> usize {
        self.buffer[..offset].rfind('\n').map_or(0, |i| i + 1)
    }

    fn line_end(&self, offset: usize) -> usize {
        self.buffer[offset..]
            .find('\n')
            .map_or(self.buffer.len(), |i| offset + i)
    }

    fn offset_in_line(&self, line_start: usize, column: usize) -> usize {
        let line_end = self.line_end(line_start);
        self.buffer[line_start..line_end]
            .char_indices()
            .nth(column)
            .map_or(line_end, |(i, _)| line_start + i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_places_cursor_at_end() {
        let state = EditorState::new("SELECT");
        assert_eq!(state.cursor(), 6);
    }

    #[test]
    fn cursor_is_clamped() {
        let state = EditorState::new("abc").with_cursor(42);
        assert_eq!(state.cursor(), 3);
        let state = EditorState::new("é").with_cursor(1);
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn replace_moves_cursor_after_text() {
        let mut state = EditorState::new("SELECT * FROM SEL WHERE").with_cursor(17);
        state.replace(14..17, "SELECT");
        assert_eq!(state.buffer(), "SELECT * FROM SELECT WHERE");
        assert_eq!(state.cursor(), 20);
    }

    #[test]
    fn insert_and_delete() {
        let mut state = EditorState::new("ac").with_cursor(1);
        state.insert("b");
        assert_eq!((state.buffer(), state.cursor()), ("abc", 2));
        assert!(state.delete_backward());
        assert_eq!((state.buffer(), state.cursor()), ("ac", 1));
        assert!(state.delete_forward());
        assert_eq!((state.buffer(), state.cursor()), ("a", 1));
        assert!(!state.delete_forward());
        state.set_cursor(0);
        assert!(!state.delete_backward());
    }

    #[test]
    fn delete_handles_multibyte_chars() {
        let mut state = EditorState::new("aé");
        assert!(state.delete_backward());
        assert_eq!((state.buffer(), state.cursor()), ("a", 1));
    }

    #[test]
    fn horizontal_movement() {
        let mut state = EditorState::new("ab\ncd").with_cursor(4);
        state.move_line_start();
        assert_eq!(state.cursor(), 3);
        state.move_left();
        assert_eq!(state.cursor(), 2);
        state.move_right();
        state.move_right();
        assert_eq!(state.cursor(), 4);
        state.move_line_end();
        assert_eq!(state.cursor(), 5);
    }

    #[test]
    fn vertical_movement_keeps_column() {
        let mut state = EditorState::new("SELECT a\nFROM t\nWHERE x").with_cursor(7);
        assert!(state.move_down());
        assert_eq!(state.line_column(), (1, 6));
        assert!(state.move_down());
        assert_eq!(state.line_column(), (2, 6));
        assert!(!state.move_down());
        assert!(state.move_up());
        assert!(state.move_up());
        assert_eq!(state.line_column(), (0, 6));
        assert!(!state.move_up());
    }

    #[test]
    fn set_buffer_clamps_cursor() {
        let mut state = EditorState::new("SELECT 1");
        state.set_buffer("SEL");
        assert_eq!(state.cursor(), 3);
    }
}
