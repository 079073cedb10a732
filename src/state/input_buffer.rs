//! Multi-line text buffer backing the JSON input pane

/// Editable text with a cursor.
///
/// The cursor is a byte offset that always sits on a char boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer {
    text: String,
    cursor: usize,
}

impl InputBuffer {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Insert pasted text at the cursor, normalizing line endings
    pub fn insert_str(&mut self, s: &str) {
        let normalized = s.replace("\r\n", "\n").replace('\r', "\n");
        self.text.insert_str(self.cursor, &normalized);
        self.cursor += normalized.len();
    }

    /// Delete the char before the cursor. Returns false at the start.
    pub fn backspace(&mut self) -> bool {
        match self.text[..self.cursor].chars().next_back() {
            Some(c) => {
                self.cursor -= c.len_utf8();
                self.text.remove(self.cursor);
                true
            }
            None => false,
        }
    }

    /// Delete the char under the cursor. Returns false at the end.
    pub fn delete(&mut self) -> bool {
        if self.cursor < self.text.len() {
            self.text.remove(self.cursor);
            true
        } else {
            false
        }
    }

    pub fn move_left(&mut self) {
        if let Some(c) = self.text[..self.cursor].chars().next_back() {
            self.cursor -= c.len_utf8();
        }
    }

    pub fn move_right(&mut self) {
        if let Some(c) = self.text[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    pub fn move_line_start(&mut self) {
        self.cursor = self.line_start(self.cursor);
    }

    pub fn move_line_end(&mut self) {
        self.cursor = self.line_end(self.cursor);
    }

    pub fn move_up(&mut self) {
        let start = self.line_start(self.cursor);
        if start == 0 {
            self.cursor = 0;
            return;
        }
        let col = self.text[start..self.cursor].chars().count();
        let prev_start = self.line_start(start - 1);
        self.cursor = self.offset_in_line(prev_start, col);
    }

    pub fn move_down(&mut self) {
        let end = self.line_end(self.cursor);
        if end == self.text.len() {
            self.cursor = end;
            return;
        }
        let col = self.text[self.line_start(self.cursor)..self.cursor]
            .chars()
            .count();
        self.cursor = self.offset_in_line(end + 1, col);
    }

    /// Cursor as (line, column), both zero-based and counted in chars
    pub fn cursor_position(&self) -> (usize, usize) {
        let before = &self.text[..self.cursor];
        let line = before.matches('\n').count();
        let col = before[self.line_start(self.cursor)..].chars().count();
        (line, col)
    }

    fn line_start(&self, offset: usize) -> usize {
        self.text[..offset].rfind('\n').map(|i| i + 1).unwrap_or(0)
    }

    fn line_end(&self, offset: usize) -> usize {
        self.text[offset..]
            .find('\n')
            .map(|i| offset + i)
            .unwrap_or(self.text.len())
    }

    /// Byte offset of column `col` on the line starting at `start`, clamped
    /// to the line end
    fn offset_in_line(&self, start: usize, col: usize) -> usize {
        let end = self.line_end(start);
        self.text[start..end]
            .char_indices()
            .nth(col)
            .map(|(i, _)| start + i)
            .unwrap_or(end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn buffer(text: &str) -> InputBuffer {
        let mut b = InputBuffer::default();
        b.insert_str(text);
        b
    }

    #[test]
    fn test_insert_and_backspace() {
        let mut b = InputBuffer::default();
        b.insert_char('{');
        b.insert_char('}');
        assert_eq!(b.text(), "{}");
        assert!(b.backspace());
        assert_eq!(b.text(), "{");
        assert!(b.backspace());
        assert!(!b.backspace());
        assert!(b.is_empty());
    }

    #[test]
    fn test_insert_in_middle() {
        let mut b = buffer("{}");
        b.move_left();
        b.insert_str("\"a\":1");
        assert_eq!(b.text(), "{\"a\":1}");
        assert_eq!(b.cursor_position(), (0, 6));
    }

    #[test]
    fn test_paste_normalizes_line_endings() {
        let mut b = InputBuffer::default();
        b.insert_str("{\r\n}\r");
        assert_eq!(b.text(), "{\n}\n");
        assert_eq!(b.text().split('\n').count(), 3);
    }

    #[test]
    fn test_multibyte_chars() {
        let mut b = buffer("é");
        b.insert_char('ß');
        assert_eq!(b.cursor_position(), (0, 2));
        b.move_left();
        b.move_left();
        assert!(b.delete());
        assert_eq!(b.text(), "ß");
    }

    #[test]
    fn test_delete_at_end_is_noop() {
        let mut b = buffer("ab");
        assert!(!b.delete());
        assert_eq!(b.text(), "ab");
    }

    #[test]
    fn test_vertical_movement_clamps_column() {
        let mut b = buffer("abcdef\nxy\nlonger line");
        assert_eq!(b.cursor_position(), (2, 11));
        b.move_up();
        assert_eq!(b.cursor_position(), (1, 2));
        b.move_up();
        assert_eq!(b.cursor_position(), (0, 2));
        b.move_up();
        assert_eq!(b.cursor_position(), (0, 0));
        b.move_down();
        assert_eq!(b.cursor_position(), (1, 0));
        b.move_line_end();
        b.move_down();
        assert_eq!(b.cursor_position(), (2, 2));
        b.move_down();
        assert_eq!(b.cursor_position(), (2, 11));
    }

    #[test]
    fn test_line_start_and_end() {
        let mut b = buffer("one\ntwo");
        b.move_line_start();
        assert_eq!(b.cursor_position(), (1, 0));
        b.move_left();
        assert_eq!(b.cursor_position(), (0, 3));
        b.move_line_start();
        b.move_line_end();
        assert_eq!(b.cursor_position(), (0, 3));
    }

    #[test]
    fn test_clear() {
        let mut b = buffer("{\"a\": 1}");
        b.clear();
        assert!(b.is_empty());
        assert_eq!(b.cursor_position(), (0, 0));
    }
}
