use super::types::{char_to_byte_idx, char_to_screen_col};

/// One-line text entry used while in command mode. Has its own cursor
/// and never touches the main buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandLine {
    text: String,
    cx: usize,
}

impl CommandLine {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cx
    }

    fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn reset(&mut self) {
        self.text.clear();
        self.cx = 0;
    }

    pub fn insert(&mut self, ch: char) {
        let byte_idx = char_to_byte_idx(&self.text, self.cx);
        self.text.insert(byte_idx, ch);
        self.cx += 1;
    }

    pub fn backspace(&mut self) {
        if self.cx == 0 {
            return;
        }
        let start = char_to_byte_idx(&self.text, self.cx - 1);
        let end = char_to_byte_idx(&self.text, self.cx);
        self.text.replace_range(start..end, "");
        self.cx -= 1;
    }

    pub fn delete(&mut self) {
        if self.cx >= self.len() {
            return;
        }
        let start = char_to_byte_idx(&self.text, self.cx);
        let end = char_to_byte_idx(&self.text, self.cx + 1);
        self.text.replace_range(start..end, "");
    }

    pub fn move_left(&mut self) {
        self.cx = self.cx.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cx < self.len() {
            self.cx += 1;
        }
    }

    /// Takes the finished text and leaves the line empty.
    pub fn take(&mut self) -> String {
        self.cx = 0;
        std::mem::take(&mut self.text)
    }

    pub fn screen_col(&self) -> usize {
        char_to_screen_col(&self.text, self.cx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(s: &str) -> CommandLine {
        let mut line = CommandLine::default();
        s.chars().for_each(|ch| line.insert(ch));
        line
    }

    #[test]
    fn insert_happens_at_cursor() {
        let mut line = typed("wq");
        line.move_left();
        line.insert('x');
        assert_eq!(line.text(), "wxq");
        assert_eq!(line.cursor(), 2);
    }

    #[test]
    fn cursor_stays_within_text() {
        let mut line = typed("e");
        line.move_right();
        assert_eq!(line.cursor(), 1);
        line.move_left();
        line.move_left();
        assert_eq!(line.cursor(), 0);
    }

    #[test]
    fn backspace_and_delete_edit_around_cursor() {
        let mut line = typed("e fïle");
        line.backspace();
        assert_eq!(line.text(), "e fïl");

        line.move_left();
        line.move_left();
        line.delete();
        assert_eq!(line.text(), "e fl");
        assert_eq!(line.cursor(), 3);

        let mut empty = CommandLine::default();
        empty.backspace();
        empty.delete();
        assert_eq!(empty, CommandLine::default());
    }

    #[test]
    fn take_resets_line() {
        let mut line = typed("w");
        assert_eq!(line.take(), "w");
        assert_eq!(line, CommandLine::default());
    }

    #[test]
    fn screen_col_uses_display_width() {
        let line = typed("e 日本");
        assert_eq!(line.screen_col(), 6);
    }
}
