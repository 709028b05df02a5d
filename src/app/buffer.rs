use super::types::{char_to_byte_idx, EditorError};

/// Ordered lines of text. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    lines: Vec<String>,
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self {
            lines: vec![String::new()],
        }
    }
}

impl TextBuffer {
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut buffer = Self::default();
        buffer.load(lines);
        buffer
    }

    /// Replaces the whole content. An empty sequence leaves one empty line.
    pub fn load<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines = lines.into_iter().map(Into::into).collect();
        if self.lines.is_empty() {
            self.lines.push(String::new());
        }
    }

    pub fn to_lines(&self) -> Vec<String> {
        self.lines.clone()
    }

    pub fn line(&self, y: usize) -> Option<&str> {
        self.lines.get(y).map(String::as_str)
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line_len(&self, y: usize) -> usize {
        self.lines.get(y).map(|l| l.chars().count()).unwrap_or(0)
    }

    fn checked_line(&mut self, y: usize, x: usize) -> Result<&mut String, EditorError> {
        let line = self.lines.get_mut(y).ok_or(EditorError::OutOfRange { y, x })?;
        if x > line.chars().count() {
            return Err(EditorError::OutOfRange { y, x });
        }
        Ok(line)
    }

    pub fn insert_char(&mut self, y: usize, x: usize, ch: char) -> Result<(), EditorError> {
        let line = self.checked_line(y, x)?;
        let byte_idx = char_to_byte_idx(line, x);
        line.insert(byte_idx, ch);
        Ok(())
    }

    /// Backspace semantics. Returns where the cursor belongs afterwards.
    pub fn delete_char_before(
        &mut self,
        y: usize,
        x: usize,
    ) -> Result<(usize, usize), EditorError> {
        let line = self.checked_line(y, x)?;
        if x > 0 {
            let start = char_to_byte_idx(line, x - 1);
            let end = char_to_byte_idx(line, x);
            line.replace_range(start..end, "");
            return Ok((y, x - 1));
        }
        if y == 0 {
            return Ok((0, 0));
        }
        let current = self.lines.remove(y);
        let prev = &mut self.lines[y - 1];
        let prev_len = prev.chars().count();
        prev.push_str(&current);
        Ok((y - 1, prev_len))
    }

    /// Forward delete; at end of line pulls the next line up.
    pub fn delete_char_at(&mut self, y: usize, x: usize) -> Result<(), EditorError> {
        let line_count = self.lines.len();
        let line = self.checked_line(y, x)?;
        if x < line.chars().count() {
            let start = char_to_byte_idx(line, x);
            let end = char_to_byte_idx(line, x + 1);
            line.replace_range(start..end, "");
        } else if y + 1 < line_count {
            let next = self.lines.remove(y + 1);
            self.lines[y].push_str(&next);
        }
        Ok(())
    }

    pub fn split_line(&mut self, y: usize, x: usize) -> Result<(), EditorError> {
        let line = self.checked_line(y, x)?;
        let byte_idx = char_to_byte_idx(line, x);
        let right = line.split_off(byte_idx);
        self.lines.insert(y + 1, right);
        Ok(())
    }
}
