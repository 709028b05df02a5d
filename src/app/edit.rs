use std::path::PathBuf;

use super::buffer::TextBuffer;
use super::command_line::CommandLine;
use super::file::read_lines;
use super::theme::Theme;
use super::types::{EditorError, Mode};
use super::viewport::{clamp, move_cursor, Cursor, Motion, Viewport};
use crate::logging;

/// The whole editor state. One instance per process, passed by reference
/// into key handling and rendering.
pub struct App {
    pub(crate) buffer: TextBuffer,
    pub(crate) cursor: Cursor,
    pub(crate) viewport: Viewport,
    pub(crate) mode: Mode,
    pub(crate) file_path: PathBuf,
    pub(crate) status_message: String,
    pub(crate) command_line: CommandLine,
    pub(crate) theme: Theme,
}

impl App {
    pub fn new(file_path: PathBuf, buffer: TextBuffer, visible_rows: usize) -> Self {
        Self {
            buffer,
            cursor: Cursor::default(),
            viewport: Viewport::new(visible_rows),
            mode: Mode::Normal,
            file_path,
            status_message: String::new(),
            command_line: CommandLine::default(),
            theme: Theme::default(),
        }
    }

    /// Starts a session on `file_path`. A file that cannot be read is not
    /// fatal: the session starts with one empty line and says so.
    pub fn open(file_path: PathBuf, visible_rows: usize) -> Self {
        match read_lines(&file_path) {
            Ok(lines) => {
                logging::log(&format!(
                    "startup: opened {} ({} lines)",
                    file_path.display(),
                    lines.len()
                ));
                let mut app = Self::new(file_path, TextBuffer::from_lines(lines), visible_rows);
                app.set_status(format!("Opened file: {}", app.file_path.display()));
                app
            }
            Err(err) => {
                logging::log(&format!("startup: {err}"));
                let mut app = Self::new(file_path, TextBuffer::default(), visible_rows);
                app.set_status(format!("Failed to open file: {}", app.file_path.display()));
                app
            }
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Called on every render; only a real size change re-clamps, so a
    /// manual scroll survives the next frame.
    pub fn resize(&mut self, visible_rows: usize) {
        if self.viewport.set_visible_rows(visible_rows) {
            clamp(&mut self.cursor, &mut self.viewport, &self.buffer);
        }
    }

    /// Switches mode. The command line is emptied on entry and on exit.
    pub(super) fn enter_mode(&mut self, mode: Mode) {
        if mode == Mode::Command || self.mode == Mode::Command {
            self.command_line.reset();
        }
        self.mode = mode;
    }

    pub(super) fn move_cursor(&mut self, motion: Motion) {
        move_cursor(&mut self.cursor, &mut self.viewport, &self.buffer, motion);
    }

    pub(super) fn scroll_up(&mut self) {
        self.viewport.scroll_up();
    }

    pub(super) fn scroll_down(&mut self) {
        self.viewport.scroll_down(self.buffer.line_count());
    }

    /// Replaces the buffer wholesale and puts the cursor back at the origin.
    pub(super) fn replace_buffer(&mut self, lines: Vec<String>) {
        self.buffer.load(lines);
        self.cursor = Cursor::default();
        self.viewport.scroll_top = 0;
    }

    pub(super) fn insert_char(&mut self, ch: char) -> Result<(), EditorError> {
        self.buffer.insert_char(self.cursor.y, self.cursor.x, ch)?;
        self.cursor.x += 1;
        clamp(&mut self.cursor, &mut self.viewport, &self.buffer);
        Ok(())
    }

    pub(super) fn insert_newline(&mut self) -> Result<(), EditorError> {
        self.buffer.split_line(self.cursor.y, self.cursor.x)?;
        self.cursor = Cursor::new(self.cursor.y + 1, 0);
        clamp(&mut self.cursor, &mut self.viewport, &self.buffer);
        Ok(())
    }

    pub(super) fn backspace(&mut self) -> Result<(), EditorError> {
        let (y, x) = self.buffer.delete_char_before(self.cursor.y, self.cursor.x)?;
        self.cursor = Cursor::new(y, x);
        clamp(&mut self.cursor, &mut self.viewport, &self.buffer);
        Ok(())
    }

    pub(super) fn delete_at_cursor(&mut self) -> Result<(), EditorError> {
        self.buffer.delete_char_at(self.cursor.y, self.cursor.x)?;
        clamp(&mut self.cursor, &mut self.viewport, &self.buffer);
        Ok(())
    }
}
