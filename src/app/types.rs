use std::io;
use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use thiserror::Error;

pub const TAB_WIDTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Insert,
    Command,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Mode::Normal => "NORMAL",
            Mode::Insert => "INSERT",
            Mode::Command => "COMMAND",
        }
    }
}

/// A logical key, already stripped of terminal-specific encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Esc,
    Enter,
    Backspace,
    Delete,
    Up,
    Down,
    Left,
    Right,
    Other,
}

impl Key {
    /// Returns `None` for events that are not key presses.
    pub fn from_event(key: KeyEvent) -> Option<Self> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        let plain = key.modifiers.difference(KeyModifiers::SHIFT).is_empty();
        let mapped = match key.code {
            KeyCode::Char(ch) if plain => Key::Char(ch),
            KeyCode::Tab if plain => Key::Char('\t'),
            KeyCode::Esc => Key::Esc,
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            _ => Key::Other,
        };
        Some(mapped)
    }
}

#[derive(Debug, Error)]
pub enum EditorError {
    #[error("cannot read {}: {source}", .path.display())]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot write {}: {source}", .path.display())]
    FileUnwritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("position {y}:{x} is outside the buffer")]
    OutOfRange { y: usize, x: usize },
}

pub(crate) fn char_to_byte_idx(s: &str, char_idx: usize) -> usize {
    if char_idx == 0 {
        return 0;
    }
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or_else(|| s.len())
}

pub fn char_to_screen_col(s: &str, char_idx: usize) -> usize {
    let mut col = 0usize;
    for ch in s.chars().take(char_idx) {
        col += char_display_width(ch, col);
    }
    col
}

pub fn char_display_width(ch: char, col: usize) -> usize {
    if ch == '\t' {
        return TAB_WIDTH - (col % TAB_WIDTH);
    }
    unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0).max(1)
}
