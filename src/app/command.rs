use std::path::PathBuf;

use super::file::{read_lines, write_lines};
use super::App;
use crate::logging;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    Quit,
    Write,
    WriteQuit,
    Edit(PathBuf),
    Unknown(String),
}

impl Command {
    pub(crate) fn parse(raw: &str) -> Self {
        let input = raw.trim();
        match input {
            "q" => Command::Quit,
            "w" => Command::Write,
            "wq" => Command::WriteQuit,
            _ => match input.strip_prefix("e ") {
                Some(path) if !path.trim().is_empty() => Command::Edit(PathBuf::from(path.trim())),
                _ => Command::Unknown(raw.to_string()),
            },
        }
    }
}

impl App {
    /// Writes the buffer to the current file. Failures end up in the status
    /// message; the return value says whether the write happened.
    pub(super) fn save(&mut self) -> bool {
        match write_lines(&self.file_path, &self.buffer.to_lines()) {
            Ok(()) => {
                logging::log(&format!(
                    "wrote {} lines to {}",
                    self.buffer.line_count(),
                    self.file_path.display()
                ));
                self.set_status("Wrote to file.");
                true
            }
            Err(err) => {
                logging::log(&err.to_string());
                self.set_status(format!("Failed to write file: {}", self.file_path.display()));
                false
            }
        }
    }

    /// Loads `path` into the buffer. An unreadable file leaves everything
    /// but the status message untouched.
    pub(super) fn open_file(&mut self, path: PathBuf) {
        match read_lines(&path) {
            Ok(lines) => {
                logging::log(&format!("opened {} ({} lines)", path.display(), lines.len()));
                self.replace_buffer(lines);
                self.set_status(format!("Opened file: {}", path.display()));
                self.file_path = path;
            }
            Err(err) => {
                logging::log(&err.to_string());
                self.set_status(format!("Failed to open file: {}", path.display()));
            }
        }
    }

    /// Runs the finished command line. Returns `true` when the session
    /// should end.
    pub(super) fn execute_command(&mut self, raw: &str) -> bool {
        let command = Command::parse(raw);
        logging::log(&format!("command: {command:?}"));
        match command {
            Command::Quit => return true,
            Command::Write => {
                self.save();
            }
            Command::WriteQuit => return self.save(),
            Command::Edit(path) => self.open_file(path),
            Command::Unknown(raw) => self.set_status(format!("Unknown command: {raw}")),
        }
        false
    }
}
