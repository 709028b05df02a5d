use anyhow::Result;

use super::types::{Key, Mode};
use super::viewport::Motion;
use super::App;

/// Feeds one key to the editor. Returns `Ok(true)` when the session is over.
pub fn handle_key(app: &mut App, key: Key) -> Result<bool> {
    match app.mode {
        Mode::Normal => Ok(handle_normal(app, key)),
        Mode::Insert => {
            handle_insert(app, key)?;
            Ok(false)
        }
        Mode::Command => Ok(handle_command(app, key)),
    }
}

fn handle_normal(app: &mut App, key: Key) -> bool {
    app.status_message.clear();
    match key {
        Key::Char('i') => app.enter_mode(Mode::Insert),
        Key::Char(':') => app.enter_mode(Mode::Command),
        Key::Char('h') => app.move_cursor(Motion::Left),
        Key::Char('l') => app.move_cursor(Motion::Right),
        Key::Char('j') => app.move_cursor(Motion::Down),
        Key::Char('k') => app.move_cursor(Motion::Up),
        Key::Up => app.scroll_up(),
        Key::Down => app.scroll_down(),
        _ => {}
    }
    false
}

fn handle_insert(app: &mut App, key: Key) -> Result<()> {
    match key {
        Key::Esc => app.enter_mode(Mode::Normal),
        Key::Char(ch) => app.insert_char(ch)?,
        Key::Enter => app.insert_newline()?,
        Key::Backspace => app.backspace()?,
        Key::Delete => app.delete_at_cursor()?,
        _ => {}
    }
    Ok(())
}

fn handle_command(app: &mut App, key: Key) -> bool {
    match key {
        Key::Char(ch) => app.command_line.insert(ch),
        Key::Backspace => app.command_line.backspace(),
        Key::Delete => app.command_line.delete(),
        Key::Left => app.command_line.move_left(),
        Key::Right => app.command_line.move_right(),
        Key::Esc => app.enter_mode(Mode::Normal),
        Key::Enter => {
            let raw = app.command_line.take();
            let quit = app.execute_command(&raw);
            app.enter_mode(Mode::Normal);
            return quit;
        }
        _ => {}
    }
    false
}
