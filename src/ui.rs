use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::{char_display_width, App, Mode};

pub fn ui(f: &mut Frame<'_>, app: &mut App) {
    let size = f.area();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1), Constraint::Length(1)])
        .split(size);

    let main_area = rows[0];
    let status_area = rows[1];
    let message_area = rows[2];

    app.resize(main_area.height as usize);

    let scroll_top = app.viewport.scroll_top;
    let mut text_lines: Vec<Line> = Vec::with_capacity(main_area.height as usize);
    for i in 0..app.viewport.visible_rows() {
        match app.buffer().line(scroll_top + i) {
            Some(line) => text_lines.push(Line::from(display_line(line))),
            None => text_lines.push(Line::styled("~", Style::default().fg(app.theme.filler_fg))),
        }
    }
    f.render_widget(Paragraph::new(text_lines), main_area);

    let status = status_line(app);
    let status_paragraph = Paragraph::new(status).style(
        Style::default()
            .fg(app.theme.status_fg)
            .bg(app.theme.status_bg),
    );
    f.render_widget(status_paragraph, status_area);

    let message = if app.mode == Mode::Command {
        Paragraph::new(format!(":{}", app.command_line.text()))
    } else {
        Paragraph::new(app.status_message.clone())
    };
    f.render_widget(
        message.style(Style::default().fg(app.theme.message_fg)),
        message_area,
    );

    if let Some((x, y)) = cursor_position(app, main_area, message_area) {
        f.set_cursor_position(Position::new(x, y));
    }
}

/// Expands tabs and shows other control characters as `^` so that every
/// code point occupies the columns the cursor math gives it.
pub(crate) fn display_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut col = 0;
    for ch in line.chars() {
        let width = char_display_width(ch, col);
        match ch {
            '\t' => out.extend(std::iter::repeat_n(' ', width)),
            c if c.is_control() => out.push('^'),
            c => out.push(c),
        }
        col += width;
    }
    out
}

pub(crate) fn status_line(app: &App) -> String {
    format!(
        "-- {} -- | {} | {}:{}",
        app.mode().label(),
        app.file_path.display(),
        app.cursor().y + 1,
        app.cursor().x + 1
    )
}

/// Where the terminal cursor goes, or `None` if it would fall off the area.
pub(crate) fn cursor_position(app: &App, main_area: Rect, message_area: Rect) -> Option<(u16, u16)> {
    let (x, y, area) = if app.mode == Mode::Command {
        let col = 1 + app.command_line.screen_col();
        (message_area.x as usize + col, message_area.y as usize, message_area)
    } else {
        if !app.viewport.contains(app.cursor.y) {
            return None;
        }
        let (row, col) = app.viewport.screen_position(app.cursor, &app.buffer);
        (main_area.x as usize + col, main_area.y as usize + row, main_area)
    };
    let x = u16::try_from(x).ok()?;
    let y = u16::try_from(y).ok()?;
    (x < area.right() && y < area.bottom()).then_some((x, y))
}
