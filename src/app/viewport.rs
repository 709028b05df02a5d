//! Cursor and vertical scroll bookkeeping.
//!
//! The cursor is kept in buffer coordinates (line `y`, code point `x`). The
//! viewport only scrolls vertically; long lines are cut off by the renderer.
//! After every cursor move `scroll_top` is re-clamped so that the cursor
//! line is one of the visible rows.

use super::buffer::TextBuffer;
use super::types::char_to_screen_col;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub y: usize,
    pub x: usize,
}

impl Cursor {
    pub fn new(y: usize, x: usize) -> Self {
        Self { y, x }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub scroll_top: usize,
    visible_rows: usize,
}

impl Viewport {
    pub fn new(visible_rows: usize) -> Self {
        Self {
            scroll_top: 0,
            visible_rows: visible_rows.max(1),
        }
    }

    pub fn visible_rows(&self) -> usize {
        self.visible_rows
    }

    /// Returns whether the row count actually changed.
    pub fn set_visible_rows(&mut self, rows: usize) -> bool {
        let rows = rows.max(1);
        let changed = rows != self.visible_rows;
        self.visible_rows = rows;
        changed
    }

    fn max_scroll(&self, line_count: usize) -> usize {
        line_count.saturating_sub(self.visible_rows)
    }

    /// Moves `scroll_top` the least amount needed to show line `y`.
    pub fn ensure_visible(&mut self, y: usize, line_count: usize) {
        if y < self.scroll_top {
            self.scroll_top = y;
        } else if y >= self.scroll_top + self.visible_rows {
            self.scroll_top = y + 1 - self.visible_rows;
        }
        self.scroll_top = self.scroll_top.min(self.max_scroll(line_count));
    }

    /// Manual scroll by one row, bounded by the buffer only. The cursor may
    /// end up off screen until the next cursor move re-clamps.
    pub fn scroll_up(&mut self) -> bool {
        if self.scroll_top == 0 {
            return false;
        }
        self.scroll_top -= 1;
        true
    }

    pub fn scroll_down(&mut self, line_count: usize) -> bool {
        if self.scroll_top >= self.max_scroll(line_count) {
            return false;
        }
        self.scroll_top += 1;
        true
    }

    pub fn contains(&self, y: usize) -> bool {
        y >= self.scroll_top && y < self.scroll_top + self.visible_rows
    }

    /// Screen (row, col) of the cursor relative to the text area.
    pub fn screen_position(&self, cursor: Cursor, buffer: &TextBuffer) -> (usize, usize) {
        let line = buffer.line(cursor.y).unwrap_or("");
        (
            cursor.y.saturating_sub(self.scroll_top),
            char_to_screen_col(line, cursor.x),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Left,
    Right,
    Up,
    Down,
}

/// Applies a one-cell motion. Moves that would leave the line or the
/// buffer are no-ops. Returns whether the cursor moved.
pub fn move_cursor(
    cursor: &mut Cursor,
    viewport: &mut Viewport,
    buffer: &TextBuffer,
    motion: Motion,
) -> bool {
    let moved = match motion {
        Motion::Left if cursor.x > 0 => {
            cursor.x -= 1;
            true
        }
        Motion::Right if cursor.x < buffer.line_len(cursor.y) => {
            cursor.x += 1;
            true
        }
        Motion::Up if cursor.y > 0 => {
            cursor.y -= 1;
            true
        }
        Motion::Down if cursor.y + 1 < buffer.line_count() => {
            cursor.y += 1;
            true
        }
        _ => false,
    };
    clamp(cursor, viewport, buffer);
    moved
}

/// Restores every cursor and scroll invariant after the buffer or the
/// cursor changed underneath.
pub fn clamp(cursor: &mut Cursor, viewport: &mut Viewport, buffer: &TextBuffer) {
    let last_line = buffer.line_count().saturating_sub(1);
    cursor.y = cursor.y.min(last_line);
    cursor.x = cursor.x.min(buffer.line_len(cursor.y));
    viewport.ensure_visible(cursor.y, buffer.line_count());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(count: usize) -> TextBuffer {
        TextBuffer::from_lines((0..count).map(|i| format!("line {i}")))
    }

    #[test]
    fn visible_rows_never_drop_to_zero() {
        let mut viewport = Viewport::new(0);
        assert_eq!(viewport.visible_rows(), 1);
        assert!(viewport.set_visible_rows(22));
        assert!(!viewport.set_visible_rows(22));
        assert_eq!(viewport.visible_rows(), 22);
    }

    #[test]
    fn horizontal_moves_stop_at_line_edges() {
        let buffer = TextBuffer::from_lines(["ab"]);
        let mut viewport = Viewport::new(5);
        let mut cursor = Cursor::default();

        assert!(!move_cursor(&mut cursor, &mut viewport, &buffer, Motion::Left));
        assert!(move_cursor(&mut cursor, &mut viewport, &buffer, Motion::Right));
        assert!(move_cursor(&mut cursor, &mut viewport, &buffer, Motion::Right));
        assert!(!move_cursor(&mut cursor, &mut viewport, &buffer, Motion::Right));
        assert_eq!(cursor, Cursor::new(0, 2));
    }

    #[test]
    fn vertical_move_clamps_column_to_shorter_line() {
        let buffer = TextBuffer::from_lines(["long line", "ab", "another long one"]);
        let mut viewport = Viewport::new(5);
        let mut cursor = Cursor::new(0, 7);

        move_cursor(&mut cursor, &mut viewport, &buffer, Motion::Down);
        assert_eq!(cursor, Cursor::new(1, 2));
        move_cursor(&mut cursor, &mut viewport, &buffer, Motion::Down);
        assert_eq!(cursor, Cursor::new(2, 2));
        assert!(!move_cursor(&mut cursor, &mut viewport, &buffer, Motion::Down));
    }

    #[test]
    fn cursor_motion_scrolls_to_nearest_boundary() {
        let buffer = numbered(10);
        let mut viewport = Viewport::new(3);
        let mut cursor = Cursor::default();

        for _ in 0..4 {
            move_cursor(&mut cursor, &mut viewport, &buffer, Motion::Down);
        }
        assert_eq!(cursor.y, 4);
        assert_eq!(viewport.scroll_top, 2);

        move_cursor(&mut cursor, &mut viewport, &buffer, Motion::Up);
        move_cursor(&mut cursor, &mut viewport, &buffer, Motion::Up);
        assert_eq!(viewport.scroll_top, 2);
        move_cursor(&mut cursor, &mut viewport, &buffer, Motion::Up);
        assert_eq!(viewport.scroll_top, 1);
        assert!(viewport.contains(cursor.y));
    }

    #[test]
    fn manual_scroll_can_leave_cursor_behind_until_next_move() {
        let buffer = numbered(10);
        let mut viewport = Viewport::new(3);
        let mut cursor = Cursor::default();

        for _ in 0..4 {
            assert!(viewport.scroll_down(buffer.line_count()));
        }
        assert_eq!(viewport.scroll_top, 4);
        assert!(!viewport.contains(cursor.y));

        move_cursor(&mut cursor, &mut viewport, &buffer, Motion::Down);
        assert_eq!(cursor, Cursor::new(1, 0));
        assert_eq!(viewport.scroll_top, 1);
        assert!(viewport.contains(cursor.y));
    }

    #[test]
    fn manual_scroll_respects_buffer_bounds() {
        let buffer = numbered(4);
        let mut viewport = Viewport::new(3);
        assert!(!viewport.scroll_up());
        assert!(viewport.scroll_down(buffer.line_count()));
        assert!(!viewport.scroll_down(buffer.line_count()));
        assert_eq!(viewport.scroll_top, 1);
        assert!(viewport.scroll_up());
        assert_eq!(viewport.scroll_top, 0);

        let short = numbered(2);
        let mut viewport = Viewport::new(3);
        assert!(!viewport.scroll_down(short.line_count()));
    }

    #[test]
    fn clamp_pulls_scroll_back_after_buffer_shrinks() {
        let mut viewport = Viewport::new(3);
        viewport.scroll_top = 7;
        let mut cursor = Cursor::new(9, 4);
        let buffer = numbered(2);
        clamp(&mut cursor, &mut viewport, &buffer);
        assert_eq!(cursor, Cursor::new(1, 4));
        assert_eq!(viewport.scroll_top, 0);
    }

    #[test]
    fn screen_position_is_relative_to_scroll() {
        let buffer = TextBuffer::from_lines(["a", "b", "日本x"]);
        let mut viewport = Viewport::new(2);
        viewport.ensure_visible(2, buffer.line_count());
        assert_eq!(viewport.screen_position(Cursor::new(2, 2), &buffer), (1, 4));
    }
}
