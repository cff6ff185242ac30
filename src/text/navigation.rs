//! Cursor motions.
//!
//! Every motion is a pure function from a buffer and a position to a new
//! position. A motion that cannot move returns its input (after clamping).
//!
//! Word motions classify each cluster by its first code point: letters,
//! digits and `_` are word characters, everything else separates words.

use crate::text::{Buffer, Position};
use crate::unicode::{WidthMethod, segment};

/// One cluster left, wrapping to the end of the previous line.
#[must_use]
pub fn char_left(buffer: &Buffer, pos: Position) -> Position {
    let pos = buffer.clamp(pos);
    if pos.col > 0 {
        pos.with_col(pos.col - 1)
    } else if pos.row > 0 {
        Position::new(pos.row - 1, buffer.line_len(pos.row - 1))
    } else {
        pos
    }
}

/// One cluster right, wrapping to the start of the next line.
#[must_use]
pub fn char_right(buffer: &Buffer, pos: Position) -> Position {
    let pos = buffer.clamp(pos);
    if pos.col < buffer.line_len(pos.row) {
        pos.with_col(pos.col + 1)
    } else if pos.row + 1 < buffer.line_count() {
        Position::new(pos.row + 1, 0)
    } else {
        pos
    }
}

/// Previous line, column clamped to its length.
#[must_use]
pub fn line_up(buffer: &Buffer, pos: Position) -> Position {
    let pos = buffer.clamp(pos);
    if pos.row == 0 {
        return pos;
    }
    buffer.clamp(pos.with_row(pos.row - 1))
}

/// Next line, column clamped to its length.
#[must_use]
pub fn line_down(buffer: &Buffer, pos: Position) -> Position {
    let pos = buffer.clamp(pos);
    if pos.row + 1 >= buffer.line_count() {
        return pos;
    }
    buffer.clamp(pos.with_row(pos.row + 1))
}

#[must_use]
pub fn line_start(buffer: &Buffer, pos: Position) -> Position {
    buffer.clamp(pos).with_col(0)
}

#[must_use]
pub fn line_end(buffer: &Buffer, pos: Position) -> Position {
    let pos = buffer.clamp(pos);
    pos.with_col(buffer.line_len(pos.row))
}

#[must_use]
pub fn buffer_start(_buffer: &Buffer, _pos: Position) -> Position {
    Position::new(0, 0)
}

#[must_use]
pub fn buffer_end(buffer: &Buffer, _pos: Position) -> Position {
    buffer.end_position()
}

/// Forward to the end of the next word on this line.
///
/// Skips separators, then word characters, stopping at the next separator or
/// the end of the line. Never leaves the line: at line end it does not move.
#[must_use]
pub fn forward_word(buffer: &Buffer, pos: Position) -> Position {
    let pos = buffer.clamp(pos);
    let line = buffer.line(pos.row);
    if pos.col >= line.len() {
        return pos;
    }

    let mut col = pos.col;
    let mut clusters = segment(line.as_str(), WidthMethod::WcWidth).skip(col).peekable();
    while clusters.next_if(|g| !g.is_word_char()).is_some() {
        col += 1;
    }
    while clusters.next_if(|g| g.is_word_char()).is_some() {
        col += 1;
    }
    pos.with_col(col)
}

/// Backward to the start of the previous word on this line.
///
/// Mirrors [`forward_word`]; at column 0 it does not move.
#[must_use]
pub fn backward_word(buffer: &Buffer, pos: Position) -> Position {
    let pos = buffer.clamp(pos);
    if pos.col == 0 {
        return pos;
    }

    let line = buffer.line(pos.row);
    let (before, _) = line.split_at(pos.col);
    let mut col = pos.col;
    let mut clusters = segment(before, WidthMethod::WcWidth).rev().peekable();
    while clusters.next_if(|g| !g.is_word_char()).is_some() {
        col -= 1;
    }
    while clusters.next_if(|g| g.is_word_char()).is_some() {
        col -= 1;
    }
    pos.with_col(col)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn test_char_motions_wrap_lines() {
        let buf = Buffer::from_str("ab\ncd");
        assert_eq!(char_right(&buf, pos(0, 2)), pos(1, 0));
        assert_eq!(char_left(&buf, pos(1, 0)), pos(0, 2));
    }

    #[test]
    fn test_char_motions_blocked_at_edges() {
        let buf = Buffer::from_str("ab\ncd");
        assert_eq!(char_right(&buf, pos(1, 2)), pos(1, 2));
        assert_eq!(char_left(&buf, pos(0, 0)), pos(0, 0));
    }

    #[test]
    fn test_char_motions_step_whole_clusters() {
        let buf = Buffer::from_str("a👋🏻b");
        assert_eq!(char_right(&buf, pos(0, 1)), pos(0, 2));
        assert_eq!(char_left(&buf, pos(0, 2)), pos(0, 1));
    }

    #[test]
    fn test_vertical_motion_reclamps_column() {
        let buf = Buffer::from_str("long line\nab\nlonger line");
        assert_eq!(line_down(&buf, pos(0, 8)), pos(1, 2));
        assert_eq!(line_down(&buf, pos(1, 2)), pos(2, 2));
        assert_eq!(line_up(&buf, pos(2, 10)), pos(1, 2));
        assert_eq!(line_up(&buf, pos(0, 3)), pos(0, 3));
        assert_eq!(line_down(&buf, pos(2, 3)), pos(2, 3));
    }

    #[test]
    fn test_line_and_buffer_bounds() {
        let buf = Buffer::from_str("abc\ndefgh");
        assert_eq!(line_start(&buf, pos(1, 3)), pos(1, 0));
        assert_eq!(line_end(&buf, pos(1, 1)), pos(1, 5));
        assert_eq!(buffer_start(&buf, pos(1, 3)), pos(0, 0));
        assert_eq!(buffer_end(&buf, pos(0, 0)), pos(1, 5));
    }

    #[test]
    fn test_forward_word() {
        let buf = Buffer::from_str("hello, big_world!");
        assert_eq!(forward_word(&buf, pos(0, 0)), pos(0, 5));
        assert_eq!(forward_word(&buf, pos(0, 5)), pos(0, 16));
        assert_eq!(forward_word(&buf, pos(0, 16)), pos(0, 17));
    }

    #[test]
    fn test_forward_word_never_leaves_line() {
        let buf = Buffer::from_str("foo  \nbar");
        assert_eq!(forward_word(&buf, pos(0, 3)), pos(0, 5));
        assert_eq!(forward_word(&buf, pos(0, 5)), pos(0, 5));
        assert_eq!(forward_word(&buf, pos(1, 3)), pos(1, 3));
    }

    #[test]
    fn test_backward_word() {
        let buf = Buffer::from_str("hello, big_world!");
        assert_eq!(backward_word(&buf, pos(0, 17)), pos(0, 7));
        assert_eq!(backward_word(&buf, pos(0, 7)), pos(0, 0));
        assert_eq!(backward_word(&buf, pos(0, 0)), pos(0, 0));
    }

    #[test]
    fn test_backward_word_never_leaves_line() {
        let buf = Buffer::from_str("foo\n  bar");
        assert_eq!(backward_word(&buf, pos(1, 2)), pos(1, 0));
        assert_eq!(backward_word(&buf, pos(1, 0)), pos(1, 0));
    }

    #[test]
    fn test_word_motion_over_cjk_and_emoji() {
        let buf = Buffer::from_str("你好 👋🏻 world");
        // CJK ideographs are alphabetic, the emoji is a separator
        assert_eq!(forward_word(&buf, pos(0, 0)), pos(0, 2));
        assert_eq!(forward_word(&buf, pos(0, 2)), pos(0, 10));
        assert_eq!(backward_word(&buf, pos(0, 10)), pos(0, 5));
    }
}
