//! Editing operations over a buffer, cursor and kill ring.
//!
//! Each function takes an [`EditState`] snapshot and returns the next one; the
//! input is never modified. Removing an empty span returns the input as-is;
//! every other removal, single clusters included, pushes the removed text onto
//! the kill ring.
//!
//! # Examples
//!
//! ```
//! use tui_textedit::text::{EditState, Position, edit};
//!
//! let state = EditState::from_text("hello world").with_cursor(Position::offset(5));
//! let state = edit::kill_line(&state);
//! assert_eq!(state.buffer.value(), "hello");
//! assert_eq!(state.kill_ring.yank(), " world");
//!
//! let state = edit::yank(&edit::insert_text(&state, ","));
//! assert_eq!(state.buffer.value(), "hello, world");
//! ```

use crate::text::navigation;
use crate::text::{Buffer, KillRing, Position};

/// The triple every editing operation works on.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditState {
    pub buffer: Buffer,
    pub cursor: Position,
    pub kill_ring: KillRing,
}

impl EditState {
    /// Bundle a buffer, cursor and kill ring, clamping the cursor.
    #[must_use]
    pub fn new(buffer: Buffer, cursor: Position, kill_ring: KillRing) -> Self {
        let cursor = cursor.clamp_to(&buffer);
        Self {
            buffer,
            cursor,
            kill_ring,
        }
    }

    /// A state holding `text` with the cursor at the start.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self::new(Buffer::from_str(text), Position::default(), KillRing::default())
    }

    /// Copy with the cursor moved (and clamped).
    #[must_use]
    pub fn with_cursor(&self, cursor: Position) -> Self {
        Self {
            cursor: cursor.clamp_to(&self.buffer),
            ..self.clone()
        }
    }

    /// Copy with a different kill ring.
    #[must_use]
    pub fn with_kill_ring(&self, kill_ring: KillRing) -> Self {
        Self {
            kill_ring,
            ..self.clone()
        }
    }
}

/// Insert one character at the cursor.
#[must_use]
pub fn insert_char(state: &EditState, c: char) -> EditState {
    insert_text(state, c.encode_utf8(&mut [0; 4]))
}

/// Insert text at the cursor; the cursor lands after it.
#[must_use]
pub fn insert_text(state: &EditState, text: &str) -> EditState {
    if text.is_empty() {
        return state.clone();
    }
    let (buffer, cursor) = state.buffer.insert_at(state.cursor, text);
    EditState {
        buffer,
        cursor,
        kill_ring: state.kill_ring.clone(),
    }
}

/// Split the line at the cursor.
#[must_use]
pub fn insert_newline(state: &EditState) -> EditState {
    insert_text(state, "\n")
}

/// Delete the cluster before the cursor, joining lines at column 0.
#[must_use]
pub fn delete_char_backward(state: &EditState) -> EditState {
    let start = navigation::char_left(&state.buffer, state.cursor);
    kill_range(state, start, state.cursor)
}

/// Delete the cluster after the cursor, joining lines at line end.
#[must_use]
pub fn delete_char_forward(state: &EditState) -> EditState {
    let end = navigation::char_right(&state.buffer, state.cursor);
    kill_range(state, state.cursor, end)
}

/// Kill the span [`navigation::forward_word`] would move over.
#[must_use]
pub fn delete_word_forward(state: &EditState) -> EditState {
    let end = navigation::forward_word(&state.buffer, state.cursor);
    kill_range(state, state.cursor, end)
}

/// Kill the span [`navigation::backward_word`] would move over.
#[must_use]
pub fn delete_word_backward(state: &EditState) -> EditState {
    let start = navigation::backward_word(&state.buffer, state.cursor);
    kill_range(state, start, state.cursor)
}

/// Kill from the cursor to the end of the line, leaving the newline.
#[must_use]
pub fn kill_line(state: &EditState) -> EditState {
    let end = navigation::line_end(&state.buffer, state.cursor);
    kill_range(state, state.cursor, end)
}

/// Kill from the start of the line to the cursor.
#[must_use]
pub fn kill_line_backward(state: &EditState) -> EditState {
    let start = navigation::line_start(&state.buffer, state.cursor);
    kill_range(state, start, state.cursor)
}

/// Kill the text between two positions, in either order.
///
/// The cursor moves to the start of the removed span.
#[must_use]
pub fn kill_range(state: &EditState, a: Position, b: Position) -> EditState {
    let (start, end) = (a.min(b), a.max(b));
    let (buffer, killed) = state.buffer.delete_range(start, end);
    if killed.is_empty() {
        return state.clone();
    }
    let kill_ring = state.kill_ring.kill(&killed);
    EditState::new(buffer, start, kill_ring)
}

/// Push the text between two positions onto the kill ring without removing it.
#[must_use]
pub fn copy_range(state: &EditState, a: Position, b: Position) -> EditState {
    let text = state.buffer.text_in(a, b);
    state.with_kill_ring(state.kill_ring.kill(&text))
}

/// Insert the kill ring's current entry at the cursor. Does not rotate.
#[must_use]
pub fn yank(state: &EditState) -> EditState {
    insert_text(state, state.kill_ring.yank())
}

/// Replace the text a previous yank inserted with the next-older entry.
///
/// Only meaningful right after [`yank`] or another `yank_pop`; the caller
/// keeps the [`YankSpan`] of the text to replace.
#[must_use]
pub fn yank_pop(state: &EditState, span: YankSpan) -> EditState {
    if state.kill_ring.is_empty() {
        return state.clone();
    }
    let (buffer, _) = state.buffer.delete_chars(span.start, span.end());
    let kill_ring = state.kill_ring.yank_pop();
    let text = kill_ring.yank();
    let buffer = buffer.insert_at_char(span.start, text);
    let cursor = buffer.position_at_char(span.start + text.chars().count());
    EditState {
        buffer,
        cursor,
        kill_ring,
    }
}

/// The chars a yank inserted, as a rope char range.
///
/// Yanked text can merge into the cluster before it (a leading combining
/// mark), so grapheme positions cannot delimit it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct YankSpan {
    pub start: usize,
    pub len: usize,
}

impl YankSpan {
    /// Span of `text` inserted at char index `start`.
    #[must_use]
    pub fn new(start: usize, text: &str) -> Self {
        Self {
            start,
            len: text.chars().count(),
        }
    }

    /// Span the next [`yank`] from `state` will occupy.
    #[must_use]
    pub fn at_cursor(state: &EditState) -> Self {
        Self::new(state.buffer.char_index(state.cursor), state.kill_ring.yank())
    }

    #[must_use]
    pub const fn end(&self) -> usize {
        self.start.saturating_add(self.len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(text: &str, row: usize, col: usize) -> EditState {
        EditState::from_text(text).with_cursor(Position::new(row, col))
    }

    #[test]
    fn test_insert_advances_by_clusters() {
        let s = insert_text(&state("ab", 0, 1), "👋🏻你");
        assert_eq!(s.buffer.value(), "a👋🏻你b");
        assert_eq!(s.cursor, Position::new(0, 3));
    }

    #[test]
    fn test_insert_newline_splits() {
        let s = insert_newline(&state("hello", 0, 2));
        assert_eq!(s.buffer.value(), "he\nllo");
        assert_eq!(s.cursor, Position::new(1, 0));
    }

    #[test]
    fn test_backspace_joins_previous_line() {
        let s = delete_char_backward(&state("ab\ncd", 1, 0));
        assert_eq!(s.buffer.value(), "abcd");
        assert_eq!(s.cursor, Position::new(0, 2));
        assert_eq!(s.kill_ring.yank(), "\n");
    }

    #[test]
    fn test_char_deletes_feed_ring() {
        let s = delete_char_forward(&state("a👋🏻b", 0, 1));
        assert_eq!(s.buffer.value(), "ab");
        assert_eq!(s.kill_ring.yank(), "👋🏻");
        let s = delete_char_backward(&s);
        assert_eq!(s.buffer.value(), "b");
        assert_eq!(s.kill_ring.yank(), "a");
        assert_eq!(s.kill_ring.len(), 2);
    }

    #[test]
    fn test_delete_forward_joins_next_line() {
        let s = delete_char_forward(&state("ab\ncd", 0, 2));
        assert_eq!(s.buffer.value(), "abcd");
        assert_eq!(s.cursor, Position::new(0, 2));
    }

    #[test]
    fn test_deletes_at_buffer_edges_are_noops() {
        let s = state("ab", 0, 0);
        assert_eq!(delete_char_backward(&s), s);
        let s = state("ab", 0, 2);
        assert_eq!(delete_char_forward(&s), s);
    }

    #[test]
    fn test_backspace_removes_whole_cluster() {
        let s = delete_char_backward(&state("a👨‍👩‍👧", 0, 2));
        assert_eq!(s.buffer.value(), "a");
        assert_eq!(s.cursor, Position::new(0, 1));
    }

    #[test]
    fn test_word_kills_feed_ring() {
        let s = delete_word_backward(&state("foo bar baz", 0, 11));
        assert_eq!(s.buffer.value(), "foo bar ");
        assert_eq!(s.kill_ring.yank(), "baz");

        let s = delete_word_forward(&s.with_cursor(Position::new(0, 0)));
        assert_eq!(s.buffer.value(), " bar ");
        assert_eq!(s.kill_ring.yank(), "foo");
        assert_eq!(s.kill_ring.len(), 2);
    }

    #[test]
    fn test_kill_line_leaves_newline() {
        let s = kill_line(&state("hello\nworld", 0, 2));
        assert_eq!(s.buffer.value(), "he\nworld");
        assert_eq!(s.kill_ring.yank(), "llo");
        assert_eq!(s.cursor, Position::new(0, 2));
    }

    #[test]
    fn test_kill_line_on_empty_line() {
        let s = state("\nnext", 0, 0);
        let after = kill_line(&s);
        assert_eq!(after, s);
        assert!(after.kill_ring.is_empty());
    }

    #[test]
    fn test_kill_line_backward() {
        let s = kill_line_backward(&state("hello world", 0, 6));
        assert_eq!(s.buffer.value(), "world");
        assert_eq!(s.kill_ring.yank(), "hello ");
        assert_eq!(s.cursor, Position::new(0, 0));
    }

    #[test]
    fn test_yank_inserts_without_rotating() {
        let s = kill_line(&state("abc", 0, 1));
        let s = yank(&yank(&s));
        assert_eq!(s.buffer.value(), "abcbc");
        assert_eq!(s.kill_ring.yank(), "bc");
    }

    #[test]
    fn test_yank_empty_ring_is_noop() {
        let s = state("abc", 0, 1);
        assert_eq!(yank(&s), s);
        assert_eq!(yank_pop(&s, YankSpan::default()), s);
    }

    #[test]
    fn test_yank_pop_replaces_previous_yank() {
        let ring = KillRing::default().kill("one").kill("two");
        let s = state("[]", 0, 1).with_kill_ring(ring);
        let span = YankSpan::at_cursor(&s);
        assert_eq!(span, YankSpan { start: 1, len: 3 });
        let yanked = yank(&s);
        assert_eq!(yanked.buffer.value(), "[two]");
        let popped = yank_pop(&yanked, span);
        assert_eq!(popped.buffer.value(), "[one]");
        assert_eq!(popped.cursor, Position::new(0, 4));
        let again = yank_pop(&popped, YankSpan::new(span.start, popped.kill_ring.yank()));
        assert_eq!(again.buffer.value(), "[two]");
    }

    #[test]
    fn test_yank_pop_removes_mark_merged_into_previous_cluster() {
        let ring = KillRing::default().kill("X").kill("\u{301}");
        let s = state("e", 0, 1).with_kill_ring(ring);
        let span = YankSpan::at_cursor(&s);
        let yanked = yank(&s);
        assert_eq!(yanked.buffer.value(), "e\u{301}");
        assert_eq!(yanked.buffer.line_len(0), 1);
        let popped = yank_pop(&yanked, span);
        assert_eq!(popped.buffer.value(), "eX");
        assert_eq!(popped.cursor, Position::new(0, 2));
    }

    #[test]
    fn test_copy_range_keeps_buffer() {
        let s = state("hello world", 0, 0);
        let copied = copy_range(&s, Position::offset(6), Position::offset(11));
        assert_eq!(copied.buffer, s.buffer);
        assert_eq!(copied.kill_ring.yank(), "world");
    }

    #[test]
    fn test_inputs_are_not_mutated() {
        let s = state("hello", 0, 5);
        let _ = delete_word_backward(&s);
        assert_eq!(s.buffer.value(), "hello");
        assert!(s.kill_ring.is_empty());
    }
}
