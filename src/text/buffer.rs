//! Rope-backed, grapheme-addressed text buffer.
//!
//! [`Buffer`] is a value type. Every structural edit returns a new buffer;
//! the old one stays valid. Cloning is cheap because the underlying
//! [`ropey::Rope`] shares unchanged nodes between snapshots, so editing one
//! line of a large buffer does not copy the rest.

use std::fmt;

use ropey::Rope;

use crate::text::Position;
use crate::unicode::{
    Segments, WidthMethod, byte_offset_of, display_width_with_method, grapheme_len, segment,
};

/// A single line of a [`Buffer`], without its trailing newline.
///
/// Lengths are counted in grapheme clusters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Line {
    text: String,
}

impl Line {
    /// Create a line, cutting it at the first newline if one is present.
    #[must_use]
    pub fn new(text: &str) -> Self {
        let text = text.split('\n').next().unwrap_or_default();
        Self {
            text: text.to_string(),
        }
    }

    /// The line's text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of grapheme clusters.
    #[must_use]
    pub fn len(&self) -> usize {
        grapheme_len(&self.text)
    }

    /// Check if the line has no clusters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Width of the line in terminal cells.
    #[must_use]
    pub fn width(&self, method: WidthMethod) -> usize {
        display_width_with_method(&self.text, method)
    }

    /// Iterate over the line's clusters.
    #[must_use]
    pub fn clusters(&self, method: WidthMethod) -> Segments<'_> {
        segment(&self.text, method)
    }

    /// Byte offset where the `col`-th cluster starts.
    #[must_use]
    pub fn byte_offset(&self, col: usize) -> usize {
        byte_offset_of(&self.text, col)
    }

    /// Split the line at a grapheme column.
    #[must_use]
    pub fn split_at(&self, col: usize) -> (&str, &str) {
        self.text.split_at(self.byte_offset(col))
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for Line {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Non-empty ordered sequence of lines.
///
/// An empty buffer still has one (empty) line. Positions handed to any method
/// are clamped first, so every call yields a valid buffer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Buffer {
    rope: Rope,
}

impl Buffer {
    /// Create an empty buffer with a single empty line.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer by splitting `s` on `\n`.
    #[must_use]
    pub fn from_str(s: &str) -> Self {
        Self {
            rope: Rope::from_str(s),
        }
    }

    /// The full text, lines joined with `\n`.
    #[must_use]
    pub fn value(&self) -> String {
        self.rope.to_string()
    }

    /// Number of lines (always at least 1).
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Check if the buffer holds no text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rope.len_bytes() == 0
    }

    /// Get a line by row, clamped to the last line.
    #[must_use]
    pub fn line(&self, row: usize) -> Line {
        Line {
            text: self.line_text(row),
        }
    }

    /// Grapheme length of a line.
    #[must_use]
    pub fn line_len(&self, row: usize) -> usize {
        grapheme_len(&self.line_text(row))
    }

    /// Iterate over all lines.
    pub fn lines(&self) -> impl Iterator<Item = Line> + '_ {
        (0..self.line_count()).map(|row| self.line(row))
    }

    /// Lines in `start..end`, with the range clamped to the buffer.
    #[must_use]
    pub fn lines_in(&self, start: usize, end: usize) -> Vec<Line> {
        let end = end.min(self.line_count());
        (start.min(end)..end).map(|row| self.line(row)).collect()
    }

    /// Clamp a position to the nearest valid one.
    #[must_use]
    pub fn clamp(&self, pos: Position) -> Position {
        let row = pos.row.min(self.last_row());
        Position::new(row, pos.col.min(self.line_len(row)))
    }

    /// Position after the last cluster of the last line.
    #[must_use]
    pub fn end_position(&self) -> Position {
        let row = self.last_row();
        Position::new(row, self.line_len(row))
    }

    /// Text between two positions, in either order.
    #[must_use]
    pub fn text_in(&self, a: Position, b: Position) -> String {
        let (start, end) = self.char_range(a, b);
        self.rope.slice(start..end).to_string()
    }

    /// Insert `text` at `pos`.
    ///
    /// `text` may contain newlines, splitting the line. Returns the new buffer
    /// and the position just after the inserted text.
    #[must_use]
    pub fn insert_at(&self, pos: Position, text: &str) -> (Self, Position) {
        let at = self.char_index(pos);
        let buffer = self.insert_at_char(at, text);
        let end = buffer.position_at_char(at + text.chars().count());
        (buffer, end)
    }

    /// Insert `text` at rope char index `idx` (clamped to the end).
    #[must_use]
    pub fn insert_at_char(&self, idx: usize, text: &str) -> Self {
        if text.is_empty() {
            return self.clone();
        }
        let mut rope = self.rope.clone();
        rope.insert(idx.min(rope.len_chars()), text);
        Self { rope }
    }

    /// Remove the text between two positions, in either order.
    ///
    /// Returns the new buffer and the removed text. An empty range returns an
    /// unchanged buffer and an empty string.
    #[must_use]
    pub fn delete_range(&self, a: Position, b: Position) -> (Self, String) {
        let (start, end) = self.char_range(a, b);
        self.delete_chars(start, end)
    }

    /// Remove rope chars `start..end`, in either order and clamped to the end.
    #[must_use]
    pub fn delete_chars(&self, start: usize, end: usize) -> (Self, String) {
        let len = self.rope.len_chars();
        let (start, end) = (start.min(end).min(len), start.max(end).min(len));
        if start == end {
            return (self.clone(), String::new());
        }
        let killed = self.rope.slice(start..end).to_string();
        let mut rope = self.rope.clone();
        rope.remove(start..end);
        (Self { rope }, killed)
    }

    /// Break the line at `pos` into two lines.
    #[must_use]
    pub fn split_line(&self, pos: Position) -> Self {
        self.insert_at(pos, "\n").0
    }

    /// Append the next line to `row`, removing the newline between them.
    ///
    /// The last line has nothing to join with and is returned unchanged.
    #[must_use]
    pub fn join_line_with_next(&self, row: usize) -> Self {
        if row + 1 >= self.line_count() {
            return self.clone();
        }
        let newline = self.rope.line_to_char(row + 1) - 1;
        let mut rope = self.rope.clone();
        rope.remove(newline..=newline);
        Self { rope }
    }

    fn last_row(&self) -> usize {
        self.line_count() - 1
    }

    fn line_text(&self, row: usize) -> String {
        let line = self.rope.line(row.min(self.last_row()));
        let mut text = line.to_string();
        if text.ends_with('\n') {
            text.pop();
        }
        text
    }

    /// Rope char index of a (clamped) grapheme position.
    #[must_use]
    pub fn char_index(&self, pos: Position) -> usize {
        let pos = self.clamp(pos);
        let line = self.line_text(pos.row);
        let byte = byte_offset_of(&line, pos.col);
        self.rope.line_to_char(pos.row) + line[..byte].chars().count()
    }

    /// Grapheme position of a rope char index.
    ///
    /// An index inside a cluster rounds forward to the end of that cluster.
    #[must_use]
    pub fn position_at_char(&self, idx: usize) -> Position {
        let idx = idx.min(self.rope.len_chars());
        let row = self.rope.char_to_line(idx);
        let line = self.line_text(row);
        let within = idx - self.rope.line_to_char(row);
        let byte = line
            .char_indices()
            .nth(within)
            .map_or(line.len(), |(b, _)| b);
        Position::new(row, grapheme_len(&line[..byte]))
    }

    fn char_range(&self, a: Position, b: Position) -> (usize, usize) {
        let a = self.char_index(a);
        let b = self.char_index(b);
        (a.min(b), a.max(b))
    }
}

impl fmt::Display for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in self.rope.chunks() {
            f.write_str(chunk)?;
        }
        Ok(())
    }
}

impl From<&str> for Buffer {
    fn from(s: &str) -> Self {
        Self::from_str(s)
    }
}

impl From<String> for Buffer {
    fn from(s: String) -> Self {
        Self::from_str(&s)
    }
}
