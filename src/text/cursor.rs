//! Cursor and selection value types.

use crate::text::Buffer;

/// A grapheme position in a [`Buffer`].
///
/// `col == line length` means "after the last cluster". Positions order
/// row-major, so `min`/`max` give document order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Line number (0-indexed).
    pub row: usize,
    /// Grapheme column (0-indexed).
    pub col: usize,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// A position on row 0, as used by single-line inputs.
    #[must_use]
    pub const fn offset(col: usize) -> Self {
        Self { row: 0, col }
    }

    /// Clamp to the nearest valid position in `buffer`.
    #[must_use]
    pub fn clamp_to(self, buffer: &Buffer) -> Self {
        buffer.clamp(self)
    }

    /// Copy with a different column.
    #[must_use]
    pub const fn with_col(self, col: usize) -> Self {
        Self { col, ..self }
    }

    /// Copy with a different row.
    #[must_use]
    pub const fn with_row(self, row: usize) -> Self {
        Self { row, ..self }
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// The insertion point of a text widget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cursor {
    position: Position,
}

impl Cursor {
    /// Create a cursor at a position.
    #[must_use]
    pub const fn new(position: Position) -> Self {
        Self { position }
    }

    /// Create a cursor at the beginning.
    #[must_use]
    pub const fn start() -> Self {
        Self::new(Position::new(0, 0))
    }

    /// Create a cursor at a grapheme offset on row 0.
    #[must_use]
    pub const fn at_offset(col: usize) -> Self {
        Self::new(Position::offset(col))
    }

    /// The cursor's position.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub const fn row(&self) -> usize {
        self.position.row
    }

    #[must_use]
    pub const fn col(&self) -> usize {
        self.position.col
    }

    /// Copy moved to a new position.
    #[must_use]
    pub const fn with_position(self, position: Position) -> Self {
        Self { position }
    }

    /// Clamp to the nearest valid position in `buffer`.
    #[must_use]
    pub fn clamp_to(self, buffer: &Buffer) -> Self {
        Self::new(self.position.clamp_to(buffer))
    }
}

impl From<Position> for Cursor {
    fn from(position: Position) -> Self {
        Self::new(position)
    }
}

/// An anchor plus the moving cursor end.
///
/// A selection whose ends coincide is empty but still present; callers that
/// need "no selection" hold an `Option<Selection>`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Selection {
    /// The fixed end.
    pub anchor: Position,
    /// The end that follows the cursor.
    pub cursor: Position,
}

impl Selection {
    /// Create a new selection.
    #[must_use]
    pub const fn new(anchor: Position, cursor: Position) -> Self {
        Self { anchor, cursor }
    }

    /// An empty selection anchored at `pos`.
    #[must_use]
    pub const fn collapsed(pos: Position) -> Self {
        Self::new(pos, pos)
    }

    /// `(start, end)` in document order, whichever end moved last.
    #[must_use]
    pub fn range(&self) -> (Position, Position) {
        (self.anchor.min(self.cursor), self.anchor.max(self.cursor))
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.anchor == self.cursor
    }

    /// Copy with the cursor end moved; the anchor stays.
    #[must_use]
    pub const fn with_cursor(self, cursor: Position) -> Self {
        Self {
            anchor: self.anchor,
            cursor,
        }
    }

    /// Clamp both ends into `buffer`.
    #[must_use]
    pub fn clamp_to(self, buffer: &Buffer) -> Self {
        Self::new(self.anchor.clamp_to(buffer), self.cursor.clamp_to(buffer))
    }

    /// The selected text.
    #[must_use]
    pub fn text(&self, buffer: &Buffer) -> String {
        buffer.text_in(self.anchor, self.cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_ordering_is_row_major() {
        assert!(Position::new(0, 9) < Position::new(1, 0));
        assert!(Position::new(2, 1) < Position::new(2, 3));
    }

    #[test]
    fn test_clamp_after_shrink() {
        let buf = Buffer::from_str("short\nlonger line");
        let cursor = Cursor::new(Position::new(1, 11));
        let (shrunk, _) = buf.delete_range(Position::new(0, 5), Position::new(1, 11));
        assert_eq!(cursor.clamp_to(&shrunk).position(), Position::new(0, 5));
    }

    #[test]
    fn test_selection_range_normalizes() {
        let sel = Selection::new(Position::new(2, 4), Position::new(0, 1));
        assert_eq!(sel.range(), (Position::new(0, 1), Position::new(2, 4)));
        assert!(!sel.is_empty());
    }

    #[test]
    fn test_with_cursor_keeps_anchor() {
        let sel = Selection::collapsed(Position::new(1, 1));
        assert!(sel.is_empty());
        let moved = sel.with_cursor(Position::new(1, 5));
        assert_eq!(moved.anchor, Position::new(1, 1));
        assert_eq!(moved.range(), (Position::new(1, 1), Position::new(1, 5)));
    }

    #[test]
    fn test_selection_text() {
        let buf = Buffer::from_str("hello world");
        let sel = Selection::new(Position::offset(11), Position::offset(6));
        assert_eq!(sel.text(&buf), "world");
    }
}
