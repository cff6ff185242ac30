//! Scroll offset computation for a window onto a buffer.
//!
//! Row `i` of the window shows buffer row `scroll_row + i`. Renderers must use
//! [`ViewportState::visible_index_of`] to place the cursor rather than the raw
//! buffer row.

use std::ops::Range;

use crate::text::{Buffer, Line};

/// Smallest scroll offset change that keeps `cursor_row` inside a window of
/// `height` rows starting at `scroll_row`.
///
/// A zero height keeps the current offset.
#[must_use]
pub fn ensure_visible(cursor_row: usize, scroll_row: usize, height: usize) -> usize {
    if height == 0 {
        scroll_row
    } else if cursor_row < scroll_row {
        cursor_row
    } else if cursor_row >= scroll_row.saturating_add(height) {
        cursor_row - (height - 1)
    } else {
        scroll_row
    }
}

/// The lines shown by a window of `height` rows starting at `scroll_row`.
#[must_use]
pub fn visible_slice(buffer: &Buffer, scroll_row: usize, height: usize) -> Vec<Line> {
    buffer.lines_in(scroll_row, scroll_row.saturating_add(height))
}

/// Vertical scroll position and window size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ViewportState {
    /// First buffer row shown.
    pub scroll_row: usize,
    /// First display column shown (single-line inputs scroll horizontally).
    pub scroll_col: usize,
    /// Window height in rows.
    pub height: usize,
    /// Window width in cells.
    pub width: usize,
}

impl ViewportState {
    /// Create a viewport scrolled to the top.
    #[must_use]
    pub const fn new(width: usize, height: usize) -> Self {
        Self {
            scroll_row: 0,
            scroll_col: 0,
            height,
            width,
        }
    }

    /// Copy with a new size. The offset is kept; call [`follow`](Self::follow)
    /// afterwards to bring the cursor back into view.
    #[must_use]
    pub const fn resize(self, width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..self
        }
    }

    /// Copy scrolled so that `cursor_row` is visible.
    #[must_use]
    pub fn follow(self, cursor_row: usize) -> Self {
        Self {
            scroll_row: ensure_visible(cursor_row, self.scroll_row, self.height),
            ..self
        }
    }

    /// Copy scrolled horizontally so that display column `cursor_x` fits.
    #[must_use]
    pub fn follow_column(self, cursor_x: usize) -> Self {
        self.follow_span(cursor_x, 1)
    }

    /// Copy scrolled horizontally so that the `span` cells starting at display
    /// column `x` fit. A span wider than the window keeps its left edge.
    #[must_use]
    pub fn follow_span(self, x: usize, span: usize) -> Self {
        if self.width == 0 {
            return self;
        }
        let last = x.saturating_add(span.clamp(1, self.width) - 1);
        Self {
            scroll_col: ensure_visible(last, self.scroll_col, self.width).min(x),
            ..self
        }
    }

    /// Buffer rows currently shown.
    #[must_use]
    pub fn visible_rows(&self, buffer: &Buffer) -> Range<usize> {
        let end = self
            .scroll_row
            .saturating_add(self.height)
            .min(buffer.line_count());
        self.scroll_row.min(end)..end
    }

    /// Lines currently shown.
    #[must_use]
    pub fn visible_lines(&self, buffer: &Buffer) -> Vec<Line> {
        visible_slice(buffer, self.scroll_row, self.height)
    }

    /// Window row that shows buffer row `row`, if it is on screen.
    #[must_use]
    pub fn visible_index_of(&self, row: usize) -> Option<usize> {
        let index = row.checked_sub(self.scroll_row)?;
        (index < self.height).then_some(index)
    }

    /// Buffer row shown at window row `index`.
    #[must_use]
    pub const fn buffer_row_of(&self, index: usize) -> usize {
        self.scroll_row.saturating_add(index)
    }
}
