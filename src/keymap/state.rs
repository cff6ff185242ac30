//! The state a dispatcher threads from one key event to the next.

use crate::options::EditorOptions;
use crate::text::{Buffer, Cursor, EditState, KillRing, Position, Selection, YankSpan};

/// Everything a key event can change.
///
/// An event loop keeps exactly one `EditorState` as its source of truth and
/// replaces it with whatever [`Dispatcher::dispatch`](crate::keymap::Dispatcher::dispatch)
/// returns.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditorState {
    pub buffer: Buffer,
    pub cursor: Cursor,
    pub kill_ring: KillRing,
    /// Present once a mark has been set; may be empty.
    pub selection: Option<Selection>,
    /// Text inserted by the immediately preceding yank.
    last_yank: Option<YankSpan>,
}

impl EditorState {
    /// Bundle a buffer, cursor and kill ring, clamping the cursor.
    #[must_use]
    pub fn new(buffer: Buffer, cursor: Cursor, kill_ring: KillRing) -> Self {
        Self {
            cursor: cursor.clamp_to(&buffer),
            buffer,
            kill_ring,
            selection: None,
            last_yank: None,
        }
    }

    /// A state holding `text`, cursor at the start, default kill ring.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self::new(Buffer::from_str(text), Cursor::start(), KillRing::default())
    }

    /// An empty state configured from `options`.
    #[must_use]
    pub fn with_options(options: &EditorOptions) -> Self {
        Self::new(
            Buffer::new(),
            Cursor::start(),
            KillRing::new(options.kill_ring_capacity),
        )
    }

    /// Copy with the cursor moved (and clamped).
    #[must_use]
    pub fn with_cursor(&self, position: Position) -> Self {
        Self {
            cursor: Cursor::new(position.clamp_to(&self.buffer)),
            ..self.clone()
        }
    }

    /// Copy with a different selection.
    #[must_use]
    pub fn with_selection(&self, selection: Option<Selection>) -> Self {
        Self {
            selection: selection.map(|s| s.clamp_to(&self.buffer)),
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

    /// Copy with new text, cursor at the end, selection and yank tracking reset.
    /// The kill ring is kept.
    #[must_use]
    pub fn with_text(&self, text: &str) -> Self {
        let buffer = Buffer::from_str(text);
        let cursor = Cursor::new(buffer.end_position());
        Self::new(buffer, cursor, self.kill_ring.clone())
    }

    /// The cursor position.
    #[must_use]
    pub fn position(&self) -> Position {
        self.cursor.position()
    }

    /// What the previous yank inserted, if the last operation was a yank.
    #[must_use]
    pub fn last_yank(&self) -> Option<YankSpan> {
        self.last_yank
    }

    /// Check for a selection covering at least one cluster.
    #[must_use]
    pub fn has_selection(&self) -> bool {
        self.selection.is_some_and(|s| !s.is_empty())
    }

    /// The selected text, if any.
    #[must_use]
    pub fn selected_text(&self) -> Option<String> {
        self.selection
            .filter(|s| !s.is_empty())
            .map(|s| s.text(&self.buffer))
    }

    /// The buffer, cursor and kill ring as an [`EditState`].
    #[must_use]
    pub fn edit_state(&self) -> EditState {
        EditState::new(
            self.buffer.clone(),
            self.cursor.position(),
            self.kill_ring.clone(),
        )
    }

    /// Adopt the result of an edit. Selection and yank tracking are cleared.
    #[must_use]
    pub fn after_edit(&self, edit: EditState) -> Self {
        Self {
            cursor: Cursor::new(edit.cursor.clamp_to(&edit.buffer)),
            buffer: edit.buffer,
            kill_ring: edit.kill_ring,
            selection: None,
            last_yank: None,
        }
    }

    /// Adopt the result of a yank that inserted `span`.
    #[must_use]
    pub(crate) fn after_yank(&self, edit: EditState, span: YankSpan) -> Self {
        Self {
            last_yank: Some(span),
            ..self.after_edit(edit)
        }
    }

    /// Adopt a kill ring that gained a copy of the selection.
    #[must_use]
    pub(crate) fn after_copy(&self, kill_ring: KillRing) -> Self {
        Self {
            kill_ring,
            selection: None,
            last_yank: None,
            ..self.clone()
        }
    }

    /// Move the cursor, dragging the selection's cursor end along.
    #[must_use]
    pub(crate) fn after_motion(&self, position: Position) -> Self {
        Self {
            cursor: Cursor::new(position),
            selection: self.selection.map(|s| s.with_cursor(position)),
            last_yank: None,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps_cursor() {
        let state = EditorState::new(
            Buffer::from_str("ab"),
            Cursor::new(Position::new(4, 9)),
            KillRing::default(),
        );
        assert_eq!(state.position(), Position::new(0, 2));
    }

    #[test]
    fn test_absent_and_empty_selection_differ() {
        let state = EditorState::from_text("abc");
        assert_eq!(state.selection, None);
        let marked = state.with_selection(Some(Selection::collapsed(Position::new(0, 1))));
        assert!(marked.selection.is_some());
        assert!(!marked.has_selection());
        assert_eq!(marked.selected_text(), None);
    }

    #[test]
    fn test_with_text_keeps_kill_ring() {
        let state = EditorState::from_text("x");
        let state = state.with_kill_ring(state.kill_ring.kill("saved"));
        let replaced = state.with_text("new\ntext");
        assert_eq!(replaced.kill_ring.yank(), "saved");
        assert_eq!(replaced.position(), Position::new(1, 4));
    }
}
