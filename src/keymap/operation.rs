//! Operations a key binding can trigger.

use crate::keymap::EditorState;
use crate::text::{Buffer, Position, Selection, YankSpan, edit, navigation};

/// A single editing or motion command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    CharLeft,
    CharRight,
    LineUp,
    LineDown,
    LineStart,
    LineEnd,
    BufferStart,
    BufferEnd,
    WordForward,
    WordBackward,
    InsertChar(char),
    InsertNewline,
    DeleteCharBackward,
    DeleteCharForward,
    DeleteWordForward,
    DeleteWordBackward,
    KillLine,
    KillLineBackward,
    Yank,
    /// Only acts directly after [`Operation::Yank`] or another `YankPop`.
    YankPop,
    /// Start a selection at the cursor.
    SetMark,
    ClearMark,
    /// Kill the selection, or the previous word when nothing is selected.
    KillRegion,
    /// Copy the selection to the kill ring.
    CopyRegion,
}

impl Operation {
    /// Check if this operation only moves the cursor.
    #[must_use]
    pub fn is_motion(&self) -> bool {
        matches!(
            self,
            Self::CharLeft
                | Self::CharRight
                | Self::LineUp
                | Self::LineDown
                | Self::LineStart
                | Self::LineEnd
                | Self::BufferStart
                | Self::BufferEnd
                | Self::WordForward
                | Self::WordBackward
        )
    }

    /// Apply the operation, producing the next state.
    ///
    /// Motions drag an active selection along and keep the kill ring. Every
    /// other operation except the mark commands clears the selection.
    #[must_use]
    pub fn apply(self, state: &EditorState) -> EditorState {
        let edit_state = || state.edit_state();
        let motion: fn(&Buffer, Position) -> Position = match self {
            Self::CharLeft => navigation::char_left,
            Self::CharRight => navigation::char_right,
            Self::LineUp => navigation::line_up,
            Self::LineDown => navigation::line_down,
            Self::LineStart => navigation::line_start,
            Self::LineEnd => navigation::line_end,
            Self::BufferStart => navigation::buffer_start,
            Self::BufferEnd => navigation::buffer_end,
            Self::WordForward => navigation::forward_word,
            Self::WordBackward => navigation::backward_word,
            Self::InsertChar(c) => return state.after_edit(edit::insert_char(&edit_state(), c)),
            Self::InsertNewline => return state.after_edit(edit::insert_newline(&edit_state())),
            Self::DeleteCharBackward => {
                return state.after_edit(edit::delete_char_backward(&edit_state()));
            }
            Self::DeleteCharForward => {
                return state.after_edit(edit::delete_char_forward(&edit_state()));
            }
            Self::DeleteWordForward => {
                return state.after_edit(edit::delete_word_forward(&edit_state()));
            }
            Self::DeleteWordBackward => {
                return state.after_edit(edit::delete_word_backward(&edit_state()));
            }
            Self::KillLine => return state.after_edit(edit::kill_line(&edit_state())),
            Self::KillLineBackward => {
                return state.after_edit(edit::kill_line_backward(&edit_state()));
            }
            Self::Yank => {
                if state.kill_ring.is_empty() {
                    return state.clone();
                }
                let span = YankSpan::at_cursor(&edit_state());
                return state.after_yank(edit::yank(&edit_state()), span);
            }
            Self::YankPop => {
                return match state.last_yank() {
                    Some(span) => {
                        let next = edit::yank_pop(&edit_state(), span);
                        let span = YankSpan::new(span.start, next.kill_ring.yank());
                        state.after_yank(next, span)
                    }
                    None => state.clone(),
                };
            }
            Self::SetMark => {
                return state.with_selection(Some(Selection::collapsed(state.position())));
            }
            Self::ClearMark => return state.with_selection(None),
            Self::KillRegion => {
                return match state.selection.filter(|s| !s.is_empty()) {
                    Some(sel) => {
                        let (start, end) = sel.range();
                        state.after_edit(edit::kill_range(&edit_state(), start, end))
                    }
                    None => state.after_edit(edit::delete_word_backward(&edit_state())),
                };
            }
            Self::CopyRegion => {
                return match state.selection.filter(|s| !s.is_empty()) {
                    Some(sel) => {
                        let (start, end) = sel.range();
                        state.after_copy(edit::copy_range(&edit_state(), start, end).kill_ring)
                    }
                    None => state.clone(),
                };
            }
        };
        state.after_motion(motion(&state.buffer, state.position()))
    }
}
