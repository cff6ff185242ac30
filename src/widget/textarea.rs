//! Multi-line text area.

use crate::input::Event;
use crate::keymap::{Dispatcher, EditorState};
use crate::options::EditorOptions;
use crate::text::{Cursor, Line, Position, Selection, ViewportState};
use crate::unicode::column_of;

/// A multi-line editor that keeps the cursor row on screen.
///
/// # Examples
///
/// ```
/// use tui_textedit::input::{Event, KeyCode, KeyEvent};
/// use tui_textedit::widget::TextArea;
///
/// let area = TextArea::new().with_size(20, 2).with_value("a\nb\nc");
/// assert_eq!(area.viewport().scroll_row, 1);
///
/// let area = area.handle_event(&Event::Key(KeyEvent::key(KeyCode::Enter)));
/// assert_eq!(area.value(), "a\nb\nc\n");
/// assert_eq!(area.cursor_screen_position(), Some((1, 0)));
/// ```
#[derive(Clone, Debug)]
pub struct TextArea {
    state: EditorState,
    viewport: ViewportState,
    options: EditorOptions,
    dispatcher: Dispatcher,
}

impl Default for TextArea {
    fn default() -> Self {
        Self::new()
    }
}

impl TextArea {
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(EditorOptions::multi_line())
    }

    /// Create a text area from options. `char_limit` is ignored.
    #[must_use]
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            state: EditorState::with_options(&options),
            viewport: ViewportState::default(),
            dispatcher: Dispatcher::from_options(&options),
            options,
        }
    }

    /// Replace the dispatcher, e.g. to add key handlers.
    #[must_use]
    pub fn with_dispatcher(self, dispatcher: Dispatcher) -> Self {
        Self { dispatcher, ..self }
    }

    /// Replace the text, moving the cursor to the end.
    #[must_use]
    pub fn with_value(&self, value: &str) -> Self {
        self.with_state(self.state.with_text(&value.replace("\r\n", "\n")))
    }

    /// Copy with a new window size in cells.
    #[must_use]
    pub fn with_size(&self, width: usize, height: usize) -> Self {
        Self {
            viewport: self.viewport.resize(width, height),
            ..self.clone()
        }
        .scrolled()
    }

    /// Copy with the cursor moved (and clamped).
    #[must_use]
    pub fn with_cursor(&self, position: Position) -> Self {
        self.with_state(self.state.with_cursor(position))
    }

    #[must_use]
    pub fn value(&self) -> String {
        self.state.buffer.value()
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.state.buffer.line_count()
    }

    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.state.cursor
    }

    #[must_use]
    pub fn selection(&self) -> Option<Selection> {
        self.state.selection
    }

    #[must_use]
    pub fn state(&self) -> &EditorState {
        &self.state
    }

    #[must_use]
    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    #[must_use]
    pub fn viewport(&self) -> ViewportState {
        self.viewport
    }

    /// Lines inside the window, top to bottom.
    #[must_use]
    pub fn visible_lines(&self) -> Vec<Line> {
        self.viewport.visible_lines(&self.state.buffer)
    }

    /// Cursor cell relative to the window as `(row, column)`.
    ///
    /// `None` when the cursor row is scrolled out of view, which only happens
    /// for a zero-height window.
    #[must_use]
    pub fn cursor_screen_position(&self) -> Option<(usize, usize)> {
        let pos = self.state.position();
        let row = self.viewport.visible_index_of(pos.row)?;
        let line = self.state.buffer.line(pos.row);
        Some((row, column_of(line.as_str(), pos.col, self.options.width_method)))
    }

    /// Feed an event through the dispatcher and scroll to the cursor.
    #[must_use]
    pub fn handle_event(&self, event: &Event) -> Self {
        match event {
            Event::Key(key) => self.with_state(self.dispatcher.dispatch(key, &self.state)),
            Event::Paste(paste) => {
                self.with_state(self.dispatcher.paste(paste.content(), &self.state))
            }
            Event::Resize(resize) => {
                self.with_size(usize::from(resize.width), usize::from(resize.height))
            }
        }
    }

    fn with_state(&self, state: EditorState) -> Self {
        Self {
            state,
            ..self.clone()
        }
        .scrolled()
    }

    fn scrolled(self) -> Self {
        let row = self.state.position().row;
        Self {
            viewport: self.viewport.follow(row),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{KeyEvent, PasteEvent, ResizeEvent};

    fn key(notation: &str) -> Event {
        Event::Key(notation.parse::<KeyEvent>().unwrap())
    }

    fn numbered(n: usize) -> String {
        (0..n).map(|i| format!("line {i}")).collect::<Vec<_>>().join("\n")
    }

    #[test]
    fn test_viewport_follows_cursor_down_and_up() {
        let area = TextArea::new()
            .with_size(10, 3)
            .with_value(&numbered(8))
            .with_cursor(Position::new(0, 0));
        assert_eq!(area.viewport().scroll_row, 0);

        let area = (0..5).fold(area, |a, _| a.handle_event(&key("down")));
        assert_eq!(area.cursor().row(), 5);
        assert_eq!(area.viewport().scroll_row, 3);
        assert_eq!(area.cursor_screen_position(), Some((2, 0)));

        let area = area.handle_event(&key("alt+<"));
        assert_eq!(area.viewport().scroll_row, 0);
    }

    #[test]
    fn test_visible_lines() {
        let area = TextArea::new().with_size(10, 2).with_value(&numbered(4));
        let lines: Vec<String> = area.visible_lines().iter().map(ToString::to_string).collect();
        assert_eq!(lines, ["line 2", "line 3"]);
    }

    #[test]
    fn test_multiline_paste_and_enter() {
        let area = TextArea::new().with_size(10, 5);
        let area = area.handle_event(&PasteEvent::new("one\r\ntwo").into());
        let area = area.handle_event(&key("enter"));
        assert_eq!(area.value(), "one\ntwo\n");
        assert_eq!(area.cursor().position(), Position::new(2, 0));
    }

    #[test]
    fn test_cursor_column_counts_cells() {
        let area = TextArea::new().with_size(10, 1).with_value("界a");
        assert_eq!(area.cursor_screen_position(), Some((0, 3)));
    }

    #[test]
    fn test_shrinking_resize_rescrolls() {
        let area = TextArea::new().with_size(10, 8).with_value(&numbered(8));
        assert_eq!(area.viewport().scroll_row, 0);
        let area = area.handle_event(&ResizeEvent::new(10, 2).into());
        assert_eq!(area.viewport().scroll_row, 6);
    }
}
