//! Single-line text input.

use crate::input::Event;
use crate::keymap::{Dispatcher, EditorState, sanitize_single_line};
use crate::options::EditorOptions;
use crate::text::{Position, ViewportState};
use crate::unicode::{cluster_width, column_of, grapheme_len, graphemes, segment};

/// A one-line editor with horizontal scrolling.
///
/// Columns are grapheme cluster offsets into the value; the horizontal
/// scroll offset is in display cells.
///
/// # Examples
///
/// ```
/// use tui_textedit::input::{Event, KeyEvent};
/// use tui_textedit::widget::TextInput;
///
/// let input = TextInput::new().with_value("hello world").with_cursor_offset(6);
/// assert_eq!(input.content_parts(), ("hello ".into(), "w".into(), "orld".into()));
///
/// let input = input.handle_event(&Event::Key("ctrl+k".parse::<KeyEvent>().unwrap()));
/// assert_eq!(input.value(), "hello ");
/// ```
#[derive(Clone, Debug)]
pub struct TextInput {
    state: EditorState,
    viewport: ViewportState,
    options: EditorOptions,
    dispatcher: Dispatcher,
}

impl Default for TextInput {
    fn default() -> Self {
        Self::new()
    }
}

impl TextInput {
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(EditorOptions::single_line())
    }

    /// Create an input from options. `multiline` is ignored.
    #[must_use]
    pub fn with_options(options: EditorOptions) -> Self {
        let options = EditorOptions {
            multiline: false,
            ..options
        };
        Self {
            state: EditorState::with_options(&options),
            viewport: ViewportState::new(0, 1),
            dispatcher: Dispatcher::from_options(&options),
            options,
        }
    }

    /// Replace the dispatcher, e.g. to add key handlers.
    #[must_use]
    pub fn with_dispatcher(self, dispatcher: Dispatcher) -> Self {
        Self { dispatcher, ..self }
    }

    /// Replace the value. Newlines become spaces, the char limit is applied
    /// and the cursor moves to the end.
    #[must_use]
    pub fn with_value(&self, value: &str) -> Self {
        let value = self.truncate_to_limit(&sanitize_single_line(value), 0);
        self.with_state(self.state.with_text(&value))
    }

    /// Copy with a new display width in cells.
    #[must_use]
    pub fn with_width(&self, width: usize) -> Self {
        Self {
            viewport: self.viewport.resize(width, 1),
            ..self.clone()
        }
        .scrolled()
    }

    /// Copy with the cursor at cluster `offset`, clamped to the value.
    #[must_use]
    pub fn with_cursor_offset(&self, offset: usize) -> Self {
        self.with_state(self.state.with_cursor(Position::offset(offset)))
    }

    #[must_use]
    pub fn value(&self) -> String {
        self.state.buffer.value()
    }

    /// Cursor offset in grapheme clusters.
    #[must_use]
    pub fn cursor_offset(&self) -> usize {
        self.state.cursor.col()
    }

    /// Number of grapheme clusters in the value.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.buffer.line_len(0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.buffer.is_empty()
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

    /// The value split around the cursor: text before it, the cluster under
    /// it and text after it. At the end the last two parts are empty.
    #[must_use]
    pub fn content_parts(&self) -> (String, String, String) {
        let line = self.state.buffer.line(0);
        let (before, rest) = line.split_at(self.cursor_offset());
        let at = graphemes(rest).next().unwrap_or("");
        let after = &rest[at.len()..];
        (before.to_string(), at.to_string(), after.to_string())
    }

    /// Display column of the cursor, counted from the start of the value.
    #[must_use]
    pub fn cursor_x(&self) -> usize {
        let line = self.state.buffer.line(0);
        column_of(line.as_str(), self.cursor_offset(), self.options.width_method)
    }

    /// Cursor column relative to the left edge of the widget.
    #[must_use]
    pub fn cursor_screen_x(&self) -> usize {
        self.cursor_x().saturating_sub(self.viewport.scroll_col)
    }

    /// The part of the value that fits in the widget at the current scroll.
    ///
    /// Wide clusters cut by either edge are left out.
    #[must_use]
    pub fn visible_text(&self) -> String {
        let line = self.state.buffer.line(0);
        let start = self.viewport.scroll_col;
        let end = start.saturating_add(self.viewport.width);
        let mut x = 0;
        let mut out = String::new();
        for cluster in segment(line.as_str(), self.options.width_method) {
            let w = usize::from(cluster.width);
            if x >= start && x + w <= end {
                out.push_str(cluster.text);
            }
            x += w;
            if x >= end {
                break;
            }
        }
        out
    }

    /// Feed an event through the dispatcher.
    ///
    /// Edits that would push the value past the char limit are rejected;
    /// pastes are truncated to fit.
    #[must_use]
    pub fn handle_event(&self, event: &Event) -> Self {
        match event {
            Event::Key(key) => {
                let next = self.dispatcher.dispatch(key, &self.state);
                if self.exceeds_limit(&next) {
                    tracing::trace!(key = %key, "edit rejected by char limit");
                    return self.clone();
                }
                self.with_state(next)
            }
            Event::Paste(paste) => {
                let text = sanitize_single_line(paste.content());
                let text = self.truncate_to_limit(&text, self.len());
                self.with_state(self.dispatcher.paste(&text, &self.state))
            }
            Event::Resize(resize) => self.with_width(usize::from(resize.width)),
        }
    }

    fn with_state(&self, state: EditorState) -> Self {
        Self {
            state,
            ..self.clone()
        }
        .scrolled()
    }

    /// Scroll so the whole cluster under the cursor is on screen.
    fn scrolled(self) -> Self {
        let x = self.cursor_x();
        let (_, at, _) = self.content_parts();
        let span = cluster_width(&at, self.options.width_method).max(1);
        Self {
            viewport: self.viewport.follow_span(x, span),
            ..self
        }
    }

    fn exceeds_limit(&self, next: &EditorState) -> bool {
        self.options.char_limit.is_some_and(|limit| {
            let len = next.buffer.line_len(0);
            len > limit && len > self.len()
        })
    }

    fn truncate_to_limit(&self, text: &str, used: usize) -> String {
        match self.options.char_limit {
            Some(limit) if used + grapheme_len(text) > limit => graphemes(text)
                .take(limit.saturating_sub(used))
                .collect(),
            _ => text.to_string(),
        }
    }
}
