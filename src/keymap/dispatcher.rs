//! Key event dispatch.
//!
//! A key is resolved in a fixed order:
//!
//! 1. Registered handlers, in registration order. The first to accept wins.
//! 2. The Ctrl chord table (`ctrl+a`, `ctrl+k`, ...).
//! 3. The Alt chord table (`alt+f`, `alt+y`, ...).
//! 4. Named keys (arrows, Home/End, Backspace, Delete, Enter) and printable
//!    characters.
//!
//! A key nothing recognizes leaves the state untouched.

use std::fmt;
use std::sync::Arc;

use crate::input::{KeyCode, KeyEvent, KeyModifiers};
use crate::keymap::{EditorState, Operation};
use crate::options::EditorOptions;

/// An override consulted before the built-in tables.
///
/// Returning `None` declines the key and lets resolution continue.
pub trait KeyHandler: Send + Sync {
    fn handle(&self, key: &KeyEvent, state: &EditorState) -> Option<EditorState>;
}

impl<F> KeyHandler for F
where
    F: Fn(&KeyEvent, &EditorState) -> Option<EditorState> + Send + Sync,
{
    fn handle(&self, key: &KeyEvent, state: &EditorState) -> Option<EditorState> {
        self(key, state)
    }
}

/// How a key was resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// A registered handler accepted the key and produced this state.
    Handled(EditorState),
    /// A built-in binding maps the key to this operation.
    Operation(Operation),
    /// Nothing is bound to the key.
    Unbound,
}

const CTRL_CHORDS: &[(char, Operation)] = &[
    ('a', Operation::LineStart),
    ('e', Operation::LineEnd),
    ('b', Operation::CharLeft),
    ('f', Operation::CharRight),
    ('p', Operation::LineUp),
    ('n', Operation::LineDown),
    ('d', Operation::DeleteCharForward),
    ('h', Operation::DeleteCharBackward),
    ('k', Operation::KillLine),
    ('u', Operation::KillLineBackward),
    ('w', Operation::KillRegion),
    ('y', Operation::Yank),
    (' ', Operation::SetMark),
    ('g', Operation::ClearMark),
];

const ALT_CHORDS: &[(char, Operation)] = &[
    ('f', Operation::WordForward),
    ('b', Operation::WordBackward),
    ('d', Operation::DeleteWordForward),
    ('y', Operation::YankPop),
    ('w', Operation::CopyRegion),
    ('<', Operation::BufferStart),
    ('>', Operation::BufferEnd),
];

const NONE: KeyModifiers = KeyModifiers::empty();

const NAMED_KEYS: &[(KeyCode, KeyModifiers, Operation)] = &[
    (KeyCode::Left, NONE, Operation::CharLeft),
    (KeyCode::Right, NONE, Operation::CharRight),
    (KeyCode::Up, NONE, Operation::LineUp),
    (KeyCode::Down, NONE, Operation::LineDown),
    (KeyCode::Home, NONE, Operation::LineStart),
    (KeyCode::End, NONE, Operation::LineEnd),
    (KeyCode::Backspace, NONE, Operation::DeleteCharBackward),
    (KeyCode::Delete, NONE, Operation::DeleteCharForward),
    (KeyCode::Left, KeyModifiers::CTRL, Operation::WordBackward),
    (KeyCode::Right, KeyModifiers::CTRL, Operation::WordForward),
    (KeyCode::Left, KeyModifiers::ALT, Operation::WordBackward),
    (KeyCode::Right, KeyModifiers::ALT, Operation::WordForward),
    (KeyCode::Home, KeyModifiers::CTRL, Operation::BufferStart),
    (KeyCode::End, KeyModifiers::CTRL, Operation::BufferEnd),
    (KeyCode::Backspace, KeyModifiers::ALT, Operation::DeleteWordBackward),
    (KeyCode::Backspace, KeyModifiers::CTRL, Operation::DeleteWordBackward),
    (KeyCode::Delete, KeyModifiers::ALT, Operation::DeleteWordForward),
];

/// Maps key events to state transitions.
///
/// Cloning is cheap; handlers are shared.
#[derive(Clone, Default)]
pub struct Dispatcher {
    handlers: Vec<Arc<dyn KeyHandler>>,
    multiline: bool,
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("handlers", &self.handlers.len())
            .field("multiline", &self.multiline)
            .finish()
    }
}

impl Dispatcher {
    /// A dispatcher for a single-line input: Enter is left unbound.
    #[must_use]
    pub fn single_line() -> Self {
        Self::default()
    }

    /// A dispatcher for a multi-line area: Enter inserts a newline.
    #[must_use]
    pub fn multi_line() -> Self {
        Self {
            multiline: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn from_options(options: &EditorOptions) -> Self {
        Self {
            multiline: options.multiline,
            ..Self::default()
        }
    }

    /// Register an override. Handlers run in registration order.
    #[must_use]
    pub fn with_handler(mut self, handler: impl KeyHandler + 'static) -> Self {
        self.handlers.push(Arc::new(handler));
        self
    }

    /// Bind `key` to `operation`, taking precedence over the built-in tables.
    #[must_use]
    pub fn with_binding(self, key: KeyEvent, operation: Operation) -> Self {
        self.with_handler(move |k: &KeyEvent, state: &EditorState| {
            (*k == key).then(|| operation.apply(state))
        })
    }

    /// Check whether Enter inserts a newline.
    #[must_use]
    pub fn is_multiline(&self) -> bool {
        self.multiline
    }

    /// Number of registered handlers.
    #[must_use]
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// The operation the built-in tables bind to `key`, ignoring handlers.
    #[must_use]
    pub fn lookup(&self, key: &KeyEvent) -> Option<Operation> {
        if let KeyCode::Char(c) = key.code {
            let chord = key.modifiers - KeyModifiers::SHIFT;
            let table = if chord == KeyModifiers::CTRL {
                Some(CTRL_CHORDS)
            } else if chord == KeyModifiers::ALT {
                Some(ALT_CHORDS)
            } else {
                None
            };
            if let Some(table) = table {
                let c = c.to_ascii_lowercase();
                return table
                    .iter()
                    .find(|(bound, _)| *bound == c)
                    .map(|(_, op)| *op);
            }
        }

        if key.matches(KeyCode::Enter, NONE) {
            return self.multiline.then_some(Operation::InsertNewline);
        }

        NAMED_KEYS
            .iter()
            .find(|(code, modifiers, _)| key.matches(*code, *modifiers))
            .map(|(_, _, op)| *op)
            .or_else(|| key.printable().map(Operation::InsertChar))
    }

    /// Resolve `key` without committing to a result.
    #[must_use]
    pub fn resolve(&self, key: &KeyEvent, state: &EditorState) -> Resolution {
        for (index, handler) in self.handlers.iter().enumerate() {
            if let Some(next) = handler.handle(key, state) {
                tracing::debug!(key = %key, handler = index, "key handled by override");
                return Resolution::Handled(next);
            }
        }
        match self.lookup(key) {
            Some(op) => Resolution::Operation(op),
            None => Resolution::Unbound,
        }
    }

    /// Apply `key` to `state`.
    #[must_use]
    pub fn dispatch(&self, key: &KeyEvent, state: &EditorState) -> EditorState {
        match self.resolve(key, state) {
            Resolution::Handled(next) => next,
            Resolution::Operation(op) => {
                tracing::trace!(key = %key, operation = ?op, "dispatch");
                op.apply(state)
            }
            Resolution::Unbound => {
                tracing::trace!(key = %key, "unbound key ignored");
                state.clone()
            }
        }
    }

    /// Insert pasted text at the cursor.
    ///
    /// A single-line dispatcher replaces newlines and tabs with spaces, and
    /// drops carriage returns.
    #[must_use]
    pub fn paste(&self, text: &str, state: &EditorState) -> EditorState {
        let text = if self.multiline {
            text.replace("\r\n", "\n")
        } else {
            sanitize_single_line(text)
        };
        if text.is_empty() {
            return state.clone();
        }
        tracing::trace!(len = text.len(), "paste");
        state.after_edit(crate::text::edit::insert_text(&state.edit_state(), &text))
    }
}

/// Flatten text onto one line.
#[must_use]
pub fn sanitize_single_line(text: &str) -> String {
    text.replace("\r\n", " ")
        .chars()
        .filter(|&c| c != '\r')
        .map(|c| if c == '\n' || c == '\t' { ' ' } else { c })
        .collect()
}
