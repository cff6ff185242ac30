//! Emacs-style key bindings.
//!
//! [`Dispatcher::dispatch`] is the single entry point an event loop needs:
//! it takes a key event and the current [`EditorState`] and returns the next
//! state.
//!
//! # Examples
//!
//! ```
//! use tui_textedit::input::KeyEvent;
//! use tui_textedit::keymap::{Dispatcher, EditorState};
//!
//! let dispatcher = Dispatcher::single_line();
//! let mut state = EditorState::from_text("hello world");
//! for notation in ["alt+f", "ctrl+k", "ctrl+a", "ctrl+y"] {
//!     let key: KeyEvent = notation.parse().unwrap();
//!     state = dispatcher.dispatch(&key, &state);
//! }
//! assert_eq!(state.buffer.value(), " worldhello");
//! ```

mod dispatcher;
mod operation;
mod state;

pub use dispatcher::{Dispatcher, KeyHandler, Resolution, sanitize_single_line};
pub use operation::Operation;
pub use state::EditorState;
