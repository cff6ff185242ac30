//! `tui_textedit` - Grapheme-aware text editing for terminal widgets
//!
//! Buffer storage, cursor motion, Emacs-style editing with a kill ring, and a
//! key dispatcher for single-line inputs and multi-line text areas. Columns
//! are grapheme cluster indices; display widths are terminal cells.
//!
//! Every operation takes a snapshot and returns a new one, so an event loop
//! only needs to keep the latest [`EditorState`].
//!
//! # Examples
//!
//! ```
//! use tui_textedit::{Dispatcher, EditorState, KeyEvent};
//!
//! let dispatcher = Dispatcher::multi_line();
//! let mut state = EditorState::default();
//! for c in "hi".chars() {
//!     state = dispatcher.dispatch(&KeyEvent::char(c), &state);
//! }
//! state = dispatcher.dispatch(&"enter".parse().unwrap(), &state);
//! assert_eq!(state.buffer.value(), "hi\n");
//! assert_eq!(state.cursor.row(), 1);
//! ```

// Crate-level lint configuration
#![forbid(unsafe_code)]
#![allow(clippy::module_name_repetitions)] // Allow keymap::KeyHandler etc
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::should_implement_trait)] // from_str naming is intentional
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::redundant_clone)] // Clones in tests for clarity are fine
#![allow(clippy::needless_collect)] // Collect for assertions is clear

pub mod error;
pub mod input;
pub mod keymap;
pub mod options;
pub mod text;
pub mod unicode;
pub mod widget;

// Re-export core types at crate root
pub use error::{Error, Result};
pub use options::EditorOptions;

// Re-export input types
pub use input::{Event, KeyCode, KeyEvent, KeyModifiers, PasteEvent, ResizeEvent};

// Re-export commonly used types
pub use keymap::{Dispatcher, EditorState, KeyHandler, Operation};
pub use text::{Buffer, Cursor, EditState, KillRing, Line, Position, Selection, ViewportState};
pub use unicode::{WidthMethod, display_width};
pub use widget::{TextArea, TextInput};
