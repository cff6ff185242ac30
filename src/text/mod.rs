//! Text storage, cursors and editing.
//!
//! Everything here is a value: operations borrow a snapshot and return a new
//! one. [`Buffer`] is backed by a rope, so cloning a snapshot to keep an old
//! version around costs little.
//!
//! Key types:
//!
//! - [`Buffer`]: Line-oriented text with grapheme cluster columns
//! - [`Position`], [`Cursor`], [`Selection`]: Locations in a buffer
//! - [`EditState`]: The buffer, cursor and kill ring triple the [`edit`] functions transform
//! - [`KillRing`]: Bounded history of killed text
//! - [`ViewportState`]: Which rows and columns of a buffer are on screen
//!
//! # Examples
//!
//! ```
//! use tui_textedit::text::{Buffer, Position, navigation};
//!
//! let buffer = Buffer::from_str("hello world\nsecond");
//! let pos = navigation::forward_word(&buffer, Position::new(0, 0));
//! assert_eq!(pos, Position::new(0, 5));
//! let pos = navigation::line_down(&buffer, pos);
//! assert_eq!(pos, Position::new(1, 5));
//! ```

mod buffer;
mod cursor;
pub mod edit;
mod kill_ring;
pub mod navigation;
pub mod viewport;

pub use buffer::{Buffer, Line};
pub use cursor::{Cursor, Position, Selection};
pub use edit::{EditState, YankSpan};
pub use kill_ring::{DEFAULT_KILL_RING_CAPACITY, KillRing};
pub use viewport::{ViewportState, ensure_visible, visible_slice};
