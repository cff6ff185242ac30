//! Input event types.
//!
//! Events are plain values produced by the embedding application's event
//! loop. Parsing terminal byte streams is left to that loop.

mod event;
mod keyboard;

pub use event::{Event, PasteEvent, ResizeEvent};
pub use keyboard::{KeyCode, KeyEvent, KeyModifiers};
