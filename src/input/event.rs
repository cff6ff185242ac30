//! Input events delivered by the embedding event loop.

use crate::input::keyboard::KeyEvent;

/// An input event a text widget reacts to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Keyboard event.
    Key(KeyEvent),
    /// Paste event (bracketed paste mode).
    Paste(PasteEvent),
    /// Terminal resize event.
    Resize(ResizeEvent),
}

impl Event {
    /// Check if this is a key event.
    #[must_use]
    pub fn is_key(&self) -> bool {
        matches!(self, Self::Key(_))
    }

    /// Get the key event if this is one.
    #[must_use]
    pub fn key(&self) -> Option<&KeyEvent> {
        match self {
            Self::Key(e) => Some(e),
            _ => None,
        }
    }

    /// Get the paste event if this is one.
    #[must_use]
    pub fn paste(&self) -> Option<&PasteEvent> {
        match self {
            Self::Paste(e) => Some(e),
            _ => None,
        }
    }

    /// Get the resize event if this is one.
    #[must_use]
    pub fn resize(&self) -> Option<&ResizeEvent> {
        match self {
            Self::Resize(e) => Some(e),
            _ => None,
        }
    }
}

impl From<KeyEvent> for Event {
    fn from(e: KeyEvent) -> Self {
        Self::Key(e)
    }
}

impl From<PasteEvent> for Event {
    fn from(e: PasteEvent) -> Self {
        Self::Paste(e)
    }
}

impl From<ResizeEvent> for Event {
    fn from(e: ResizeEvent) -> Self {
        Self::Resize(e)
    }
}

/// New size of the area a widget draws into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResizeEvent {
    /// New width in columns.
    pub width: u16,
    /// New height in rows.
    pub height: u16,
}

impl ResizeEvent {
    /// Create a new resize event.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Paste event from bracketed paste mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PasteEvent {
    /// The pasted text content.
    pub content: String,
}

impl PasteEvent {
    /// Create a new paste event.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Get the pasted content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the paste is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
