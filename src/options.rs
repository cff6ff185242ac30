//! Widget configuration.

use crate::text::DEFAULT_KILL_RING_CAPACITY;
use crate::unicode::WidthMethod;

/// Editor configuration options.
///
/// These options are read once when a widget or dispatcher is created.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EditorOptions {
    /// Entries kept by the kill ring. 0 falls back to the default of 10.
    pub kill_ring_capacity: usize,
    /// How ambiguous-width characters are measured.
    pub width_method: WidthMethod,
    /// Whether Enter inserts a newline.
    pub multiline: bool,
    /// Maximum number of grapheme clusters a single-line input accepts.
    pub char_limit: Option<usize>,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            kill_ring_capacity: DEFAULT_KILL_RING_CAPACITY,
            width_method: WidthMethod::WcWidth,
            multiline: false,
            char_limit: None,
        }
    }
}

impl EditorOptions {
    /// Defaults for a single-line input.
    #[must_use]
    pub fn single_line() -> Self {
        Self::default()
    }

    /// Defaults for a multi-line text area.
    #[must_use]
    pub fn multi_line() -> Self {
        Self {
            multiline: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_kill_ring_capacity(mut self, capacity: usize) -> Self {
        self.kill_ring_capacity = if capacity == 0 {
            DEFAULT_KILL_RING_CAPACITY
        } else {
            capacity
        };
        self
    }

    #[must_use]
    pub fn with_width_method(mut self, method: WidthMethod) -> Self {
        self.width_method = method;
        self
    }

    #[must_use]
    pub fn with_char_limit(mut self, limit: Option<usize>) -> Self {
        self.char_limit = limit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = EditorOptions::default();
        assert_eq!(opts.kill_ring_capacity, 10);
        assert!(!opts.multiline);
        assert!(EditorOptions::multi_line().multiline);
    }

    #[test]
    fn test_zero_capacity_normalized() {
        let opts = EditorOptions::default().with_kill_ring_capacity(0);
        assert_eq!(opts.kill_ring_capacity, DEFAULT_KILL_RING_CAPACITY);
    }
}
