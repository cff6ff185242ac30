//! Bounded history of killed text.

use std::collections::VecDeque;

/// Default number of entries a kill ring retains.
pub const DEFAULT_KILL_RING_CAPACITY: usize = 10;

/// Emacs-style kill ring.
///
/// Entries are ordered oldest to newest. Killing past capacity evicts the
/// oldest entry. The yank index always points at a live entry while the ring
/// is non-empty, and every kill resets it to the newest entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KillRing {
    entries: VecDeque<String>,
    capacity: usize,
    yank_index: usize,
}

impl Default for KillRing {
    fn default() -> Self {
        Self::new(DEFAULT_KILL_RING_CAPACITY)
    }
}

impl KillRing {
    /// Create an empty ring. A capacity of 0 falls back to the default.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = if capacity == 0 {
            DEFAULT_KILL_RING_CAPACITY
        } else {
            capacity
        };
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            yank_index: 0,
        }
    }

    /// Push killed text. Empty text leaves the ring unchanged.
    #[must_use]
    pub fn kill(&self, text: &str) -> Self {
        if text.is_empty() {
            return self.clone();
        }
        let mut next = self.clone();
        if next.entries.len() == next.capacity {
            next.entries.pop_front();
            tracing::debug!(capacity = next.capacity, "kill ring full, evicted oldest entry");
        }
        next.entries.push_back(text.to_string());
        next.yank_index = next.entries.len() - 1;
        next
    }

    /// The entry a yank would insert, or `""` when empty.
    #[must_use]
    pub fn yank(&self) -> &str {
        self.entries
            .get(self.yank_index)
            .map_or("", String::as_str)
    }

    /// Rotate the yank index to the next-older entry, wrapping to the newest.
    #[must_use]
    pub fn yank_pop(&self) -> Self {
        if self.entries.is_empty() {
            return self.clone();
        }
        let mut next = self.clone();
        next.yank_index = if self.yank_index == 0 {
            self.entries.len() - 1
        } else {
            self.yank_index - 1
        };
        next
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate over entries, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_ring_yanks_nothing() {
        let ring = KillRing::default();
        assert_eq!(ring.yank(), "");
        assert_eq!(ring.yank_pop(), ring);
    }

    #[test]
    fn test_kill_empty_is_noop() {
        let ring = KillRing::default().kill("a");
        assert_eq!(ring.kill(""), ring);
    }

    #[test]
    fn test_capacity_eviction_and_rotation() {
        let ring = KillRing::new(2).kill("a").kill("b").kill("c");
        assert_eq!(ring.iter().collect::<Vec<_>>(), vec!["b", "c"]);
        assert_eq!(ring.yank(), "c");
        let popped = ring.yank_pop();
        assert_eq!(popped.yank(), "b");
        // Wraps back around to the newest
        assert_eq!(popped.yank_pop().yank(), "c");
    }

    #[test]
    fn test_kill_resets_yank_index() {
        let ring = KillRing::new(3).kill("a").kill("b").yank_pop();
        assert_eq!(ring.yank(), "a");
        assert_eq!(ring.kill("c").yank(), "c");
    }

    #[test]
    fn test_zero_capacity_normalized() {
        assert_eq!(KillRing::new(0).capacity(), DEFAULT_KILL_RING_CAPACITY);
    }
}
