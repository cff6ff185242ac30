//! Grapheme cluster iteration.

use crate::unicode::width::{WidthMethod, cluster_width};
use unicode_segmentation::UnicodeSegmentation;

/// One user-perceived character of a string and its cell width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GraphemeCluster<'a> {
    /// The cluster's text.
    pub text: &'a str,
    /// Byte offset of the cluster within the segmented string.
    pub byte_offset: usize,
    /// Terminal cells the cluster occupies (0, 1 or 2).
    pub width: u8,
}

impl GraphemeCluster<'_> {
    /// The first code point, used for word classification.
    #[must_use]
    pub fn base(&self) -> char {
        self.text.chars().next().unwrap_or('\0')
    }

    /// Letters, digits and underscore count as word characters.
    #[must_use]
    pub fn is_word_char(&self) -> bool {
        let c = self.base();
        c.is_alphanumeric() || c == '_'
    }
}

/// Grapheme metadata for layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GraphemeInfo {
    pub byte_offset: usize,
    pub byte_len: usize,
    pub col_offset: usize,
    pub width: u8,
}

/// Iterator over grapheme clusters in a string.
///
/// Clones advance independently of each other.
#[derive(Clone)]
pub struct GraphemeIterator<'a> {
    inner: unicode_segmentation::Graphemes<'a>,
}

impl<'a> Iterator for GraphemeIterator<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl DoubleEndedIterator for GraphemeIterator<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

/// Iterator yielding [`GraphemeCluster`]s with their widths.
#[derive(Clone)]
pub struct Segments<'a> {
    inner: unicode_segmentation::GraphemeIndices<'a>,
    method: WidthMethod,
}

impl<'a> Iterator for Segments<'a> {
    type Item = GraphemeCluster<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (byte_offset, text) = self.inner.next()?;
        Some(GraphemeCluster {
            text,
            byte_offset,
            width: cluster_width(text, self.method) as u8,
        })
    }
}

impl DoubleEndedIterator for Segments<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let (byte_offset, text) = self.inner.next_back()?;
        Some(GraphemeCluster {
            text,
            byte_offset,
            width: cluster_width(text, self.method) as u8,
        })
    }
}

/// Iterate over grapheme clusters in a string.
#[must_use]
pub fn graphemes(s: &str) -> GraphemeIterator<'_> {
    GraphemeIterator {
        inner: s.graphemes(true),
    }
}

/// Iterate over grapheme clusters with byte indices.
pub fn grapheme_indices(s: &str) -> impl Iterator<Item = (usize, &str)> {
    s.grapheme_indices(true)
}

/// Segment a string into width-annotated clusters.
#[must_use]
pub fn segment(s: &str, method: WidthMethod) -> Segments<'_> {
    Segments {
        inner: s.grapheme_indices(true),
        method,
    }
}

/// Number of grapheme clusters in a string.
#[must_use]
pub fn grapheme_len(s: &str) -> usize {
    if s.is_ascii() {
        // CRLF is the only multi-byte ASCII cluster.
        return s.len() - s.matches("\r\n").count();
    }
    s.graphemes(true).count()
}

/// Byte offset of the start of the `col`-th cluster, clamped to `s.len()`.
#[must_use]
pub fn byte_offset_of(s: &str, col: usize) -> usize {
    s.grapheme_indices(true)
        .nth(col)
        .map_or(s.len(), |(idx, _)| idx)
}

/// Check if a string is ASCII-only.
#[must_use]
pub fn is_ascii_only(s: &str) -> bool {
    s.is_ascii()
}

/// Display column at which the `col`-th cluster starts.
#[must_use]
pub fn column_of(s: &str, col: usize, method: WidthMethod) -> usize {
    segment(s, method)
        .take(col)
        .map(|g| usize::from(g.width))
        .sum()
}

/// Compute grapheme info for a string.
#[must_use]
pub fn grapheme_info(s: &str, method: WidthMethod) -> Vec<GraphemeInfo> {
    let mut col = 0usize;
    segment(s, method)
        .map(|g| {
            let info = GraphemeInfo {
                byte_offset: g.byte_offset,
                byte_len: g.text.len(),
                col_offset: col,
                width: g.width,
            };
            col += usize::from(g.width);
            info
        })
        .collect()
}
