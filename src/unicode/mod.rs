//! Unicode utilities for grapheme handling and display width.
//!
//! Everything here is a pure function of its arguments. The width method is
//! passed explicitly wherever ambiguous-width characters matter.

mod grapheme;
mod width;

pub use grapheme::{
    GraphemeCluster, GraphemeInfo, GraphemeIterator, Segments, byte_offset_of, column_of,
    grapheme_indices, grapheme_info, grapheme_len, graphemes, is_ascii_only, segment,
};
pub use width::{
    WidthMethod, cluster_width, display_width, display_width_char,
    display_width_char_with_method, display_width_with_method, is_emoji_modifier,
    is_variation_selector, is_wide, is_zero_width, is_zwj,
};
