//! Ready-made editing widgets.
//!
//! Both widgets own an [`EditorState`](crate::keymap::EditorState), a
//! [`Dispatcher`](crate::keymap::Dispatcher) and a
//! [`ViewportState`](crate::text::ViewportState). They do not draw; a
//! renderer reads the visible text and the cursor cell from them.

mod input;
mod textarea;

pub use input::TextInput;
pub use textarea::TextArea;
