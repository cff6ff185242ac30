#![allow(clippy::nursery)] // Test infra prioritizes clarity over pedantry
#![allow(clippy::pedantic)] // Test infra prioritizes clarity over pedantry
#![allow(dead_code)] // Not every test binary uses every helper

use std::sync::Once;

use tui_textedit::input::KeyEvent;
use tui_textedit::keymap::{Dispatcher, EditorState};

/// Route `tracing` output to the test harness once per binary.
pub fn setup_test_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .try_init();
    });
}

/// Parse key notation, panicking on typos in the test itself.
pub fn key(notation: &str) -> KeyEvent {
    notation
        .parse()
        .unwrap_or_else(|e| panic!("bad key notation in test: {e}"))
}

/// Dispatch a whitespace-separated list of key notations.
pub fn press(dispatcher: &Dispatcher, state: &EditorState, keys: &str) -> EditorState {
    keys.split_whitespace()
        .fold(state.clone(), |state, k| dispatcher.dispatch(&key(k), &state))
}

/// Type each character as an unmodified key press.
pub fn type_text(dispatcher: &Dispatcher, state: &EditorState, text: &str) -> EditorState {
    text.chars().fold(state.clone(), |state, c| {
        dispatcher.dispatch(&KeyEvent::char(c), &state)
    })
}
