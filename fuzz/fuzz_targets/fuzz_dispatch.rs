//! Fuzz target for the key dispatcher.
//!
//! Feeds arbitrary text and key sequences through a dispatcher and checks
//! that the cursor, selection and kill ring stay valid after every step.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tui_textedit::input::{KeyCode, KeyEvent, KeyModifiers};
use tui_textedit::keymap::{Dispatcher, EditorState};
use tui_textedit::text::{KillRing, Position};

#[derive(Arbitrary, Debug)]
struct Session {
    initial: String,
    multiline: bool,
    ring_capacity: u8,
    steps: Vec<Step>,
}

#[derive(Arbitrary, Debug)]
enum Step {
    Key { code: Code, ctrl: bool, alt: bool, shift: bool },
    Paste(String),
}

#[derive(Arbitrary, Debug)]
enum Code {
    Backspace,
    Enter,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    Delete,
    Tab,
    Esc,
    Char(char),
}

impl Step {
    fn key(code: &Code, ctrl: bool, alt: bool, shift: bool) -> KeyEvent {
        let code = match code {
            Code::Backspace => KeyCode::Backspace,
            Code::Enter => KeyCode::Enter,
            Code::Left => KeyCode::Left,
            Code::Right => KeyCode::Right,
            Code::Up => KeyCode::Up,
            Code::Down => KeyCode::Down,
            Code::Home => KeyCode::Home,
            Code::End => KeyCode::End,
            Code::Delete => KeyCode::Delete,
            Code::Tab => KeyCode::Tab,
            Code::Esc => KeyCode::Esc,
            Code::Char(c) => KeyCode::Char(*c),
        };
        let mut modifiers = KeyModifiers::empty();
        modifiers.set(KeyModifiers::CTRL, ctrl);
        modifiers.set(KeyModifiers::ALT, alt);
        modifiers.set(KeyModifiers::SHIFT, shift);
        KeyEvent::new(code, modifiers)
    }
}

fn check(state: &EditorState, capacity: usize) {
    let in_bounds = |pos: Position| {
        pos.row < state.buffer.line_count() && pos.col <= state.buffer.line_len(pos.row)
    };
    assert!(in_bounds(state.position()), "cursor out of bounds: {:?}", state.cursor);
    if let Some(sel) = state.selection {
        assert!(in_bounds(sel.anchor), "anchor out of bounds: {sel:?}");
        assert_eq!(sel.cursor, state.position());
    }
    assert!(state.kill_ring.len() <= capacity);
}

fuzz_target!(|session: Session| {
    if session.steps.len() > 256 || session.initial.len() > 4096 {
        return;
    }
    let dispatcher = if session.multiline {
        Dispatcher::multi_line()
    } else {
        Dispatcher::single_line()
    };
    let ring = KillRing::new(usize::from(session.ring_capacity % 16));
    let capacity = ring.capacity();
    let mut state = EditorState::from_text(&session.initial).with_kill_ring(ring);

    for step in &session.steps {
        let next = match step {
            Step::Key { code, ctrl, alt, shift } => {
                dispatcher.dispatch(&Step::key(code, *ctrl, *alt, *shift), &state)
            }
            Step::Paste(text) => dispatcher.paste(text, &state),
        };
        check(&next, capacity);
        state = next;
    }
});
