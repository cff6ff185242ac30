//! Fuzz target for key notation parsing.
//!
//! Any notation that parses must survive a Display round trip.

#![no_main]

use libfuzzer_sys::fuzz_target;
use tui_textedit::input::KeyEvent;

fuzz_target!(|notation: &str| {
    if let Ok(key) = notation.parse::<KeyEvent>() {
        let shown = key.to_string();
        let reparsed: KeyEvent = shown
            .parse()
            .unwrap_or_else(|e| panic!("{shown:?} from {notation:?} does not reparse: {e}"));
        assert_eq!(reparsed, key);
    }
});
