//! Snapshot tests of what a renderer would draw for a text area.

mod common;

use common::{key, setup_test_logging};
use tui_textedit::input::{Event, ResizeEvent};
use tui_textedit::text::Position;
use tui_textedit::widget::{TextArea, TextInput};

/// Draw the visible rows with their buffer row number, marking the cursor row
/// with `>` and appending the cursor cell.
fn render(area: &TextArea) -> String {
    let cursor = area.cursor_screen_position();
    let mut frame: Vec<String> = area
        .visible_lines()
        .iter()
        .enumerate()
        .map(|(index, line)| {
            let row = area.viewport().buffer_row_of(index);
            let marker = if cursor.map(|(r, _)| r) == Some(index) { '>' } else { ' ' };
            format!("{row:02}{marker}{line}")
        })
        .collect();
    match cursor {
        Some((row, col)) => frame.push(format!("cursor at window cell ({row}, {col})")),
        None => frame.push("cursor hidden".to_string()),
    }
    frame.join("\n")
}

fn eight_lines() -> TextArea {
    TextArea::new()
        .with_size(12, 3)
        .with_value("l0\nl1\nl2\nl3\nl4\nl5\nl6\nl7")
}

#[test]
fn cursor_row_six_in_three_row_window() {
    setup_test_logging();
    let area = eight_lines().with_cursor(Position::new(0, 0)).with_cursor(Position::new(6, 1));
    insta::assert_snapshot!(render(&area), @r"
    04 l4
    05 l5
    06>l6
    cursor at window cell (2, 1)
    ");
}

#[test]
fn scrolling_up_moves_window_minimally() {
    setup_test_logging();
    let area = eight_lines();
    let area = (0..5).fold(area, |a, _| a.handle_event(&Event::Key(key("up"))));
    insta::assert_snapshot!(render(&area), @r"
    02>l2
    03 l3
    04 l4
    cursor at window cell (0, 2)
    ");
}

#[test]
fn wide_clusters_shift_cursor_cell() {
    setup_test_logging();
    let area = TextArea::new()
        .with_size(20, 2)
        .with_value("plain\n你好 👋🏻 ok")
        .with_cursor(Position::new(1, 4));
    insta::assert_snapshot!(render(&area), @r"
    00 plain
    01>你好 👋🏻 ok
    cursor at window cell (1, 7)
    ");
}

#[test]
fn resize_keeps_cursor_visible() {
    setup_test_logging();
    let area = eight_lines().with_size(12, 6);
    let area = area.handle_event(&Event::Key(key("alt+<")));
    let area = area.handle_event(&Event::Key(key("ctrl+n")));
    let area = area.handle_event(&ResizeEvent::new(12, 1).into());
    insta::assert_snapshot!(render(&area), @r"
    01>l1
    cursor at window cell (0, 0)
    ");
}

#[test]
fn text_input_scrolls_horizontally() {
    setup_test_logging();
    let input = TextInput::new().with_width(6).with_value("0123456789");
    let input = input.handle_event(&Event::Key(key("alt+b")));
    let frame = format!(
        "[{}] cursor x {} scroll {}",
        input.visible_text(),
        input.cursor_screen_x(),
        input.viewport().scroll_col
    );
    insta::assert_snapshot!(frame, @"[012345] cursor x 0 scroll 0");
}
