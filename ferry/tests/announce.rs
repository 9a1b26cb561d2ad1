mod common;

use std::time::Duration;

use common::Board;
use ferry::locale::english;
use ferry::prelude::*;

const NBSP: &str = "\u{a0}";

fn count_log(board: &Board, container: &str) -> Vec<String> {
    board
        .host
        .snapshot()
        .live_log
        .into_iter()
        .filter(|(c, channel, _)| c == container && *channel == Channel::Count)
        .map(|(_, _, text)| text)
        .collect()
}

// ============================================================================
// Instance announcements
// ============================================================================

#[test]
fn test_initial_status_is_announced_after_delay() {
    let mut board = Board::todo_done(&["a"]);
    assert_eq!(board.ferry.tick(), 0);
    assert_eq!(board.host.live_text("todo", Channel::Status), None);

    board.settle();
    let english = english();
    assert_eq!(
        board.host.live_text("todo", Channel::Status),
        Some(english.selection_note.clone())
    );
    assert_eq!(board.host.live_text("done", Channel::Status), Some(english.empty_note));
}

#[test]
fn test_count_announcement_is_superseded() {
    let mut board = Board::todo_done(&["a", "b"]);
    board.settle();

    board.click("a");
    board.clock.advance(Duration::from_millis(100));
    board.ferry.tick();
    board.click("b");
    board.settle();

    assert_eq!(
        board.host.live_text("todo", Channel::Count).as_deref(),
        Some("2 items selected")
    );
    assert_eq!(count_log(&board, "todo"), vec!["2 items selected".to_string()]);
}

#[test]
fn test_other_containers_get_drop_instructions() {
    let mut board = Board::todo_done(&["a"]);
    board.click("a");
    board.settle();
    assert_eq!(
        board.host.live_text("done", Channel::Status),
        Some(english().drop_note)
    );
}

#[test]
fn test_cleared_count_uses_placeholder() {
    let mut board = Board::todo_done(&["a"]);
    board.click("a");
    board.settle();
    board.key("todo", Key::Escape);
    board.settle();
    assert_eq!(board.host.live_text("todo", Channel::Count).as_deref(), Some(NBSP));
}

#[test]
fn test_locked_container_has_no_count() {
    let mut board = Board::new(vec![
        ContainerSpec::new("choice", "choice-label")
            .item(ItemSpec::new("r1").role(ItemRole::Radio))
            .item(ItemSpec::new("r2").role(ItemRole::Radio)),
    ]);
    board.click("r1");
    board.settle();
    assert_eq!(board.host.live_text("choice", Channel::Count), None);
}

#[test]
fn test_disabled_item_event_has_no_count() {
    let mut board = Board::new(vec![
        ContainerSpec::new("todo", "todo-label")
            .item(ItemSpec::new("a"))
            .item(ItemSpec::new("b").disabled(true)),
    ]);
    board.click("a");
    board.settle();
    board.click("b");
    board.settle();
    assert_eq!(count_log(&board, "todo"), vec!["1 item selected".to_string()]);
}

#[test]
fn test_drop_confirmation() {
    let mut board = Board::todo_done(&["a", "b"]);
    board.click("a");
    board.click("b");
    board.key("done", Key::Enter);
    board.settle();
    assert_eq!(
        board.host.live_text("done", Channel::Status).as_deref(),
        Some("2 items dropped")
    );
    assert_eq!(board.host.live_text("todo", Channel::Count).as_deref(), Some(NBSP));
}

#[test]
fn test_custom_delay() {
    let mut board = Board::with(
        MemoryHost::new("board"),
        Arbiter::new(),
        FerryConfig::default().with_announce_delay(Duration::from_millis(400)),
        vec![ContainerSpec::new("todo", "todo-label").items(["a"])],
    );
    board.clock.advance(Duration::from_millis(399));
    assert_eq!(board.ferry.tick(), 0);
    board.clock.advance(Duration::from_millis(1));
    assert_eq!(board.ferry.tick(), 1);
    assert_eq!(board.ferry.pending_announcements(), 0);
}

#[test]
fn test_custom_placeholder() {
    let mut board = Board::with(
        MemoryHost::new("board"),
        Arbiter::new(),
        FerryConfig::default().with_placeholder("-"),
        vec![ContainerSpec::new("todo", "todo-label").items(["a"])],
    );
    board.click("a");
    board.settle();
    board.key("todo", Key::Escape);
    board.settle();
    assert_eq!(board.host.live_text("todo", Channel::Count).as_deref(), Some("-"));

    let blank = FerryConfig::default().with_placeholder("");
    assert_eq!(blank.placeholder, NBSP);
}
