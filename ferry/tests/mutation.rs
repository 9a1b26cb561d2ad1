mod common;

use common::{Board, keys};
use ferry::prelude::*;

// ============================================================================
// Batches
// ============================================================================

#[test]
fn test_added_items_are_registered_and_notified_once() {
    let mut board = Board::todo_done(&["a"]);
    let changed = board
        .ferry
        .apply_mutations(vec![
            Mutation::Added {
                container: "done".into(),
                item: ItemSpec::new("n1"),
                index: None,
            },
            Mutation::Added {
                container: "done".into(),
                item: ItemSpec::new("n0"),
                index: Some(0),
            },
            Mutation::Added {
                container: "todo".into(),
                item: ItemSpec::new("b"),
                index: None,
            },
        ])
        .unwrap();

    let done = board.ferry.container_id("done").unwrap();
    let todo = board.ferry.container_id("todo").unwrap();
    assert_eq!(changed, vec![done, todo]);
    assert_eq!(board.items("done"), keys(&["n0", "n1"]));
    assert_eq!(board.items("todo"), keys(&["a", "b"]));

    let events = board.events.borrow();
    assert_eq!(events.len(), 1);
    assert_eq!(
        events[0],
        FerryEvent::ItemsChanged {
            containers: vec![done, todo]
        }
    );
}

#[test]
fn test_invalid_batch_changes_nothing() {
    let mut board = Board::todo_done(&["a"]);
    let err = board
        .ferry
        .apply_mutations(vec![
            Mutation::Added {
                container: "done".into(),
                item: ItemSpec::new("n1"),
                index: None,
            },
            Mutation::Removed {
                item: "ghost".into(),
            },
        ])
        .unwrap_err();

    assert_eq!(err, ConfigError::UnknownItem("ghost".into()));
    assert!(board.items("done").is_empty());
    assert!(board.ferry.item_id("n1").is_none());
    assert!(board.events.borrow().is_empty());
}

#[test]
fn test_batch_rejects_unknown_container_and_missing_role() {
    let mut board = Board::todo_done(&["a"]);
    assert_eq!(
        board.ferry.apply_mutations(vec![Mutation::Added {
            container: "nowhere".into(),
            item: ItemSpec::new("n"),
            index: None,
        }]),
        Err(ConfigError::UnknownContainer("nowhere".into()))
    );
    assert_eq!(
        board.ferry.apply_mutations(vec![Mutation::Added {
            container: "done".into(),
            item: ItemSpec::new("n").without_role(),
            index: None,
        }]),
        Err(ConfigError::ItemMissingRole("n".into()))
    );
    assert_eq!(
        board.ferry.apply_mutations(vec![Mutation::Added {
            container: "done".into(),
            item: ItemSpec::new("a"),
            index: None,
        }]),
        Err(ConfigError::DuplicateItem("a".into()))
    );
}

#[test]
fn test_remove_then_add_same_key_in_one_batch() {
    let mut board = Board::todo_done(&["a", "b"]);
    board
        .ferry
        .apply_mutations(vec![
            Mutation::Removed { item: "a".into() },
            Mutation::Added {
                container: "done".into(),
                item: ItemSpec::new("a"),
                index: None,
            },
        ])
        .unwrap();
    assert_eq!(board.items("todo"), keys(&["b"]));
    assert_eq!(board.items("done"), keys(&["a"]));
}

// ============================================================================
// Interaction with the selection
// ============================================================================

#[test]
fn test_removing_selected_item_shrinks_selection() {
    let mut board = Board::todo_done(&["a", "b", "c"]);
    board.click("a");
    board.click_with("c", Modifiers::ctrl());
    assert_eq!(board.selected(), keys(&["a", "c"]));
    board
        .ferry
        .apply_mutations(vec![Mutation::Removed { item: "a".into() }])
        .unwrap();
    assert_eq!(board.selected(), keys(&["c"]));
    board.assert_invariants();

    board
        .ferry
        .apply_mutations(vec![Mutation::Removed { item: "c".into() }])
        .unwrap();
    assert!(board.selected().is_empty());
    assert!(!board.ferry.holds_arbiter());
    board.assert_invariants();
}

#[test]
fn test_disabling_selected_item_deselects_it() {
    let mut board = Board::todo_done(&["a", "b"]);
    board.click("a");
    board
        .ferry
        .apply_mutations(vec![Mutation::SetDisabled {
            item: "a".into(),
            disabled: true,
        }])
        .unwrap();
    assert!(board.selected().is_empty());
    assert!(board.ferry.item_by_key("a").unwrap().disabled);

    board.click("a");
    assert!(board.selected().is_empty());
}

#[test]
fn test_mode_is_rederived_after_batch() {
    let mut board = Board::todo_done(&["a"]);
    board
        .ferry
        .apply_mutations(vec![Mutation::Added {
            container: "todo".into(),
            item: ItemSpec::new("r").role(ItemRole::Radio),
            index: Some(0),
        }])
        .unwrap();
    let todo = board.ferry.container_by_key("todo").unwrap();
    assert_eq!(todo.mode, SelectionMode::LockedSingle);
    assert!(todo.mixed_roles);
}

#[test]
fn test_first_item_becomes_active_in_empty_container() {
    let mut board = Board::todo_done(&["a"]);
    board
        .ferry
        .apply_mutations(vec![Mutation::Added {
            container: "done".into(),
            item: ItemSpec::new("n"),
            index: None,
        }])
        .unwrap();
    assert_eq!(board.active("done").as_deref(), Some("n"));
    assert_eq!(board.host.active_marker("done").as_deref(), Some("n"));
}

#[test]
fn test_mutation_deserializes_from_json() {
    let json = r#"[
        {"type": "added", "container": "done", "item": {"key": "n", "role": "option"}},
        {"type": "set_disabled", "item": "n", "disabled": true}
    ]"#;
    let batch: Vec<Mutation> = serde_json::from_str(json).unwrap();
    let mut board = Board::todo_done(&["a"]);
    board.ferry.apply_mutations(batch).unwrap();
    assert!(board.ferry.item_by_key("n").unwrap().disabled);
}
