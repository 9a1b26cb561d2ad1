mod common;

use std::cell::RefCell;
use std::rc::Rc;

use common::Board;
use ferry::locale::english;
use ferry::prelude::*;

fn french() -> Vec<(&'static str, &'static str)> {
    vec![
        ("role_description", "liste glisser-déposer"),
        ("empty_note", "Vide."),
        ("selection_note", "Appuyez sur espace pour sélectionner."),
        ("drop_note", "Appuyez sur entrée pour déposer ici."),
        ("sort_number", "sélection {number}"),
        ("selected_count", "{count} {items} sélectionnés"),
        ("dropped_count", "{count} {items} déposés"),
        ("item_singular", "élément"),
        ("item_plural", "éléments"),
    ]
}

fn build(host: MemoryHost, containers: Vec<ContainerSpec>) -> Result<Ferry, ConfigError> {
    Ferry::builder("board")
        .host(host)
        .arbiter(Arbiter::new())
        .containers(containers)
        .build()
}

// ============================================================================
// Construction errors
// ============================================================================

#[test]
fn test_unresolved_scope() {
    let err = Ferry::builder("missing")
        .host(MemoryHost::new("board"))
        .build()
        .unwrap_err();
    assert_eq!(err, ConfigError::UnresolvedScope("missing".into()));
    assert!(err.to_string().contains("missing"));
}

#[test]
fn test_missing_host() {
    let err = Ferry::builder("board").build().unwrap_err();
    assert_eq!(err, ConfigError::MissingHost("board".into()));
}

#[test]
fn test_container_without_role_or_label() {
    let host = MemoryHost::new("board");
    assert_eq!(
        build(host.clone(), vec![ContainerSpec::new("c", "label").without_role()]).unwrap_err(),
        ConfigError::ContainerMissingRole("c".into())
    );
    assert_eq!(
        build(host.clone(), vec![ContainerSpec::new("c", "label").without_label()]).unwrap_err(),
        ConfigError::ContainerMissingLabel("c".into())
    );
    assert_eq!(
        build(host, vec![ContainerSpec::new("c", "  ")]).unwrap_err(),
        ConfigError::ContainerMissingLabel("c".into())
    );
}

#[test]
fn test_item_without_role() {
    let err = build(
        MemoryHost::new("board"),
        vec![ContainerSpec::new("c", "label").item(ItemSpec::new("i").without_role())],
    )
    .unwrap_err();
    assert_eq!(err, ConfigError::ItemMissingRole("i".into()));
}

#[test]
fn test_duplicate_keys() {
    let host = MemoryHost::new("board");
    assert_eq!(
        build(
            host.clone(),
            vec![ContainerSpec::new("c", "label"), ContainerSpec::new("c", "other")]
        )
        .unwrap_err(),
        ConfigError::DuplicateContainer("c".into())
    );
    assert_eq!(
        build(
            host,
            vec![
                ContainerSpec::new("c", "label").items(["x"]),
                ContainerSpec::new("d", "label").items(["x"])
            ]
        )
        .unwrap_err(),
        ConfigError::DuplicateItem("x".into())
    );
}

#[test]
fn test_failed_build_writes_nothing_to_host() {
    let host = MemoryHost::new("board");
    let _ = build(
        host.clone(),
        vec![
            ContainerSpec::new("ok", "label").items(["a"]),
            ContainerSpec::new("bad", "label").without_role(),
        ],
    );
    let state = host.snapshot();
    assert!(state.role_descriptions.is_empty());
    assert!(state.active_markers.is_empty());
}

// ============================================================================
// Locales
// ============================================================================

#[test]
fn test_role_descriptions_use_negotiated_locale() {
    let mut locales = Locales::new();
    locales.register("fr", french()).unwrap();
    let host = MemoryHost::new("board").with_languages(Some("fr-CA"), Some("en"), None);

    let ferry = Ferry::builder("board")
        .host(host.clone())
        .arbiter(Arbiter::new())
        .locales(locales)
        .container(ContainerSpec::new("c", "label"))
        .build()
        .unwrap();

    assert_eq!(ferry.locale_key(), "fr");
    assert_eq!(host.role_description("c").as_deref(), Some("liste glisser-déposer"));
}

#[test]
fn test_register_locale_renegotiates() {
    let host = MemoryHost::new("board").with_languages(None, Some("fr"), None);
    let mut board = Board::with(host, Arbiter::new(), FerryConfig::default(), vec![
        ContainerSpec::new("c", "label").items(["a", "b"]),
    ]);
    assert_eq!(board.ferry.locale_key(), "en");
    assert_eq!(board.host.role_description("c"), Some(english().role_description));

    board.ferry.register_locale("fr", french()).unwrap();
    assert_eq!(board.ferry.locale_key(), "fr");
    assert_eq!(board.host.role_description("c").as_deref(), Some("liste glisser-déposer"));

    board.click("a");
    board.settle();
    assert_eq!(
        board.host.live_text("c", Channel::Count).as_deref(),
        Some("1 élément sélectionnés")
    );
}

#[test]
fn test_invalid_locale_is_rejected_atomically() {
    let mut board = Board::todo_done(&["a"]);
    let before = board.ferry.locale_codes();

    let broken: Vec<(&str, &str)> = french()
        .into_iter()
        .filter(|(key, _)| *key != "item_plural")
        .collect();
    let err = board.ferry.register_locale("fr", broken).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Locale(LocaleError::MissingKey { key: "item_plural", .. })
    ));

    let err = board
        .ferry
        .register_locale_json("de", r#"{"selected_count": "{count} gewählt"}"#)
        .unwrap_err();
    assert!(matches!(err, ConfigError::Locale(_)));

    assert_eq!(board.ferry.locale_codes(), before);
}

// ============================================================================
// Callbacks
// ============================================================================

#[test]
fn test_every_callback_sees_every_event() {
    let mut board = Board::todo_done(&["a"]);
    let seen = Rc::new(RefCell::new(0));
    let counter = seen.clone();
    board.ferry.on_change(move |_| *counter.borrow_mut() += 1);

    board.click("a");
    board.key("done", Key::Enter);

    assert_eq!(*seen.borrow(), 1);
    assert_eq!(board.events.borrow().len(), 1);
}
