//! The patch flag is process-wide and locks on the first build, so this
//! binary holds a single test.

use ferry::prelude::*;
use ferry::{configure_platform_patches, platform_patches};

// ============================================================================
// Lifecycle
// ============================================================================

#[test]
fn test_patch_flag_locks_and_clears_drag_on_release() {
    assert_eq!(platform_patches(), PlatformPatches::Auto);
    configure_platform_patches(true).unwrap();
    assert_eq!(platform_patches(), PlatformPatches::Enabled);

    let host = MemoryHost::new("board");
    let mut ferry = Ferry::builder("board")
        .host(host.clone())
        .arbiter(Arbiter::new())
        .container(ContainerSpec::new("todo", "todo-label").items(["a", "b"]))
        .container(ContainerSpec::new("done", "done-label"))
        .build()
        .unwrap();
    assert!(ferry.is_patched());

    assert_eq!(
        configure_platform_patches(PlatformPatches::Disabled),
        Err(ConfigError::PatchesLocked)
    );
    assert_eq!(platform_patches(), PlatformPatches::Enabled);

    ferry.handle(Input::DragStart {
        item: "a".into(),
        modifiers: Modifiers::NONE,
    });
    ferry.handle(Input::DragOver {
        container: "done".into(),
    });
    assert!(host.is_dragging("a"));
    assert!(ferry.selection().pending_target().is_some());

    // No drag-end arrives; the release alone has to clean up.
    ferry.handle(Input::PointerUp { item: None });
    assert!(!host.is_dragging("a"));
    assert!(ferry.selection().pending_target().is_none());
    assert_eq!(ferry.selected_keys(), vec!["a".to_string()]);
}
