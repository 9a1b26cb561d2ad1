//! Adapter between the engine and the host tree.
//!
//! The engine never reads state back from the host except geometry and
//! language hints; everything else flows one way, written after each
//! decision.

pub mod memory;

use serde::{Deserialize, Serialize};

use crate::announce::Channel;
use crate::geometry::Rect;

/// Alignment requested by a scroll-into-view command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollAlign {
    /// Scroll the least distance that brings the item into view.
    Nearest,
    /// Center the item.
    Center,
}

/// The tree/attribute layer an instance is bound to.
///
/// Containers and items are addressed by the keys they were declared with.
pub trait Host {
    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Whether the root scope reference points at something.
    fn resolve_scope(&self, scope: &str) -> bool;

    /// Bounding region of an item, if it is laid out.
    fn item_bounds(&self, item: &str) -> Option<Rect>;

    /// Visible region of a container's scrollable area.
    fn container_viewport(&self, container: &str) -> Option<Rect>;

    /// Visible region of the outer viewport.
    fn viewport(&self) -> Rect;

    /// Language declared on the root scope element.
    fn element_language(&self, _scope: &str) -> Option<String> {
        None
    }

    /// Language declared on the document.
    fn document_language(&self) -> Option<String> {
        None
    }

    /// Language of the platform or user agent.
    fn platform_language(&self) -> Option<String> {
        None
    }

    /// Whether the platform is primarily touch driven.
    fn prefers_touch(&self) -> bool {
        false
    }

    // -------------------------------------------------------------------------
    // Commands
    // -------------------------------------------------------------------------

    fn set_selected(&mut self, item: &str, selected: bool);

    /// Mark or unmark a container as a valid drop target.
    fn set_drop_target(&mut self, container: &str, valid: bool);

    /// Move the focused-equivalent marker of a container.
    fn set_active_marker(&mut self, container: &str, item: Option<&str>);

    /// Move an item node to the end of `destination`.
    fn move_item(&mut self, item: &str, destination: &str);

    fn focus_container(&mut self, container: &str);

    fn scroll_into_view(&mut self, item: &str, align: ScrollAlign);

    /// Write text to one of a container's live regions.
    fn set_live_text(&mut self, container: &str, channel: Channel, text: &str);

    /// Set or clear an item's accessible description.
    fn set_item_description(&mut self, item: &str, description: Option<&str>);

    fn set_role_description(&mut self, container: &str, text: &str);

    /// Toggle the dragging visual on an item.
    fn set_dragging(&mut self, item: &str, dragging: bool);
}
