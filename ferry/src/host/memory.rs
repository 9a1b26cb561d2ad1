//! In-memory host that records every command.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::rc::Rc;

use super::{Host, ScrollAlign};
use crate::announce::Channel;
use crate::geometry::Rect;

/// Snapshot of what an instance has written to a [`MemoryHost`].
#[derive(Debug, Clone, Default)]
pub struct MemoryState {
    pub scopes: BTreeSet<String>,
    pub bounds: HashMap<String, Rect>,
    /// Bounds an item takes after a scroll command, keyed by alignment.
    pub scrolled_bounds: HashMap<(String, ScrollAlign), Rect>,
    pub container_viewports: HashMap<String, Rect>,
    pub viewport: Rect,
    pub element_language: Option<String>,
    pub document_language: Option<String>,
    pub platform_language: Option<String>,
    pub prefers_touch: bool,

    pub selected: BTreeSet<String>,
    pub drop_targets: BTreeSet<String>,
    pub active_markers: BTreeMap<String, String>,
    pub moves: Vec<(String, String)>,
    pub focused: Option<String>,
    pub scrolls: Vec<(String, ScrollAlign)>,
    pub live: BTreeMap<(String, Channel), String>,
    pub live_log: Vec<(String, Channel, String)>,
    pub descriptions: BTreeMap<String, String>,
    pub role_descriptions: BTreeMap<String, String>,
    pub dragging: BTreeSet<String>,
}

/// A [`Host`] backed by plain collections.
///
/// Cloning shares the underlying state, so a test can hand one clone to an
/// instance and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    state: Rc<RefCell<MemoryState>>,
}

impl MemoryHost {
    /// A host that resolves `scope` and has a 800x600 viewport.
    pub fn new(scope: impl Into<String>) -> Self {
        let host = Self::default();
        {
            let mut state = host.state.borrow_mut();
            state.scopes.insert(scope.into());
            state.viewport = Rect::new(0, 0, 800, 600);
        }
        host
    }

    pub fn with_viewport(self, viewport: Rect) -> Self {
        self.state.borrow_mut().viewport = viewport;
        self
    }

    pub fn with_bounds(self, item: impl Into<String>, bounds: Rect) -> Self {
        self.state.borrow_mut().bounds.insert(item.into(), bounds);
        self
    }

    /// Bounds the item reports after being scrolled with `align`.
    pub fn with_scrolled_bounds(self, item: impl Into<String>, align: ScrollAlign, bounds: Rect) -> Self {
        self.state
            .borrow_mut()
            .scrolled_bounds
            .insert((item.into(), align), bounds);
        self
    }

    pub fn with_container_viewport(self, container: impl Into<String>, viewport: Rect) -> Self {
        self.state
            .borrow_mut()
            .container_viewports
            .insert(container.into(), viewport);
        self
    }

    pub fn with_languages(
        self,
        element: Option<&str>,
        document: Option<&str>,
        platform: Option<&str>,
    ) -> Self {
        {
            let mut state = self.state.borrow_mut();
            state.element_language = element.map(str::to_string);
            state.document_language = document.map(str::to_string);
            state.platform_language = platform.map(str::to_string);
        }
        self
    }

    pub fn with_touch(self, prefers_touch: bool) -> Self {
        self.state.borrow_mut().prefers_touch = prefers_touch;
        self
    }

    /// Clone of the recorded state.
    pub fn snapshot(&self) -> MemoryState {
        self.state.borrow().clone()
    }

    pub fn is_selected(&self, item: &str) -> bool {
        self.state.borrow().selected.contains(item)
    }

    pub fn is_drop_target(&self, container: &str) -> bool {
        self.state.borrow().drop_targets.contains(container)
    }

    pub fn active_marker(&self, container: &str) -> Option<String> {
        self.state.borrow().active_markers.get(container).cloned()
    }

    /// Current text of a live region.
    pub fn live_text(&self, container: &str, channel: Channel) -> Option<String> {
        self.state
            .borrow()
            .live
            .get(&(container.to_string(), channel))
            .cloned()
    }

    pub fn description(&self, item: &str) -> Option<String> {
        self.state.borrow().descriptions.get(item).cloned()
    }

    pub fn role_description(&self, container: &str) -> Option<String> {
        self.state.borrow().role_descriptions.get(container).cloned()
    }

    pub fn focused(&self) -> Option<String> {
        self.state.borrow().focused.clone()
    }

    pub fn moves(&self) -> Vec<(String, String)> {
        self.state.borrow().moves.clone()
    }

    pub fn scrolls(&self) -> Vec<(String, ScrollAlign)> {
        self.state.borrow().scrolls.clone()
    }

    pub fn is_dragging(&self, item: &str) -> bool {
        self.state.borrow().dragging.contains(item)
    }
}

impl Host for MemoryHost {
    fn resolve_scope(&self, scope: &str) -> bool {
        self.state.borrow().scopes.contains(scope)
    }

    fn item_bounds(&self, item: &str) -> Option<Rect> {
        self.state.borrow().bounds.get(item).copied()
    }

    fn container_viewport(&self, container: &str) -> Option<Rect> {
        self.state.borrow().container_viewports.get(container).copied()
    }

    fn viewport(&self) -> Rect {
        self.state.borrow().viewport
    }

    fn element_language(&self, _scope: &str) -> Option<String> {
        self.state.borrow().element_language.clone()
    }

    fn document_language(&self) -> Option<String> {
        self.state.borrow().document_language.clone()
    }

    fn platform_language(&self) -> Option<String> {
        self.state.borrow().platform_language.clone()
    }

    fn prefers_touch(&self) -> bool {
        self.state.borrow().prefers_touch
    }

    fn set_selected(&mut self, item: &str, selected: bool) {
        let mut state = self.state.borrow_mut();
        if selected {
            state.selected.insert(item.to_string());
        } else {
            state.selected.remove(item);
        }
    }

    fn set_drop_target(&mut self, container: &str, valid: bool) {
        let mut state = self.state.borrow_mut();
        if valid {
            state.drop_targets.insert(container.to_string());
        } else {
            state.drop_targets.remove(container);
        }
    }

    fn set_active_marker(&mut self, container: &str, item: Option<&str>) {
        let mut state = self.state.borrow_mut();
        match item {
            Some(item) => state.active_markers.insert(container.to_string(), item.to_string()),
            None => state.active_markers.remove(container),
        };
    }

    fn move_item(&mut self, item: &str, destination: &str) {
        self.state
            .borrow_mut()
            .moves
            .push((item.to_string(), destination.to_string()));
    }

    fn focus_container(&mut self, container: &str) {
        self.state.borrow_mut().focused = Some(container.to_string());
    }

    fn scroll_into_view(&mut self, item: &str, align: ScrollAlign) {
        let mut state = self.state.borrow_mut();
        state.scrolls.push((item.to_string(), align));
        if let Some(bounds) = state.scrolled_bounds.get(&(item.to_string(), align)).copied() {
            state.bounds.insert(item.to_string(), bounds);
        }
    }

    fn set_live_text(&mut self, container: &str, channel: Channel, text: &str) {
        let mut state = self.state.borrow_mut();
        state
            .live
            .insert((container.to_string(), channel), text.to_string());
        state
            .live_log
            .push((container.to_string(), channel, text.to_string()));
    }

    fn set_item_description(&mut self, item: &str, description: Option<&str>) {
        let mut state = self.state.borrow_mut();
        match description {
            Some(text) => state.descriptions.insert(item.to_string(), text.to_string()),
            None => state.descriptions.remove(item),
        };
    }

    fn set_role_description(&mut self, container: &str, text: &str) {
        self.state
            .borrow_mut()
            .role_descriptions
            .insert(container.to_string(), text.to_string());
    }

    fn set_dragging(&mut self, item: &str, dragging: bool) {
        let mut state = self.state.borrow_mut();
        if dragging {
            state.dragging.insert(item.to_string());
        } else {
            state.dragging.remove(item);
        }
    }
}
