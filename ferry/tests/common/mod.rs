#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use ferry::prelude::*;
use simplelog::{Config, LevelFilter, TestLogger};

pub const DELAY: Duration = Duration::from_millis(250);

/// An instance with everything a test needs to poke at.
pub struct Board {
    pub ferry: Ferry,
    pub host: MemoryHost,
    pub clock: Rc<ManualClock>,
    pub arbiter: Arbiter,
    pub events: Rc<RefCell<Vec<FerryEvent>>>,
}

impl Board {
    pub fn new(containers: Vec<ContainerSpec>) -> Self {
        Self::with(MemoryHost::new("board"), Arbiter::new(), FerryConfig::default(), containers)
    }

    pub fn with(host: MemoryHost, arbiter: Arbiter, config: FerryConfig, containers: Vec<ContainerSpec>) -> Self {
        // Engine decisions show up in the output of failing tests.
        let _ = TestLogger::init(LevelFilter::Debug, Config::default());

        let clock = Rc::new(ManualClock::new());
        let mut ferry = Ferry::builder("board")
            .host(host.clone())
            .arbiter(arbiter.clone())
            .clock(clock.clone())
            .config(config)
            .containers(containers)
            .build()
            .expect("board builds");

        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        ferry.on_change(move |event| sink.borrow_mut().push(event.clone()));

        Self {
            ferry,
            host,
            clock,
            arbiter,
            events,
        }
    }

    /// `todo` holding `keys` and an empty `done`.
    pub fn todo_done(keys: &[&str]) -> Self {
        Self::new(vec![
            ContainerSpec::new("todo", "todo-label").items(keys.iter().copied()),
            ContainerSpec::new("done", "done-label"),
        ])
    }

    pub fn click(&mut self, item: &str) {
        self.click_with(item, Modifiers::NONE);
    }

    pub fn click_with(&mut self, item: &str, modifiers: Modifiers) {
        self.ferry.handle(Input::PointerDown {
            item: item.to_string(),
            modifiers,
        });
        self.ferry.handle(Input::PointerUp {
            item: Some(item.to_string()),
        });
    }

    pub fn key(&mut self, container: &str, key: Key) {
        self.ferry.handle(Input::key(container, key));
    }

    pub fn key_with(&mut self, container: &str, key: Key, modifiers: Modifiers) {
        self.ferry.handle(Input::key_with(container, key, modifiers));
    }

    pub fn selected(&self) -> Vec<String> {
        self.ferry.selected_keys()
    }

    pub fn items(&self, container: &str) -> Vec<String> {
        self.ferry.item_keys(container)
    }

    pub fn active(&self, container: &str) -> Option<String> {
        let container = self.ferry.container_by_key(container)?;
        Some(self.ferry.item(container.active?)?.key)
    }

    /// Let every pending announcement fall due and deliver it.
    pub fn settle(&mut self) -> usize {
        self.clock.advance(DELAY);
        self.ferry.tick()
    }

    /// Check the selection invariants against the public state.
    pub fn assert_invariants(&self) {
        let selection = self.ferry.selection();
        assert_eq!(selection.is_empty(), selection.owner().is_none());
        if let Some(owner) = selection.owner() {
            let container = self.ferry.container(owner).expect("owner exists");
            for item in selection.items() {
                assert!(container.contains(*item), "{item} outside its owner");
                assert!(self.ferry.item(*item).expect("item exists").selected);
            }
        }
    }
}

pub fn keys(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}
