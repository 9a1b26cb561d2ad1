//! Delayed, supersedable announcements.
//!
//! Each container has two live regions. Text scheduled for a region is held
//! back for a fixed delay so the selection change it describes reaches
//! assistive technology first. Scheduling again before the delay elapses
//! replaces the pending text and restarts the delay.

mod text;

use std::collections::HashMap;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

pub(crate) use text::status_text;

use crate::registry::ContainerId;

/// A container's live region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    /// Empty, selection and drop instructions, drop confirmations.
    Status,
    /// Number of selected items.
    Count,
}

/// Text waiting to be written to a live region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub container: ContainerId,
    pub channel: Channel,
    pub text: String,
    pub due: Instant,
    seq: u64,
}

/// Per-channel announcement queue.
#[derive(Debug, Clone)]
pub struct Scheduler {
    delay: Duration,
    placeholder: String,
    pending: HashMap<(ContainerId, Channel), Announcement>,
    seq: u64,
}

impl Scheduler {
    /// Create a scheduler. Blank `placeholder` text is replaced by U+00A0.
    pub fn new(delay: Duration, placeholder: impl Into<String>) -> Self {
        let placeholder = placeholder.into();
        Self {
            delay,
            placeholder: if placeholder.is_empty() {
                crate::config::PLACEHOLDER.to_string()
            } else {
                placeholder
            },
            pending: HashMap::new(),
            seq: 0,
        }
    }

    /// Schedule `text` for a channel, superseding anything pending there.
    ///
    /// Empty text schedules the placeholder.
    pub fn schedule(&mut self, container: ContainerId, channel: Channel, text: impl Into<String>, now: Instant) {
        let mut text = text.into();
        if text.is_empty() {
            text.clone_from(&self.placeholder);
        }
        self.seq += 1;
        let announcement = Announcement {
            container,
            channel,
            text,
            due: now + self.delay,
            seq: self.seq,
        };
        if let Some(previous) = self.pending.insert((container, channel), announcement) {
            log::trace!(
                "[announce] superseded {:?} on {} ('{}')",
                channel,
                container,
                previous.text
            );
        }
    }

    /// Schedule the placeholder for a channel.
    pub fn clear(&mut self, container: ContainerId, channel: Channel, now: Instant) {
        self.schedule(container, channel, String::new(), now);
    }

    /// Remove and return every announcement due at `now`, in scheduling order.
    pub fn take_due(&mut self, now: Instant) -> Vec<Announcement> {
        let due_keys: Vec<(ContainerId, Channel)> = self
            .pending
            .iter()
            .filter(|(_, a)| a.due <= now)
            .map(|(key, _)| *key)
            .collect();

        let mut due: Vec<Announcement> = due_keys
            .into_iter()
            .filter_map(|key| self.pending.remove(&key))
            .collect();
        due.sort_by_key(|a| (a.due, a.seq));
        due
    }

    /// Pending text for a channel.
    pub fn pending(&self, container: ContainerId, channel: Channel) -> Option<&str> {
        self.pending
            .get(&(container, channel))
            .map(|a| a.text.as_str())
    }

    /// Earliest due instant, if anything is pending.
    pub fn next_due(&self) -> Option<Instant> {
        self.pending.values().map(|a| a.due).min()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
