//! Exclusive ownership of an in-progress selection across instances.
//!
//! Only one instance may hold a selection or drag at a time. A claim by a
//! second instance evicts the first: its full cancel sequence runs before the
//! claim completes. There is no queueing; the last claimant wins.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::instance::InstanceId;

/// Something that can be forced to drop its selection.
pub trait Evict {
    /// Cancel the in-progress selection or drag and release the arbiter.
    fn evict(&self);
}

struct Holder {
    id: InstanceId,
    client: Weak<dyn Evict>,
}

impl std::fmt::Debug for Holder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Holder").field("id", &self.id).finish()
    }
}

/// A single slot naming the instance that currently owns a selection.
///
/// Cloning shares the slot. Instances built without an explicit arbiter use
/// [`Arbiter::shared`].
#[derive(Debug, Clone, Default)]
pub struct Arbiter {
    slot: Rc<RefCell<Option<Holder>>>,
}

thread_local! {
    static SHARED: Arbiter = Arbiter::new();
}

impl Arbiter {
    /// A fresh, independent arbiter.
    pub fn new() -> Self {
        Self::default()
    }

    /// The arbiter shared by every instance on this thread.
    pub fn shared() -> Self {
        SHARED.with(Clone::clone)
    }

    /// Current holder.
    pub fn holder(&self) -> Option<InstanceId> {
        self.slot.borrow().as_ref().map(|holder| holder.id)
    }

    pub fn is_held_by(&self, id: InstanceId) -> bool {
        self.holder() == Some(id)
    }

    /// Claim the slot for `id`, evicting any other holder first.
    pub fn claim(&self, id: InstanceId, client: Weak<dyn Evict>) {
        let previous = {
            let mut slot = self.slot.borrow_mut();
            if slot.as_ref().is_some_and(|holder| holder.id == id) {
                return;
            }
            slot.take()
        };

        if let Some(previous) = previous {
            log::debug!("[arbiter] {} evicts {}", id, previous.id);
            // The slot is empty while the evicted instance cancels, so its
            // own release is a no-op.
            if let Some(client) = previous.client.upgrade() {
                client.evict();
            }
        }

        *self.slot.borrow_mut() = Some(Holder { id, client });
    }

    /// Release the slot. Only the holder can release it, and only once its
    /// selection is empty.
    pub fn release(&self, id: InstanceId, selection_empty: bool) -> bool {
        if !selection_empty {
            return false;
        }
        let mut slot = self.slot.borrow_mut();
        if slot.as_ref().is_some_and(|holder| holder.id == id) {
            *slot = None;
            log::trace!("[arbiter] released by {}", id);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    struct Counter(Cell<usize>);

    impl Evict for Counter {
        fn evict(&self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn claim_evicts_previous_holder() {
        let arbiter = Arbiter::new();
        let first = Rc::new(Counter(Cell::new(0)));
        let second = Rc::new(Counter(Cell::new(0)));
        let (a, b) = (InstanceId::new(), InstanceId::new());

        let weak_first: Weak<dyn Evict> = Rc::downgrade(&first) as Weak<dyn Evict>;
        let weak_second: Weak<dyn Evict> = Rc::downgrade(&second) as Weak<dyn Evict>;
        arbiter.claim(a, weak_first);
        arbiter.claim(b, weak_second);

        assert_eq!(first.0.get(), 1);
        assert_eq!(second.0.get(), 0);
        assert!(arbiter.is_held_by(b));
    }

    #[test]
    fn only_holder_with_empty_selection_releases() {
        let arbiter = Arbiter::new();
        let client = Rc::new(Counter(Cell::new(0)));
        let id = InstanceId::new();
        arbiter.claim(id, Rc::downgrade(&client) as Weak<dyn Evict>);

        assert!(!arbiter.release(InstanceId::new(), true));
        assert!(!arbiter.release(id, false));
        assert!(arbiter.release(id, true));
        assert_eq!(arbiter.holder(), None);
    }
}
