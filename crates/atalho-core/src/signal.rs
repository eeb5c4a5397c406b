#![forbid(unsafe_code)]

//! In-process named signals.
//!
//! A [`SignalHub`] lets loosely coupled parts of an application poke each
//! other by name without holding references: one side emits a
//! stringly-typed signal (no payload), subscribers observe it on their next
//! poll. The palette shell uses this for its "open programmatically"
//! request.
//!
//! Subscriptions are scoped: [`SignalHub::subscribe`] returns a
//! [`SignalSubscription`] that detaches from the hub when dropped. There is
//! no ambient global registry — a hub handle must be passed to both sides,
//! and teardown is automatic and idempotent.
//!
//! The hub is single-threaded (`Rc`/`RefCell`), matching the cooperative
//! event-loop model the palette runs in.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// Shared hub for named, payload-free signals.
#[derive(Debug, Clone, Default)]
pub struct SignalHub {
    inner: Rc<RefCell<HubState>>,
}

#[derive(Debug, Default)]
struct HubState {
    next_id: u64,
    entries: Vec<Entry>,
}

#[derive(Debug)]
struct Entry {
    id: u64,
    name: String,
    pending: Rc<Cell<u32>>,
}

impl SignalHub {
    /// Create a new, empty hub.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to a named signal.
    ///
    /// The returned handle accumulates emissions until drained with
    /// [`SignalSubscription::take`]. Dropping the handle unsubscribes.
    #[must_use]
    pub fn subscribe(&self, name: impl Into<String>) -> SignalSubscription {
        let pending = Rc::new(Cell::new(0));
        let mut state = self.inner.borrow_mut();
        state.next_id += 1;
        let id = state.next_id;
        state.entries.push(Entry {
            id,
            name: name.into(),
            pending: Rc::clone(&pending),
        });
        SignalSubscription {
            hub: Rc::downgrade(&self.inner),
            id,
            pending,
        }
    }

    /// Emit a signal to every live subscriber of `name`.
    ///
    /// Returns the number of subscriptions notified. Emitting a name with
    /// no subscribers is a no-op, not an error.
    pub fn emit(&self, name: &str) -> usize {
        let state = self.inner.borrow();
        let mut notified = 0;
        for entry in state.entries.iter().filter(|e| e.name == name) {
            entry.pending.set(entry.pending.get().saturating_add(1));
            notified += 1;
        }
        notified
    }

    /// Number of live subscriptions across all names.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().entries.len()
    }
}

/// Handle to a single subscription on a [`SignalHub`].
///
/// Dropping the handle detaches it from the hub; the detach is idempotent
/// and safe even if the hub was dropped first.
#[derive(Debug)]
pub struct SignalSubscription {
    hub: Weak<RefCell<HubState>>,
    id: u64,
    pending: Rc<Cell<u32>>,
}

impl SignalSubscription {
    /// Drain pending emissions. Returns `true` if any had arrived since the
    /// last drain.
    pub fn take(&self) -> bool {
        self.pending.replace(0) > 0
    }

    /// Number of emissions observed but not yet drained.
    #[must_use]
    pub fn pending(&self) -> u32 {
        self.pending.get()
    }
}

impl Drop for SignalSubscription {
    fn drop(&mut self) {
        if let Some(hub) = self.hub.upgrade() {
            hub.borrow_mut().entries.retain(|e| e.id != self.id);
        }
    }
}
