//! Listener registry.
//!
//! Holds shared [`StatusListener`] handles as a set keyed on allocation
//! identity: registering the same `Rc` twice is a no-op, and removing a
//! handle that was never registered does nothing.  Fan-out order is
//! unspecified; callers must not rely on it.

use std::rc::Rc;

use super::events::StatusEvent;
use super::ports::StatusListener;

/// Set of observer handles.
#[derive(Default)]
pub struct ListenerRegistry {
    listeners: Vec<Rc<dyn StatusListener>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `listener`.  Returns `false` if it was already registered.
    pub fn register(&mut self, listener: Rc<dyn StatusListener>) -> bool {
        if self.position(&listener).is_some() {
            return false;
        }
        self.listeners.push(listener);
        true
    }

    /// Remove `listener`.  Returns `false` if it was not registered.
    pub fn unregister(&mut self, listener: &Rc<dyn StatusListener>) -> bool {
        match self.position(listener) {
            Some(idx) => {
                self.listeners.swap_remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Deliver `event` to every registered listener.
    pub fn dispatch(&self, event: StatusEvent) {
        for listener in &self.listeners {
            event.deliver(listener.as_ref());
        }
    }

    // Compare data pointers only; vtable pointers for the same object may
    // differ between codegen units.
    fn position(&self, listener: &Rc<dyn StatusListener>) -> Option<usize> {
        let target = Rc::as_ptr(listener).cast::<()>();
        self.listeners
            .iter()
            .position(|l| Rc::as_ptr(l).cast::<()>() == target)
    }
}
