//! Pointer event subscriptions
//!
//! The host owns a `PointerHub`. A component that wants to see mouse-down
//! events anywhere on screen (not only inside its own area) takes a
//! `PointerSubscription` from the hub. The subscription deregisters itself
//! when dropped, so every way a component goes away releases it.

use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;
use std::rc::{Rc, Weak};

/// Identifier of a registered pointer listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(u64);

type Registry = RefCell<BTreeSet<ListenerId>>;

/// Registry of active pointer listeners
#[derive(Debug, Default)]
pub struct PointerHub {
    listeners: Rc<Registry>,
    next_id: Cell<u64>,
}

impl PointerHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new listener
    pub fn subscribe(&self) -> PointerSubscription {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);
        self.listeners.borrow_mut().insert(id);
        tracing::debug!(
            listener = id.0,
            active = self.listener_count(),
            "pointer listener registered"
        );
        PointerSubscription {
            id,
            registry: Rc::downgrade(&self.listeners),
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

/// Handle for one registered listener; deregisters on drop
#[derive(Debug)]
pub struct PointerSubscription {
    id: ListenerId,
    registry: Weak<Registry>,
}

impl PointerSubscription {
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// False once the hub itself has been dropped
    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .is_some_and(|listeners| listeners.borrow().contains(&self.id))
    }
}

impl Drop for PointerSubscription {
    fn drop(&mut self) {
        if let Some(listeners) = self.registry.upgrade() {
            listeners.borrow_mut().remove(&self.id);
            tracing::debug!(listener = self.id.0, "pointer listener released");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscribe_and_drop() {
        let hub = PointerHub::new();
        assert_eq!(hub.listener_count(), 0);

        let sub = hub.subscribe();
        assert_eq!(hub.listener_count(), 1);
        assert!(sub.is_active());

        drop(sub);
        assert_eq!(hub.listener_count(), 0);
    }

    #[test]
    fn test_ids_are_unique() {
        let hub = PointerHub::new();
        let a = hub.subscribe();
        let b = hub.subscribe();
        assert_ne!(a.id(), b.id());
        assert_eq!(hub.listener_count(), 2);

        drop(a);
        assert_eq!(hub.listener_count(), 1);
        assert!(b.is_active());
    }

    #[test]
    fn test_subscription_outliving_hub() {
        let hub = PointerHub::new();
        let sub = hub.subscribe();
        drop(hub);
        assert!(!sub.is_active());
        drop(sub);
    }
}
