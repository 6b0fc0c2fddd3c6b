//! Change-notification registry for store observers.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

/// Callback invoked after each committed store mutation.
pub type ChangeCallback = Arc<dyn Fn() + Send + Sync>;

/// Handle identifying one registered observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Returns the raw subscription number.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

#[derive(Default)]
pub(crate) struct ObserverRegistry {
    next_id: AtomicU64,
    observers: RwLock<Vec<(SubscriptionId, ChangeCallback)>>,
}

impl ObserverRegistry {
    pub(crate) fn subscribe(&self, callback: ChangeCallback) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.observers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, callback));
        id
    }

    pub(crate) fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut observers = self
            .observers
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let before = observers.len();
        observers.retain(|(registered, _)| *registered != id);
        observers.len() != before
    }

    /// Invokes every observer in registration order.
    ///
    /// Callbacks run on a copy of the registry, so an observer may subscribe,
    /// unsubscribe, or read the store without deadlocking.
    pub(crate) fn notify(&self) {
        let callbacks: Vec<ChangeCallback> = self
            .observers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, callback)| Arc::clone(callback))
            .collect();
        for callback in callbacks {
            callback();
        }
    }

    /// Drops every observer and returns how many were registered.
    pub(crate) fn clear(&self) -> usize {
        let mut observers = self
            .observers
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let count = observers.len();
        observers.clear();
        count
    }

    pub(crate) fn len(&self) -> usize {
        self.observers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl std::fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("observers", &self.len())
            .finish_non_exhaustive()
    }
}
