//! Listener registry shared by the stores.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use crate::domain::{StoreChange, StoreListener};

/// Handle returned by `subscribe`, used to unsubscribe later.
///
/// Handles are unique across every store in the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SubscriptionId(u64);

static NEXT_SUBSCRIPTION: AtomicU64 = AtomicU64::new(1);

impl SubscriptionId {
    fn issue() -> Self {
        Self(NEXT_SUBSCRIPTION.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Default)]
pub(crate) struct Subscribers {
    listeners: Vec<(SubscriptionId, Box<dyn StoreListener>)>,
}

impl Subscribers {
    pub(crate) fn subscribe(&mut self, listener: Box<dyn StoreListener>) -> SubscriptionId {
        let id = SubscriptionId::issue();
        self.listeners.push((id, listener));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    /// Call every listener in subscription order.
    pub(crate) fn notify(&mut self, change: StoreChange) {
        for (_, listener) in &mut self.listeners {
            listener.on_change(change);
        }
    }
}

impl fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
