//! Cart change notifications.

use crate::cart::CartLine;
use crate::ids::{ItemId, SubscriptionId};
use serde::Serialize;
use std::fmt;

/// A change that was applied to the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CartEvent {
    /// A new line was appended with quantity one.
    ItemAdded { item_id: ItemId },
    /// A line was deleted.
    ItemRemoved { item_id: ItemId, quantity: i64 },
    /// A line's quantity was set to a different value.
    QuantityChanged { item_id: ItemId, from: i64, to: i64 },
    /// Every line was dropped at once.
    Cleared { lines: usize },
}

impl CartEvent {
    /// Item affected by this event, if it concerns a single line.
    pub fn item_id(&self) -> Option<&ItemId> {
        match self {
            CartEvent::ItemAdded { item_id }
            | CartEvent::ItemRemoved { item_id, .. }
            | CartEvent::QuantityChanged { item_id, .. } => Some(item_id),
            CartEvent::Cleared { .. } => None,
        }
    }
}

/// Callback invoked after each cart change with the event and the lines as
/// they stand after it.
pub type CartObserver = Box<dyn FnMut(&CartEvent, &[CartLine])>;

/// Ordered subscription list.
#[derive(Default)]
pub(crate) struct Subscribers {
    next_id: u64,
    entries: Vec<(SubscriptionId, CartObserver)>,
}

impl Subscribers {
    pub(crate) fn subscribe(&mut self, observer: CartObserver) -> SubscriptionId {
        let id = SubscriptionId::new(self.next_id);
        self.next_id += 1;
        self.entries.push((id, observer));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let len_before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() < len_before
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Run every observer in subscription order.
    pub(crate) fn notify(&mut self, event: &CartEvent, lines: &[CartLine]) {
        for (_, observer) in &mut self.entries {
            observer(event, lines);
        }
    }
}

impl fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("next_id", &self.next_id)
            .field("count", &self.entries.len())
            .finish()
    }
}
