//! The cart store: owns cart lines and enforces their invariants.

use crate::cart::events::Subscribers;
use crate::cart::{CartEvent, CartLine, CartObserver, CartPricing, PriceLookup};
use crate::catalog::Item;
use crate::ids::{ItemId, SubscriptionId};
use crate::money::Money;

/// A shopping cart for one session.
///
/// Every operation is total: unknown ids and out-of-range quantities degrade
/// to no-ops instead of errors. Each effective change is reported to all
/// subscribers before the mutator returns.
#[derive(Debug, Default)]
pub struct CartStore {
    lines: Vec<CartLine>,
    subscribers: Subscribers,
}

impl CartStore {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item with quantity one.
    ///
    /// Adding an item that already has a line changes nothing; use
    /// [`set_quantity`](Self::set_quantity) to increment.
    pub fn add_item(&mut self, item: &Item) {
        if self.is_in_cart(&item.id) {
            tracing::trace!(item_id = %item.id, "item already in cart");
            return;
        }

        self.lines.push(CartLine::new(item.id.clone(), 1));
        tracing::debug!(item_id = %item.id, lines = self.lines.len(), "item added to cart");
        self.notify(CartEvent::ItemAdded {
            item_id: item.id.clone(),
        });
    }

    /// Remove an item's line, if any.
    pub fn remove_item(&mut self, item_id: &ItemId) {
        let Some(index) = self.position(item_id) else {
            tracing::trace!(%item_id, "remove ignored, item not in cart");
            return;
        };

        let line = self.lines.remove(index);
        tracing::debug!(%item_id, quantity = line.quantity(), "item removed from cart");
        self.notify(CartEvent::ItemRemoved {
            item_id: line.item_id().clone(),
            quantity: line.quantity(),
        });
    }

    /// Set a line's quantity to exactly `quantity`.
    ///
    /// A quantity below one removes the line. Items without a line are
    /// ignored.
    pub fn set_quantity(&mut self, item_id: &ItemId, quantity: i64) {
        if quantity < 1 {
            self.remove_item(item_id);
            return;
        }

        let Some(line) = self.lines.iter_mut().find(|l| l.item_id() == item_id) else {
            tracing::trace!(%item_id, quantity, "quantity ignored, item not in cart");
            return;
        };

        let from = line.quantity();
        if from == quantity {
            return;
        }
        line.set_quantity(quantity);
        tracing::debug!(%item_id, from, to = quantity, "cart quantity updated");
        self.notify(CartEvent::QuantityChanged {
            item_id: item_id.clone(),
            from,
            to: quantity,
        });
    }

    /// Change a line's quantity by `delta`, removing it if the result drops
    /// below one. Items without a line are ignored.
    pub fn adjust_quantity(&mut self, item_id: &ItemId, delta: i64) {
        if let Some(current) = self.quantity_of(item_id) {
            self.set_quantity(item_id, current.saturating_add(delta));
        }
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        if self.lines.is_empty() {
            return;
        }
        let lines = self.lines.len();
        self.lines.clear();
        tracing::debug!(lines, "cart cleared");
        self.notify(CartEvent::Cleared { lines });
    }

    /// Check whether an item has a line.
    pub fn is_in_cart(&self, item_id: &ItemId) -> bool {
        self.position(item_id).is_some()
    }

    /// Quantity of an item, or `None` if it has no line.
    pub fn quantity_of(&self, item_id: &ItemId) -> Option<i64> {
        self.line(item_id).map(CartLine::quantity)
    }

    /// Whether the drawer's decrement button applies (quantity above one).
    pub fn can_decrement(&self, item_id: &ItemId) -> bool {
        self.quantity_of(item_id).is_some_and(|q| q > 1)
    }

    /// Get total item count (sum of quantities).
    pub fn total_item_count(&self) -> i64 {
        self.lines
            .iter()
            .fold(0_i64, |acc, l| acc.saturating_add(l.quantity()))
    }

    /// Total price, with unit prices looked up now.
    pub fn total_price(&self, prices: &impl PriceLookup) -> Money {
        self.pricing(prices).total
    }

    /// Per-line pricing breakdown.
    pub fn pricing(&self, prices: &impl PriceLookup) -> CartPricing {
        CartPricing::calculate(&self.lines, prices)
    }

    /// Lines in the order items were first added.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Get the line for an item.
    pub fn line(&self, item_id: &ItemId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.item_id() == item_id)
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Register an observer for cart changes.
    pub fn subscribe(&mut self, observer: impl FnMut(&CartEvent, &[CartLine]) + 'static) -> SubscriptionId {
        let boxed: CartObserver = Box::new(observer);
        self.subscribers.subscribe(boxed)
    }

    /// Drop an observer. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    /// Number of registered observers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn position(&self, item_id: &ItemId) -> Option<usize> {
        self.lines.iter().position(|l| l.item_id() == item_id)
    }

    fn notify(&mut self, event: CartEvent) {
        self.subscribers.notify(&event, &self.lines);
    }
}
