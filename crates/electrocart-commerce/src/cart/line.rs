//! Cart line type.

use crate::ids::ItemId;
use crate::money::Money;
use serde::Serialize;

/// One distinct item in the cart with its quantity.
///
/// Lines are only created and changed by [`CartStore`](crate::cart::CartStore),
/// which keeps the quantity at one or more.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CartLine {
    item_id: ItemId,
    quantity: i64,
}

impl CartLine {
    pub(crate) fn new(item_id: ItemId, quantity: i64) -> Self {
        debug_assert!(quantity >= 1);
        Self { item_id, quantity }
    }

    /// Item on this line.
    pub fn item_id(&self) -> &ItemId {
        &self.item_id
    }

    /// Quantity, always at least one.
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Line subtotal for a given unit price.
    pub fn subtotal(&self, unit_price: Money) -> Money {
        unit_price.saturating_multiply(self.quantity)
    }

    pub(crate) fn set_quantity(&mut self, quantity: i64) {
        debug_assert!(quantity >= 1);
        self.quantity = quantity;
    }
}
