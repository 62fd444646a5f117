//! Cart pricing calculations.

use crate::cart::CartLine;
use crate::ids::ItemId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Source of unit prices for cart totals.
///
/// Prices are looked up every time a total is computed, never cached on the
/// cart lines.
pub trait PriceLookup {
    /// Unit price of an item, or `None` if the item is unknown.
    fn unit_price(&self, id: &ItemId) -> Option<Money>;

    /// Currency that totals are expressed in.
    fn currency(&self) -> Currency;
}

/// Complete pricing breakdown for a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartPricing {
    /// Sum of quantities.
    pub item_count: i64,
    /// Sum of line subtotals.
    pub total: Money,
    /// Per-line breakdown, in cart order.
    pub lines: Vec<LinePricing>,
}

impl CartPricing {
    /// Price every line of a cart.
    ///
    /// Lines the lookup does not know are priced at zero. Arithmetic
    /// saturates instead of overflowing.
    pub fn calculate(lines: &[CartLine], prices: &impl PriceLookup) -> Self {
        let currency = prices.currency();
        let lines: Vec<LinePricing> = lines
            .iter()
            .map(|line| LinePricing::calculate(line, prices))
            .collect();
        let total = Money::saturating_sum(lines.iter().map(|l| &l.subtotal), currency);
        let item_count = lines
            .iter()
            .fold(0_i64, |acc, l| acc.saturating_add(l.quantity));

        Self {
            item_count,
            total,
            lines,
        }
    }

    /// Check if there is nothing to pay for.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Pricing breakdown for a single cart line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinePricing {
    /// Item on this line.
    pub item_id: ItemId,
    /// Unit price at calculation time (zero if unknown).
    pub unit_price: Money,
    /// Quantity.
    pub quantity: i64,
    /// unit_price * quantity.
    pub subtotal: Money,
}

impl LinePricing {
    fn calculate(line: &CartLine, prices: &impl PriceLookup) -> Self {
        let unit_price = prices
            .unit_price(line.item_id())
            .unwrap_or_else(|| Money::zero(prices.currency()));
        Self {
            item_id: line.item_id().clone(),
            unit_price,
            quantity: line.quantity(),
            subtotal: unit_price.saturating_multiply(line.quantity()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct PriceTable(HashMap<&'static str, i64>);

    impl PriceLookup for PriceTable {
        fn unit_price(&self, id: &ItemId) -> Option<Money> {
            self.0
                .get(id.as_str())
                .map(|cents| Money::new(*cents, Currency::USD))
        }

        fn currency(&self) -> Currency {
            Currency::USD
        }
    }

    fn prices() -> PriceTable {
        PriceTable(HashMap::from([("a", 1000), ("b", 2500)]))
    }

    #[test]
    fn test_empty_cart_is_zero() {
        let pricing = CartPricing::calculate(&[], &prices());
        assert!(pricing.is_empty());
        assert_eq!(pricing.item_count, 0);
        assert_eq!(pricing.total, Money::zero(Currency::USD));
    }

    #[test]
    fn test_line_subtotals() {
        let lines = [CartLine::new(ItemId::new("a"), 3), CartLine::new(ItemId::new("b"), 1)];
        let pricing = CartPricing::calculate(&lines, &prices());
        assert_eq!(pricing.item_count, 4);
        assert_eq!(pricing.total.amount_cents, 5500);
        assert_eq!(pricing.lines[0].subtotal.amount_cents, 3000);
        assert_eq!(pricing.lines[1].unit_price.amount_cents, 2500);
    }

    #[test]
    fn test_unknown_item_priced_at_zero() {
        let lines = [CartLine::new(ItemId::new("gone"), 2)];
        let pricing = CartPricing::calculate(&lines, &prices());
        assert_eq!(pricing.item_count, 2);
        assert!(pricing.total.is_zero());
    }

    #[test]
    fn test_total_saturates() {
        let table = PriceTable(HashMap::from([("a", i64::MAX)]));
        let lines = [CartLine::new(ItemId::new("a"), 2)];
        let pricing = CartPricing::calculate(&lines, &table);
        assert_eq!(pricing.total.amount_cents, i64::MAX);
    }
}
