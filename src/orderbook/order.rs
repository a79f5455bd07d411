//! The pooled order record.
//!
//! Orders are stored in [`OrderPool`](super::pool::OrderPool) slots and
//! linked into their price level's FIFO queue through the intrusive
//! `prev`/`next` handles below. No per-order node is ever allocated.

use super::pool::OrderHandle;
use super::types::{OrderId, OrderStatus, OrderType, Price, Quantity, Side};

/// A single order as stored in the pool.
///
/// The `prev`/`next` siblings are managed exclusively by
/// [`PriceLevel`](super::price_level::PriceLevel); everything else is
/// written by the book during submission and matching.
#[derive(Debug, Clone)]
pub struct Order {
    /// Book-assigned identifier, monotonic across submissions.
    pub id: OrderId,
    /// Buy or Sell.
    pub side: Side,
    /// Limit or Market.
    pub order_type: OrderType,
    /// Limit price in cents. Ignored for market orders.
    pub price: Price,
    /// Original submitted quantity.
    pub quantity: Quantity,
    /// Cumulative executed quantity. Never exceeds `quantity`.
    pub filled_quantity: Quantity,
    /// Current lifecycle state.
    pub status: OrderStatus,
    /// Logical submission stamp used for price-time priority.
    pub timestamp: u64,

    // Intrusive FIFO siblings, managed by the containing price level.
    pub(super) prev: Option<OrderHandle>,
    pub(super) next: Option<OrderHandle>,
}

impl Order {
    /// Quantity still open for execution.
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> Quantity {
        self.quantity - self.filled_quantity
    }

    /// True once the order has no open quantity.
    #[inline]
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.filled_quantity >= self.quantity
    }

    /// Restores the slot to its default-initialized state.
    pub(super) fn reset(&mut self) {
        *self = Order::default();
    }
}

impl Default for Order {
    fn default() -> Self {
        Self {
            id: 0,
            side: Side::Buy,
            order_type: OrderType::Limit,
            price: 0,
            quantity: 0,
            filled_quantity: 0,
            status: OrderStatus::New,
            timestamp: 0,
            prev: None,
            next: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remaining_and_is_filled() {
        let mut order = Order {
            quantity: 100,
            ..Order::default()
        };
        assert_eq!(order.remaining(), 100);
        assert!(!order.is_filled());

        order.filled_quantity = 40;
        assert_eq!(order.remaining(), 60);

        order.filled_quantity = 100;
        assert_eq!(order.remaining(), 0);
        assert!(order.is_filled());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut order = Order {
            id: 42,
            side: Side::Sell,
            order_type: OrderType::Market,
            price: 10_000,
            quantity: 5,
            filled_quantity: 5,
            status: OrderStatus::Filled,
            timestamp: 9,
            prev: None,
            next: None,
        };
        order.reset();
        assert_eq!(order.id, 0);
        assert_eq!(order.side, Side::Buy);
        assert_eq!(order.status, OrderStatus::New);
        assert_eq!(order.quantity, 0);
        assert_eq!(order.timestamp, 0);
    }
}
