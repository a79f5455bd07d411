//! Trade records and submission results.

use super::types::{OrderId, OrderStatus, Price, Quantity};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// A single execution between an aggressor and a resting order.
///
/// `price` is always the passive (resting) order's price; `timestamp` is the
/// logical stamp of the submission that produced the trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    /// Id of the buy-side order
    pub buy_order_id: OrderId,
    /// Id of the sell-side order
    pub sell_order_id: OrderId,
    /// Execution price in cents (the passive order's price)
    pub price: Price,
    /// Executed quantity
    pub quantity: Quantity,
    /// Logical timestamp of the aggressing submission
    pub timestamp: u64,
}

impl fmt::Display for Trade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TRADE buy:{} sell:{} @ {} x {}",
            self.buy_order_id, self.sell_order_id, self.price, self.quantity
        )
    }
}

/// Outcome of an [`add_order`](crate::OrderBook::add_order) submission.
#[derive(Debug, Clone, Serialize)]
pub struct OrderResult {
    /// Book-assigned id of the submitted order
    pub order_id: OrderId,
    /// Final status as seen by the caller: `Filled`, `Active`,
    /// `PartiallyFilled` (resting limit), or `Cancelled` (market residual)
    pub status: OrderStatus,
    /// Quantity executed during this submission
    pub filled_quantity: Quantity,
    /// Quantity left open (zero unless the order rests or was cancelled)
    pub remaining_quantity: Quantity,
    /// Executions in the order they occurred
    pub trades: Vec<Trade>,
}

impl OrderResult {
    pub(super) fn new(order_id: OrderId) -> Self {
        Self {
            order_id,
            status: OrderStatus::New,
            filled_quantity: 0,
            remaining_quantity: 0,
            trades: Vec::new(),
        }
    }

    /// True when the submission executed its full quantity.
    #[inline]
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.status == OrderStatus::Filled
    }
}

/// Trade listener specification using Arc for shared ownership.
///
/// The listener is invoked synchronously for each trade, after the book
/// state for that trade has been applied and before `add_order` returns.
/// Because `add_order` holds the book exclusively, a listener cannot
/// re-enter the book.
pub type TradeListener = Arc<dyn Fn(&Trade) + Send + Sync>;
