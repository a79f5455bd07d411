//! Order book snapshot for market data

use super::types::{Price, Quantity};
use serde::{Deserialize, Serialize};

/// Point-in-time depth view of both sides of the book.
///
/// Bids are ordered best (highest) first, asks best (lowest) first, each
/// entry a `(price, total_quantity)` pair. `timestamp` is the book's logical
/// clock at capture time, so two snapshots of the same book are comparable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBookSnapshot {
    /// Symbol of the captured book
    pub symbol: String,
    /// Logical clock value at capture time
    pub timestamp: u64,
    /// Bid depth, best first
    pub bids: Vec<(Price, Quantity)>,
    /// Ask depth, best first
    pub asks: Vec<(Price, Quantity)>,
}

impl OrderBookSnapshot {
    /// Best bid in the captured depth, if any.
    #[must_use]
    pub fn best_bid(&self) -> Option<Price> {
        self.bids.first().map(|&(price, _)| price)
    }

    /// Best ask in the captured depth, if any.
    #[must_use]
    pub fn best_ask(&self) -> Option<Price> {
        self.asks.first().map(|&(price, _)| price)
    }

    /// Total captured bid quantity.
    #[must_use]
    pub fn total_bid_quantity(&self) -> Quantity {
        self.bids.iter().map(|&(_, quantity)| quantity).sum()
    }

    /// Total captured ask quantity.
    #[must_use]
    pub fn total_ask_quantity(&self) -> Quantity {
        self.asks.iter().map(|&(_, quantity)| quantity).sum()
    }
}
