//! Core value types shared across the order book.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed-point price: 1 unit = 0.01 of the display currency (1 cent).
/// Keeping prices integral avoids floating-point arithmetic on the hot path.
pub type Price = u64;

/// Quantity expressed as a count of units.
pub type Quantity = u64;

/// Monotonically increasing order identifier assigned by the book at
/// submission time. Zero is reserved as "unset".
pub type OrderId = u64;

/// Number of price units per whole display-currency unit (2 decimal places).
pub const PRICE_MULTIPLIER: Price = 100;

/// Side of an order or a price level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Bid side
    Buy,
    /// Ask side
    Sell,
}

impl Side {
    /// Returns the opposite side.
    #[inline]
    #[must_use]
    pub fn opposite(&self) -> Side {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "BUY"),
            Side::Sell => write!(f, "SELL"),
        }
    }
}

/// Order type accepted by the matching engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderType {
    /// Executes up to a limit price; any residual rests in the book.
    Limit,
    /// Executes against available liquidity; any residual is cancelled.
    Market,
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderType::Limit => write!(f, "LIMIT"),
            OrderType::Market => write!(f, "MARKET"),
        }
    }
}

/// Lifecycle state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Allocated but not yet processed.
    New,
    /// Resting in the book with no fills.
    Active,
    /// Resting in the book with at least one fill.
    PartiallyFilled,
    /// Completely executed.
    Filled,
    /// Removed without complete execution.
    Cancelled,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::New => write!(f, "NEW"),
            OrderStatus::Active => write!(f, "ACTIVE"),
            OrderStatus::PartiallyFilled => write!(f, "PARTIALLY_FILLED"),
            OrderStatus::Filled => write!(f, "FILLED"),
            OrderStatus::Cancelled => write!(f, "CANCELLED"),
        }
    }
}
