//! Prelude module that re-exports commonly used types and traits.
//!
//! Instead of importing each type individually, you can use:
//!
//! ```rust
//! use lob_engine::prelude::*;
//! ```
//!
//! This imports everything needed for working with the order book.

// Core order book types
pub use crate::orderbook::OrderBook;
pub use crate::orderbook::OrderBookError;

// Order and trade types
pub use crate::orderbook::order::Order;
pub use crate::orderbook::trade::{OrderResult, Trade, TradeListener};

// Snapshot types
pub use crate::orderbook::snapshot::OrderBookSnapshot;

// Value types and enums
pub use crate::orderbook::types::{
    OrderId, OrderStatus, OrderType, Price, Quantity, Side, PRICE_MULTIPLIER,
};

// Construction defaults
pub use crate::orderbook::DEFAULT_POOL_CAPACITY;
