//! # Single-Symbol Limit Order Book with Matching Engine
//!
//! A limit order book implementation for one instrument, with continuous
//! price-time priority matching and allocation-free order storage. This
//! crate provides the data structure and algorithm suite at the heart of an
//! electronic trading venue: resting buy and sell limit orders, a matching
//! engine that resolves fills on every submission, and a fixed-capacity
//! order pool behind every mutating operation.
//!
//! ## Key Features
//!
//! - **Price-Time Priority Matching**: Incoming orders cross against the
//!   opposite side best-price-first; within a price level, the oldest
//!   resting order executes first. Every trade prints at the passive
//!   (resting) order's price, conferring price improvement on aggressive
//!   limit orders.
//!
//! - **Allocation-Free Hot Path**: All order records live in a
//!   fixed-capacity pool with an O(1) free list. Submission, cancellation,
//!   and in-place modification allocate nothing beyond first-use price
//!   levels and the result's trade vector.
//!
//! - **Intrusive FIFO Levels**: Each price level is a doubly-linked queue
//!   threaded through the order records themselves, so mid-queue removal
//!   (cancellation) is O(1) given the order's handle.
//!
//! - **Deterministic by Construction**: A book-scoped logical clock totally
//!   orders submissions; identical input sequences produce identical trade
//!   sequences. The engine is strictly single-threaded — every mutating
//!   method takes `&mut self`, and concurrency is the embedder's concern.
//!
//! - **Market-Data Queries**: Best bid/ask, spread, per-price volume and
//!   order counts, depth snapshots, and lifetime trade statistics, all O(1)
//!   or O(depth).
//!
//! ## Design Goals
//!
//! 1. **Correctness**: Book invariants (uncrossed sides, eager level
//!    removal, exact aggregate tracking) hold after every public call.
//! 2. **Performance**: No heap allocation per order, O(log n) level lookup,
//!    O(1) queue surgery.
//! 3. **Determinism**: Same submissions in, same trades out; logical
//!    timestamps decide time priority, never wall clocks.
//!
//! ## Example
//!
//! ```
//! use lob_engine::prelude::*;
//!
//! let mut book = OrderBook::with_capacity("BTC/USD", 10_000);
//!
//! // Rest some liquidity.
//! book.add_limit_order(Side::Sell, 10_100, 50).unwrap();
//! book.add_limit_order(Side::Buy, 10_000, 50).unwrap();
//! assert_eq!(book.best_ask(), Some(10_100));
//! assert_eq!(book.best_bid(), Some(10_000));
//!
//! // An aggressive buy crosses the spread and fills at the passive price.
//! let result = book.add_limit_order(Side::Buy, 10_100, 30).unwrap();
//! assert_eq!(result.status, OrderStatus::Filled);
//! assert_eq!(result.trades[0].price, 10_100);
//! assert_eq!(book.volume_at_price(Side::Sell, 10_100), 20);
//! ```

pub mod orderbook;

pub mod prelude;

pub use orderbook::{
    Order, OrderBook, OrderBookError, OrderBookSnapshot, OrderId, OrderResult, OrderStatus,
    OrderType, Price, Quantity, Side, Trade, TradeListener, DEFAULT_POOL_CAPACITY,
    PRICE_MULTIPLIER,
};
