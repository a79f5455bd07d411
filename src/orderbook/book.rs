//! Core OrderBook implementation for managing price levels and orders

use super::order::Order;
use super::pool::{OrderHandle, OrderPool};
use super::price_level::PriceLevel;
use super::snapshot::OrderBookSnapshot;
use super::trade::TradeListener;
use super::types::{OrderId, Price, Quantity, Side};
use std::collections::{BTreeMap, HashMap};
use tracing::trace;

/// Default pool capacity when none is specified at construction.
pub const DEFAULT_POOL_CAPACITY: usize = 1_000_000;

/// A single-symbol limit order book with an integrated matching engine.
///
/// The book maintains resting buy and sell limit orders in per-price FIFO
/// queues and applies continuous price-time priority matching on each
/// submission. All order storage lives in a fixed-capacity pool, so the
/// submission, cancellation, and modification paths perform no per-order
/// heap allocation.
///
/// The engine is strictly single-threaded: every mutating method takes
/// `&mut self`, and the embedder serializes calls (e.g. a single engine
/// thread draining a submission queue).
pub struct OrderBook {
    /// The symbol or identifier for this order book
    pub(super) symbol: String,

    /// Bid side price levels (buy orders), keyed by price.
    /// The best bid is the maximum key, reached via `next_back()`.
    pub(super) bids: BTreeMap<Price, PriceLevel>,

    /// Ask side price levels (sell orders), keyed by price.
    /// The best ask is the minimum key, reached via `next()`.
    pub(super) asks: BTreeMap<Price, PriceLevel>,

    /// Resting orders only: id to pool handle. Fully-filled and cancelled
    /// orders are absent.
    pub(super) orders: HashMap<OrderId, OrderHandle>,

    /// Fixed-capacity order storage.
    pub(super) pool: OrderPool,

    /// Last assigned order id. Ids are monotonic within this book.
    pub(super) next_id: OrderId,

    /// Logical clock stamping each submission; decides time priority.
    pub(super) timestamp_counter: u64,

    /// Number of trades executed over the book's lifetime.
    pub(super) trade_count: u64,

    /// Total quantity executed over the book's lifetime.
    pub(super) total_volume: u64,

    /// Price of the most recent execution.
    pub(super) last_trade_price: Option<Price>,

    /// Listens to trades as they execute during a submission.
    pub(super) trade_listener: Option<TradeListener>,

    /// Minimum price increment for limit orders. When set, prices must be
    /// exact multiples of this value. `None` disables validation (default).
    pub(super) tick_size: Option<Price>,

    /// Minimum quantity increment for orders. When set, quantities must be
    /// exact multiples of this value. `None` disables validation (default).
    pub(super) lot_size: Option<Quantity>,
}

impl OrderBook {
    /// Create a new order book for the given symbol with the default pool
    /// capacity.
    pub fn new(symbol: &str) -> Self {
        Self::with_capacity(symbol, DEFAULT_POOL_CAPACITY)
    }

    /// Create a new order book with an explicit pool capacity.
    ///
    /// `capacity` bounds the number of simultaneously live orders (resting
    /// orders plus the transient aggressor during a submission). The pool
    /// never grows after construction.
    pub fn with_capacity(symbol: &str, capacity: usize) -> Self {
        Self {
            symbol: symbol.to_string(),
            bids: BTreeMap::new(),
            asks: BTreeMap::new(),
            orders: HashMap::with_capacity(capacity / 2),
            pool: OrderPool::new(capacity),
            next_id: 0,
            timestamp_counter: 0,
            trade_count: 0,
            total_volume: 0,
            last_trade_price: None,
            trade_listener: None,
            tick_size: None,
            lot_size: None,
        }
    }

    /// Create a new order book for the given symbol with a trade listener.
    pub fn with_trade_listener(symbol: &str, trade_listener: TradeListener) -> Self {
        let mut book = Self::new(symbol);
        book.trade_listener = Some(trade_listener);
        book
    }

    /// Set a trade listener for this order book.
    ///
    /// The listener is invoked synchronously for each trade produced by a
    /// submission, after that trade's book updates have been applied.
    pub fn set_trade_listener(&mut self, trade_listener: TradeListener) {
        self.trade_listener = Some(trade_listener);
    }

    /// Remove the trade listener from this order book.
    pub fn remove_trade_listener(&mut self) {
        self.trade_listener = None;
    }

    /// Set the minimum price increment for limit orders.
    ///
    /// When set, limit prices must be exact multiples of this value;
    /// misaligned prices are rejected with
    /// [`OrderBookError::InvalidTickSize`](super::OrderBookError::InvalidTickSize).
    pub fn set_tick_size(&mut self, tick_size: Price) {
        self.tick_size = Some(tick_size);
        trace!("Order book {}: tick size set to {}", self.symbol, tick_size);
    }

    /// Returns the configured tick size, if any.
    #[must_use]
    #[inline]
    pub fn tick_size(&self) -> Option<Price> {
        self.tick_size
    }

    /// Set the minimum quantity increment for orders.
    ///
    /// When set, quantities must be exact multiples of this value;
    /// misaligned quantities are rejected with
    /// [`OrderBookError::InvalidLotSize`](super::OrderBookError::InvalidLotSize).
    pub fn set_lot_size(&mut self, lot_size: Quantity) {
        self.lot_size = Some(lot_size);
        trace!("Order book {}: lot size set to {}", self.symbol, lot_size);
    }

    /// Returns the configured lot size, if any.
    #[must_use]
    #[inline]
    pub fn lot_size(&self) -> Option<Quantity> {
        self.lot_size
    }

    /// Get the symbol of this order book
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    // --- Market data queries ---

    /// Best (highest) bid price, or `None` when the bid side is empty.
    #[must_use]
    #[inline]
    pub fn best_bid(&self) -> Option<Price> {
        self.bids.keys().next_back().copied()
    }

    /// Best (lowest) ask price, or `None` when the ask side is empty.
    #[must_use]
    #[inline]
    pub fn best_ask(&self) -> Option<Price> {
        self.asks.keys().next().copied()
    }

    /// `best_ask − best_bid`, or `None` when either side is empty.
    #[must_use]
    pub fn spread(&self) -> Option<Price> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some(ask - bid),
            _ => None,
        }
    }

    /// Total remaining quantity resting at `price` on `side`, zero when the
    /// level does not exist.
    #[must_use]
    pub fn volume_at_price(&self, side: Side, price: Price) -> Quantity {
        self.levels(side)
            .get(&price)
            .map_or(0, PriceLevel::total_quantity)
    }

    /// Number of orders resting at `price` on `side`, zero when the level
    /// does not exist.
    #[must_use]
    pub fn order_count_at_price(&self, side: Side, price: Price) -> u32 {
        self.levels(side)
            .get(&price)
            .map_or(0, PriceLevel::order_count)
    }

    /// Up to `levels` `(price, total_quantity)` pairs from the best bid
    /// downward.
    #[must_use]
    pub fn bid_depth(&self, levels: usize) -> Vec<(Price, Quantity)> {
        self.bids
            .iter()
            .rev()
            .take(levels)
            .map(|(price, level)| (*price, level.total_quantity()))
            .collect()
    }

    /// Up to `levels` `(price, total_quantity)` pairs from the best ask
    /// upward.
    #[must_use]
    pub fn ask_depth(&self, levels: usize) -> Vec<(Price, Quantity)> {
        self.asks
            .iter()
            .take(levels)
            .map(|(price, level)| (*price, level.total_quantity()))
            .collect()
    }

    /// Number of resting orders across both sides.
    #[must_use]
    #[inline]
    pub fn total_orders(&self) -> usize {
        self.orders.len()
    }

    /// Number of non-empty bid price levels.
    #[must_use]
    #[inline]
    pub fn bid_levels(&self) -> usize {
        self.bids.len()
    }

    /// Number of non-empty ask price levels.
    #[must_use]
    #[inline]
    pub fn ask_levels(&self) -> usize {
        self.asks.len()
    }

    /// True when no orders rest in the book.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Number of trades executed since construction.
    #[must_use]
    #[inline]
    pub fn total_trades(&self) -> u64 {
        self.trade_count
    }

    /// Total quantity executed since construction.
    #[must_use]
    #[inline]
    pub fn total_volume(&self) -> u64 {
        self.total_volume
    }

    /// Price of the most recent execution, or `None` before the first trade.
    #[must_use]
    #[inline]
    pub fn last_trade_price(&self) -> Option<Price> {
        self.last_trade_price
    }

    /// Look up a resting order by id.
    ///
    /// Returns `None` for ids that never rested or have already left the
    /// book (filled, cancelled, or replaced).
    #[must_use]
    pub fn get_order(&self, order_id: OrderId) -> Option<&Order> {
        self.orders
            .get(&order_id)
            .map(|&handle| self.pool.get(handle))
    }

    /// Configured capacity of the order pool.
    #[must_use]
    #[inline]
    pub fn pool_capacity(&self) -> usize {
        self.pool.capacity()
    }

    /// Remaining free slots in the order pool.
    #[must_use]
    #[inline]
    pub fn pool_available(&self) -> usize {
        self.pool.available()
    }

    /// Depth snapshot of both sides, best-first, up to `depth` levels each.
    #[must_use]
    pub fn snapshot(&self, depth: usize) -> OrderBookSnapshot {
        OrderBookSnapshot {
            symbol: self.symbol.clone(),
            timestamp: self.timestamp_counter,
            bids: self.bid_depth(depth),
            asks: self.ask_depth(depth),
        }
    }

    // --- Internal helpers shared by matching and operations ---

    #[inline]
    pub(super) fn levels(&self, side: Side) -> &BTreeMap<Price, PriceLevel> {
        match side {
            Side::Buy => &self.bids,
            Side::Sell => &self.asks,
        }
    }

    #[inline]
    pub(super) fn levels_mut(&mut self, side: Side) -> &mut BTreeMap<Price, PriceLevel> {
        match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        }
    }

    #[inline]
    pub(super) fn next_order_id(&mut self) -> OrderId {
        self.next_id += 1;
        self.next_id
    }

    #[inline]
    pub(super) fn next_timestamp(&mut self) -> u64 {
        self.timestamp_counter += 1;
        self.timestamp_counter
    }
}

impl std::fmt::Debug for OrderBook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderBook")
            .field("symbol", &self.symbol)
            .field("bid_levels", &self.bids.len())
            .field("ask_levels", &self.asks.len())
            .field("total_orders", &self.orders.len())
            .field("trade_count", &self.trade_count)
            .field("total_volume", &self.total_volume)
            .finish_non_exhaustive()
    }
}
