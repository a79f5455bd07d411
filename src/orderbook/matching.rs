//! Contains the core matching engine logic for the order book.
//!
//! An incoming order is crossed against the opposing side best-price-first;
//! within a level, the resting FIFO is consumed from its head, so matching
//! follows strict price-time priority. Every trade prints at the passive
//! (resting) order's price.

use super::book::OrderBook;
use super::pool::OrderHandle;
use super::price_level::PriceLevel;
use super::trade::{OrderResult, Trade};
use super::types::{OrderStatus, OrderType, Price, Quantity, Side};
use tracing::trace;

impl OrderBook {
    /// Cross `aggressor` against the opposite side, accumulating trades
    /// into `result`.
    pub(super) fn match_order(&mut self, aggressor: OrderHandle, result: &mut OrderResult) {
        match self.pool.get(aggressor).side {
            Side::Buy => self.match_against_asks(aggressor, result),
            Side::Sell => self.match_against_bids(aggressor, result),
        }
    }

    /// Buy aggressor: consume asks from the lowest price upward.
    fn match_against_asks(&mut self, aggressor: OrderHandle, result: &mut OrderResult) {
        loop {
            if self.pool.get(aggressor).remaining() == 0 {
                break;
            }
            // Best ask is the smallest key. Re-fetched each round because
            // the previous round may have erased the level.
            let level_price = match self.asks.keys().next() {
                Some(price) => *price,
                None => break,
            };
            {
                let order = self.pool.get(aggressor);
                // Limit cutoff: stop once the ask is worse than our limit.
                if order.order_type == OrderType::Limit && level_price > order.price {
                    break;
                }
            }

            self.consume_level(Side::Sell, level_price, aggressor, result);

            if self
                .asks
                .get(&level_price)
                .is_some_and(PriceLevel::is_empty)
            {
                self.asks.remove(&level_price);
            }
        }
    }

    /// Sell aggressor: consume bids from the highest price downward.
    fn match_against_bids(&mut self, aggressor: OrderHandle, result: &mut OrderResult) {
        loop {
            if self.pool.get(aggressor).remaining() == 0 {
                break;
            }
            // Best bid is the largest key.
            let level_price = match self.bids.keys().next_back() {
                Some(price) => *price,
                None => break,
            };
            {
                let order = self.pool.get(aggressor);
                // Limit cutoff: stop once the bid is worse than our limit.
                if order.order_type == OrderType::Limit && level_price < order.price {
                    break;
                }
            }

            self.consume_level(Side::Buy, level_price, aggressor, result);

            if self
                .bids
                .get(&level_price)
                .is_some_and(PriceLevel::is_empty)
            {
                self.bids.remove(&level_price);
            }
        }
    }

    /// Walk one opposing level's FIFO from its head, trading until either
    /// the level empties or the aggressor is exhausted. Passive orders that
    /// fill completely are unlinked, de-indexed, and returned to the pool.
    fn consume_level(
        &mut self,
        passive_side: Side,
        level_price: Price,
        aggressor: OrderHandle,
        result: &mut OrderResult,
    ) {
        loop {
            let passive = match self
                .levels(passive_side)
                .get(&level_price)
                .and_then(PriceLevel::front)
            {
                Some(handle) => handle,
                None => break,
            };

            let trade_qty = self
                .pool
                .get(aggressor)
                .remaining()
                .min(self.pool.get(passive).remaining());
            self.execute_trade(aggressor, passive, trade_qty, result);

            if self.pool.get(passive).is_filled() {
                let passive_id = self.pool.get(passive).id;
                let OrderBook {
                    ref mut bids,
                    ref mut asks,
                    ref mut pool,
                    ..
                } = *self;
                let levels = match passive_side {
                    Side::Buy => bids,
                    Side::Sell => asks,
                };
                if let Some(level) = levels.get_mut(&level_price) {
                    level.unlink(passive, pool);
                }
                self.orders.remove(&passive_id);
                self.pool.get_mut(passive).status = OrderStatus::Filled;
                self.pool.deallocate(passive);
            }

            if self.pool.get(aggressor).remaining() == 0 {
                break;
            }
        }
    }

    /// Execute a single trade of `quantity` between `aggressor` and
    /// `passive`, updating both orders, the passive level's running total,
    /// and the book statistics, then notify the listener.
    fn execute_trade(
        &mut self,
        aggressor: OrderHandle,
        passive: OrderHandle,
        quantity: Quantity,
        result: &mut OrderResult,
    ) {
        self.pool.get_mut(aggressor).filled_quantity += quantity;

        let (passive_id, passive_price, passive_side) = {
            let order = self.pool.get_mut(passive);
            order.filled_quantity += quantity;
            if !order.is_filled() {
                order.status = OrderStatus::PartiallyFilled;
            }
            (order.id, order.price, order.side)
        };

        if let Some(level) = self.levels_mut(passive_side).get_mut(&passive_price) {
            level.reduce_total(quantity);
        }

        let aggressor_order = self.pool.get(aggressor);
        let (buy_order_id, sell_order_id) = match aggressor_order.side {
            Side::Buy => (aggressor_order.id, passive_id),
            Side::Sell => (passive_id, aggressor_order.id),
        };

        let trade = Trade {
            buy_order_id,
            sell_order_id,
            price: passive_price,
            quantity,
            timestamp: self.timestamp_counter,
        };

        self.trade_count += 1;
        self.total_volume += quantity;
        self.last_trade_price = Some(passive_price);
        result.trades.push(trade);

        trace!(
            "Trade on {}: buy {} sell {} @ {} x {}",
            self.symbol, buy_order_id, sell_order_id, passive_price, quantity
        );

        if let Some(listener) = self.trade_listener.as_ref() {
            listener(&trade);
        }
    }

    /// Insert a residual limit order at the tail of its own side's level,
    /// creating the level on first use.
    pub(super) fn insert_into_book(&mut self, handle: OrderHandle) {
        let (side, price) = {
            let order = self.pool.get(handle);
            (order.side, order.price)
        };
        let OrderBook {
            ref mut bids,
            ref mut asks,
            ref mut pool,
            ..
        } = *self;
        let levels = match side {
            Side::Buy => bids,
            Side::Sell => asks,
        };
        levels
            .entry(price)
            .or_insert_with(|| PriceLevel::new(price))
            .push_back(handle, pool);
    }
}
