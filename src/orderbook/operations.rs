//! Order book operations like adding, modifying and canceling orders

use super::book::OrderBook;
use super::error::OrderBookError;
use super::trade::OrderResult;
use super::types::{OrderId, OrderStatus, OrderType, Price, Quantity, Side};
use tracing::trace;

impl OrderBook {
    /// Submit an order to the book.
    ///
    /// The order is first crossed against the opposite side. A limit order
    /// with remaining quantity then rests on its own side; a market order
    /// never rests — any residual is reported as `Cancelled`.
    ///
    /// `price` is the limit price in cents and is ignored for market
    /// orders (pass 0 by convention).
    ///
    /// # Errors
    /// Returns [`OrderBookError::InvalidQuantity`] for zero quantity,
    /// [`OrderBookError::InvalidPrice`] for a zero-price limit order,
    /// [`OrderBookError::InvalidTickSize`] / [`OrderBookError::InvalidLotSize`]
    /// when the corresponding book option is set and violated, and
    /// [`OrderBookError::PoolExhausted`] when the pool is at capacity.
    /// On error the book state is unchanged.
    pub fn add_order(
        &mut self,
        side: Side,
        order_type: OrderType,
        price: Price,
        quantity: Quantity,
    ) -> Result<OrderResult, OrderBookError> {
        self.validate_order(order_type, price, quantity)?;

        let handle = match self.pool.allocate() {
            Some(handle) => handle,
            None => {
                return Err(OrderBookError::PoolExhausted {
                    capacity: self.pool.capacity(),
                });
            }
        };

        let id = self.next_order_id();
        let timestamp = self.next_timestamp();
        {
            let order = self.pool.get_mut(handle);
            order.id = id;
            order.side = side;
            order.order_type = order_type;
            order.price = price;
            order.quantity = quantity;
            order.filled_quantity = 0;
            order.status = OrderStatus::Active;
            order.timestamp = timestamp;
        }
        trace!(
            "Adding order {} {} {} {} {}",
            id, side, order_type, price, quantity
        );

        let mut result = OrderResult::new(id);

        // Attempt to match against the opposite side.
        self.match_order(handle, &mut result);

        let order = self.pool.get(handle);
        if order.is_filled() {
            // Fully executed during submission: the slot goes straight back.
            result.status = OrderStatus::Filled;
            result.filled_quantity = order.filled_quantity;
            result.remaining_quantity = 0;
            self.pool.get_mut(handle).status = OrderStatus::Filled;
            self.pool.deallocate(handle);
        } else if order_type == OrderType::Limit {
            result.filled_quantity = order.filled_quantity;
            result.remaining_quantity = order.remaining();
            if order.filled_quantity > 0 {
                self.pool.get_mut(handle).status = OrderStatus::PartiallyFilled;
            }
            result.status = self.pool.get(handle).status;
            self.insert_into_book(handle);
            self.orders.insert(id, handle);
        } else {
            // Unfilled market residual: never rests.
            result.status = OrderStatus::Cancelled;
            result.filled_quantity = order.filled_quantity;
            result.remaining_quantity = order.remaining();
            self.pool.get_mut(handle).status = OrderStatus::Cancelled;
            self.pool.deallocate(handle);
        }

        Ok(result)
    }

    /// Submit a limit order. Convenience wrapper over [`Self::add_order`].
    ///
    /// # Errors
    /// Propagates every [`Self::add_order`] validation error.
    pub fn add_limit_order(
        &mut self,
        side: Side,
        price: Price,
        quantity: Quantity,
    ) -> Result<OrderResult, OrderBookError> {
        self.add_order(side, OrderType::Limit, price, quantity)
    }

    /// Submit a market order. Convenience wrapper over [`Self::add_order`].
    ///
    /// # Errors
    /// Propagates every [`Self::add_order`] validation error.
    pub fn submit_market_order(
        &mut self,
        side: Side,
        quantity: Quantity,
    ) -> Result<OrderResult, OrderBookError> {
        self.add_order(side, OrderType::Market, 0, quantity)
    }

    /// Cancel a resting order by id.
    ///
    /// Returns `false` when the id is not resting (unknown, already filled,
    /// already cancelled, or replaced). Otherwise unlinks the order from its
    /// level, erases the level if it empties, removes the id from the index,
    /// returns the slot to the pool, and returns `true`.
    pub fn cancel_order(&mut self, order_id: OrderId) -> bool {
        let handle = match self.orders.remove(&order_id) {
            Some(handle) => handle,
            None => return false,
        };

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
        if let Some(level) = levels.get_mut(&price) {
            level.unlink(handle, pool);
            if level.is_empty() {
                levels.remove(&price);
            }
        }

        self.pool.get_mut(handle).status = OrderStatus::Cancelled;
        self.pool.deallocate(handle);
        trace!("Cancelled order {}", order_id);
        true
    }

    /// Change a resting order's quantity.
    ///
    /// Returns `false` when the id is not resting. A decrease that keeps
    /// the order live is applied in place and **preserves time priority**.
    /// An increase cancels the order and re-submits a fresh limit order at
    /// the same side and price: time priority is lost and the replacement
    /// gets a new, internal id. `new_quantity` at or below the filled
    /// quantity behaves as a cancel. Equal quantity is a no-op.
    pub fn modify_order(&mut self, order_id: OrderId, new_quantity: Quantity) -> bool {
        let handle = match self.orders.get(&order_id) {
            Some(&handle) => handle,
            None => return false,
        };

        let (side, price, quantity, filled_quantity) = {
            let order = self.pool.get(handle);
            (order.side, order.price, order.quantity, order.filled_quantity)
        };

        if new_quantity <= filled_quantity {
            // Nothing would remain open: behaves as a cancel.
            return self.cancel_order(order_id);
        }

        if new_quantity < quantity {
            let reduction = quantity - new_quantity;
            self.pool.get_mut(handle).quantity = new_quantity;
            if let Some(level) = self.levels_mut(side).get_mut(&price) {
                level.reduce_total(reduction);
            }
            trace!(
                "Modified order {}: quantity {} -> {}",
                order_id, quantity, new_quantity
            );
            return true;
        }

        if new_quantity > quantity {
            trace!(
                "Modified order {}: quantity {} -> {} (replaced, priority lost)",
                order_id, quantity, new_quantity
            );
            self.cancel_order(order_id);
            // The slot freed by the cancel guarantees the re-submission
            // cannot exhaust the pool, and the book is uncrossed, so the
            // replacement rests at the same price.
            let _ = self.add_order(side, OrderType::Limit, price, new_quantity);
            return true;
        }

        // Same quantity: no-op.
        true
    }

    fn validate_order(
        &self,
        order_type: OrderType,
        price: Price,
        quantity: Quantity,
    ) -> Result<(), OrderBookError> {
        if quantity == 0 {
            return Err(OrderBookError::InvalidQuantity { quantity });
        }
        if order_type == OrderType::Limit {
            if price == 0 {
                return Err(OrderBookError::InvalidPrice { price });
            }
            if let Some(tick_size) = self.tick_size {
                if tick_size > 0 && price % tick_size != 0 {
                    return Err(OrderBookError::InvalidTickSize { price, tick_size });
                }
            }
        }
        if let Some(lot_size) = self.lot_size {
            if lot_size > 0 && quantity % lot_size != 0 {
                return Err(OrderBookError::InvalidLotSize { quantity, lot_size });
            }
        }
        Ok(())
    }
}
