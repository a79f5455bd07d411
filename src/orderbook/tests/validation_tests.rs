//! Tests for boundary validation and pool exhaustion.

#[cfg(test)]
mod tests {
    use crate::orderbook::types::{OrderStatus, OrderType, Side};
    use crate::{OrderBook, OrderBookError};

    #[test]
    fn test_zero_quantity_rejected() {
        let mut book = OrderBook::new("TEST");

        let err = book.add_limit_order(Side::Buy, 10_000, 0).unwrap_err();
        assert_eq!(err, OrderBookError::InvalidQuantity { quantity: 0 });

        let err = book.submit_market_order(Side::Sell, 0).unwrap_err();
        assert_eq!(err, OrderBookError::InvalidQuantity { quantity: 0 });

        assert!(book.is_empty());
    }

    #[test]
    fn test_zero_price_limit_rejected() {
        let mut book = OrderBook::new("TEST");

        let err = book.add_limit_order(Side::Buy, 0, 10).unwrap_err();
        assert_eq!(err, OrderBookError::InvalidPrice { price: 0 });
        assert!(book.is_empty());
    }

    #[test]
    fn test_market_order_price_is_ignored() {
        let mut book = OrderBook::new("TEST");
        book.add_limit_order(Side::Sell, 10_000, 50).unwrap();

        // A market buy carrying a price far below the best ask still fills.
        let result = book.add_order(Side::Buy, OrderType::Market, 1, 50).unwrap();
        assert_eq!(result.status, OrderStatus::Filled);
        assert_eq!(result.trades[0].price, 10_000);
    }

    #[test]
    fn test_rejected_submission_consumes_no_id() {
        let mut book = OrderBook::new("TEST");

        let first = book.add_limit_order(Side::Buy, 9_900, 10).unwrap();
        assert!(book.add_limit_order(Side::Buy, 0, 10).is_err());
        let second = book.add_limit_order(Side::Buy, 9_800, 10).unwrap();

        assert_eq!(second.order_id, first.order_id + 1);
    }

    #[test]
    fn test_tick_size_validation() {
        let mut book = OrderBook::new("TEST");
        book.set_tick_size(100);
        assert_eq!(book.tick_size(), Some(100));

        let err = book.add_limit_order(Side::Buy, 10_050, 10).unwrap_err();
        assert_eq!(
            err,
            OrderBookError::InvalidTickSize {
                price: 10_050,
                tick_size: 100
            }
        );

        assert!(book.add_limit_order(Side::Buy, 10_000, 10).is_ok());

        // Market orders carry no price and bypass the tick check.
        assert!(book.submit_market_order(Side::Sell, 5).is_ok());
    }

    #[test]
    fn test_lot_size_validation() {
        let mut book = OrderBook::new("TEST");
        book.set_lot_size(10);
        assert_eq!(book.lot_size(), Some(10));

        let err = book.add_limit_order(Side::Sell, 10_000, 25).unwrap_err();
        assert_eq!(
            err,
            OrderBookError::InvalidLotSize {
                quantity: 25,
                lot_size: 10
            }
        );

        assert!(book.add_limit_order(Side::Sell, 10_000, 30).is_ok());
    }

    #[test]
    fn test_pool_exhaustion_preserves_state() {
        let mut book = OrderBook::with_capacity("TEST", 2);

        book.add_limit_order(Side::Buy, 9_900, 10).unwrap();
        book.add_limit_order(Side::Buy, 9_800, 10).unwrap();

        let err = book.add_limit_order(Side::Buy, 9_700, 10).unwrap_err();
        assert_eq!(err, OrderBookError::PoolExhausted { capacity: 2 });

        assert_eq!(book.total_orders(), 2);
        assert_eq!(book.best_bid(), Some(9_900));
        assert_eq!(book.pool_available(), 0);
    }

    #[test]
    fn test_full_pool_rejects_even_crossing_orders() {
        let mut book = OrderBook::with_capacity("TEST", 2);

        book.add_limit_order(Side::Buy, 10_000, 10).unwrap();
        book.add_limit_order(Side::Buy, 9_900, 10).unwrap();

        // The aggressor needs a transient slot before matching can free any.
        let err = book.add_limit_order(Side::Sell, 9_900, 20).unwrap_err();
        assert_eq!(err, OrderBookError::PoolExhausted { capacity: 2 });
        assert_eq!(book.total_orders(), 2);
    }

    #[test]
    fn test_capacity_frees_after_fills_and_cancels() {
        let mut book = OrderBook::with_capacity("TEST", 2);

        let bid = book.add_limit_order(Side::Buy, 10_000, 10).unwrap();
        book.add_limit_order(Side::Sell, 10_000, 10).unwrap();
        assert!(book.is_empty());

        // Both slots are free again.
        book.add_limit_order(Side::Buy, 9_900, 10).unwrap();
        let second = book.add_limit_order(Side::Buy, 9_800, 10).unwrap();
        assert!(book.cancel_order(second.order_id));
        assert_eq!(book.pool_available(), 1);
        assert!(book.get_order(bid.order_id).is_none());
    }
}
