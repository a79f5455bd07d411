//! Shared helpers for order book tests.

use crate::orderbook::book::OrderBook;
use crate::orderbook::types::{OrderStatus, Side};

/// Walks the whole book and asserts every structural invariant:
/// chain/aggregate consistency per level, index/level agreement, pool
/// occupancy, and uncrossed sides.
pub(crate) fn assert_book_invariants(book: &OrderBook) {
    let mut chained_orders = 0usize;

    for (side, levels) in [(Side::Buy, &book.bids), (Side::Sell, &book.asks)] {
        for (&price, level) in levels {
            // Empty levels must be erased eagerly.
            assert!(!level.is_empty(), "empty level left in map at {price}");
            assert_eq!(level.price(), price);

            let mut count = 0u32;
            let mut total = 0u64;
            let mut prev = None;
            let mut cursor = level.front();
            while let Some(handle) = cursor {
                let order = book.pool.get(handle);
                assert_eq!(order.price, price, "order price differs from level");
                assert_eq!(order.side, side, "order side differs from level side");
                assert!(order.remaining() > 0, "resting order with no remaining");
                assert!(
                    matches!(
                        order.status,
                        OrderStatus::Active | OrderStatus::PartiallyFilled
                    ),
                    "resting order with status {:?}",
                    order.status
                );
                assert_eq!(order.prev, prev, "broken back-link at {price}");
                assert_eq!(
                    book.orders.get(&order.id),
                    Some(&handle),
                    "resting order {} missing from index",
                    order.id
                );

                total += order.remaining();
                count += 1;
                assert!(count <= level.order_count(), "cycle in chain at {price}");
                prev = Some(handle);
                cursor = order.next;
            }

            assert_eq!(count, level.order_count(), "order_count mismatch at {price}");
            assert_eq!(
                total,
                level.total_quantity(),
                "total_quantity mismatch at {price}"
            );
            chained_orders += count as usize;
        }
    }

    // The index covers exactly the linked orders, and the pool holds
    // exactly the resting orders between calls.
    assert_eq!(chained_orders, book.orders.len());
    assert_eq!(book.pool.size(), book.orders.len());

    if let (Some(bid), Some(ask)) = (book.best_bid(), book.best_ask()) {
        assert!(bid < ask, "book is crossed: bid {bid} >= ask {ask}");
    }
}
