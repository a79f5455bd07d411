//! Fixed-capacity order storage with an O(1) free list.
//!
//! Every live order in the book inhabits a slot of this pool. The backing
//! storage is a contiguous `Vec<Order>` sized once at construction; a LIFO
//! stack of slot indices provides allocation and deallocation with no heap
//! activity and no branching beyond the exhaustion check.

use super::order::Order;

/// Stable handle to a pool slot.
///
/// Handle identity is stable for the lifetime of an allocation: the same
/// slot yields the same handle, and a slot freed and re-allocated yields a
/// handle equal to the original.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct OrderHandle(u32);

impl OrderHandle {
    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Pre-allocated slab of order records.
#[derive(Debug)]
pub(crate) struct OrderPool {
    /// Contiguous order storage.
    slots: Vec<Order>,
    /// LIFO stack of free slot indices. Top of stack is the last element.
    free: Vec<u32>,
}

impl OrderPool {
    /// Creates a pool with `capacity` slots, all free.
    ///
    /// The free stack is loaded so that the first allocation returns slot 0.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.min(u32::MAX as usize);
        Self {
            slots: vec![Order::default(); capacity],
            free: (0..capacity as u32).rev().collect(),
        }
    }

    /// Pops a free slot, resets it to the default record, and returns its
    /// handle. Returns `None` when the pool is exhausted.
    #[inline]
    pub fn allocate(&mut self) -> Option<OrderHandle> {
        let idx = self.free.pop()?;
        self.slots[idx as usize].reset();
        Some(OrderHandle(idx))
    }

    /// Returns a slot to the free list. The caller must not use the handle
    /// afterwards; double-free is not detected.
    #[inline]
    pub fn deallocate(&mut self, handle: OrderHandle) {
        self.free.push(handle.0);
    }

    /// Shared access to an allocated slot.
    #[inline]
    pub fn get(&self, handle: OrderHandle) -> &Order {
        &self.slots[handle.index()]
    }

    /// Exclusive access to an allocated slot.
    #[inline]
    pub fn get_mut(&mut self, handle: OrderHandle) -> &mut Order {
        &mut self.slots[handle.index()]
    }

    /// Number of live (allocated) slots.
    #[inline]
    pub fn size(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Total number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of slots still free.
    #[inline]
    pub fn available(&self) -> usize {
        self.free.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orderbook::types::OrderStatus;

    #[test]
    fn test_basic_allocation() {
        let mut pool = OrderPool::new(100);
        assert_eq!(pool.capacity(), 100);
        assert_eq!(pool.size(), 0);
        assert_eq!(pool.available(), 100);

        let handle = pool.allocate().unwrap();
        assert_eq!(pool.size(), 1);
        assert_eq!(pool.available(), 99);
        assert_eq!(pool.get(handle).id, 0);
    }

    #[test]
    fn test_allocate_and_deallocate() {
        let mut pool = OrderPool::new(10);

        let h1 = pool.allocate().unwrap();
        let h2 = pool.allocate().unwrap();
        assert_ne!(h1, h2);
        assert_eq!(pool.size(), 2);

        pool.deallocate(h1);
        assert_eq!(pool.size(), 1);
        assert_eq!(pool.available(), 9);

        pool.deallocate(h2);
        assert_eq!(pool.size(), 0);
        assert_eq!(pool.available(), 10);
    }

    #[test]
    fn test_reuses_slot() {
        let mut pool = OrderPool::new(2);

        let h1 = pool.allocate().unwrap();
        pool.deallocate(h1);

        // LIFO free list hands the same slot back.
        let h2 = pool.allocate().unwrap();
        assert_eq!(h1, h2);
    }

    #[test]
    fn test_exhausts_capacity() {
        let mut pool = OrderPool::new(3);

        pool.allocate().unwrap();
        pool.allocate().unwrap();
        pool.allocate().unwrap();
        assert_eq!(pool.available(), 0);
        assert!(pool.allocate().is_none());
    }

    #[test]
    fn test_allocated_slot_is_reset() {
        let mut pool = OrderPool::new(10);

        let handle = pool.allocate().unwrap();
        {
            let order = pool.get_mut(handle);
            order.id = 42;
            order.quantity = 500;
            order.filled_quantity = 500;
            order.status = OrderStatus::Filled;
        }
        pool.deallocate(handle);

        let handle = pool.allocate().unwrap();
        let order = pool.get(handle);
        assert_eq!(order.id, 0);
        assert_eq!(order.quantity, 0);
        assert_eq!(order.filled_quantity, 0);
        assert_eq!(order.status, OrderStatus::New);
    }

    #[test]
    fn test_first_allocation_is_slot_zero_then_sequential() {
        let mut pool = OrderPool::new(4);
        let h0 = pool.allocate().unwrap();
        let h1 = pool.allocate().unwrap();
        assert_eq!(h0, OrderHandle(0));
        assert_eq!(h1, OrderHandle(1));
    }
}
