//! Order book error types

use super::types::{Price, Quantity};
use std::fmt;

/// Errors that can occur within the OrderBook
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum OrderBookError {
    /// Submission cannot proceed because the order pool is at capacity.
    /// The book state prior to the call is preserved.
    PoolExhausted {
        /// Configured pool capacity
        capacity: usize,
    },

    /// Order quantity failed boundary validation (zero quantity).
    InvalidQuantity {
        /// The quantity that failed validation
        quantity: Quantity,
    },

    /// Limit order price failed boundary validation (zero price).
    InvalidPrice {
        /// The price that failed validation
        price: Price,
    },

    /// Order price is not a multiple of the configured tick size
    InvalidTickSize {
        /// The order price that failed validation
        price: Price,
        /// The configured tick size
        tick_size: Price,
    },

    /// Order quantity is not a multiple of the configured lot size
    InvalidLotSize {
        /// The order quantity that failed validation
        quantity: Quantity,
        /// The configured lot size
        lot_size: Quantity,
    },
}

impl fmt::Display for OrderBookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderBookError::PoolExhausted { capacity } => {
                write!(f, "order pool exhausted: capacity {capacity} reached")
            }
            OrderBookError::InvalidQuantity { quantity } => {
                write!(f, "invalid quantity: {quantity}")
            }
            OrderBookError::InvalidPrice { price } => {
                write!(f, "invalid price: {price}")
            }
            OrderBookError::InvalidTickSize { price, tick_size } => {
                write!(
                    f,
                    "invalid tick size: price {price} is not a multiple of tick size {tick_size}"
                )
            }
            OrderBookError::InvalidLotSize { quantity, lot_size } => {
                write!(
                    f,
                    "invalid lot size: quantity {quantity} is not a multiple of lot size {lot_size}"
                )
            }
        }
    }
}

impl std::error::Error for OrderBookError {}
