//! Error types for the Order actor.

use crate::model::{CartError, OrderStatus};
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// Creation was attempted with no lines. No order is created.
    #[error("Order has no lines")]
    EmptyOrder,

    /// A line carries a zero quantity, a negative price or an amount too large to total.
    #[error("Invalid order line: {0}")]
    InvalidLine(String),

    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The requested status change is not an edge of the transition graph.
    #[error("Invalid transition: {from} -> {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<CartError> for OrderError {
    fn from(e: CartError) -> Self {
        match e {
            CartError::Empty => OrderError::EmptyOrder,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn an_empty_cart_is_an_empty_order() {
        assert_eq!(OrderError::from(CartError::Empty), OrderError::EmptyOrder);
    }
}
