//! Custom actions for the Order actor.
//!
//! Status changes are actions rather than updates: they go through the transition
//! graph, and a `Ready -> Delivered` change retires the order from the store.
//! See [`impl ActorEntity for Order`](crate::model::Order#impl-ActorEntity-for-Order).

use crate::model::{Order, OrderStatus};

#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Operator-driven change. Fails with `InvalidTransition` off the graph.
    Transition(OrderStatus),
    /// Timer-driven change that only applies while the order is still at `from`.
    ///
    /// An order that has already moved on is left alone and reported as skipped.
    Advance { from: OrderStatus, to: OrderStatus },
}

/// Results from [`OrderAction`].
#[derive(Debug, Clone)]
pub enum OrderActionResult {
    /// Snapshot after the change. For deliveries this is the last state the
    /// order had before leaving the store.
    Transitioned(Order),
    /// The guard of an `Advance` did not hold.
    Skipped { current: OrderStatus },
}
