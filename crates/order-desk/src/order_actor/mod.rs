//! Order-specific resource logic and entity implementation.

pub mod actions;
pub mod entity;
pub mod error;
pub mod ledger;

pub use actions::*;
pub use error::*;
pub use ledger::{DeliveredTotals, DeliveryLedger};

use crate::model::Order;
use crate::timeline::StatusTimeline;
use actor_framework::{ResourceActor, ResourceClient, WeakResourceClient};

/// Dependencies injected into the Order actor when it starts.
pub struct OrderContext {
    /// Drives portal orders through their automatic status steps.
    pub timeline: StatusTimeline,
    /// Handle back to this actor's own store, for the timeline tasks.
    pub store: WeakResourceClient<Order>,
    /// Prep estimate applied to orders created without one. 0 disables it.
    pub default_prep_minutes: u32,
    /// Tally of delivered orders, written as they retire.
    pub ledger: DeliveryLedger,
}

impl OrderContext {
    pub fn new(timeline: StatusTimeline, client: &ResourceClient<Order>) -> Self {
        Self {
            timeline,
            store: client.downgrade(),
            default_prep_minutes: 0,
            ledger: DeliveryLedger::new(),
        }
    }

    /// Shares `ledger` with the actor, usually the one held by the [`OrderClient`](crate::clients::OrderClient).
    pub fn with_ledger(mut self, ledger: DeliveryLedger) -> Self {
        self.ledger = ledger;
        self
    }

    pub fn with_default_prep_minutes(mut self, minutes: u32) -> Self {
        self.default_prep_minutes = minutes;
        self
    }
}

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(buffer_size)
}
