//! Running totals for delivered orders.
//!
//! A delivered order leaves the store, so its count and its revenue can no longer
//! be read back from a listing. The actor records each one here as it retires.

use crate::model::{Order, OrderStatus};
use rust_decimal::Decimal;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeliveredTotals {
    pub count: u64,
    pub revenue: Decimal,
}

/// Shared tally of delivered orders. Clones share the same totals.
#[derive(Clone, Debug, Default)]
pub struct DeliveryLedger {
    totals: Arc<Mutex<DeliveredTotals>>,
}

impl DeliveryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `order` if it was delivered. Anything else leaving the store is ignored.
    pub fn record(&self, order: &Order) {
        if order.status != OrderStatus::Delivered {
            return;
        }
        let mut totals = self.totals.lock().unwrap_or_else(PoisonError::into_inner);
        totals.count += 1;
        match totals.revenue.checked_add(order.total()) {
            Some(revenue) => totals.revenue = revenue,
            None => warn!(id = %order.id, "Delivered revenue overflowed, total not added"),
        }
        debug!(id = %order.id, count = totals.count, revenue = %totals.revenue, "Delivery recorded");
    }

    pub fn totals(&self) -> DeliveredTotals {
        *self.totals.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
