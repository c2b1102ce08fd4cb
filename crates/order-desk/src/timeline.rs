//! # Status Timeline
//!
//! Portal orders advance on their own: `confirmed` 3 units after creation,
//! `preparing` at 8 and `ready` at 15. One task per order walks the schedule
//! against absolute deadlines taken from the creation instant, so steps fire in
//! order however close together they are.
//!
//! Every step is a guarded [`OrderAction::Advance`]. Operators can move an order
//! faster than the timeline; the stale step is then skipped. A deleted or retired
//! order cancels its task through [`StatusTimeline::cancel`], and a missing order
//! or a closed store ends the task quietly.

use crate::model::{Order, OrderId, OrderStatus};
use crate::order_actor::{OrderAction, OrderActionResult};
use actor_framework::{FrameworkError, WeakResourceClient};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::task::AbortHandle;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, info, warn};

/// `(units after creation, expected status, next status)`.
pub const SCHEDULE: [(u32, OrderStatus, OrderStatus); 3] = [
    (3, OrderStatus::Pending, OrderStatus::Confirmed),
    (8, OrderStatus::Confirmed, OrderStatus::Preparing),
    (15, OrderStatus::Preparing, OrderStatus::Ready),
];

/// Scheduler for the automatic status steps. Cheap to clone; clones share the
/// same task table.
#[derive(Clone, Debug)]
pub struct StatusTimeline {
    unit: Duration,
    tasks: Arc<Mutex<HashMap<OrderId, AbortHandle>>>,
}

impl StatusTimeline {
    pub fn new(unit: Duration) -> Self {
        Self {
            unit,
            tasks: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn unit(&self) -> Duration {
        self.unit
    }

    /// Starts the schedule for `id`, counting from now.
    pub fn schedule(&self, id: OrderId, store: WeakResourceClient<Order>) {
        let start = Instant::now();
        let unit = self.unit;
        let tasks = self.tasks.clone();

        let handle = tokio::spawn(async move {
            for (units, from, to) in SCHEDULE {
                sleep_until(start + unit * units).await;
                if !advance(&store, id, from, to).await {
                    break;
                }
            }
            tasks
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .remove(&id);
        });

        self.tasks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, handle.abort_handle());
        debug!(%id, "Timeline scheduled");
    }

    /// Aborts the remaining steps for `id`, if any.
    pub fn cancel(&self, id: OrderId) {
        let handle = self
            .tasks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&id);
        if let Some(handle) = handle {
            handle.abort();
            debug!(%id, "Timeline cancelled");
        }
    }

    /// Aborts every pending schedule.
    pub fn cancel_all(&self) {
        let drained: Vec<_> = self
            .tasks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .drain()
            .collect();
        for (id, handle) in drained {
            handle.abort();
            debug!(%id, "Timeline cancelled");
        }
    }

    /// Orders with steps still pending.
    pub fn active(&self) -> usize {
        self.tasks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

/// Applies one step. Returns `false` when the rest of the schedule is pointless.
async fn advance(
    store: &WeakResourceClient<Order>,
    id: OrderId,
    from: OrderStatus,
    to: OrderStatus,
) -> bool {
    // The strong client only lives for this request.
    let Some(client) = store.upgrade() else {
        debug!(%id, "Store closed, timeline stopped");
        return false;
    };
    match client.perform_action(id, OrderAction::Advance { from, to }).await {
        Ok(OrderActionResult::Transitioned(order)) => {
            info!(%id, status = %order.status, "Timeline advanced");
            true
        }
        Ok(OrderActionResult::Skipped { current }) => {
            debug!(%id, %current, expected = %from, "Timeline step skipped");
            true
        }
        Err(FrameworkError::NotFound(_)) => {
            debug!(%id, "Order gone, timeline stopped");
            false
        }
        Err(FrameworkError::ActorClosed | FrameworkError::ActorDropped) => {
            debug!(%id, "Store closed, timeline stopped");
            false
        }
        Err(e) => {
            warn!(%id, error = %e, "Timeline step failed");
            true
        }
    }
}
