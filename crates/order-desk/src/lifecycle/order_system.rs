use crate::clients::OrderClient;
use crate::config::DeskConfig;
use crate::order_actor::{self, OrderContext};
use crate::timeline::StatusTimeline;
use crate::views::{KitchenBoard, KitchenMonitor};
use actor_framework::ActorClient;
use thiserror::Error;
use tokio::sync::watch;
use tracing::{error, info};

#[derive(Debug, Error)]
#[error("Actor task failed: {0}")]
pub struct ShutdownError(#[from] tokio::task::JoinError);

/// The running order desk: one order store shared by every view.
///
/// # Example
///
/// ```ignore
/// let system = OrderSystem::new(&DeskConfig::default());
///
/// let order = system.order_client.create_order(params).await?;
/// let board = system.kitchen_board.borrow().clone();
///
/// system.shutdown().await?;
/// ```
pub struct OrderSystem {
    /// Client for the Order actor. Clone it for each view.
    pub order_client: OrderClient,

    /// Latest kitchen board, refreshed every `kitchen.tick_secs`.
    pub kitchen_board: watch::Receiver<KitchenBoard>,

    timeline: StatusTimeline,
    monitor: KitchenMonitor,
    handle: tokio::task::JoinHandle<()>,
}

impl OrderSystem {
    /// Spawns the order actor and the kitchen monitor. Must be called inside a
    /// Tokio runtime.
    pub fn new(config: &DeskConfig) -> Self {
        let (order_actor, client) = order_actor::new(config.store.buffer_size);

        let store = client.downgrade();
        let order_client = OrderClient::new(client);

        let timeline = StatusTimeline::new(config.timeline_unit());
        let context = OrderContext::new(timeline.clone(), order_client.inner())
            .with_default_prep_minutes(config.kitchen.default_prep_minutes)
            .with_ledger(order_client.ledger());
        let handle = tokio::spawn(order_actor.run(context));

        let (monitor, kitchen_board) = KitchenMonitor::spawn(store, config.kitchen_tick());

        info!(
            restaurant = %config.restaurant.name,
            unit_ms = config.timeline.unit_ms,
            tick_secs = config.kitchen.tick_secs,
            "Order desk started"
        );

        Self {
            order_client,
            kitchen_board,
            timeline,
            monitor,
            handle,
        }
    }

    /// Portal orders whose timeline has steps left.
    pub fn scheduled_orders(&self) -> usize {
        self.timeline.active()
    }

    /// Stops the monitor and the timelines, closes the store and waits for the actor to finish.
    ///
    /// Clones of `order_client` held elsewhere keep the actor alive; drop them first.
    pub async fn shutdown(self) -> Result<(), ShutdownError> {
        info!("Shutting down order desk...");

        self.monitor.stop();
        self.timeline.cancel_all();
        drop(self.order_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(e.into());
        }

        info!("Order desk shutdown complete.");
        Ok(())
    }
}
