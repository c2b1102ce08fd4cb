//! # Kitchen Board
//!
//! Queues over the live orders:
//!
//! - **pending**: `pending` orders, urgent first, otherwise in creation order
//! - **confirmed**: accepted but not started, same ordering as `pending`
//! - **preparing**: creation order
//! - **ready**: creation order
//!
//! Elapsed minutes are always recomputed from `created_at` and the current wall
//! clock, never accumulated, so the board cannot drift over long uptimes.
//! [`KitchenMonitor`] rebuilds the board on a fixed tick and publishes it on a
//! `watch` channel.

use crate::clients::OrderClient;
use crate::model::{Order, OrderFilter, OrderStatus, Priority};
use actor_framework::WeakResourceClient;
use chrono::{DateTime, Utc};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct KitchenCard {
    pub order: Order,
    pub elapsed_minutes: u64,
    /// Elapsed time exceeds a non-zero prep estimate.
    pub overtime: bool,
}

impl KitchenCard {
    pub fn new(order: Order, now: DateTime<Utc>) -> Self {
        let elapsed_minutes = u64::try_from((now - order.created_at).num_minutes()).unwrap_or(0);
        let overtime = order
            .prep_minutes
            .is_some_and(|prep| prep > 0 && elapsed_minutes > u64::from(prep));
        Self {
            order,
            elapsed_minutes,
            overtime,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct KitchenBoard {
    pub pending: Vec<KitchenCard>,
    pub confirmed: Vec<KitchenCard>,
    pub preparing: Vec<KitchenCard>,
    pub ready: Vec<KitchenCard>,
}

impl KitchenBoard {
    /// Builds the board from a snapshot of the store, in any order.
    pub fn build(mut orders: Vec<Order>, now: DateTime<Utc>) -> Self {
        orders.sort_by_key(|o| o.id);
        let mut board = Self::default();
        for order in orders {
            let queue = match order.status {
                OrderStatus::Pending => &mut board.pending,
                OrderStatus::Confirmed => &mut board.confirmed,
                OrderStatus::Preparing => &mut board.preparing,
                OrderStatus::Ready => &mut board.ready,
                OrderStatus::Delivered => continue,
            };
            queue.push(KitchenCard::new(order, now));
        }
        // Stable sort keeps creation order among equal priorities.
        for queue in [&mut board.pending, &mut board.confirmed] {
            queue.sort_by_key(|card| card.order.priority != Priority::Urgent);
        }
        board
    }

    /// Orders the kitchen still has to finish.
    pub fn active(&self) -> usize {
        self.pending.len() + self.confirmed.len() + self.preparing.len()
    }

    pub fn ready_count(&self) -> usize {
        self.ready.len()
    }

    pub fn overtime(&self) -> impl Iterator<Item = &KitchenCard> {
        self.pending
            .iter()
            .chain(&self.confirmed)
            .chain(&self.preparing)
            .filter(|card| card.overtime)
    }
}

/// Background task that republishes the kitchen board on every tick.
///
/// Holds a weak client, so it never keeps the store alive; it stops on its own
/// once the store shuts down.
pub struct KitchenMonitor {
    handle: JoinHandle<()>,
}

impl KitchenMonitor {
    pub fn spawn(
        store: WeakResourceClient<Order>,
        tick: Duration,
    ) -> (Self, watch::Receiver<KitchenBoard>) {
        let (sender, receiver) = watch::channel(KitchenBoard::default());

        let handle = tokio::spawn(async move {
            let mut ticker = interval(tick);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            info!(tick_secs = tick.as_secs(), "Kitchen monitor started");

            loop {
                ticker.tick().await;
                let Some(client) = store.upgrade() else {
                    break;
                };
                let orders = OrderClient::new(client)
                    .list_orders(OrderFilter::all())
                    .await;
                match orders {
                    Ok(orders) => {
                        let board = KitchenBoard::build(orders, Utc::now());
                        debug!(
                            active = board.active(),
                            ready = board.ready_count(),
                            "Kitchen board refreshed"
                        );
                        if sender.send(board).is_err() {
                            break;
                        }
                    }
                    Err(e) => warn!(error = %e, "Kitchen board refresh failed"),
                }
            }
            info!("Kitchen monitor stopped");
        });

        (Self { handle }, receiver)
    }

    pub fn stop(self) {
        self.handle.abort();
    }
}
