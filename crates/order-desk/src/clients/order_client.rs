//! # Order Client
//!
//! Provides a high‑level API for interacting with the `Order` actor.
//! It wraps a `ResourceClient<Order>` and maps framework errors back to [`OrderError`].
use crate::model::{Order, OrderCreate, OrderFilter, OrderId, OrderStatus, OrderUpdate};
use crate::order_actor::{DeliveredTotals, DeliveryLedger, OrderAction, OrderActionResult, OrderError};
use actor_framework::{ActorClient, Filter, FrameworkError, ResourceClient, StoreStats};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
///
/// Every view (portal, employee panel, kitchen) holds a clone of the same client,
/// so they all read and write one store.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    ledger: DeliveryLedger,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self {
            inner,
            ledger: DeliveryLedger::new(),
        }
    }

    /// The ledger to hand to the actor's [`OrderContext`](crate::order_actor::OrderContext),
    /// so [`delivered_totals`](Self::delivered_totals) sees its deliveries.
    pub fn ledger(&self) -> DeliveryLedger {
        self.ledger.clone()
    }

    /// Creates a pending order. Portal orders start their status timeline.
    #[instrument(skip(self, params), fields(origin = ?params.origin, lines = params.lines.len()))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<Order, OrderError> {
        debug!("Sending request");
        let order = self.inner.create(params).await.map_err(Self::map_error)?;
        info!(id = %order.id, total = %order.total(), "Order placed");
        Ok(order)
    }

    /// Moves an order along the transition graph.
    ///
    /// Delivering an order returns its final snapshot and removes it from the store.
    #[instrument(skip(self))]
    pub async fn update_status(&self, id: OrderId, status: OrderStatus) -> Result<Order, OrderError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(id, OrderAction::Transition(status))
            .await
            .map_err(Self::map_error)?
        {
            OrderActionResult::Transitioned(order) => Ok(order),
            OrderActionResult::Skipped { current } => Err(OrderError::InvalidTransition {
                from: current,
                to: status,
            }),
        }
    }

    /// Removes an order and cancels its pending timeline steps.
    #[instrument(skip(self))]
    pub async fn delete_order(&self, id: OrderId) -> Result<(), OrderError> {
        self.delete(id).await
    }

    #[instrument(skip(self))]
    pub async fn get_order(&self, id: OrderId) -> Result<Option<Order>, OrderError> {
        self.get(id).await
    }

    /// Orders accepted by `filter`, most recent first.
    #[instrument(skip(self))]
    pub async fn list_orders(&self, filter: OrderFilter) -> Result<Vec<Order>, OrderError> {
        debug!("Sending request");
        let mut orders = self
            .inner
            .list(Filter::new(move |order| filter.matches(order)))
            .await
            .map_err(Self::map_error)?;
        orders.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(orders)
    }

    /// Edits table, notes, payment, priority or prep estimate.
    #[instrument(skip(self))]
    pub async fn update_details(&self, id: OrderId, update: OrderUpdate) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Live orders and delivered (retired) count.
    pub async fn order_stats(&self) -> Result<StoreStats, OrderError> {
        self.stats().await
    }

    /// Count and revenue of every order delivered since start-up.
    pub fn delivered_totals(&self) -> DeliveredTotals {
        self.ledger.totals()
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.downcast::<OrderError>().unwrap_or_else(|e| match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            other => OrderError::ActorCommunicationError(other.to_string()),
        })
    }
}
