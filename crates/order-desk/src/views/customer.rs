//! Customer portal: a guest's cart and the orders they placed.

use crate::clients::OrderClient;
use crate::model::{Cart, Order, OrderFilter, Origin};
use crate::order_actor::OrderError;
use tracing::{info, instrument};

/// One guest at one table.
#[derive(Debug, Clone)]
pub struct CustomerSession {
    pub session: String,
    pub table: Option<String>,
    pub cart: Cart,
}

impl CustomerSession {
    pub fn new(session: impl Into<String>, table: Option<String>) -> Self {
        Self {
            session: session.into(),
            table,
            cart: Cart::new(),
        }
    }

    /// Submits the cart as a portal order. The cart is emptied only when the
    /// store accepts the order.
    #[instrument(skip(self, client), fields(session = %self.session))]
    pub async fn place_order(&mut self, client: &OrderClient) -> Result<Order, OrderError> {
        let mut draft = self.cart.clone();
        let mut params = draft.submit(Origin::Web)?.customer(self.session.clone());
        if let Some(table) = &self.table {
            params = params.table(table.clone());
        }
        let order = client.create_order(params).await?;
        self.cart = draft;
        info!(id = %order.id, "Portal order placed");
        Ok(order)
    }

    /// This guest's orders, most recent first.
    pub async fn orders(&self, client: &OrderClient) -> Result<Vec<Order>, OrderError> {
        customer_orders(client, &self.session).await
    }
}

pub async fn customer_orders(client: &OrderClient, session: &str) -> Result<Vec<Order>, OrderError> {
    client
        .list_orders(OrderFilter::all().customer(session))
        .await
}
