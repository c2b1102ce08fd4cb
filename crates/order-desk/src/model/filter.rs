//! Order selection shared by the store queries and the views.

use crate::model::{Order, OrderStatus, Origin};

/// Criteria for [`OrderClient::list_orders`](crate::clients::OrderClient::list_orders).
/// Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderFilter {
    pub status: Option<OrderStatus>,
    pub origin: Option<Origin>,
    pub customer: Option<String>,
    /// Case-sensitive substring of the `#NNN` id, or case-insensitive substring
    /// of the notes. Blank matches everything.
    pub search: Option<String>,
}

impl OrderFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: OrderStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn origin(mut self, origin: Origin) -> Self {
        self.origin = Some(origin);
        self
    }

    pub fn customer(mut self, session: impl Into<String>) -> Self {
        self.customer = Some(session.into());
        self
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    pub fn matches(&self, order: &Order) -> bool {
        if self.status.is_some_and(|s| s != order.status) {
            return false;
        }
        if self.origin.is_some_and(|o| o != order.origin) {
            return false;
        }
        if let Some(customer) = &self.customer {
            if order.customer.as_deref() != Some(customer.as_str()) {
                return false;
            }
        }
        match &self.search {
            Some(text) => matches_search(order, text),
            None => true,
        }
    }
}

pub fn matches_search(order: &Order, text: &str) -> bool {
    if text.is_empty() {
        return true;
    }
    if order.id.to_string().contains(text) {
        return true;
    }
    let needle = text.to_lowercase();
    order
        .notes
        .as_deref()
        .is_some_and(|notes| notes.to_lowercase().contains(&needle))
}
