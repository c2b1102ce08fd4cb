//! Employee panel: tabbed order list, search and headline numbers.

use crate::clients::OrderClient;
use crate::model::{Order, OrderFilter, OrderStatus};
use crate::order_actor::{DeliveredTotals, OrderError};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeTab {
    #[default]
    All,
    Pending,
    Confirmed,
}

impl EmployeeTab {
    fn status(self) -> Option<OrderStatus> {
        match self {
            EmployeeTab::All => None,
            EmployeeTab::Pending => Some(OrderStatus::Pending),
            EmployeeTab::Confirmed => Some(OrderStatus::Confirmed),
        }
    }

    pub fn filter(self, search: &str) -> OrderFilter {
        OrderFilter {
            status: self.status(),
            search: Some(search.to_string()),
            ..OrderFilter::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeStats {
    /// Live orders plus every order delivered since start-up.
    pub total_orders: u64,
    pub pending_orders: usize,
    /// Orders delivered since start-up. Delivered orders leave the store, so
    /// this comes from the delivery ledger.
    pub completed_orders: u64,
    /// Live totals plus delivered revenue.
    pub revenue: Decimal,
}

impl EmployeeStats {
    pub fn compute(orders: &[Order], delivered: DeliveredTotals) -> Self {
        let live: Decimal = orders.iter().map(Order::total).sum();
        Self {
            total_orders: orders.len() as u64 + delivered.count,
            pending_orders: orders
                .iter()
                .filter(|o| o.status == OrderStatus::Pending)
                .count(),
            completed_orders: delivered.count,
            revenue: live.saturating_add(delivered.revenue),
        }
    }
}

pub async fn employee_orders(
    client: &OrderClient,
    tab: EmployeeTab,
    search: &str,
) -> Result<Vec<Order>, OrderError> {
    client.list_orders(tab.filter(search)).await
}

pub async fn employee_stats(client: &OrderClient) -> Result<EmployeeStats, OrderError> {
    let orders = client.list_orders(OrderFilter::all()).await?;
    Ok(EmployeeStats::compute(&orders, client.delivered_totals()))
}
