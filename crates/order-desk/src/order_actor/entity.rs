//! [`ActorEntity`] implementation for [`Order`].
//!
//! Creation validates the lines, stamps the creation time and, for portal orders,
//! hands the order to the [`StatusTimeline`](crate::timeline::StatusTimeline).

use super::{OrderAction, OrderActionResult, OrderContext, OrderError};
use crate::model::{Order, OrderCreate, OrderId, OrderLine, OrderUpdate, Origin};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use tracing::debug;

fn validate_lines(lines: &[OrderLine]) -> Result<(), OrderError> {
    if lines.is_empty() {
        return Err(OrderError::EmptyOrder);
    }
    let mut total = Decimal::ZERO;
    for line in lines {
        if line.quantity == 0 {
            return Err(OrderError::InvalidLine(format!(
                "{} has quantity 0",
                line.name
            )));
        }
        if line.unit_price < Decimal::ZERO {
            return Err(OrderError::InvalidLine(format!(
                "{} has negative price {}",
                line.name, line.unit_price
            )));
        }
        // Subtotals and the order total use plain arithmetic later on.
        total = line
            .unit_price
            .checked_mul(Decimal::from(line.quantity))
            .and_then(|subtotal| total.checked_add(subtotal))
            .ok_or_else(|| {
                OrderError::InvalidLine(format!("{} overflows the order total", line.name))
            })?;
    }
    Ok(())
}

/// Empty strings clear an optional text field.
fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Context = OrderContext;
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        validate_lines(&params.lines)?;
        Ok(Order::new(id, params, Utc::now()))
    }

    async fn on_create(&mut self, ctx: &OrderContext) -> Result<(), Self::Error> {
        if self.prep_minutes.is_none() && ctx.default_prep_minutes > 0 {
            self.prep_minutes = Some(ctx.default_prep_minutes);
        }
        if self.origin == Origin::Web {
            ctx.timeline.schedule(self.id, ctx.store.clone());
        }
        Ok(())
    }

    /// Edits the operator-facing details. Lines, status and timestamps stay as they are.
    async fn on_update(&mut self, update: OrderUpdate, _ctx: &OrderContext) -> Result<(), Self::Error> {
        if let Some(table) = update.table_number {
            self.table_number = non_empty(table);
        }
        if let Some(notes) = update.notes {
            self.notes = non_empty(notes);
        }
        if let Some(method) = update.payment_method {
            self.payment_method = Some(method);
        }
        if let Some(priority) = update.priority {
            self.priority = priority;
        }
        if let Some(minutes) = update.prep_minutes {
            self.prep_minutes = (minutes > 0).then_some(minutes);
        }
        Ok(())
    }

    /// Runs for deletes and for retirement. Only a delivered order reaches the ledger.
    async fn on_delete(&self, ctx: &OrderContext) -> Result<(), Self::Error> {
        ctx.timeline.cancel(self.id);
        ctx.ledger.record(self);
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        _ctx: &OrderContext,
    ) -> Result<OrderActionResult, Self::Error> {
        let to = match action {
            OrderAction::Transition(to) => to,
            OrderAction::Advance { from, to } => {
                if self.status != from {
                    debug!(id = %self.id, current = %self.status, expected = %from, "Advance skipped");
                    return Ok(OrderActionResult::Skipped {
                        current: self.status,
                    });
                }
                to
            }
        };
        if !self.status.can_transition_to(to) {
            return Err(OrderError::InvalidTransition {
                from: self.status,
                to,
            });
        }
        self.status = to;
        Ok(OrderActionResult::Transitioned(self.clone()))
    }

    fn is_retired(&self) -> bool {
        self.status.is_terminal()
    }
}
