//! Orders and their status graph.
//!
//! [`Order`] implements [`ActorEntity`](actor_framework::ActorEntity), so a
//! [`ResourceActor`](actor_framework::ResourceActor) can own it. See
//! [`impl ActorEntity for Order`](Order#impl-ActorEntity-for-Order) for the
//! creation payload ([`OrderCreate`]), the detail edits ([`OrderUpdate`]) and the
//! status actions ([`OrderAction`](crate::order_actor::OrderAction)).
use crate::model::MenuItem;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Type-safe identifier for Orders, displayed as `#001`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:03}", self.0)
    }
}

/// Lifecycle of an order.
///
/// ```text
/// Pending -> Confirmed -> Preparing -> Ready -> Delivered
///                             ^          |
///                             +----------+   (kitchen send-back)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Preparing,
    Ready,
    Delivered,
}

impl OrderStatus {
    /// Whether `self -> next` is an edge of the transition graph.
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        matches!(
            (self, next),
            (Pending, Confirmed)
                | (Confirmed, Preparing)
                | (Preparing, Ready)
                | (Ready, Delivered)
                | (Ready, Preparing)
        )
    }

    /// Delivered orders leave the store as soon as they reach this state.
    pub fn is_terminal(self) -> bool {
        self == OrderStatus::Delivered
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Delivered => "delivered",
        };
        f.write_str(label)
    }
}

/// Who placed the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    /// Submitted from the customer portal. Driven by the status timeline.
    Web,
    /// Entered by staff at the counter.
    Manual,
}

impl Origin {
    /// Portal guests pay by card; counter orders settle later.
    pub fn default_payment(self) -> PaymentMethod {
        match self {
            Origin::Web => PaymentMethod::Card,
            Origin::Manual => PaymentMethod::Pending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    Card,
    Pending,
}

/// Kitchen priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    #[default]
    Normal,
    Urgent,
}

/// One line of an order. The unit price is captured when the line is added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub item_id: String,
    pub name: String,
    pub unit_price: Decimal,
    pub quantity: u32,
}

impl OrderLine {
    pub fn new(item: &MenuItem, quantity: u32) -> Self {
        Self {
            item_id: item.id.clone(),
            name: item.name.clone(),
            unit_price: item.price,
            quantity,
        }
    }

    pub fn subtotal(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub lines: Vec<OrderLine>,
    pub status: OrderStatus,
    pub origin: Origin,
    pub created_at: DateTime<Utc>,
    pub table_number: Option<String>,
    pub notes: Option<String>,
    pub payment_method: Option<PaymentMethod>,
    pub priority: Priority,
    /// Kitchen prep-time estimate in minutes.
    pub prep_minutes: Option<u32>,
    /// Session tag of the customer who placed a portal order.
    pub customer: Option<String>,
}

impl Order {
    /// Builds a pending order from a creation payload.
    ///
    /// Validation lives in the entity's `from_create_params`; this constructor
    /// only assembles the fields.
    pub fn new(id: OrderId, params: OrderCreate, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            lines: params.lines,
            status: OrderStatus::Pending,
            origin: params.origin,
            created_at,
            table_number: params.table_number,
            notes: params.notes,
            payment_method: params.payment_method,
            priority: params.priority,
            prep_minutes: params.prep_minutes,
            customer: params.customer,
        }
    }

    /// Σ(unit price × quantity), always recomputed from the lines.
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(OrderLine::subtotal).sum()
    }

    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }
}

/// Payload for creating a new order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub lines: Vec<OrderLine>,
    pub origin: Origin,
    pub table_number: Option<String>,
    pub notes: Option<String>,
    pub payment_method: Option<PaymentMethod>,
    pub priority: Priority,
    pub prep_minutes: Option<u32>,
    pub customer: Option<String>,
}

impl OrderCreate {
    pub fn new(lines: Vec<OrderLine>, origin: Origin) -> Self {
        Self {
            lines,
            origin,
            table_number: None,
            notes: None,
            payment_method: Some(origin.default_payment()),
            priority: Priority::Normal,
            prep_minutes: None,
            customer: None,
        }
    }

    pub fn table(mut self, table: impl Into<String>) -> Self {
        self.table_number = Some(table.into());
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn payment(mut self, method: PaymentMethod) -> Self {
        self.payment_method = Some(method);
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn prep_minutes(mut self, minutes: u32) -> Self {
        self.prep_minutes = Some(minutes);
        self
    }

    pub fn customer(mut self, session: impl Into<String>) -> Self {
        self.customer = Some(session.into());
        self
    }
}

/// Payload for editing an order's details. Lines, status and timestamps are
/// not editable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderUpdate {
    pub table_number: Option<String>,
    pub notes: Option<String>,
    pub payment_method: Option<PaymentMethod>,
    pub priority: Option<Priority>,
    pub prep_minutes: Option<u32>,
}
