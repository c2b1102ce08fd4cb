//! In-progress order drafts.
//!
//! Both the customer portal and the staff "new order" form build a [`Cart`] and
//! turn it into an [`OrderCreate`] on submit.

use crate::model::{MenuItem, OrderCreate, OrderLine, Origin};
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum CartError {
    #[error("Cart is empty")]
    Empty,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub item: MenuItem,
    pub quantity: u32,
}

#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Adds one unit, merging with an existing line for the same item.
    pub fn add(&mut self, item: &MenuItem) {
        match self.lines.iter_mut().find(|l| l.item.id == item.id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine {
                item: item.clone(),
                quantity: 1,
            }),
        }
    }

    /// Sets a line's quantity; zero removes the line.
    pub fn set_quantity(&mut self, item_id: &str, quantity: u32) {
        if quantity == 0 {
            self.remove(item_id);
        } else if let Some(line) = self.lines.iter_mut().find(|l| l.item.id == item_id) {
            line.quantity = quantity;
        }
    }

    pub fn remove(&mut self, item_id: &str) {
        self.lines.retain(|l| l.item.id != item_id);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn total(&self) -> Decimal {
        self.lines
            .iter()
            .map(|l| l.item.price * Decimal::from(l.quantity))
            .sum()
    }

    /// Drains the cart into a creation payload, capturing current prices.
    ///
    /// An empty cart is rejected and left untouched.
    pub fn submit(&mut self, origin: Origin) -> Result<OrderCreate, CartError> {
        if self.lines.is_empty() {
            return Err(CartError::Empty);
        }
        let lines = std::mem::take(&mut self.lines)
            .into_iter()
            .map(|l| OrderLine::new(&l.item, l.quantity))
            .collect();
        Ok(OrderCreate::new(lines, origin))
    }
}
