//! Read-only projections of the order store, one per screen.
//!
//! Every projection reads through the shared [`OrderClient`](crate::clients::OrderClient),
//! so the portal, the employee panel and the kitchen always agree.

pub mod customer;
pub mod employee;
pub mod kitchen;
pub mod menu;

pub use customer::*;
pub use employee::*;
pub use kitchen::*;
pub use menu::*;
