//! # Order Desk
//!
//! A restaurant order desk built on [`actor_framework`]: one order store shared by
//! the customer portal, the employee panel and the kitchen board.
//!
//! - **[model]**: menu, cart drafts, orders and the status graph.
//! - **[order_actor]**: [`Order`](model::Order) as an actor entity; status actions and errors.
//! - **[timeline]**: automatic status steps for portal orders.
//! - **[clients]**: [`OrderClient`](clients::OrderClient), the typed API every view uses.
//! - **[views]**: menu search, customer orders, employee tabs and stats, kitchen board.
//! - **[config]**: TOML settings.
//! - **[lifecycle]**: [`OrderSystem`](lifecycle::OrderSystem) wires and stops everything.

pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod portal;
pub mod timeline;
pub mod views;
