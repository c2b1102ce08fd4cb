//! # System Lifecycle & Orchestration
//!
//! Starting, wiring and stopping the desk's background tasks.
//!
//! ## Wiring
//!
//! The order actor is created first, without dependencies. Its context is built from
//! the client afterwards ("late binding"), which lets the context carry a weak client
//! back to the same store for the [`StatusTimeline`](crate::timeline::StatusTimeline):
//!
//! ```rust,ignore
//! let (order_actor, order_client) = order_actor::new(config.store.buffer_size);
//! let context = OrderContext::new(StatusTimeline::new(config.timeline_unit()), &order_client);
//! let handle = tokio::spawn(order_actor.run(context));
//! ```
//!
//! The [`KitchenMonitor`](crate::views::KitchenMonitor) gets a weak client too.
//!
//! ## Graceful Shutdown
//!
//! 1. **Stop the monitor** so no tick races the shutdown
//! 2. **Drop the strong clients**; the actor's `recv()` then returns `None`
//! 3. **Await the actor task**
//!
//! Timeline tasks only upgrade their weak client for the duration of one request,
//! so a sleeping timeline never holds the store open.

pub mod order_system;

pub use order_system::*;
