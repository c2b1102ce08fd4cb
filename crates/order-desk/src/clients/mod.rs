//! Typed clients over the generic actor channels.

pub mod order_client;

pub use order_client::OrderClient;
