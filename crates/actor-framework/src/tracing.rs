//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate.
//!
//! - **Configurable log levels** via the `RUST_LOG` environment variable
//! - **Compact format** that shows spans inline (`order_intake:create_order: ...`)
//! - **No module targets**; actors log an `entity_type` field instead
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: `Actor started`, `Shutdown` with final store size and retired count
//! - **Entity operations**: Create, Get, List, Update, Delete, Action, Stats
//! - **Retirements**: entities leaving the store after reaching a terminal state
//! - **Errors**: failed hooks and missing ids, with the entity id as a field
//!
//! ```bash
//! RUST_LOG=info cargo run     # one line per state change
//! RUST_LOG=debug cargo run    # payloads, actions and skipped timeline steps
//! ```
//!
//! With `RUST_LOG=info` an order placed from the portal reads like:
//!
//! ```text
//! INFO Created entity_type="Order" id=#001 size=1
//! INFO Action ok entity_type="Order" id=#001
//! INFO Retired entity_type="Order" id=#001 size=0 retired=1
//! ```

/// Installs the global subscriber. Call once, at the start of `main`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact()
        .init();
}
