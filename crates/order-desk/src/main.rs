//! # Order Desk demo
//!
//! Runs one service shift against the in-memory store:
//!
//! 1. A guest at table 4 orders from the portal; the status timeline picks it up.
//! 2. Staff enter a counter order and the kitchen walks it to delivery.
//! 3. The employee stats and the kitchen board are printed to the log.
//!
//! Set `ORDER_DESK_CONFIG` to a TOML file to override the defaults, and
//! `RUST_LOG=info` (or `debug`) to see the actors at work.

use actor_framework::tracing::setup_tracing;
use order_desk::config::DeskConfig;
use order_desk::lifecycle::OrderSystem;
use order_desk::model::{Cart, Menu, OrderStatus, Origin, PaymentMethod, Priority};
use order_desk::portal::portal_link;
use order_desk::views::{employee_stats, CustomerSession};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = DeskConfig::from_env()?;
    let menu = Menu::house();
    info!(
        restaurant = %config.restaurant.name,
        link = %portal_link(&config.restaurant.portal_base_url, Some(4)),
        "Starting order desk"
    );

    let system = OrderSystem::new(&config);
    let orders = system.order_client.clone();

    // Portal order from table 4
    let span = tracing::info_span!("customer_portal", table = 4);
    let mut guest = CustomerSession::new("guest-table-4", Some("4".to_string()));
    for id in ["1", "1", "6", "6"] {
        if let Some(item) = menu.find(id) {
            guest.cart.add(item);
        }
    }
    let portal_order = guest.place_order(&orders).instrument(span).await?;
    info!(id = %portal_order.id, total = %portal_order.total(), "Guest order placed");

    // Counter order, cooked and delivered by hand
    let span = tracing::info_span!("employee_panel");
    let counter_order = async {
        let mut draft = Cart::new();
        for id in ["2", "4"] {
            if let Some(item) = menu.find(id) {
                draft.add(item);
            }
        }
        let params = draft
            .submit(Origin::Manual)?
            .table("7")
            .notes("Sin cebolla")
            .payment(PaymentMethod::Card)
            .priority(Priority::Urgent);
        orders.create_order(params).await
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("kitchen", id = %counter_order.id);
    let delivered = async {
        for status in [
            OrderStatus::Confirmed,
            OrderStatus::Preparing,
            OrderStatus::Ready,
            OrderStatus::Delivered,
        ] {
            orders.update_status(counter_order.id, status).await?;
        }
        orders.get_order(counter_order.id).await
    }
    .instrument(span)
    .await?;
    info!(still_in_store = delivered.is_some(), "Counter order delivered");

    // Skipping states is refused
    if let Err(e) = orders.update_status(portal_order.id, OrderStatus::Delivered).await {
        info!(error = %e, "Rejected as expected");
    }

    // Let the timeline run its course
    tokio::time::sleep(config.timeline_unit() * 16).await;
    match orders.get_order(portal_order.id).await {
        Ok(Some(order)) => info!(id = %order.id, status = %order.status, "Guest order"),
        Ok(None) => info!(id = %portal_order.id, "Guest order gone"),
        Err(e) => error!(error = %e, "Lookup failed"),
    }

    let stats = employee_stats(&orders).await?;
    info!(
        total = stats.total_orders,
        pending = stats.pending_orders,
        completed = stats.completed_orders,
        revenue = %stats.revenue,
        "Employee stats"
    );

    let board = system.kitchen_board.borrow().clone();
    info!(
        active = board.active(),
        ready = board.ready_count(),
        "Kitchen board"
    );

    drop(orders);
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
