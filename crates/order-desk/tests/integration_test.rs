use order_desk::config::DeskConfig;
use order_desk::lifecycle::OrderSystem;
use order_desk::model::{
    Cart, Menu, OrderCreate, OrderFilter, OrderId, OrderLine, OrderStatus, Origin, PaymentMethod,
    Priority,
};
use order_desk::order_actor::OrderError;
use order_desk::views::{
    customer_orders, employee_orders, employee_stats, CustomerSession, EmployeeTab, KitchenBoard,
};
use rust_decimal::Decimal;
use std::time::Duration;

const UNIT: Duration = Duration::from_secs(1);
const EPSILON: Duration = Duration::from_millis(1);

fn system() -> OrderSystem {
    OrderSystem::new(&DeskConfig::default())
}

fn counter_order(item: &str, qty: u32) -> OrderCreate {
    let menu = Menu::house();
    OrderCreate::new(
        vec![OrderLine::new(menu.find(item).unwrap(), qty)],
        Origin::Manual,
    )
}

fn web_order(item: &str) -> OrderCreate {
    let menu = Menu::house();
    OrderCreate::new(vec![OrderLine::new(menu.find(item).unwrap(), 1)], Origin::Web)
}

async fn status_of(system: &OrderSystem, id: OrderId) -> Option<OrderStatus> {
    system
        .order_client
        .get_order(id)
        .await
        .unwrap()
        .map(|o| o.status)
}

#[tokio::test]
async fn cart_with_two_burgers_and_two_sodas_totals_23_96() {
    let system = system();
    let menu = Menu::house();

    let mut cart = Cart::new();
    cart.add(menu.find("1").unwrap());
    cart.add(menu.find("6").unwrap());
    cart.set_quantity("1", 2);
    cart.set_quantity("6", 2);

    let order = system
        .order_client
        .create_order(cart.submit(Origin::Manual).unwrap())
        .await
        .unwrap();

    assert_eq!(order.id, OrderId(1));
    assert_eq!(order.id.to_string(), "#001");
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.total(), Decimal::new(2396, 2));
    assert_eq!(order.item_count(), 4);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn empty_order_is_rejected_without_side_effects() {
    let system = system();

    let err = system
        .order_client
        .create_order(OrderCreate::new(vec![], Origin::Manual))
        .await
        .unwrap_err();
    assert_eq!(err, OrderError::EmptyOrder);

    let stats = system.order_client.order_stats().await.unwrap();
    assert_eq!(stats.live, 0);
    let next = system
        .order_client
        .create_order(counter_order("4", 1))
        .await
        .unwrap();
    assert_eq!(next.id, OrderId(1));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn skipping_states_is_an_invalid_transition() {
    let system = system();
    let order = system
        .order_client
        .create_order(counter_order("3", 1))
        .await
        .unwrap();

    let err = system
        .order_client
        .update_status(order.id, OrderStatus::Delivered)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        OrderError::InvalidTransition {
            from: OrderStatus::Pending,
            to: OrderStatus::Delivered,
        }
    );
    assert_eq!(status_of(&system, order.id).await, Some(OrderStatus::Pending));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn delivery_retires_the_order_and_counts_it() {
    let system = system();
    let orders = &system.order_client;
    let order = orders.create_order(counter_order("2", 1)).await.unwrap();

    let before = employee_stats(orders).await.unwrap();
    assert_eq!(before.total_orders, 1);
    assert_eq!(before.revenue, Decimal::new(1299, 2));

    for status in [
        OrderStatus::Confirmed,
        OrderStatus::Preparing,
        OrderStatus::Ready,
    ] {
        orders.update_status(order.id, status).await.unwrap();
    }

    // Kitchen sends it back once.
    let back = orders
        .update_status(order.id, OrderStatus::Preparing)
        .await
        .unwrap();
    assert_eq!(back.status, OrderStatus::Preparing);
    orders
        .update_status(order.id, OrderStatus::Ready)
        .await
        .unwrap();

    let delivered = orders
        .update_status(order.id, OrderStatus::Delivered)
        .await
        .unwrap();
    assert_eq!(delivered.status, OrderStatus::Delivered);
    assert_eq!(orders.get_order(order.id).await.unwrap(), None);

    // Delivered orders still count towards the headline numbers.
    let stats = employee_stats(orders).await.unwrap();
    assert_eq!(stats.total_orders, 1);
    assert_eq!(stats.pending_orders, 0);
    assert_eq!(stats.completed_orders, 1);
    assert_eq!(stats.revenue, Decimal::new(1299, 2));
    assert_eq!(orders.order_stats().await.unwrap().retired, 1);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn deleting_unknown_or_deleted_ids_is_not_found() {
    let system = system();
    let orders = &system.order_client;

    assert_eq!(
        orders.delete_order(OrderId(999)).await.unwrap_err(),
        OrderError::NotFound("#999".to_string())
    );

    let order = orders.create_order(counter_order("7", 1)).await.unwrap();
    orders.delete_order(order.id).await.unwrap();
    assert!(matches!(
        orders.delete_order(order.id).await,
        Err(OrderError::NotFound(_))
    ));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn ids_are_never_reused_after_deletion() {
    let system = system();
    let orders = &system.order_client;

    let first = orders.create_order(counter_order("1", 1)).await.unwrap();
    let second = orders.create_order(counter_order("1", 1)).await.unwrap();
    orders.delete_order(second.id).await.unwrap();
    let third = orders.create_order(counter_order("1", 1)).await.unwrap();

    assert_eq!(first.id, OrderId(1));
    assert_eq!(second.id, OrderId(2));
    assert_eq!(third.id, OrderId(3));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn concurrent_creates_get_distinct_ids() {
    let system = system();

    let tasks: Vec<_> = (0..20)
        .map(|_| {
            let client = system.order_client.clone();
            tokio::spawn(async move { client.create_order(counter_order("8", 1)).await })
        })
        .collect();

    let mut ids = Vec::new();
    for task in tasks {
        ids.push(task.await.unwrap().unwrap().id.0);
    }
    ids.sort_unstable();
    assert_eq!(ids, (1..=20).collect::<Vec<_>>());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn lists_are_most_recent_first() {
    let system = system();
    let orders = &system.order_client;
    for item in ["1", "2", "3"] {
        orders.create_order(counter_order(item, 1)).await.unwrap();
    }

    let ids: Vec<u32> = orders
        .list_orders(OrderFilter::all())
        .await
        .unwrap()
        .into_iter()
        .map(|o| o.id.0)
        .collect();
    assert_eq!(ids, vec![3, 2, 1]);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn employee_tabs_and_search_read_the_shared_store() {
    let system = system();
    let orders = &system.order_client;

    let first = orders
        .create_order(counter_order("1", 1).notes("Sin cebolla"))
        .await
        .unwrap();
    let second = orders.create_order(counter_order("5", 1)).await.unwrap();
    orders
        .update_status(second.id, OrderStatus::Confirmed)
        .await
        .unwrap();

    let pending = employee_orders(orders, EmployeeTab::Pending, "").await.unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, first.id);

    let confirmed = employee_orders(orders, EmployeeTab::Confirmed, "").await.unwrap();
    assert_eq!(confirmed.len(), 1);
    assert_eq!(confirmed[0].id, second.id);

    let by_notes = employee_orders(orders, EmployeeTab::All, "CEBOLLA").await.unwrap();
    assert_eq!(by_notes.len(), 1);
    let by_id = employee_orders(orders, EmployeeTab::All, "#002").await.unwrap();
    assert_eq!(by_id[0].id, second.id);
    assert_eq!(employee_orders(orders, EmployeeTab::All, "").await.unwrap().len(), 2);

    assert_eq!(first.payment_method, Some(PaymentMethod::Pending));

    let stats = employee_stats(orders).await.unwrap();
    assert_eq!(stats.total_orders, 2);
    assert_eq!(stats.pending_orders, 1);
    assert_eq!(stats.revenue, Decimal::new(899 + 999, 2));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn customers_only_see_their_own_orders() {
    let system = system();
    let menu = Menu::house();
    let orders = &system.order_client;

    let mut alice = CustomerSession::new("alice", Some("2".to_string()));
    let mut bruno = CustomerSession::new("bruno", None);

    alice.cart.add(menu.find("1").unwrap());
    let a1 = alice.place_order(orders).await.unwrap();
    bruno.cart.add(menu.find("3").unwrap());
    bruno.place_order(orders).await.unwrap();
    alice.cart.add(menu.find("7").unwrap());
    let a2 = alice.place_order(orders).await.unwrap();

    assert!(alice.cart.is_empty());
    assert_eq!(a1.table_number.as_deref(), Some("2"));
    assert_eq!(a1.origin, Origin::Web);
    assert_eq!(a1.payment_method, Some(PaymentMethod::Card));

    let ids: Vec<OrderId> = alice
        .orders(orders)
        .await
        .unwrap()
        .into_iter()
        .map(|o| o.id)
        .collect();
    assert_eq!(ids, vec![a2.id, a1.id]);
    assert_eq!(customer_orders(orders, "bruno").await.unwrap().len(), 1);
    assert!(customer_orders(orders, "carla").await.unwrap().is_empty());

    // An empty cart never reaches the store.
    assert_eq!(
        bruno.place_order(orders).await.unwrap_err(),
        OrderError::EmptyOrder
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn kitchen_serves_urgent_orders_first() {
    let system = system();
    let orders = &system.order_client;

    let normal = orders.create_order(counter_order("1", 1)).await.unwrap();
    let urgent = orders
        .create_order(counter_order("2", 1).priority(Priority::Urgent))
        .await
        .unwrap();

    let snapshot = orders.list_orders(OrderFilter::all()).await.unwrap();
    let board = KitchenBoard::build(snapshot, chrono::Utc::now());
    let queue: Vec<OrderId> = board.pending.iter().map(|c| c.order.id).collect();
    assert_eq!(queue, vec![urgent.id, normal.id]);
    assert_eq!(board.active(), 2);

    orders
        .update_status(normal.id, OrderStatus::Confirmed)
        .await
        .unwrap();
    let snapshot = orders.list_orders(OrderFilter::all()).await.unwrap();
    let board = KitchenBoard::build(snapshot, chrono::Utc::now());
    assert_eq!(board.pending.len(), 1);
    assert_eq!(board.confirmed[0].order.id, normal.id);

    system.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn kitchen_monitor_publishes_the_board() {
    let mut system = system();
    system
        .order_client
        .create_order(counter_order("4", 1))
        .await
        .unwrap();

    tokio::time::sleep(Duration::from_secs(2)).await;
    system.kitchen_board.changed().await.unwrap();
    assert_eq!(system.kitchen_board.borrow().pending.len(), 1);

    system.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn portal_orders_follow_the_timeline() {
    let system = system();
    let order = system.order_client.create_order(web_order("1")).await.unwrap();
    let id = order.id;

    let checkpoints = [
        (UNIT * 3 - EPSILON, OrderStatus::Pending),
        (UNIT * 3 + EPSILON, OrderStatus::Confirmed),
        (UNIT * 8 - EPSILON, OrderStatus::Confirmed),
        (UNIT * 8 + EPSILON, OrderStatus::Preparing),
        (UNIT * 15 - EPSILON, OrderStatus::Preparing),
        (UNIT * 15 + EPSILON, OrderStatus::Ready),
        (UNIT * 60, OrderStatus::Ready),
    ];
    let start = tokio::time::Instant::now();
    for (at, expected) in checkpoints {
        tokio::time::sleep_until(start + at).await;
        assert_eq!(status_of(&system, id).await, Some(expected), "at {at:?}");
    }
    assert_eq!(system.scheduled_orders(), 0);

    system.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn deleting_an_order_cancels_its_timeline() {
    let system = system();
    let order = system.order_client.create_order(web_order("5")).await.unwrap();
    assert_eq!(system.scheduled_orders(), 1);

    tokio::time::sleep(UNIT * 4).await;
    assert_eq!(status_of(&system, order.id).await, Some(OrderStatus::Confirmed));
    system.order_client.delete_order(order.id).await.unwrap();
    assert_eq!(system.scheduled_orders(), 0);

    tokio::time::sleep(UNIT * 20).await;
    assert_eq!(status_of(&system, order.id).await, None);
    let stats = system.order_client.order_stats().await.unwrap();
    assert_eq!((stats.live, stats.retired), (0, 0));
    assert_eq!(system.order_client.delivered_totals().count, 0);

    system.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn staff_can_run_ahead_of_the_timeline() {
    let system = system();
    let orders = &system.order_client;
    let order = orders.create_order(web_order("3")).await.unwrap();

    tokio::time::sleep(UNIT).await;
    orders
        .update_status(order.id, OrderStatus::Confirmed)
        .await
        .unwrap();
    orders
        .update_status(order.id, OrderStatus::Preparing)
        .await
        .unwrap();

    // The 3 and 8 unit steps find the order past their source state.
    tokio::time::sleep(UNIT * 9).await;
    assert_eq!(status_of(&system, order.id).await, Some(OrderStatus::Preparing));

    tokio::time::sleep(UNIT * 6).await;
    assert_eq!(status_of(&system, order.id).await, Some(OrderStatus::Ready));

    system.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn delivering_early_cancels_the_remaining_steps() {
    let system = system();
    let orders = &system.order_client;
    let order = orders.create_order(web_order("8")).await.unwrap();

    for status in [
        OrderStatus::Confirmed,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::Delivered,
    ] {
        orders.update_status(order.id, status).await.unwrap();
    }
    assert_eq!(system.scheduled_orders(), 0);

    tokio::time::sleep(UNIT * 20).await;
    let stats = orders.order_stats().await.unwrap();
    assert_eq!((stats.live, stats.retired), (0, 1));

    system.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn shutdown_does_not_wait_for_pending_timelines() {
    let system = system();
    system.order_client.create_order(web_order("6")).await.unwrap();
    assert_eq!(system.scheduled_orders(), 1);

    system.shutdown().await.unwrap();
}
