//! # Mock Clients & Testing Guide
//!
//! `MockClient<T>` hands out a real `ResourceClient<T>` whose requests are answered from
//! a queue of expectations instead of a running actor. It keeps tests of client wrappers
//! fast and deterministic, and makes failures easy to inject.
//!
//! ## Mock or real actor?
//!
//! Reach for a mock when the code under test is the wrapper around the client:
//! argument mapping, error translation, result sorting. Expectations are answered
//! in order with no scheduling involved, and failures such as a closed actor are a
//! single `return_err` away. Anything that depends on stored state (id sequences,
//! retirement, timers talking back to the store) needs a real `ResourceActor`.
//!
//! ## Injecting a failure
//!
//! ```rust
//! use actor_framework::mock::MockClient;
//! use actor_framework::{ActorEntity, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Table { id: u32 }
//! #[derive(Debug)] struct TableCreate;
//! #[derive(Debug)] struct TableUpdate;
//! #[derive(Debug)] enum TableAction {}
//! #[derive(Debug, thiserror::Error)] #[error("Err")] struct TableError;
//!
//! #[async_trait]
//! impl ActorEntity for Table {
//!     type Id = u32; type Create = TableCreate; type Update = TableUpdate;
//!     type Action = TableAction; type ActionResult = (); type Context = (); type Error = TableError;
//!     fn from_create_params(id: u32, _: TableCreate) -> Result<Self, Self::Error> { Ok(Self { id }) }
//!     async fn on_update(&mut self, _: TableUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
//!     async fn handle_action(&mut self, _: TableAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Table>::new();
//!     let client = mock.client();
//!
//!     mock.expect_get(1).return_err(FrameworkError::ActorClosed);
//!
//!     let result = client.get(1).await;
//!     assert!(matches!(result, Err(FrameworkError::ActorClosed)));
//! }
//! ```
//!
//! ## Manual Responders
//!
//! [`create_mock_client`] returns a client plus the raw receiver, so a test can inspect
//! each request (payload, id, action) before answering it with the `expect_*` helpers.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{Filter, ResourceRequest, StoreStats};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::{mpsc, oneshot};

// --- Queued expectations ---

/// An expected request and the canned response for it.
enum Expectation<T: ActorEntity> {
    Get {
        response: Result<Option<T>, FrameworkError>,
    },
    Create {
        response: Result<T, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Delete {
        response: Result<(), FrameworkError>,
    },
    Action {
        response: Result<T::ActionResult, FrameworkError>,
    },
    Stats {
        response: Result<StoreStats, FrameworkError>,
    },
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A `ResourceClient` backed by a queue of canned responses.
///
/// Expectations are consumed in order; a request that does not match the next
/// expectation panics the responder task, which surfaces as `ActorDropped`.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Starts the responder task with an empty queue.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().unwrap_or_else(PoisonError::into_inner).pop_front();

                match (request, expectation) {
                    (ResourceRequest::Get { respond_to, .. }, Some(Expectation::Get { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::List { respond_to, .. },
                        Some(Expectation::List { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Delete { respond_to, .. },
                        Some(Expectation::Delete { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Action { respond_to, .. },
                        Some(Expectation::Action { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Stats { respond_to }, Some(Expectation::Stats { response })) => {
                        let _ = respond_to.send(response);
                    }
                    _ => panic!("Unexpected request or expectation mismatch"),
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// A client wired to this mock. Clones share the same queue.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    fn push(&self, expectation: Expectation<T>) {
        self.expectations.lock().unwrap_or_else(PoisonError::into_inner).push_back(expectation);
    }

    /// Expects a `get`; the id is not checked.
    pub fn expect_get(&mut self, _id: T::Id) -> Expect<'_, T, Option<T>> {
        Expect::new(self, |response| Expectation::Get { response })
    }

    /// Expects a `create`.
    pub fn expect_create(&mut self) -> Expect<'_, T, T> {
        Expect::new(self, |response| Expectation::Create { response })
    }

    /// Expects a `list`; the filter is not evaluated.
    pub fn expect_list(&mut self) -> Expect<'_, T, Vec<T>> {
        Expect::new(self, |response| Expectation::List { response })
    }

    /// Expects a `delete`; the id is not checked.
    pub fn expect_delete(&mut self, _id: T::Id) -> Expect<'_, T, ()> {
        Expect::new(self, |response| Expectation::Delete { response })
    }

    /// Expects an `action`; the id is not checked.
    pub fn expect_action(&mut self, _id: T::Id) -> Expect<'_, T, T::ActionResult> {
        Expect::new(self, |response| Expectation::Action { response })
    }

    /// Expects a `stats` request.
    pub fn expect_stats(&mut self) -> Expect<'_, T, StoreStats> {
        Expect::new(self, |response| Expectation::Stats { response })
    }

    /// Panics if any queued response was never requested.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap_or_else(PoisonError::into_inner).len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

/// Builder returned by the `expect_*` methods.
pub struct Expect<'a, T: ActorEntity, R> {
    mock: &'a MockClient<T>,
    wrap: fn(Result<R, FrameworkError>) -> Expectation<T>,
}

impl<'a, T: ActorEntity, R> Expect<'a, T, R> {
    fn new(mock: &'a MockClient<T>, wrap: fn(Result<R, FrameworkError>) -> Expectation<T>) -> Self {
        Self { mock, wrap }
    }

    /// Answer the request with `value`.
    pub fn return_ok(self, value: R) {
        self.mock.push((self.wrap)(Ok(value)));
    }

    /// Answer the request with `error`.
    pub fn return_err(self, error: FrameworkError) {
        self.mock.push((self.wrap)(Err(error)));
    }
}

// --- Manual responders ---

/// A client plus the raw receiver, for tests that answer requests by hand.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Next request, if it is a Create.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Next request, if it is a Get.
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Next request, if it is a List.
pub async fn expect_list<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(Filter<T>, oneshot::Sender<Result<Vec<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::List { filter, respond_to }) => Some((filter, respond_to)),
        _ => None,
    }
}

/// Next request, if it is an Action.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Dish {
        id: u32,
        name: String,
    }

    #[derive(Debug)]
    struct DishCreate {
        name: String,
    }

    #[derive(Debug)]
    struct DishUpdate;

    #[derive(Debug)]
    enum DishAction {}

    #[derive(Debug, thiserror::Error)]
    #[error("Dish error")]
    struct DishError;

    #[async_trait]
    impl ActorEntity for Dish {
        type Id = u32;
        type Create = DishCreate;
        type Update = DishUpdate;
        type Action = DishAction;
        type ActionResult = ();
        type Context = ();
        type Error = DishError;

        fn from_create_params(id: u32, params: DishCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                id,
                name: params.name,
            })
        }

        async fn on_update(&mut self, _: DishUpdate, _: &()) -> Result<(), Self::Error> {
            Ok(())
        }

        async fn handle_action(&mut self, _: DishAction, _: &()) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    fn dish(id: u32, name: &str) -> Dish {
        Dish {
            id,
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn manual_responder_sees_payload() {
        let (client, mut receiver) = create_mock_client::<Dish>(10);

        let create_task = tokio::spawn(async move {
            client
                .create(DishCreate {
                    name: "Hot Dog".to_string(),
                })
                .await
        });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.name, "Hot Dog");
        responder.send(Ok(dish(1, "Hot Dog"))).unwrap();

        let created = create_task.await.unwrap().unwrap();
        assert_eq!(created.id, 1);
    }

    #[tokio::test]
    async fn fluent_expectations_are_consumed_in_order() {
        let mut mock = MockClient::<Dish>::new();
        mock.expect_create().return_ok(dish(1, "Café"));
        mock.expect_list().return_ok(vec![dish(1, "Café")]);
        mock.expect_stats().return_ok(StoreStats { live: 1, retired: 0 });
        mock.expect_delete(1).return_err(FrameworkError::NotFound("1".into()));

        let client = mock.client();
        let created = client
            .create(DishCreate {
                name: "Café".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(created.name, "Café");
        assert_eq!(client.list(Filter::all()).await.unwrap().len(), 1);
        assert_eq!(client.stats().await.unwrap().live, 1);
        assert!(matches!(
            client.delete(1).await,
            Err(FrameworkError::NotFound(_))
        ));

        mock.verify();
    }
}
