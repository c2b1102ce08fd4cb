//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract a resource (an order, a menu item, a table …)
//! implements to be owned by a [`ResourceActor`](crate::ResourceActor). It names the
//! associated types for IDs, DTOs, actions, context and errors, and provides the lifecycle
//! hooks (`on_create`, `on_update`, `on_delete`, `handle_action`) plus the `is_retired`
//! check used to drop entities that reached a terminal state.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//! - [`ActorEntity::is_retired`]
//!
//! The defaults do nothing (`Ok(())` / `false`).

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Associated Types
/// Each entity names its own creation payload, update payload and action enum, so an
/// order store can never be sent a payload meant for another resource.
///
/// # Async & Context
/// Hooks are `#[async_trait]` so they can talk to other actors or spawn work. The
/// `Context` type is injected into every hook when the actor is started with `run()`
/// ("late binding"), which lets an entity hold a handle back to its own store.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Built from the actor's monotonic `u32` sequence.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Enum representing resource-specific operations (e.g. a status transition).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One error enum per actor rather than one per message. Clients can recover the
    /// concrete type from [`FrameworkError::EntityError`](crate::FrameworkError::EntityError)
    /// by downcasting.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full Entity from the ID and Payload.
    /// This is called synchronously before `on_create`; an error here leaves the
    /// store and the id sequence untouched.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is constructed and before it is inserted.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed, either by an explicit
    /// delete or because it retired.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;

    /// Whether the entity reached a terminal state and should leave the store.
    ///
    /// Checked after every successful update or action. Retired entities are
    /// removed and counted in [`StoreStats::retired`](crate::StoreStats::retired).
    fn is_retired(&self) -> bool {
        false
    }
}
