//! # Actor Framework
//!
//! Building blocks for type-safe, single-writer resource stores on top of Tokio.
//! Each resource type gets one [`ResourceActor`] task that owns its entities and
//! processes requests one at a time; callers talk to it through a cloneable
//! [`ResourceClient`].
//!
//! ## Why an actor per resource?
//!
//! - **Serialized mutations**: id generation and read-modify-write updates run inside
//!   one task, so they are safe under any number of concurrent callers without locks.
//! - **One source of truth**: every view of the data goes through the same client, so
//!   there are no private copies to drift apart.
//! - **Uniform API**: Create / Get / List / Update / Delete / Action / Stats for any entity.
//!
//! **Further Reading**:
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - Your business logic and domain models
//! 2. **Runtime Layer** ([`ResourceActor`]) - Message processing and concurrency
//! 3. **Interface Layer** ([`ResourceClient`], [`WeakResourceClient`], [`ActorClient`]) - Type-safe communication
//!
//! ## Context Injection Pattern
//!
//! Dependencies are injected at **runtime** via `run(context)`, not at construction.
//! Because the client exists before the loop starts, an entity's context can carry a
//! [`WeakResourceClient`] of its own actor. Deferred work (timers, follow-up actions)
//! then talks back to the store without keeping it alive after shutdown.
//!
//! ## Entity Lifecycle
//!
//! - Ids come from a monotonic sequence owned by the actor; they are never reused.
//! - [`ActorEntity::is_retired`] lets an entity leave the store as part of an update or
//!   action. The actor counts retirements in [`StoreStats`].
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers a real `ResourceClient<T>` from canned expectations so
//! client wrappers can be tested without spawning actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::{ResourceClient, WeakResourceClient};
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{Filter, ResourceRequest, Response, StoreStats};
