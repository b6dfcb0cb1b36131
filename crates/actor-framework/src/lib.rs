//! # Actor Framework
//!
//! Building blocks for type-safe, concurrent actor systems. Each resource type gets its own
//! actor owning an isolated store; callers talk to it through a cloneable client. This is a
//! **Resource-Oriented Architecture** layered on the **Actor Model**:
//!
//! - every resource exposes the same CRUD surface plus resource-specific actions
//! - state is never shared; a single task owns it and processes messages one at a time
//! - resources coordinate by calling each other's clients from their lifecycle hooks
//!
//! **Further Reading**:
//! - [Actor Model (Wikipedia)](https://en.wikipedia.org/wiki/Actor_model)
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - domain models and their lifecycle hooks
//! 2. **Runtime Layer** ([`ResourceActor`]) - message processing, id allocation, unit of work
//! 3. **Storage Layer** ([`Repository`]) - where committed rows live
//! 4. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - type-safe communication
//!
//! ```rust
//! use actor_framework::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//! use std::convert::Infallible;
//!
//! #[derive(Clone, Debug)]
//! struct Machine {
//!     id: u32,
//!     name: String,
//! }
//!
//! #[derive(Debug)] struct MachineCreate { name: String }
//! #[derive(Debug)] struct MachineRename(String);
//! #[derive(Debug, thiserror::Error)] #[error("{0}")] struct MachineError(String);
//!
//! #[async_trait]
//! impl ActorEntity for Machine {
//!     type Id = u32;
//!     type Create = MachineCreate;
//!     type Update = MachineRename;
//!     type Action = Infallible;
//!     type ActionResult = ();
//!     type Context = ();
//!     type Error = MachineError;
//!
//!     fn id(&self) -> u32 { self.id }
//!
//!     fn from_create_params(id: u32, params: MachineCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, name: params.name })
//!     }
//!
//!     async fn on_update(&mut self, update: MachineRename, _ctx: &()) -> Result<(), Self::Error> {
//!         self.name = update.0;
//!         Ok(())
//!     }
//!
//!     async fn handle_action(&mut self, action: Infallible, _ctx: &()) -> Result<(), Self::Error> {
//!         match action {}
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Machine>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client.create(MachineCreate { name: "lathe".into() }).await.unwrap();
//!     client.update(id, MachineRename("cnc lathe".into())).await.unwrap();
//!     let machine = client.get(id).await.unwrap().unwrap();
//!     assert_eq!(machine.name, "cnc lathe");
//! }
//! ```
//!
//! ## Context Injection
//!
//! Dependencies are injected when an actor starts (`actor.run(context)`), not when it is
//! constructed. All actors can be created first and wired afterwards, so an actor may hold
//! the client of an actor created after it.
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Messages are processed **sequentially** within an actor
//! - Multiple actors run in **parallel**
//! - Collection operations (`create_unless`, `replace`, `delete_where`) complete in one
//!   actor turn, so they are atomic with respect to other callers
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers requests from scripted expectations, which lets you test code
//! that depends on a client without spawning the actor behind it.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod repository;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::{FrameworkError, StorageError};
pub use message::{Ensured, Filter, ResourceRequest, Response};
pub use repository::{InMemoryRepository, JsonFileRepository, Repository, Snapshot};
