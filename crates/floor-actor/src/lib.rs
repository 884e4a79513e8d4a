//! # Floor Actor
//!
//! The actor engine behind the restaurant floor. Each aggregate (tables, chefs, orders)
//! lives in its own [`ResourceActor`], a Tokio task that owns an [`EntityStore`] and
//! processes requests strictly one at a time. Callers talk to it through a cloneable
//! [`ResourceClient`].
//!
//! ## Layers
//!
//! 1. **Entity** ([`ActorEntity`]): the domain type, its DTOs and its lifecycle hooks.
//! 2. **Runtime** ([`ResourceActor`]): message loop, id sequence, draft/commit, events.
//! 3. **Interface** ([`ResourceClient`], [`ActorClient`]): typed request/response calls.
//!
//! ## Consistency
//!
//! A request is handled in a single turn of the actor loop, hooks included. Operations
//! that must keep several entries consistent (renumbering after a delete, picking the
//! least loaded member of a collection) run as collection hooks and are therefore atomic
//! with respect to every other request on that aggregate.
//!
//! ```rust
//! use async_trait::async_trait;
//! use floor_actor::{ActorEntity, EntityStore, ResourceActor};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Station {
//!     id: u32,
//!     name: String,
//! }
//!
//! #[derive(Debug)]
//! struct StationCreate {
//!     name: String,
//! }
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("station error")]
//! struct StationError;
//!
//! #[async_trait]
//! impl ActorEntity for Station {
//!     type Id = u32;
//!     type Create = StationCreate;
//!     type Update = String;
//!     type Action = ();
//!     type ActionResult = ();
//!     type CollectionAction = ();
//!     type CollectionResult = usize;
//!     type Context = ();
//!     type Error = StationError;
//!
//!     fn from_create_params(id: u32, params: StationCreate) -> Result<Self, StationError> {
//!         Ok(Self { id, name: params.name })
//!     }
//!
//!     async fn on_update(&mut self, name: String, _: &()) -> Result<(), StationError> {
//!         self.name = name;
//!         Ok(())
//!     }
//!
//!     async fn handle_action(&mut self, _: (), _: &()) -> Result<(), StationError> {
//!         Ok(())
//!     }
//!
//!     async fn handle_collection_action(
//!         store: &mut EntityStore<Self>,
//!         _: (),
//!         _: &(),
//!     ) -> Result<usize, StationError> {
//!         Ok(store.len())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Station>::new(8);
//!     tokio::spawn(actor.run(()));
//!
//!     let grill = client.create(StationCreate { name: "grill".into() }).await.unwrap();
//!     assert_eq!(grill.id, 1);
//!     assert_eq!(client.perform_collection_action(()).await.unwrap(), 1);
//! }
//! ```
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers a real `ResourceClient<T>` from scripted expectations, so
//! an actor whose context holds other clients can be tested without starting those
//! actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod event;
pub mod message;
pub mod mock;
pub mod store;
pub mod tracing;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use event::ResourceEvent;
pub use message::{ResourceRequest, Response};
pub use store::EntityStore;
