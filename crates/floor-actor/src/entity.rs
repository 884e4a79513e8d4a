//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract every resource (tables, chefs,
//! orders, ...) implements to be managed by the generic `ResourceActor`. It names the
//! associated types for ids, DTOs, actions and errors, and provides the lifecycle hooks
//! the actor calls while it processes requests.
//!
//! # Two kinds of hooks
//!
//! - **Entity hooks** (`on_create`, `on_update`, `on_delete`, `handle_action`) act on
//!   one entity.
//! - **Collection hooks** (`after_delete`, `handle_collection_action`) act on the whole
//!   [`EntityStore`]. They exist for invariants that span entities, such as dense
//!   numbering or picking the least busy member of a roster.
//!
//! Because the actor runs every hook inside a single turn of its message loop, no other
//! request can observe the store between a delete and its `after_delete` follow-up.
//!
//! # Failure semantics
//!
//! `on_update` and `handle_action` run against a clone of the stored entity; the clone
//! replaces the original only when the hook returns `Ok`. A failed request therefore
//! leaves the entity untouched. A hook that returns `Ok` without changing anything (the
//! clone still equals the stored entity) commits nothing and publishes no event.
//! Collection hooks must validate before they mutate.

use crate::store::EntityStore;
use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Async & Context
/// This trait is `#[async_trait]` so hooks can await other actors. The `Context` type is
/// injected into every hook when the actor starts (`run(context)`), which lets actors be
/// wired together after they are all constructed.
#[async_trait]
pub trait ActorEntity: Clone + Debug + PartialEq + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Converted from the actor's internal `u32` sequence, which only ever grows.
    type Id: Eq + Ord + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Resource-specific operations on a single entity.
    type Action: Send + Sync + Debug;

    /// The result type returned by [`ActorEntity::handle_action`].
    type ActionResult: Send + Sync + Debug;

    /// Operations that read or mutate the collection as a whole.
    type CollectionAction: Send + Sync + Debug;

    /// The result type returned by [`ActorEntity::handle_collection_action`].
    type CollectionResult: Send + Sync + Debug;

    /// The runtime context (dependencies, settings) injected into the actor.
    /// Use `()` if nothing is needed.
    type Context: Send + Sync;

    /// One error enum for the whole actor. It is boxed on its way through the framework
    /// and recovered by clients with
    /// [`FrameworkError::downcast_entity`](crate::FrameworkError::downcast_entity).
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the entity from its id and payload. Input validation belongs here.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Entity hooks (async) ---

    /// Called after `from_create_params` and before the entity is stored.
    /// `store` holds the entities that already exist.
    async fn on_create(
        &mut self,
        _store: &EntityStore<Self>,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called before the entity is removed. Returning `Err` vetoes the delete.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handle a resource-specific action on this entity.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;

    // --- Collection hooks ---

    /// Called right after `removed` has left the store, in the same actor turn.
    fn after_delete(_removed: &Self, _store: &mut EntityStore<Self>) {}

    /// Handle an operation over the whole collection.
    async fn handle_collection_action(
        store: &mut EntityStore<Self>,
        action: Self::CollectionAction,
        ctx: &Self::Context,
    ) -> Result<Self::CollectionResult, Self::Error>;
}
