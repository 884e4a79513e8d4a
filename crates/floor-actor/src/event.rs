//! # Mutation Events
//!
//! Every successful mutation is pushed to subscribers over a `tokio::sync::broadcast`
//! channel. Subscribers that fall behind receive `RecvError::Lagged` and should reload a
//! snapshot; the actor never waits for them.

use crate::entity::ActorEntity;

/// A change that has already been applied to the store.
#[derive(Debug, Clone)]
pub enum ResourceEvent<T: ActorEntity> {
    Created(T),
    Updated(T),
    Deleted(T::Id),
}
