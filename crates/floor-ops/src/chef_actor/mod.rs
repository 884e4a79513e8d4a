//! # Chef Actor
//!
//! The Chef Roster. Chefs are registered, renamed and removed through plain CRUD;
//! their boards (`assigned_orders`) change only through [`RosterCommand`]s, which run
//! the [`assignment`](crate::assignment) functions against the whole roster in one
//! actor turn.
//!
//! - No dependencies (`Context = ()`).
//! - A chef with orders on their board cannot be deleted.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::ChefClient;
use crate::config::FloorConfig;
use crate::model::Chef;
use floor_actor::ResourceActor;

/// Creates a new Chef actor and its client.
pub fn new(config: &FloorConfig) -> (ResourceActor<Chef>, ChefClient) {
    let (actor, generic_client) =
        ResourceActor::with_event_capacity(config.actor_buffer, config.event_capacity);
    (actor, ChefClient::new(generic_client))
}
