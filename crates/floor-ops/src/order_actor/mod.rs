//! # Order Actor
//!
//! The Order Pipeline: owns orders, their status and their chef linkage.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](floor_actor::ActorEntity) implementation for [`Order`]
//! - [`actions`] - [`OrderAction`] and [`OrderQuery`]
//! - [`error`] - [`OrderError`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Dependencies
//!
//! Started with [`OrderContext`] `= (TableClient, ChefClient)`:
//!
//! - **create**: the table number must belong to an existing table; a chef is picked
//!   by the roster if any are registered.
//! - **delete**: the order is released from its chef's board.
//! - **reassign**: the roster moves the order between boards.
//!
//! The order keeps the table *number* it was placed on. Renumbering tables later does
//! not rewrite it.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use entity::OrderContext;
pub use error::*;

use crate::clients::OrderClient;
use crate::config::FloorConfig;
use crate::model::Order;
use floor_actor::ResourceActor;

/// Creates a new Order actor and its client.
pub fn new(config: &FloorConfig) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) =
        ResourceActor::with_event_capacity(config.actor_buffer, config.event_capacity);
    (actor, OrderClient::new(generic_client))
}
