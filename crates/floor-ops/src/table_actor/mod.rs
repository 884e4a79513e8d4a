//! # Table Actor
//!
//! The Table Registry: owns every table on the floor, its number, capacity and
//! reservation flag.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](floor_actor::ActorEntity) implementation for [`Table`]
//! - [`actions`] - [`TableAction`] (reserve/unreserve) and [`TableQuery`] (views)
//! - [`error`] - [`TableError`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use floor_ops::config::FloorConfig;
//! use floor_ops::model::TableCreate;
//! use floor_ops::table_actor::{self, TableContext};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = FloorConfig::default();
//!     let (actor, client) = table_actor::new(&config);
//!     tokio::spawn(actor.run(TableContext::from(&config)));
//!
//!     let table = client.add_table(TableCreate::named("Window", 4)).await?;
//!     assert_eq!(table.number, 1);
//!
//!     let table = client.reserve(table.id, 3).await?;
//!     assert!(table.reserved);
//!     Ok(())
//! }
//! ```

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::TableClient;
use crate::config::FloorConfig;
use crate::model::Table;
use floor_actor::ResourceActor;

/// Settings the registry checks on every add.
#[derive(Debug, Clone, Copy)]
pub struct TableContext {
    pub max_tables: usize,
}

impl From<&FloorConfig> for TableContext {
    fn from(config: &FloorConfig) -> Self {
        Self {
            max_tables: config.max_tables,
        }
    }
}

/// Creates a new Table actor and its client.
pub fn new(config: &FloorConfig) -> (ResourceActor<Table>, TableClient) {
    let (actor, generic_client) =
        ResourceActor::with_event_capacity(config.actor_buffer, config.event_capacity);
    (actor, TableClient::new(generic_client))
}
