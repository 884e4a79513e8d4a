//! Pure data structures (DTOs) implementing the [`ActorEntity`](floor_actor::ActorEntity) trait.

pub mod chef;
pub mod order;
pub mod table;

pub use chef::*;
pub use order::*;
pub use table::*;
