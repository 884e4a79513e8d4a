//! # Floor Ops
//!
//! The state model behind a restaurant floor: which tables exist and who is sitting at
//! them, and which orders are moving through the kitchen and which chef holds them.
//!
//! ## Components
//!
//! - [`reservation`]: pure policy deciding whether a table can seat a party.
//! - [`table_actor`]: the table registry. Numbers stay dense (`1..=N`) across deletes.
//! - [`assignment`]: least-loaded chef selection and reassignment.
//! - [`chef_actor`]: the chef roster, where assignment runs.
//! - [`order_actor`]: the order pipeline and its status state machine.
//! - [`clients`]: typed wrappers returning each aggregate's error enum.
//! - [`lifecycle`]: [`FloorSystem`](lifecycle::FloorSystem) wires everything together.
//!
//! Each aggregate lives in its own [`ResourceActor`](floor_actor::ResourceActor), so
//! every operation on it (including delete-and-renumber) is applied in one indivisible
//! step. Every successful change is published on the aggregate's event stream; see
//! `subscribe()` on any client.
//!
//! ## Errors
//!
//! Every error implements [`DomainError`](error::DomainError), which classifies it as
//! validation, conflict, not-found or storage and names the HTTP status for it.

pub mod assignment;
pub mod chef_actor;
pub mod clients;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod reservation;
pub mod table_actor;
