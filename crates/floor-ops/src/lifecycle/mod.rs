//! # System Lifecycle
//!
//! Starts, wires and stops the floor's actors.
//!
//! ## Wiring
//!
//! Actors are created first and receive their dependencies only when they start
//! (`run(context)`):
//!
//! ```rust,ignore
//! impl ActorEntity for Table { type Context = TableContext; }
//! impl ActorEntity for Chef  { type Context = (); }
//! impl ActorEntity for Order { type Context = (TableClient, ChefClient); }
//! ```
//!
//! The graph is acyclic (orders depend on tables and chefs, nothing depends on orders),
//! so dropping every client is enough to stop the whole system:
//!
//! 1. **Drop all clients**: the system's own senders go away.
//! 2. **Order actor exits**: its inbox closes; its context clones are dropped with it.
//! 3. **Table and chef actors exit**: their last senders are gone.
//! 4. **Await completion**: each task has processed everything it was sent.
//!
//! ## Observability
//!
//! Call [`floor_actor::tracing::setup_tracing`] once at startup. `RUST_LOG=info` shows
//! lifecycle and mutations, `RUST_LOG=debug` adds request payloads.

pub mod floor_system;

pub use floor_system::*;
