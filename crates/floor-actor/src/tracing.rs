//! # Observability & Tracing
//!
//! Structured logging for every actor in the process.
//!
//! The engine logs each request with structured fields (`entity_type`, `id`, `size`),
//! and domain clients wrap their methods in `#[instrument]` spans, so a request shows
//! up as one hierarchy from the caller down to the actor turn that served it.
//!
//! ```bash
//! # Lifecycle and mutations
//! RUST_LOG=info cargo run
//!
//! # Full request payloads
//! RUST_LOG=debug cargo run
//!
//! # Only the engine
//! RUST_LOG=floor_actor=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a table reservation reads:
//!
//! ```text
//! INFO Actor started entity_type="Table"
//! INFO Created entity_type="Table" id=table_1 size=1
//! INFO reserve: Action ok entity_type="Table" id=table_1
//! ```

/// Initializes the global subscriber.
///
/// Filtering comes from `RUST_LOG`. Module paths are hidden (`with_target(false)`)
/// because every engine log line already carries `entity_type`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
