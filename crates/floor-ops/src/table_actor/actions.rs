//! Custom actions for the Table actor.
//!
//! [`TableAction`] runs on one table and is handled by
//! [`ActorEntity::handle_action`](floor_actor::ActorEntity::handle_action).
//! [`TableQuery`] reads the registry as a whole.

/// Reservation state changes on a single table. Both return the updated table.
#[derive(Debug, Clone)]
pub enum TableAction {
    /// Holds the table for a party, subject to the reservation policy.
    Reserve { party_size: u32 },
    /// Frees the table. Fails if it was not reserved.
    Unreserve,
}

/// Read-only views over the registry. Results are ordered by table number.
#[derive(Debug, Clone)]
pub enum TableQuery {
    All,
    /// Zero or one table.
    ByNumber(u32),
    /// Unreserved tables that seat the party.
    Available { party_size: u32 },
}
