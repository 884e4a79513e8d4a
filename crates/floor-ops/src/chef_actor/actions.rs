//! Roster commands.
//!
//! Chefs have no per-entity actions. Every change to `assigned_orders` is a
//! [`RosterCommand`] because it has to look at the whole roster.

use crate::assignment::Reassignment;
use crate::model::{ChefId, OrderId};

#[derive(Debug, Clone)]
pub enum ChefAction {}

#[derive(Debug, Clone)]
pub enum RosterCommand {
    /// Give the order to the least loaded chef.
    Assign(OrderId),
    /// Move the order to a specific chef.
    Reassign { order: OrderId, to: ChefId },
    /// Take the order off whichever board holds it.
    Release(OrderId),
}

/// Results from RosterCommands - variants match 1:1 with RosterCommand
#[derive(Debug, Clone, PartialEq)]
pub enum RosterOutcome {
    /// `None` when the roster is empty.
    Assigned(Option<ChefId>),
    Reassigned(Reassignment),
    /// `None` when no chef held the order.
    Released(Option<ChefId>),
}
