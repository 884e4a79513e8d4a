/// A member of the kitchen staff.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](floor_actor::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](floor_actor::ResourceActor).
///
/// `assigned_orders` is only ever changed by a
/// [`RosterCommand`](crate::chef_actor::RosterCommand).
use crate::model::OrderId;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Chefs. Lower ids registered earlier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ChefId(pub u32);

impl From<u32> for ChefId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ChefId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "chef_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chef {
    pub id: ChefId,
    pub name: String,
    /// Orders currently on this chef's board, oldest first. No duplicates.
    pub assigned_orders: Vec<OrderId>,
}

impl Chef {
    pub fn new(id: ChefId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            assigned_orders: Vec::new(),
        }
    }

    /// Number of orders currently assigned.
    pub fn load(&self) -> usize {
        self.assigned_orders.len()
    }

    pub fn holds(&self, order: OrderId) -> bool {
        self.assigned_orders.contains(&order)
    }

    /// Returns false if the order was already on the board.
    pub(crate) fn take(&mut self, order: OrderId) -> bool {
        if self.holds(order) {
            return false;
        }
        self.assigned_orders.push(order);
        true
    }

    /// Returns false if the order was not on the board.
    pub(crate) fn drop_order(&mut self, order: OrderId) -> bool {
        let before = self.assigned_orders.len();
        self.assigned_orders.retain(|o| *o != order);
        self.assigned_orders.len() != before
    }
}

/// Payload for registering a chef.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChefCreate {
    pub name: String,
}

impl ChefCreate {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChefUpdate {
    #[serde(default)]
    pub name: Option<String>,
}
