/// A food order routed to the kitchen.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](floor_actor::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](floor_actor::ResourceActor).
///
/// See [`impl ActorEntity for Order`](#impl-ActorEntity-for-Order) for details on:
/// - Creation parameters ([`OrderCreate`])
/// - Custom actions ([`OrderAction`](crate::order_actor::OrderAction))
use crate::model::ChefId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Fulfillment state of an order.
///
/// ```text
/// pending ──> processing ──> done
///    └──────> takeaway ───────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Takeaway,
    Done,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Takeaway,
        OrderStatus::Done,
    ];

    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// True only for the four pipeline edges. Staying in place is not an edge.
    #[must_use]
    pub fn can_transition_to(&self, target: Self) -> bool {
        match self {
            Self::Pending => matches!(target, Self::Processing | Self::Takeaway),
            Self::Processing | Self::Takeaway => matches!(target, Self::Done),
            Self::Done => false,
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Takeaway => "takeaway",
            OrderStatus::Done => "done",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub name: String,
    pub quantity: u32,
}

impl OrderItem {
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    /// Shown on tickets. Taken from the id sequence, so it is never reused.
    pub order_number: u32,
    /// Number of the table when the order was placed. Later renumbering leaves it as is.
    pub table_number: u32,
    pub items: Vec<OrderItem>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub chef_id: Option<ChefId>,
}

impl Order {
    pub fn new(id: OrderId, table_number: u32, items: Vec<OrderItem>) -> Self {
        Self {
            id,
            order_number: id.0,
            table_number,
            items,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
            chef_id: None,
        }
    }

    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }
}

/// Payload for placing an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    pub table_number: u32,
    pub items: Vec<OrderItem>,
}

/// Orders have no free-form update; every change goes through an
/// [`OrderAction`](crate::order_actor::OrderAction).
#[derive(Debug, Clone)]
pub enum OrderUpdate {}

/// Narrows [`list_orders`](crate::clients::OrderClient::list_orders). Unset fields match
/// everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFilter {
    #[serde(default)]
    pub status: Option<OrderStatus>,
    #[serde(default)]
    pub table_number: Option<u32>,
    #[serde(default)]
    pub chef_id: Option<ChefId>,
}

impl OrderFilter {
    pub fn status(status: OrderStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn table(table_number: u32) -> Self {
        Self {
            table_number: Some(table_number),
            ..Self::default()
        }
    }

    pub fn chef(chef_id: ChefId) -> Self {
        Self {
            chef_id: Some(chef_id),
            ..Self::default()
        }
    }

    pub fn matches(&self, order: &Order) -> bool {
        self.status.map_or(true, |s| order.status == s)
            && self.table_number.map_or(true, |n| order.table_number == n)
            && self.chef_id.map_or(true, |c| order.chef_id == Some(c))
    }
}
