//! Custom actions for the Order actor.

use crate::model::{ChefId, OrderFilter, OrderStatus};

/// Changes to a single order. Both return the updated order.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Moves the order along the pipeline.
    ///
    /// # Errors
    /// `InvalidTransition` unless the move is one of the pipeline edges. Asking for
    /// `done` on an order that is already done succeeds without change.
    UpdateStatus(OrderStatus),
    /// Hands the order to a specific chef.
    Reassign(ChefId),
}

/// Read-only views over the pipeline.
#[derive(Debug, Clone)]
pub enum OrderQuery {
    /// Orders matching the filter, by order number.
    Matching(OrderFilter),
}
