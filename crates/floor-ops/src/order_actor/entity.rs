//! Entity trait implementation for the Order domain type.
//!
//! The order actor is the only one with dependencies: it resolves table numbers through
//! the [`TableClient`] and keeps chef boards in sync through the [`ChefClient`]. Both
//! calls happen inside the order actor's turn. Neither the table nor the chef actor
//! calls back, so the dependency graph stays acyclic.

use super::actions::{OrderAction, OrderQuery};
use super::error::OrderError;
use crate::clients::{ChefClient, TableClient};
use crate::model::{Order, OrderCreate, OrderId, OrderItem, OrderUpdate};
use crate::table_actor::TableError;
use async_trait::async_trait;
use floor_actor::{ActorEntity, EntityStore};
use tracing::{debug, info};

/// Clients the order actor needs, injected at `run`.
pub type OrderContext = (TableClient, ChefClient);

fn validate_items(items: Vec<OrderItem>) -> Result<Vec<OrderItem>, OrderError> {
    if items.is_empty() {
        return Err(OrderError::EmptyItems);
    }
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let name = item.name.trim();
            if name.is_empty() {
                return Err(OrderError::InvalidItem {
                    index,
                    reason: "name is blank",
                });
            }
            if item.quantity == 0 {
                return Err(OrderError::InvalidItem {
                    index,
                    reason: "quantity must be at least 1",
                });
            }
            Ok(OrderItem::new(name, item.quantity))
        })
        .collect()
}

fn table_lookup_failed(e: TableError) -> OrderError {
    match e {
        TableError::Storage(msg) => OrderError::Storage(msg),
        other => OrderError::Storage(other.to_string()),
    }
}

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Action = OrderAction;
    type ActionResult = Order;
    type CollectionAction = OrderQuery;
    type CollectionResult = Vec<Order>;
    type Context = OrderContext;
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        let items = validate_items(params.items)?;
        Ok(Order::new(id, params.table_number, items))
    }

    /// Checks the table exists, then asks the roster for a chef.
    ///
    /// An empty roster leaves the order unassigned.
    async fn on_create(
        &mut self,
        _store: &EntityStore<Self>,
        ctx: &OrderContext,
    ) -> Result<(), Self::Error> {
        let (tables, chefs) = ctx;
        let table = tables
            .find_by_number(self.table_number)
            .await
            .map_err(table_lookup_failed)?;
        if table.is_none() {
            return Err(OrderError::TableNotFound(self.table_number));
        }

        self.chef_id = chefs.assign(self.id).await?;
        match self.chef_id {
            Some(chef) => info!(order = %self.id, %chef, "Order assigned"),
            None => info!(order = %self.id, "No chef on the roster, order left unassigned"),
        }
        Ok(())
    }

    async fn on_update(
        &mut self,
        update: OrderUpdate,
        _ctx: &OrderContext,
    ) -> Result<(), Self::Error> {
        match update {}
    }

    /// Takes the order off its chef's board. A chef that no longer holds it is ignored.
    async fn on_delete(&self, ctx: &OrderContext) -> Result<(), Self::Error> {
        if self.chef_id.is_some() {
            let released = ctx.1.release(self.id).await?;
            debug!(order = %self.id, ?released, "Released chef");
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        ctx: &OrderContext,
    ) -> Result<Order, Self::Error> {
        let (_, chefs) = ctx;
        match action {
            OrderAction::UpdateStatus(target) => {
                let repeat_terminal = self.status == target && target.is_terminal();
                if !repeat_terminal && !self.status.can_transition_to(target) {
                    return Err(OrderError::InvalidTransition {
                        from: self.status,
                        to: target,
                    });
                }
                self.status = target;
            }
            OrderAction::Reassign(chef) => {
                let moved = chefs.reassign(self.id, chef).await?;
                self.chef_id = Some(moved.to);
            }
        }
        Ok(self.clone())
    }

    async fn handle_collection_action(
        store: &mut EntityStore<Self>,
        query: OrderQuery,
        _ctx: &OrderContext,
    ) -> Result<Vec<Order>, Self::Error> {
        match query {
            OrderQuery::Matching(filter) => {
                let mut orders: Vec<Order> = store
                    .values()
                    .filter(|order| filter.matches(order))
                    .cloned()
                    .collect();
                orders.sort_by_key(|order| order.order_number);
                Ok(orders)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_are_validated() {
        assert_eq!(validate_items(vec![]), Err(OrderError::EmptyItems));
        assert_eq!(
            validate_items(vec![OrderItem::new("soup", 1), OrderItem::new(" ", 1)]),
            Err(OrderError::InvalidItem {
                index: 1,
                reason: "name is blank"
            })
        );
        assert!(matches!(
            validate_items(vec![OrderItem::new("soup", 0)]),
            Err(OrderError::InvalidItem { index: 0, .. })
        ));
        assert_eq!(
            validate_items(vec![OrderItem::new(" soup ", 2)]).unwrap(),
            vec![OrderItem::new("soup", 2)]
        );
    }

    #[test]
    fn test_table_lookup_failure_is_storage() {
        let err = table_lookup_failed(TableError::Storage("Actor closed".into()));
        assert_eq!(err, OrderError::Storage("Actor closed".into()));
    }
}
