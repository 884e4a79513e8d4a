//! # Order Client
//!
//! Provides a high-level API for interacting with the `Order` actor.
//! Table lookup and chef assignment happen inside the actor (`Order::on_create`), so
//! this client only sends requests and maps errors.
use crate::model::{ChefId, Order, OrderCreate, OrderFilter, OrderId, OrderStatus};
use crate::order_actor::{OrderAction, OrderError, OrderQuery};
use async_trait::async_trait;
use floor_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<Order, OrderError> {
        debug!("Sending request");
        let order = self.inner.create(params).await.map_err(Self::map_error)?;
        info!(order = %order.id, number = order.order_number, "Order placed");
        Ok(order)
    }

    #[instrument(skip(self))]
    pub async fn get_order(&self, id: OrderId) -> Result<Order, OrderError> {
        self.get(id)
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()))
    }

    /// Orders matching `filter`, ordered by order number.
    #[instrument(skip(self))]
    pub async fn list_orders(&self, filter: OrderFilter) -> Result<Vec<Order>, OrderError> {
        self.inner
            .perform_collection_action(OrderQuery::Matching(filter))
            .await
            .map_err(Self::map_error)
    }

    /// Orders on one chef's board.
    pub async fn chef_orders(&self, chef: ChefId) -> Result<Vec<Order>, OrderError> {
        self.list_orders(OrderFilter::chef(chef)).await
    }

    #[instrument(skip(self))]
    pub async fn update_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, OrderAction::UpdateStatus(status))
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn reassign(&self, id: OrderId, chef: ChefId) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, OrderAction::Reassign(chef))
            .await
            .map_err(Self::map_error)
    }

    /// Removes the order and frees its chef.
    #[instrument(skip(self))]
    pub async fn delete_order(&self, id: OrderId) -> Result<(), OrderError> {
        self.delete(id).await
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<OrderError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => OrderError::NotFound(id),
            Err(other) => OrderError::Storage(other.to_string()),
        }
    }
}
